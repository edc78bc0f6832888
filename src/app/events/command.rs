use crate::core::LayerId;
use crate::shared::{CurveInterpolateMode, EditorOptions};
use curve_x::TangentMode;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Layer & Dateien ─────────────────────────────────────────
    /// Neuen Layer mit Standardkurve anlegen
    CreateLayer,
    /// Datei-Öffnen-Dialog anzeigen
    RequestOpenFileDialog,
    /// Datei-Speichern-Dialog anzeigen
    RequestSaveFileDialog,
    /// `.cvx`-Datei als neuen Layer laden
    LoadFile { path: PathBuf },
    /// Selektierten Layer speichern (`None` = bekannter Pfad oder Dialog)
    SaveLayer { path: Option<PathBuf> },
    /// Alle geänderten Layer mit bekanntem Pfad speichern
    SaveAllLayers,
    /// Layer selektieren
    SelectLayer { layer_id: LayerId },
    /// Layer entfernen
    DeleteLayer { layer_id: LayerId },

    // ── Editing ─────────────────────────────────────────────────
    /// Punkt im selektierten Layer selektieren
    SelectPoint { point_id: Option<usize> },
    /// Key am Kurvenende anhängen
    AddKey { position: glam::Vec2 },
    /// Key am nächstgelegenen Kurvenpunkt einfügen
    InsertKeyOnCurve { position: glam::Vec2 },
    /// Key des selektierten Punkts entfernen
    DeleteSelectedKey,
    /// Drag beginnen (ein Undo-Snapshot pro Drag)
    BeginPointDrag,
    /// Selektierten Punkt verschieben
    MoveSelectedPoint { position: glam::Vec2 },
    /// Drag beenden
    EndPointDrag,
    /// Tangenten-Modus zyklisch weiterschalten
    CycleTangentMode { point_id: usize },
    /// Tangenten-Modus des selektierten Keys setzen
    SetTangentMode { mode: TangentMode },

    // ── View ────────────────────────────────────────────────────
    /// Abtastmodus setzen
    SetInterpolateMode { mode: CurveInterpolateMode },
    /// Schnellauswertung setzen
    SetQuickEvaluation { position: Option<glam::Vec2> },
    /// Viewport auf alle Kurven einpassen
    FitViewport,
    /// Punkt-Sichtbarkeit umschalten
    TogglePointsVisibility,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },

    // ── History ─────────────────────────────────────────────────
    /// Undo
    Undo,
    /// Redo
    Redo,

    // ── Anwendungssteuerung ─────────────────────────────────────
    /// Optionen übernehmen und persistieren
    ApplyOptions { options: EditorOptions },
    /// Optionen zurücksetzen und persistieren
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
