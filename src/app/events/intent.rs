use crate::core::LayerId;
use crate::shared::{CurveInterpolateMode, EditorOptions};
use curve_x::TangentMode;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen sind immer in Kurvenkoordinaten.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Layer & Dateien ─────────────────────────────────────────
    /// Neuen Layer mit Standardkurve anlegen
    NewLayerRequested,
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: PathBuf },
    /// Selektierten Layer speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Selektierten Layer unter neuem Pfad speichern
    SaveAsRequested,
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: PathBuf },
    /// Alle geänderten Layer mit bekanntem Pfad speichern
    SaveAllRequested,
    /// Layer in der Layer-Liste angeklickt
    SelectLayerRequested { layer_id: LayerId },
    /// Löschen-Button eines Layers gedrückt
    DeleteLayerRequested { layer_id: LayerId },

    // ── Punkte & Keys ───────────────────────────────────────────
    /// Punkt unter dem Mauszeiger selektieren (Linksklick)
    PointPickRequested { position: glam::Vec2 },
    /// Punkt direkt per ID selektieren (None = Selektion aufheben)
    PointSelected { point_id: Option<usize> },
    /// Key am Kurvenende anhängen
    AddKeyRequested { position: glam::Vec2 },
    /// Key auf der Kurve einfügen (am nächstgelegenen Segment)
    InsertKeyRequested { position: glam::Vec2 },
    /// Key des selektierten Punkts löschen
    DeleteSelectedKeyRequested,
    /// Drag-Lifecycle Start
    PointDragStarted,
    /// Drag-Lifecycle Update: selektierten Punkt an Position setzen
    PointDragged { position: glam::Vec2 },
    /// Drag-Lifecycle Ende
    PointDragEnded,
    /// Tangenten-Modus des Keys zum Punkt weiterschalten (Mittelklick)
    CycleTangentModeRequested { point_id: usize },
    /// Tangenten-Modus des selektierten Keys setzen
    TangentModeSelected { mode: TangentMode },

    // ── View ────────────────────────────────────────────────────
    /// Abtastmodus wechseln
    InterpolateModeSelected { mode: CurveInterpolateMode },
    /// Schnellauswertung an Position (None = ausblenden)
    QuickEvaluateRequested { position: Option<glam::Vec2> },
    /// Viewport auf alle Kurven einpassen
    FitViewportRequested,
    /// Kontroll- und Tangentenpunkte ein-/ausblenden
    TogglePointsVisibilityRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },

    // ── Anwendung ───────────────────────────────────────────────
    /// Undo
    UndoRequested,
    /// Redo
    RedoRequested,
    /// Optionen wurden geändert
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
