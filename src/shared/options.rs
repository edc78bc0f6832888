//! Zentrale Konfiguration für den Curve Editor X.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Rendering ───────────────────────────────────────────────────────

/// Schrittweite der Polylinien-Abtastung (Anteil von t, Zeitspanne oder Länge).
pub const CURVE_RENDER_SUBDIVISIONS: f32 = 0.01;
/// Standard-Viewportgröße in Pixeln, solange der Host nichts meldet.
pub const VIEWPORT_SIZE_DEFAULT: [f32; 2] = [800.0, 600.0];
/// Relativer Rand um die Kurven beim Einpassen des Viewports.
pub const FRAME_PADDING: f32 = 0.1;

// ── Picking ─────────────────────────────────────────────────────────

/// Pick-Radius für Kontroll- und Tangentenpunkte in Kurveneinheiten.
pub const POINT_PICK_RADIUS: f32 = 0.05;
/// Grobe Abtastungen für die Nächster-Punkt-Suche.
pub const NEAREST_POINT_SAMPLES: usize = 100;
/// Punkt muss erst selektiert sein, bevor er gezogen werden kann.
pub const MUST_DOUBLE_CLICK_TO_DRAG: bool = true;

// ── Dateien & History ───────────────────────────────────────────────

/// Beim Start geladene Kurve (relativ zum Arbeitsverzeichnis).
pub const DEFAULT_CURVE_PATH: &str = "tests/test.cvx";
/// Maximale Anzahl an Undo-Schritten.
pub const UNDO_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `curve_editor_x.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Rendering ───────────────────────────────────────────────
    /// Schrittweite der Polylinien-Abtastung (0 < x ≤ 1)
    pub render_subdivisions: f32,
    /// Kontroll- und Tangentenpunkte anzeigen
    pub show_points: bool,
    /// Viewportgröße beim Start in Pixeln
    pub viewport_size: [f32; 2],
    /// Relativer Rand beim Einpassen
    pub frame_padding: f32,

    // ── Picking ─────────────────────────────────────────────────
    /// Pick-Radius in Kurveneinheiten
    pub point_pick_radius: f32,
    /// Grobe Abtastungen für die Nächster-Punkt-Suche
    pub nearest_point_samples: usize,
    /// Ziehen erst nach vorheriger Selektion
    pub must_double_click_to_drag: bool,

    // ── Dateien & History ───────────────────────────────────────
    /// Beim Start geladene Kurve
    pub default_curve_path: PathBuf,
    /// Maximale Undo-Tiefe
    pub undo_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            render_subdivisions: CURVE_RENDER_SUBDIVISIONS,
            show_points: true,
            viewport_size: VIEWPORT_SIZE_DEFAULT,
            frame_padding: FRAME_PADDING,

            point_pick_radius: POINT_PICK_RADIUS,
            nearest_point_samples: NEAREST_POINT_SAMPLES,
            must_double_click_to_drag: MUST_DOUBLE_CLICK_TO_DRAG,

            default_curve_path: PathBuf::from(DEFAULT_CURVE_PATH),
            undo_depth: UNDO_DEPTH,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("curve_editor_x"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("curve_editor_x.toml")
    }

    /// Ersetzt unbrauchbare Werte durch Standardwerte.
    ///
    /// Eine Schrittweite ≤ 0 würde die Abtastung nie beenden.
    pub fn sanitized(mut self) -> Self {
        if !(self.render_subdivisions > 0.0 && self.render_subdivisions <= 1.0) {
            log::warn!(
                "Ungültige render_subdivisions {}, verwende {}",
                self.render_subdivisions,
                CURVE_RENDER_SUBDIVISIONS
            );
            self.render_subdivisions = CURVE_RENDER_SUBDIVISIONS;
        }
        if self.nearest_point_samples == 0 {
            self.nearest_point_samples = NEAREST_POINT_SAMPLES;
        }
        if !(self.point_pick_radius > 0.0) {
            self.point_pick_radius = POINT_PICK_RADIUS;
        }
        if !(self.frame_padding >= 0.0) {
            self.frame_padding = FRAME_PADDING;
        }
        if self.undo_depth == 0 {
            self.undo_depth = UNDO_DEPTH;
        }
        self
    }
}
