//! Ein Kurven-Layer: Kurve plus Datei- und Änderungszustand.

use curve_x::{Curve, CurveKey, Point, FORMAT_EXTENSION};
use std::path::{Path, PathBuf};

/// Standardname eines neuen Layers.
pub const DEFAULT_LAYER_NAME: &str = "default";

/// Eine bearbeitbare Kurve im Dokument.
#[derive(Debug, Clone)]
pub struct CurveLayer {
    /// Anzeigename (Dateiname ohne Endung)
    pub name: String,
    /// Zieldatei für Speichern
    pub path: PathBuf,
    /// Die Kurve selbst
    pub curve: Curve,
    /// Seit dem letzten Speichern/Laden geändert
    pub has_unsaved_changes: bool,
    /// Ob `path` bereits auf der Platte existiert (sonst: Speichern-unter nötig)
    pub is_file_exists: bool,
}

impl CurveLayer {
    /// Neuer, ungespeicherter Layer mit der Standardkurve.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let path = PathBuf::from(format!("{name}.{FORMAT_EXTENSION}"));
        Self {
            name,
            path,
            curve: Self::default_curve(),
            has_unsaved_changes: true,
            is_file_exists: false,
        }
    }

    /// Layer für eine aus `path` gelesene Kurve.
    pub fn from_file(path: &Path, curve: Curve) -> Self {
        Self {
            name: layer_name_from_path(path),
            path: path.to_path_buf(),
            curve,
            has_unsaved_changes: false,
            is_file_exists: true,
        }
    }

    /// Diagonale von (0, 1) nach (1, 0) ohne Tangenten.
    pub fn default_curve() -> Curve {
        Curve::from_keys(vec![
            CurveKey::new(Point::new(0.0, 1.0)),
            CurveKey::new(Point::new(1.0, 0.0)),
        ])
    }

    /// Markiert den Layer als geändert.
    pub fn touch(&mut self) {
        self.has_unsaved_changes = true;
    }

    /// Übernimmt einen neuen Speicherort nach erfolgreichem Schreiben.
    pub fn mark_saved(&mut self, path: &Path) {
        self.name = layer_name_from_path(path);
        self.path = path.to_path_buf();
        self.has_unsaved_changes = false;
        self.is_file_exists = true;
    }

    /// Anzeigetitel mit `*` bei ungespeicherten Änderungen.
    pub fn title(&self) -> String {
        if self.has_unsaved_changes {
            format!("{}*", self.name)
        } else {
            self.name.clone()
        }
    }
}

impl Default for CurveLayer {
    fn default() -> Self {
        Self::new(DEFAULT_LAYER_NAME)
    }
}

/// Dateiname ohne Endung, Fallback auf den Standardnamen.
fn layer_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| DEFAULT_LAYER_NAME.to_string())
}
