use crate::shared::{CurveInterpolateMode, EditorOptions};
use curve_x::{CurveExtrems, Point};

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Sichtbarer Ausschnitt in Kurvenkoordinaten (None = noch nicht eingepasst)
    pub viewport_extrems: Option<CurveExtrems>,
    /// Abtastmodus der Polylinien
    pub interpolate_mode: CurveInterpolateMode,
    /// Kontroll- und Tangentenpunkte anzeigen
    pub show_points: bool,
    /// Abfrageposition der Schnellauswertung
    pub quick_evaluation: Option<Point>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::from_options(&EditorOptions::default())
    }

    /// Übernimmt Startwerte aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            viewport_size: options.viewport_size,
            viewport_extrems: None,
            interpolate_mode: CurveInterpolateMode::default(),
            show_points: options.show_points,
            quick_evaluation: None,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
