//! Handler für Viewport und Darstellung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::CurveInterpolateMode;
use curve_x::Point;

/// Passt den Viewport auf alle Kurven ein.
pub fn fit(state: &mut AppState) {
    use_cases::viewport::fit_to_layers(state);
}

/// Setzt die Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Setzt den Abtastmodus.
pub fn set_interpolate_mode(state: &mut AppState, mode: CurveInterpolateMode) {
    use_cases::viewport::set_interpolate_mode(state, mode);
}

/// Schaltet die Punkt-Sichtbarkeit um.
pub fn toggle_points_visibility(state: &mut AppState) {
    use_cases::viewport::toggle_points_visibility(state);
}

/// Setzt die Schnellauswertung.
pub fn set_quick_evaluation(state: &mut AppState, position: Option<Point>) {
    use_cases::viewport::set_quick_evaluation(state, position);
}
