//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;
use crate::shared::CurveInterpolateMode;
use curve_x::Point;

/// Passt den sichtbaren Ausschnitt auf alle gültigen Kurven an.
///
/// Ohne gültige Kurve bleibt der Ausschnitt unverändert.
pub fn fit_to_layers(state: &mut AppState) {
    match state.document.extrems() {
        Some(extrems) => {
            state.view.viewport_extrems = Some(extrems.padded(state.options.frame_padding));
            log::debug!("Viewport eingepasst: {:?}", state.view.viewport_extrems);
        }
        None => log::debug!("Viewport einpassen: keine gültige Kurve"),
    }
}

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Setzt den Abtastmodus der Polylinien.
pub fn set_interpolate_mode(state: &mut AppState, mode: CurveInterpolateMode) {
    state.view.interpolate_mode = mode;
    log::info!("Auswertungsmodus: {}", mode);
}

/// Schaltet die Anzeige der Kontroll- und Tangentenpunkte um.
pub fn toggle_points_visibility(state: &mut AppState) {
    state.view.show_points = !state.view.show_points;
    if !state.view.show_points {
        state.selection.clear();
    }
}

/// Setzt oder entfernt die Abfrageposition der Schnellauswertung.
pub fn set_quick_evaluation(state: &mut AppState, position: Option<Point>) {
    state.view.quick_evaluation = position;
}
