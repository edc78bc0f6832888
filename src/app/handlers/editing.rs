//! Handler für Key- und Punkt-Bearbeitung.

use crate::app::use_cases;
use crate::app::AppState;
use curve_x::{Point, TangentMode};

/// Selektiert einen Punkt im selektierten Layer.
pub fn select_point(state: &mut AppState, point_id: Option<usize>) {
    use_cases::editing::select_point(state, point_id);
}

/// Hängt einen Key an.
pub fn add_key(state: &mut AppState, position: Point) {
    use_cases::editing::add_key(state, position);
}

/// Fügt einen Key auf der Kurve ein.
pub fn insert_key(state: &mut AppState, position: Point) -> anyhow::Result<()> {
    use_cases::editing::insert_key_on_curve(state, position)
}

/// Löscht den Key des selektierten Punkts.
pub fn delete_selected_key(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::editing::delete_selected_key(state)
}

/// Drag-Lifecycle Start.
pub fn begin_drag(state: &mut AppState) {
    use_cases::editing::begin_point_drag(state);
}

/// Drag-Lifecycle Update.
pub fn move_selected(state: &mut AppState, position: Point) -> anyhow::Result<()> {
    use_cases::editing::move_selected_point(state, position)
}

/// Drag-Lifecycle Ende.
pub fn end_drag(state: &mut AppState) {
    use_cases::editing::end_point_drag(state);
}

/// Schaltet den Tangenten-Modus weiter.
pub fn cycle_tangent_mode(state: &mut AppState, point_id: usize) -> anyhow::Result<()> {
    use_cases::editing::cycle_tangent_mode(state, point_id)
}

/// Setzt den Tangenten-Modus des selektierten Keys.
pub fn set_tangent_mode(state: &mut AppState, mode: TangentMode) -> anyhow::Result<()> {
    use_cases::editing::set_tangent_mode(state, mode)
}
