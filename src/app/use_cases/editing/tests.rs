use super::*;
use crate::app::history::EditHistory;
use crate::app::use_cases::layers;
use curve_x::TangentMode;

/// State mit einem Layer aus drei Keys: (0,0), (1,1), (2,0).
fn state_with_three_keys() -> AppState {
    let mut state = AppState::new();
    layers::new_layer(&mut state);
    Arc::make_mut(&mut state.document)
        .selected_layer_mut()
        .expect("Layer vorhanden")
        .curve = Curve::from_keys(vec![
        CurveKey::new(Point::new(0.0, 0.0)),
        CurveKey::with_tangents(
            Point::new(1.0, 1.0),
            Point::new(-0.25, 0.0),
            Point::new(0.25, 0.0),
            TangentMode::Mirrored,
        ),
        CurveKey::new(Point::new(2.0, 0.0)),
    ]);
    state
}

fn curve(state: &AppState) -> &Curve {
    &state.selected_layer().expect("Layer vorhanden").curve
}

#[test]
fn pick_point_finds_nearest_within_radius() {
    let state = state_with_three_keys();

    assert_eq!(pick_point(&state, Point::new(1.01, 0.99)), Some(3));
    assert_eq!(pick_point(&state, Point::new(1.24, 1.0)), Some(4), "rechte Tangente");
    assert_eq!(pick_point(&state, Point::new(0.5, 0.5)), None);
    assert_eq!(
        pick_point(&state, Point::new(2.0, 0.01)),
        Some(6),
        "Kontrollpunkt vor deckungsgleicher Tangente"
    );
}

#[test]
fn pick_point_ignores_hidden_points() {
    let mut state = state_with_three_keys();
    state.view.show_points = false;

    assert_eq!(pick_point(&state, Point::new(1.0, 1.0)), None);
}

#[test]
fn first_click_selects_second_click_allows_drag() {
    let mut state = state_with_three_keys();
    assert!(state.options.must_double_click_to_drag);

    select_point(&mut state, Some(3));
    assert_eq!(state.selection.selected_point_id, Some(3));
    assert!(!state.selection.can_drag_selected_point);

    select_point(&mut state, Some(3));
    assert!(state.selection.can_drag_selected_point);
}

#[test]
fn select_invalid_point_clears_selection() {
    let mut state = state_with_three_keys();
    select_point(&mut state, Some(3));

    select_point(&mut state, Some(99));

    assert_eq!(state.selection.selected_point_id, None);
}

#[test]
fn add_key_appends_and_selects_control_point() {
    let mut state = state_with_three_keys();

    add_key(&mut state, Point::new(3.0, 1.0));

    assert_eq!(curve(&state).keys_count(), 4);
    assert_eq!(state.selection.selected_point_id, Some(9));
    assert!(state.selected_layer().is_some_and(|l| l.has_unsaved_changes));
}

#[test]
fn insert_key_lands_in_nearest_segment() {
    let mut state = state_with_three_keys();

    insert_key_on_curve(&mut state, Point::new(1.6, 0.5)).expect("Einfügen erwartet");

    let keys = curve(&state).keys();
    assert_eq!(keys.len(), 4);
    assert_eq!(keys[2].control, Point::new(1.6, 0.5));
    assert_eq!(state.selection.selected_point_id, Some(6));
}

#[test]
fn delete_selected_key_keeps_at_least_two_keys() {
    let mut state = state_with_three_keys();
    select_point(&mut state, Some(3));

    delete_selected_key(&mut state).expect("Löschen erwartet");
    assert_eq!(curve(&state).keys_count(), 2);
    assert_eq!(state.selection.selected_point_id, None);

    select_point(&mut state, Some(0));
    delete_selected_key(&mut state).expect("kein Fehler");
    assert_eq!(curve(&state).keys_count(), 2, "Zwei Keys bleiben erhalten");
}

#[test]
fn drag_requires_permission_and_records_single_snapshot() {
    let mut state = state_with_three_keys();
    select_point(&mut state, Some(3));

    begin_point_drag(&mut state);
    assert!(!state.selection.is_dragging, "erster Klick erlaubt keinen Drag");
    move_selected_point(&mut state, Point::new(5.0, 5.0)).expect("kein Fehler");
    assert_eq!(curve(&state).keys()[1].control, Point::new(1.0, 1.0));

    end_point_drag(&mut state);
    begin_point_drag(&mut state);
    assert!(state.selection.is_dragging);
    move_selected_point(&mut state, Point::new(1.5, 2.0)).expect("Verschieben erwartet");
    move_selected_point(&mut state, Point::new(1.0, 2.0)).expect("Verschieben erwartet");
    end_point_drag(&mut state);

    let key = curve(&state).keys()[1];
    assert_eq!(key.control, Point::new(1.0, 2.0));
    assert_eq!(key.right_tangent, Point::new(0.25, 0.0), "Tangenten bleiben lokal");

    crate::app::handlers::history::undo(&mut state);
    assert_eq!(curve(&state).keys()[1].control, Point::new(1.0, 1.0));
}

#[test]
fn dragging_tangent_keeps_mode() {
    let mut state = state_with_three_keys();
    state.options.must_double_click_to_drag = false;
    select_point(&mut state, Some(4));
    begin_point_drag(&mut state);

    move_selected_point(&mut state, Point::new(1.0, 1.5)).expect("Verschieben erwartet");

    let key = curve(&state).keys()[1];
    assert_eq!(key.right_tangent, Point::new(0.0, 0.5));
    assert_eq!(key.left_tangent, Point::new(0.0, -0.5), "Mirrored spiegelt");
}

#[test]
fn cycle_tangent_mode_advances_and_applies() {
    let mut state = state_with_three_keys();

    cycle_tangent_mode(&mut state, 4).expect("Modus erwartet");
    assert_eq!(curve(&state).keys()[1].tangent_mode, TangentMode::Aligned);

    cycle_tangent_mode(&mut state, 2).expect("Modus erwartet");
    assert_eq!(curve(&state).keys()[1].tangent_mode, TangentMode::Broken);

    cycle_tangent_mode(&mut state, 3).expect("Modus erwartet");
    assert_eq!(curve(&state).keys()[1].tangent_mode, TangentMode::Mirrored);
}

#[test]
fn set_tangent_mode_uses_selected_key() {
    let mut state = state_with_three_keys();
    select_point(&mut state, Some(6));

    set_tangent_mode(&mut state, TangentMode::Broken).expect("Modus erwartet");

    assert_eq!(curve(&state).keys()[2].tangent_mode, TangentMode::Broken);
    assert_eq!(curve(&state).keys()[1].tangent_mode, TangentMode::Mirrored);
}

#[test]
fn cycle_tangent_mode_rejects_point_id_past_end() {
    let mut state = state_with_three_keys();
    state.history = EditHistory::new_with_capacity(10);
    let points_count = curve(&state).points_count();

    let result = cycle_tangent_mode(&mut state, points_count);

    assert!(result.is_err());
    assert_eq!(curve(&state).keys()[2].tangent_mode, TangentMode::Mirrored);
    assert!(!state.can_undo(), "kein Snapshot bei ungültiger ID");
    assert!(cycle_tangent_mode(&mut state, usize::MAX).is_err());
}

#[test]
fn delete_with_stale_selection_records_no_snapshot() {
    let mut state = state_with_three_keys();
    state.history = EditHistory::new_with_capacity(10);
    state.selection.selected_point_id = Some(30);

    delete_selected_key(&mut state).expect("ungültige Selektion ist kein Fehler");

    assert_eq!(curve(&state).keys_count(), 3);
    assert!(!state.can_undo());
}
