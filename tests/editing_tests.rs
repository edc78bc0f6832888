use curve_editor_x::{AppController, AppIntent, AppState};
use curve_x::{Point, TangentMode};

/// Neuer Layer mit der Standardkurve (0,1) → (1,0); Doppelklick-Pflicht aus.
fn make_editing_state(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    state.options.must_double_click_to_drag = false;
    controller
        .handle_intent(&mut state, AppIntent::NewLayerRequested)
        .expect("NewLayerRequested sollte ohne Fehler durchlaufen");
    state
}

fn keys_count(state: &AppState) -> usize {
    state
        .selected_layer()
        .map_or(0, |layer| layer.curve.keys_count())
}

fn drag(controller: &mut AppController, state: &mut AppState, from: Point, to: Point) {
    for intent in [
        AppIntent::PointPickRequested { position: from },
        AppIntent::PointDragStarted,
        AppIntent::PointDragged {
            position: (from + to) * 0.5,
        },
        AppIntent::PointDragged { position: to },
        AppIntent::PointDragEnded,
    ] {
        controller
            .handle_intent(state, intent)
            .expect("Drag-Intent sollte ohne Fehler durchlaufen");
    }
}

#[test]
fn test_add_key_then_undo_redo() {
    let mut controller = AppController::new();
    let mut state = make_editing_state(&mut controller);

    controller
        .handle_intent(
            &mut state,
            AppIntent::AddKeyRequested {
                position: Point::new(2.0, 1.0),
            },
        )
        .expect("Key hinzufügen");
    assert_eq!(keys_count(&state), 3);
    assert_eq!(state.selection.selected_point_id, Some(6));

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo");
    assert_eq!(keys_count(&state), 2);
    assert!(state.can_redo());

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("Redo");
    assert_eq!(keys_count(&state), 3);
}

#[test]
fn test_drag_control_point_is_single_undo_step() {
    let mut controller = AppController::new();
    let mut state = make_editing_state(&mut controller);

    drag(
        &mut controller,
        &mut state,
        Point::new(1.0, 0.0),
        Point::new(1.0, 0.5),
    );

    let layer = state.selected_layer().expect("Layer selektiert");
    assert_eq!(layer.curve.keys()[1].control, Point::new(1.0, 0.5));
    assert!(layer.has_unsaved_changes);
    let dragged_length = layer.curve.cached_length().expect("Länge aktuell");
    assert!(dragged_length < std::f32::consts::SQRT_2);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo");
    let layer = state.selected_layer().expect("Layer selektiert");
    assert_eq!(layer.curve.keys()[1].control, Point::new(1.0, 0.0));
}

#[test]
fn test_first_click_does_not_drag_when_double_click_required() {
    let mut controller = AppController::new();
    let mut state = make_editing_state(&mut controller);
    state.options.must_double_click_to_drag = true;

    drag(
        &mut controller,
        &mut state,
        Point::new(0.0, 1.0),
        Point::new(0.3, 0.3),
    );
    let layer = state.selected_layer().expect("Layer selektiert");
    assert_eq!(layer.curve.keys()[0].control, Point::new(0.0, 1.0));
    assert_eq!(state.selection.selected_point_id, Some(0));

    drag(
        &mut controller,
        &mut state,
        Point::new(0.0, 1.0),
        Point::new(0.3, 0.3),
    );
    let layer = state.selected_layer().expect("Layer selektiert");
    assert_eq!(layer.curve.keys()[0].control, Point::new(0.3, 0.3));
}

#[test]
fn test_insert_and_delete_key_on_curve() {
    let mut controller = AppController::new();
    let mut state = make_editing_state(&mut controller);

    controller
        .handle_intent(
            &mut state,
            AppIntent::InsertKeyRequested {
                position: Point::new(0.6, 0.6),
            },
        )
        .expect("Key einfügen");
    assert_eq!(keys_count(&state), 3);
    assert_eq!(state.selection.selected_point_id, Some(3));

    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedKeyRequested)
        .expect("Key löschen");
    assert_eq!(keys_count(&state), 2);

    controller
        .handle_intent(&mut state, AppIntent::PointSelected { point_id: Some(0) })
        .expect("Selektion");
    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedKeyRequested)
        .expect("Löschen wird ignoriert");
    assert_eq!(keys_count(&state), 2, "Kurve bleibt gültig");
}

#[test]
fn test_cycle_and_select_tangent_mode() {
    let mut controller = AppController::new();
    let mut state = make_editing_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::CycleTangentModeRequested { point_id: 3 })
        .expect("Modus weiterschalten");
    let mode = |state: &AppState| {
        state
            .selected_layer()
            .map(|layer| layer.curve.keys()[1].tangent_mode)
    };
    assert_eq!(mode(&state), Some(TangentMode::Aligned));

    controller
        .handle_intent(&mut state, AppIntent::PointSelected { point_id: Some(2) })
        .expect("Selektion");
    controller
        .handle_intent(
            &mut state,
            AppIntent::TangentModeSelected {
                mode: TangentMode::Broken,
            },
        )
        .expect("Modus setzen");
    assert_eq!(mode(&state), Some(TangentMode::Broken));

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo");
    assert_eq!(mode(&state), Some(TangentMode::Aligned));
}

#[test]
fn test_undo_without_history_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo ohne History");

    assert!(state.document.is_empty());
    assert!(!state.can_redo());
}
