//! Mapping von UI-Intents auf mutierende App-Commands.

use super::use_cases::editing::pick_point;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // ── Layer & Dateien ─────────────────────────────────────
        AppIntent::NewLayerRequested => vec![AppCommand::CreateLayer, AppCommand::FitViewport],
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveRequested => {
            if state.selected_layer().is_some() {
                vec![AppCommand::SaveLayer { path: None }]
            } else {
                vec![]
            }
        }
        AppIntent::SaveAsRequested => {
            if state.selected_layer().is_some() {
                vec![AppCommand::RequestSaveFileDialog]
            } else {
                vec![]
            }
        }
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveLayer { path: Some(path) }]
        }
        AppIntent::SaveAllRequested => vec![AppCommand::SaveAllLayers],
        AppIntent::SelectLayerRequested { layer_id } => {
            vec![AppCommand::SelectLayer { layer_id }]
        }
        AppIntent::DeleteLayerRequested { layer_id } => {
            vec![AppCommand::DeleteLayer { layer_id }]
        }

        // ── Punkte & Keys ───────────────────────────────────────
        AppIntent::PointPickRequested { position } => vec![AppCommand::SelectPoint {
            point_id: pick_point(state, position),
        }],
        AppIntent::PointSelected { point_id } => vec![AppCommand::SelectPoint { point_id }],
        AppIntent::AddKeyRequested { position } => vec![AppCommand::AddKey { position }],
        AppIntent::InsertKeyRequested { position } => {
            vec![AppCommand::InsertKeyOnCurve { position }]
        }
        AppIntent::DeleteSelectedKeyRequested => {
            if state.selection.selected_point_id.is_some() {
                vec![AppCommand::DeleteSelectedKey]
            } else {
                vec![]
            }
        }
        AppIntent::PointDragStarted => {
            let selection = &state.selection;
            if selection.selected_point_id.is_some() && selection.can_drag_selected_point {
                vec![AppCommand::BeginPointDrag]
            } else {
                vec![]
            }
        }
        AppIntent::PointDragged { position } => {
            if state.selection.is_dragging {
                vec![AppCommand::MoveSelectedPoint { position }]
            } else {
                vec![]
            }
        }
        AppIntent::PointDragEnded => vec![AppCommand::EndPointDrag],
        AppIntent::CycleTangentModeRequested { point_id } => {
            vec![AppCommand::CycleTangentMode { point_id }]
        }
        AppIntent::TangentModeSelected { mode } => vec![AppCommand::SetTangentMode { mode }],

        // ── View ────────────────────────────────────────────────
        AppIntent::InterpolateModeSelected { mode } => {
            vec![AppCommand::SetInterpolateMode { mode }]
        }
        AppIntent::QuickEvaluateRequested { position } => {
            vec![AppCommand::SetQuickEvaluation { position }]
        }
        AppIntent::FitViewportRequested => vec![AppCommand::FitViewport],
        AppIntent::TogglePointsVisibilityRequested => vec![AppCommand::TogglePointsVisibility],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        // ── Anwendung ───────────────────────────────────────────
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
