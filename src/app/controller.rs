//! Application Controller für zentrale Event-Verarbeitung.

use super::curve_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::CurveScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Danach sind alle Kurvenlängen aktuell, auch wenn ein Command fehlschlägt.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        let result = commands
            .into_iter()
            .try_for_each(|command| self.handle_command(state, command));

        super::use_cases::layers::refresh_lengths(state);
        result
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Layer & Datei-I/O ===
            AppCommand::CreateLayer => handlers::layers::create(state),
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveLayer { path } => handlers::file_io::save(state, path)?,
            AppCommand::SaveAllLayers => handlers::file_io::save_all(state)?,
            AppCommand::SelectLayer { layer_id } => handlers::layers::select(state, layer_id),
            AppCommand::DeleteLayer { layer_id } => handlers::layers::delete(state, layer_id),

            // === Editing ===
            AppCommand::SelectPoint { point_id } => {
                handlers::editing::select_point(state, point_id)
            }
            AppCommand::AddKey { position } => handlers::editing::add_key(state, position),
            AppCommand::InsertKeyOnCurve { position } => {
                handlers::editing::insert_key(state, position)?
            }
            AppCommand::DeleteSelectedKey => handlers::editing::delete_selected_key(state)?,
            AppCommand::BeginPointDrag => handlers::editing::begin_drag(state),
            AppCommand::MoveSelectedPoint { position } => {
                handlers::editing::move_selected(state, position)?
            }
            AppCommand::EndPointDrag => handlers::editing::end_drag(state),
            AppCommand::CycleTangentMode { point_id } => {
                handlers::editing::cycle_tangent_mode(state, point_id)?
            }
            AppCommand::SetTangentMode { mode } => {
                handlers::editing::set_tangent_mode(state, mode)?
            }

            // === View ===
            AppCommand::SetInterpolateMode { mode } => {
                handlers::view::set_interpolate_mode(state, mode)
            }
            AppCommand::SetQuickEvaluation { position } => {
                handlers::view::set_quick_evaluation(state, position)
            }
            AppCommand::FitViewport => handlers::view::fit(state),
            AppCommand::TogglePointsVisibility => handlers::view::toggle_points_visibility(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Anwendungssteuerung ===
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Kurven-Szene aus dem aktuellen AppState.
    pub fn build_curve_scene(&self, state: &AppState) -> CurveScene {
        curve_scene::build(state)
    }
}
