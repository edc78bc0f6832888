//! Handler für Optionen und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options.sanitized();
    state.history.set_max_depth(state.options.undo_depth);
    persist_options(state)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    state.history.set_max_depth(state.options.undo_depth);
    persist_options(state)
}

fn persist_options(state: &AppState) -> anyhow::Result<()> {
    match &state.options_path {
        Some(path) => state.options.save_to_file(path),
        None => {
            log::debug!("Optionen übernommen (ohne Konfigurationsdatei)");
            Ok(())
        }
    }
}
