use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{CurveDocument, CurveLayer};
use crate::shared::EditorOptions;
use std::path::PathBuf;
use std::sync::Arc;

use super::{SelectionState, UiState, ViewState};

/// Titel, solange kein Layer selektiert ist.
const APP_TITLE: &str = "Curve Editor X";

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle geöffneten Kurven (Arc für O(1)-Undo-Snapshots)
    pub document: Arc<CurveDocument>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Zieldatei für übernommene Optionen (None = nicht persistieren)
    pub options_path: Option<PathBuf>,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default(), None)
    }

    /// Erstellt einen App-State mit geladenen Optionen.
    pub fn with_options(options: EditorOptions, options_path: Option<PathBuf>) -> Self {
        Self {
            document: Arc::new(CurveDocument::new()),
            view: ViewState::from_options(&options),
            ui: UiState::new(),
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.undo_depth),
            options,
            options_path,
            should_exit: false,
        }
    }

    /// Selektierter Layer, falls vorhanden.
    pub fn selected_layer(&self) -> Option<&CurveLayer> {
        self.document.selected_layer()
    }

    /// Gibt die Anzahl der Layer zurück (für UI-Anzeige)
    pub fn layer_count(&self) -> usize {
        self.document.layer_count()
    }

    /// Fenstertitel: Name des selektierten Layers.
    pub fn title(&self) -> String {
        self.selected_layer()
            .map(CurveLayer::title)
            .unwrap_or_else(|| APP_TITLE.to_string())
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
