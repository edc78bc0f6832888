//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod curve_scene;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Dokument, View, Selektion).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use curve_scene::build as build_curve_scene;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, SelectionState, UiState, ViewState};
