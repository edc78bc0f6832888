//! Curve Editor X Library.
//! Editor-Kern (Dokument, Controller, Szene) als Library exportiert für Host,
//! Tests und Benchmarks. Die Kurven-Engine liegt im Crate `curve_x`.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionState, UiState, ViewState};
pub use core::{CurveDocument, CurveLayer, LayerId};
pub use shared::{CurveInterpolateMode, CurveScene, EditorOptions};
