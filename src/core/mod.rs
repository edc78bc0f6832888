//! Core-Domänentypen: Kurven-Layer und das Dokument, das sie besitzt.

pub mod curve_layer;
pub mod document;

pub use curve_layer::{CurveLayer, DEFAULT_LAYER_NAME};
pub use document::{CurveDocument, LayerId};
