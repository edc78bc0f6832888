//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod curve_scene;
mod interpolate_mode;
pub mod options;

pub use curve_scene::{CurveScene, HandlePoint, LayerScene, QuickEvaluation};
pub use interpolate_mode::CurveInterpolateMode;
pub use options::EditorOptions;
pub use options::{CURVE_RENDER_SUBDIVISIONS, DEFAULT_CURVE_PATH};
