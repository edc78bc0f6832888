//! Curve-X: Engine für stückweise kubische Bézier-Kurven.
//!
//! Eine Kurve ist eine geordnete Folge von Keys (Kontrollpunkt, zwei lokale
//! Tangenten, Tangenten-Modus). Die Engine bietet Key-CRUD, Punkt-ID-Adressierung,
//! Auswertung nach Prozent, Distanz und Zeit, Extrema, gecachte Bogenlänge
//! sowie das verlustfreie `.cvx`-Textformat.

pub mod bezier;
pub mod curve;
pub mod error;
pub mod extrems;
pub mod key;
pub mod point;
pub mod serializer;

pub use curve::{Curve, SegmentLocation};
pub use error::{CurveError, FormatError};
pub use extrems::CurveExtrems;
pub use key::{CurveKey, PointSlot, PointSpace, TangentMode};
pub use point::{remap, remap_point, Point};
pub use serializer::{serialize, unserialize, with_format_extension, FORMAT_EXTENSION, FORMAT_VERSION};
