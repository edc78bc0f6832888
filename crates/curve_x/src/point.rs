//! 2D-Punkt-Primitive und lineares Remapping.
//!
//! `Point` ist ein Alias auf `glam::Vec2`; Arithmetik, `length()` und
//! `normalize()` kommen direkt aus glam.

use crate::extrems::CurveExtrems;

/// 2D-Punkt bzw. Vektor der Kurven-Engine.
pub type Point = glam::Vec2;

/// Bildet `value` linear von `[min_a, max_a]` auf `[min_b, max_b]` ab.
///
/// Keine Klemmung: Werte außerhalb des Quellbereichs werden extrapoliert.
#[inline]
pub fn remap(value: f32, min_a: f32, max_a: f32, min_b: f32, max_b: f32) -> f32 {
    min_b + (max_b - min_b) * ((value - min_a) / (max_a - min_a))
}

/// Bildet einen Punkt achsenweise unabhängig von `from` nach `to` ab.
///
/// Wird z.B. für Kurven- ↔ Viewport-Koordinaten verwendet (Y-Achse kann
/// durch vertauschte `min_y`/`max_y` in `to` gespiegelt werden).
pub fn remap_point(point: Point, from: &CurveExtrems, to: &CurveExtrems) -> Point {
    Point::new(
        remap(point.x, from.min_x, from.max_x, to.min_x, to.max_x),
        remap(point.y, from.min_y, from.max_y, to.min_y, to.max_y),
    )
}

/// Textdarstellung `x,y` für das `.cvx`-Format.
///
/// `Display` von `f32` liefert die kürzeste Darstellung, die exakt
/// zurückgelesen wird, unabhängig von der Locale.
pub fn format_point(point: Point) -> String {
    format!("{},{}", point.x, point.y)
}
