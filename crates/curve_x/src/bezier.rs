//! Kubische Bézier-Auswertung (Bernstein-Form) und Polylinien-Längen.

use crate::point::Point;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
#[inline]
pub fn cubic_bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let inv = 1.0 - t;
    inv * inv * inv * p0 + 3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t * p3
}

/// Skalare Variante von [`cubic_bezier`], z.B. für die Y-Interpolation der Zeit-Auswertung.
#[inline]
pub fn cubic_bezier_scalar(y0: f32, y1: f32, y2: f32, y3: f32, t: f32) -> f32 {
    let inv = 1.0 - t;
    inv * inv * inv * y0 + 3.0 * inv * inv * t * y1 + 3.0 * inv * t * t * y2 + t * t * t * y3
}

/// Approximierte Kurvenlänge über Polylinien-Segmente.
///
/// Tastet `positions_fn` an `samples + 1` Stellen in `[0, 1]` ab (Endpunkt inklusive).
pub fn approx_length(positions_fn: impl Fn(f32) -> Point, samples: usize) -> f32 {
    let mut length = 0.0;
    let mut prev = positions_fn(0.0);
    for i in 1..=samples {
        let t = i as f32 / samples as f32;
        let p = positions_fn(t);
        length += prev.distance(p);
        prev = p;
    }
    length
}
