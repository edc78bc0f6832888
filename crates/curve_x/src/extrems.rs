//! Achsenparallele Ausdehnung einer Kurve (Extrema aller globalen Punkte).

use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Minimum/Maximum je Achse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveExtrems {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl CurveExtrems {
    /// Erstellt Extrema aus expliziten Grenzen.
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Leere Extrema, neutral für [`include`](Self::include) und [`union`](Self::union).
    pub fn empty() -> Self {
        Self::new(f32::INFINITY, f32::NEG_INFINITY, f32::INFINITY, f32::NEG_INFINITY)
    }

    /// `true` solange noch kein Punkt aufgenommen wurde.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Erweitert die Extrema um einen Punkt.
    pub fn include(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    /// Vereinigung zweier Extrema.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.min_x.min(other.min_x),
            self.max_x.max(other.max_x),
            self.min_y.min(other.min_y),
            self.max_y.max(other.max_y),
        )
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    /// Vergrößert die Extrema je Seite um `ratio` der jeweiligen Ausdehnung.
    ///
    /// Degenerierte Achsen (Ausdehnung 0) werden um `ratio` absolut erweitert,
    /// damit ein anschließendes [`remap_point`](crate::remap_point) nicht durch 0 teilt.
    pub fn padded(&self, ratio: f32) -> Self {
        let pad_x = if self.width() > 0.0 {
            self.width() * ratio
        } else {
            ratio
        };
        let pad_y = if self.height() > 0.0 {
            self.height() * ratio
        } else {
            ratio
        };
        Self::new(
            self.min_x - pad_x,
            self.max_x + pad_x,
            self.min_y - pad_y,
            self.max_y + pad_y,
        )
    }
}
