//! Render-Vertrag zwischen App-Layer und Host.
//!
//! Reine Daten: der Host zeichnet oder serialisiert sie, ohne den
//! `AppState` zu kennen.

use super::CurveInterpolateMode;
use curve_x::{remap_point, CurveExtrems, Point, TangentMode};
use serde::Serialize;

/// Abgetastete Darstellung eines Layers.
#[derive(Debug, Clone, Serialize)]
pub struct LayerScene {
    pub id: u64,
    pub name: String,
    pub is_selected: bool,
    /// `false` bei weniger als zwei Keys (dann ist `polyline` leer)
    pub is_valid: bool,
    pub has_unsaved_changes: bool,
    /// Gecachte Bogenlänge, `None` wenn noch nicht berechnet
    pub length: Option<f32>,
    /// Abtastpunkte in Kurvenkoordinaten
    pub polyline: Vec<Point>,
}

/// Kontroll- oder Tangentenpunkt des selektierten Layers.
#[derive(Debug, Clone, Serialize)]
pub struct HandlePoint {
    pub point_id: usize,
    /// Globale Position in Kurvenkoordinaten
    pub position: Point,
    pub is_control: bool,
    pub is_selected: bool,
    pub tangent_mode: TangentMode,
}

/// Ergebnis einer Schnellauswertung am Mauszeiger.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuickEvaluation {
    /// Angefragte Position
    pub query: Point,
    /// Gefundener Punkt auf der Kurve
    pub point: Point,
}

/// Vollständige, renderbare Szene eines Frames.
#[derive(Debug, Clone, Serialize)]
pub struct CurveScene {
    pub layers: Vec<LayerScene>,
    pub selected_layer_id: Option<u64>,
    pub interpolate_mode: CurveInterpolateMode,
    /// Leer, wenn Punkte ausgeblendet sind
    pub handles: Vec<HandlePoint>,
    pub quick_evaluation: Option<QuickEvaluation>,
    /// Sichtbarer Ausschnitt in Kurvenkoordinaten
    pub viewport: CurveExtrems,
    /// Viewport in Pixeln, Y nach unten
    pub screen: CurveExtrems,
}

impl CurveScene {
    /// Rechnet einen Kurvenpunkt in Bildschirmkoordinaten um.
    pub fn to_screen(&self, point: Point) -> Point {
        remap_point(point, &self.viewport, &self.screen)
    }

    /// Rechnet einen Bildschirmpunkt in Kurvenkoordinaten um.
    pub fn to_curve(&self, point: Point) -> Point {
        remap_point(point, &self.screen, &self.viewport)
    }

    /// Selektierter Layer, falls vorhanden.
    pub fn selected_layer(&self) -> Option<&LayerScene> {
        self.layers.iter().find(|layer| layer.is_selected)
    }
}
