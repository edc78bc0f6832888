//! Builder für Kurven-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{CurveInterpolateMode, CurveScene, HandlePoint, LayerScene, QuickEvaluation};
use curve_x::{Curve, CurveExtrems, Point, PointSpace};

/// Ausschnitt, solange noch nicht eingepasst wurde.
const FALLBACK_VIEWPORT: CurveExtrems = CurveExtrems {
    min_x: 0.0,
    max_x: 1.0,
    min_y: 0.0,
    max_y: 1.0,
};

/// Baut eine CurveScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> CurveScene {
    let mode = state.view.interpolate_mode;
    let step = state.options.render_subdivisions;
    let selected_layer_id = state.document.selected_layer_id();

    let layers = state
        .document
        .layers_iter()
        .map(|(id, layer)| LayerScene {
            id,
            name: layer.name.clone(),
            is_selected: selected_layer_id == Some(id),
            is_valid: layer.curve.is_valid(),
            has_unsaved_changes: layer.has_unsaved_changes,
            length: layer.curve.cached_length(),
            polyline: sample_polyline(&layer.curve, mode, step),
        })
        .collect();

    let [width, height] = state.view.viewport_size;

    CurveScene {
        layers,
        selected_layer_id,
        interpolate_mode: mode,
        handles: build_handles(state),
        quick_evaluation: quick_evaluation(state),
        viewport: state.view.viewport_extrems.unwrap_or(FALLBACK_VIEWPORT),
        screen: CurveExtrems::new(0.0, width, height, 0.0),
    }
}

/// Tastet eine Kurve gemäß Modus ab; ungültige Kurven liefern keine Punkte.
///
/// `step` ist der Anteil an Parameterbereich, Zeitspanne bzw. Länge pro Schritt.
pub fn sample_polyline(curve: &Curve, mode: CurveInterpolateMode, step: f32) -> Vec<Point> {
    if !curve.is_valid() {
        return Vec::new();
    }

    match mode {
        CurveInterpolateMode::Bezier => sample_fractions(step)
            .filter_map(|t| curve.evaluate_by_percent(t).ok())
            .collect(),
        CurveInterpolateMode::TimeEvaluation => {
            let (Some(first), Some(last)) = (curve.keys().first(), curve.keys().last()) else {
                return Vec::new();
            };
            let (start, end) = (first.control.x, last.control.x);
            sample_fractions(step)
                .filter_map(|fraction| {
                    let x = start + (end - start) * fraction;
                    curve.evaluate_by_time(x).ok().map(|y| Point::new(x, y))
                })
                .collect()
        }
        CurveInterpolateMode::DistanceEvaluation => {
            let mut curve = curve.clone();
            let length = curve.length();
            sample_fractions(step)
                .filter_map(|fraction| curve.evaluate_by_distance(length * fraction).ok())
                .collect()
        }
    }
}

/// Gleichmäßige Anteile `0..=1` inklusive beider Enden.
fn sample_fractions(step: f32) -> impl Iterator<Item = f32> {
    let segments = (1.0 / step).ceil().max(1.0) as usize;
    (0..=segments).map(move |i| i as f32 / segments as f32)
}

fn build_handles(state: &AppState) -> Vec<HandlePoint> {
    if !state.view.show_points {
        return Vec::new();
    }
    let Some(layer) = state.selected_layer() else {
        return Vec::new();
    };
    let curve = &layer.curve;

    (0..curve.points_count())
        .filter_map(|point_id| {
            Some(HandlePoint {
                point_id,
                position: curve.point(point_id, PointSpace::Global).ok()?,
                is_control: Curve::is_control_point_id(point_id),
                is_selected: state.selection.selected_point_id == Some(point_id),
                tangent_mode: curve.tangent_mode(Curve::point_key_id(point_id)).ok()?,
            })
        })
        .collect()
}

/// Nächster Kurvenpunkt (Bezier/Distanz) bzw. Y bei X der Abfrage (Zeit).
fn quick_evaluation(state: &AppState) -> Option<QuickEvaluation> {
    let query = state.view.quick_evaluation?;
    let curve = &state.selected_layer()?.curve;

    let point = match state.view.interpolate_mode {
        CurveInterpolateMode::TimeEvaluation => {
            Point::new(query.x, curve.evaluate_by_time(query.x).ok()?)
        }
        CurveInterpolateMode::Bezier | CurveInterpolateMode::DistanceEvaluation => curve
            .nearest_point_to(query, state.options.nearest_point_samples)
            .ok()?,
    };
    Some(QuickEvaluation { query, point })
}
