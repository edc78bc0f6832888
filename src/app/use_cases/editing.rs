//! Use-Case-Funktionen für das Bearbeiten der selektierten Kurve.
//!
//! Jede mutierende Funktion nimmt vor der Änderung einen Undo-Snapshot auf;
//! ein Drag nimmt genau einen Snapshot beim Start auf.

use crate::app::AppState;
use crate::core::CurveLayer;
use curve_x::{Curve, CurveError, CurveKey, Point, PointSpace};
use std::sync::Arc;

/// Sucht den nächsten Kontroll- oder Tangentenpunkt des selektierten Layers
/// innerhalb des Pick-Radius.
///
/// Bei gleichem Abstand gewinnt der Kontrollpunkt (Null-Tangenten liegen auf ihm).
/// Bei ausgeblendeten Punkten ist nichts pickbar.
pub fn pick_point(state: &AppState, position: Point) -> Option<usize> {
    if !state.view.show_points {
        return None;
    }
    let curve = &state.selected_layer()?.curve;
    let radius = state.options.point_pick_radius;

    (0..curve.points_count())
        .filter_map(|point_id| {
            let point = curve.point(point_id, PointSpace::Global).ok()?;
            let distance = point.distance(position);
            (distance <= radius).then_some((point_id, distance))
        })
        .min_by(|a, b| {
            a.1.total_cmp(&b.1).then_with(|| {
                let a_tangent = !Curve::is_control_point_id(a.0);
                let b_tangent = !Curve::is_control_point_id(b.0);
                a_tangent.cmp(&b_tangent)
            })
        })
        .map(|(point_id, _)| point_id)
}

/// Selektiert einen Punkt im selektierten Layer.
///
/// Mit `must_double_click_to_drag` darf erst ein bereits selektierter Punkt
/// gezogen werden.
pub fn select_point(state: &mut AppState, point_id: Option<usize>) {
    let point_id = point_id.filter(|&id| {
        state
            .selected_layer()
            .is_some_and(|layer| layer.curve.is_valid_point_id(id))
    });

    let was_selected = point_id.is_some() && state.selection.selected_point_id == point_id;
    state.selection.can_drag_selected_point =
        !state.options.must_double_click_to_drag || was_selected;
    state.selection.selected_point_id = point_id;
    state.selection.is_dragging = false;
}

/// Hängt einen Key an die Kurve an und selektiert seinen Kontrollpunkt.
pub fn add_key(state: &mut AppState, position: Point) {
    if state.selected_layer().is_none() {
        log::debug!("Key hinzufügen: kein Layer selektiert");
        return;
    }

    state.record_undo_snapshot();
    let Some(layer) = selected_layer_mut(state) else {
        return;
    };
    layer.curve.add_key(CurveKey::new(position));
    layer.touch();
    let point_id = layer.curve.points_count() - 1;

    log::info!("Key hinzugefügt bei ({:.3}, {:.3})", position.x, position.y);
    select_point(state, Some(point_id));
}

/// Fügt einen Key an der Position in das Segment ein, das ihr am nächsten liegt.
pub fn insert_key_on_curve(state: &mut AppState, position: Point) -> anyhow::Result<()> {
    if !state.selected_layer().is_some_and(|layer| layer.curve.is_valid()) {
        log::debug!("Key einfügen: keine gültige Kurve selektiert");
        return Ok(());
    }
    let samples = state.options.nearest_point_samples;

    state.record_undo_snapshot();
    let Some(layer) = selected_layer_mut(state) else {
        return Ok(());
    };
    let distance = layer.curve.nearest_distance_to(position, samples)?;
    let location = layer.curve.find_evaluation_keys_id_by_distance(distance)?;
    layer
        .curve
        .insert_key(location.last_key_id, CurveKey::new(position))?;
    layer.touch();

    log::info!(
        "Key eingefügt zwischen Key {} und {}",
        location.first_key_id,
        location.last_key_id
    );
    select_point(state, Some(Curve::key_to_point_id(location.last_key_id)));
    Ok(())
}

/// Entfernt den Key des selektierten Punkts, solange die Kurve danach gültig bleibt.
pub fn delete_selected_key(state: &mut AppState) -> anyhow::Result<()> {
    let Some(point_id) = state.selection.selected_point_id else {
        return Ok(());
    };
    let Some(keys_count) = state.selected_layer().map(|l| l.curve.keys_count()) else {
        return Ok(());
    };
    if keys_count <= 2 {
        log::info!("Key nicht gelöscht: eine Kurve braucht mindestens zwei Keys");
        return Ok(());
    }

    let key_id = Curve::point_key_id(point_id);
    if !state
        .selected_layer()
        .is_some_and(|layer| layer.curve.is_valid_key_id(key_id))
    {
        log::warn!("Key nicht gelöscht: ungültige Key-ID {}", key_id);
        return Ok(());
    }

    state.record_undo_snapshot();
    if let Some(layer) = selected_layer_mut(state) {
        layer.curve.remove_key(key_id)?;
        layer.touch();
        log::info!("Key {} gelöscht", key_id);
    }
    state.selection.clear();
    Ok(())
}

/// Startet einen Drag des selektierten Punkts.
pub fn begin_point_drag(state: &mut AppState) {
    let selection = &state.selection;
    if selection.is_dragging
        || selection.selected_point_id.is_none()
        || !selection.can_drag_selected_point
    {
        return;
    }
    state.record_undo_snapshot();
    state.selection.is_dragging = true;
}

/// Setzt den selektierten Punkt während eines Drags auf `position`.
///
/// Kontrollpunkte nehmen ihre Tangenten mit; Tangentenpunkte halten den
/// Tangenten-Modus ihres Keys ein.
pub fn move_selected_point(state: &mut AppState, position: Point) -> anyhow::Result<()> {
    if !state.selection.is_dragging {
        return Ok(());
    }
    let Some(point_id) = state.selection.selected_point_id else {
        return Ok(());
    };
    let Some(layer) = selected_layer_mut(state) else {
        return Ok(());
    };

    if Curve::is_control_point_id(point_id) {
        layer.curve.set_point(point_id, position)?;
    } else {
        layer
            .curve
            .set_tangent_point(point_id, position, PointSpace::Global)?;
    }
    layer.touch();
    Ok(())
}

/// Beendet einen Drag. Der Punkt bleibt selektiert und ziehbar.
pub fn end_point_drag(state: &mut AppState) {
    state.selection.is_dragging = false;
    state.selection.can_drag_selected_point = true;
}

/// Schaltet den Tangenten-Modus des Keys zu `point_id` weiter und wendet ihn an.
///
/// Punkt-IDs außerhalb der Kurve sind ein Fehler und verändern nichts.
pub fn cycle_tangent_mode(state: &mut AppState, point_id: usize) -> anyhow::Result<()> {
    let Some(curve) = state.selected_layer().map(|layer| &layer.curve) else {
        return Ok(());
    };
    if !curve.is_valid_point_id(point_id) {
        return Err(CurveError::PointIndexOutOfRange {
            point_id,
            points_count: curve.points_count(),
        }
        .into());
    }
    let key_id = Curve::point_key_id(point_id);
    let mode = curve.tangent_mode(key_id)?;
    apply_tangent_mode(state, key_id, mode.next())
}

/// Setzt den Tangenten-Modus des Keys zum selektierten Punkt.
pub fn set_tangent_mode(state: &mut AppState, mode: curve_x::TangentMode) -> anyhow::Result<()> {
    let Some(point_id) = state.selection.selected_point_id else {
        return Ok(());
    };
    apply_tangent_mode(state, Curve::point_key_id(point_id), mode)
}

fn apply_tangent_mode(
    state: &mut AppState,
    key_id: usize,
    mode: curve_x::TangentMode,
) -> anyhow::Result<()> {
    state.record_undo_snapshot();
    if let Some(layer) = selected_layer_mut(state) {
        layer.curve.set_tangent_mode(key_id, mode, true)?;
        layer.touch();
        log::info!("Key {}: Tangenten-Modus {}", key_id, mode.label());
    }
    Ok(())
}

fn selected_layer_mut(state: &mut AppState) -> Option<&mut CurveLayer> {
    Arc::make_mut(&mut state.document).selected_layer_mut()
}

#[cfg(test)]
mod tests;
