//! Use-Case-Funktionen für Layer-Verwaltung.

use crate::app::AppState;
use crate::core::{CurveLayer, LayerId};
use std::sync::Arc;

/// Legt einen neuen Layer mit der Standardkurve an und selektiert ihn.
pub fn new_layer(state: &mut AppState) -> LayerId {
    state.record_undo_snapshot();
    let id = Arc::make_mut(&mut state.document).add_layer(CurveLayer::default());
    state.selection.clear();
    log::info!("Neuer Layer {} angelegt", id);
    id
}

/// Selektiert einen Layer; die Punkt-Selektion gilt nur im alten Layer und wird aufgehoben.
pub fn select_layer(state: &mut AppState, layer_id: LayerId) {
    if state.document.selected_layer_id() == Some(layer_id) {
        return;
    }
    if state.document.layer(layer_id).is_none() {
        log::warn!("Layer {} existiert nicht", layer_id);
        return;
    }
    Arc::make_mut(&mut state.document).select_layer(layer_id);
    state.selection.clear();
    log::debug!("Layer {} selektiert", layer_id);
}

/// Entfernt einen Layer (undo-fähig).
pub fn delete_layer(state: &mut AppState, layer_id: LayerId) {
    if state.document.layer(layer_id).is_none() {
        log::warn!("Layer {} existiert nicht", layer_id);
        return;
    }
    let was_selected = state.document.selected_layer_id() == Some(layer_id);

    state.record_undo_snapshot();
    if let Some(layer) = Arc::make_mut(&mut state.document).remove_layer(layer_id) {
        log::info!("Layer '{}' entfernt", layer.name);
    }
    if was_selected {
        state.selection.clear();
    }
}

/// Berechnet veraltete Kurvenlängen neu. Klont das Dokument nur bei Bedarf.
pub fn refresh_lengths(state: &mut AppState) {
    if !state.document.has_dirty_lengths() {
        return;
    }
    let refreshed = Arc::make_mut(&mut state.document).refresh_lengths();
    log::debug!("{} Kurvenlängen aktualisiert", refreshed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_layer_selects_and_is_undoable() {
        let mut state = AppState::new();
        let id = new_layer(&mut state);

        assert_eq!(state.document.selected_layer_id(), Some(id));
        assert!(state.can_undo());
        assert_eq!(state.title(), "default*");
    }

    #[test]
    fn select_layer_clears_point_selection() {
        let mut state = AppState::new();
        let first = new_layer(&mut state);
        let _second = new_layer(&mut state);
        state.selection.selected_point_id = Some(0);

        select_layer(&mut state, first);

        assert_eq!(state.document.selected_layer_id(), Some(first));
        assert_eq!(state.selection.selected_point_id, None);
    }

    #[test]
    fn select_unknown_layer_is_ignored() {
        let mut state = AppState::new();
        let id = new_layer(&mut state);

        select_layer(&mut state, id + 100);

        assert_eq!(state.document.selected_layer_id(), Some(id));
    }

    #[test]
    fn delete_layer_records_undo() {
        let mut state = AppState::new();
        let id = new_layer(&mut state);
        let undo_before = state.can_undo();

        delete_layer(&mut state, id);

        assert!(undo_before);
        assert!(state.document.is_empty());
        assert!(state.can_undo());
    }

    #[test]
    fn refresh_lengths_computes_dirty_lengths() {
        let mut state = AppState::new();
        new_layer(&mut state);
        assert!(state.document.has_dirty_lengths());

        refresh_lengths(&mut state);

        let layer = state.selected_layer().expect("Layer vorhanden");
        let length = layer.curve.cached_length().expect("Länge berechnet");
        assert!((length - std::f32::consts::SQRT_2).abs() < 1e-3);
    }
}
