//! Handler für die Layer-Liste.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::LayerId;

/// Legt einen neuen Layer an.
pub fn create(state: &mut AppState) {
    use_cases::layers::new_layer(state);
}

/// Selektiert einen Layer.
pub fn select(state: &mut AppState, layer_id: LayerId) {
    use_cases::layers::select_layer(state, layer_id);
}

/// Entfernt einen Layer.
pub fn delete(state: &mut AppState, layer_id: LayerId) {
    use_cases::layers::delete_layer(state, layer_id);
}
