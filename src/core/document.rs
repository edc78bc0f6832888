//! Dokument: Arena aller Kurven-Layer mit stabilen IDs und Layer-Selektion.

use super::curve_layer::CurveLayer;
use curve_x::CurveExtrems;
use indexmap::IndexMap;
use std::path::Path;

/// Stabile Layer-ID (wird nie wiederverwendet).
pub type LayerId = u64;

/// Besitzt alle Layer; UI und Commands referenzieren Layer nur über [`LayerId`].
#[derive(Debug, Clone, Default)]
pub struct CurveDocument {
    layers: IndexMap<LayerId, CurveLayer>,
    next_layer_id: LayerId,
    selected_layer_id: Option<LayerId>,
}

impl CurveDocument {
    /// Erstellt ein leeres Dokument.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Layer hinzu und selektiert ihn.
    pub fn add_layer(&mut self, layer: CurveLayer) -> LayerId {
        let id = self.next_layer_id;
        self.next_layer_id += 1;
        self.layers.insert(id, layer);
        self.selected_layer_id = Some(id);
        id
    }

    /// Entfernt einen Layer unter Beibehaltung der Reihenfolge.
    ///
    /// War er selektiert, rückt der Nachfolger (oder der neue letzte Layer) nach.
    pub fn remove_layer(&mut self, id: LayerId) -> Option<CurveLayer> {
        let index = self.layers.get_index_of(&id)?;
        let layer = self.layers.shift_remove(&id);

        if self.selected_layer_id == Some(id) {
            let fallback = index.min(self.layers.len().saturating_sub(1));
            self.selected_layer_id = self.layers.get_index(fallback).map(|(id, _)| *id);
        }
        layer
    }

    pub fn layer(&self, id: LayerId) -> Option<&CurveLayer> {
        self.layers.get(&id)
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut CurveLayer> {
        self.layers.get_mut(&id)
    }

    /// Selektiert einen Layer. `false`, wenn die ID unbekannt ist.
    pub fn select_layer(&mut self, id: LayerId) -> bool {
        if self.layers.contains_key(&id) {
            self.selected_layer_id = Some(id);
            true
        } else {
            false
        }
    }

    pub fn selected_layer_id(&self) -> Option<LayerId> {
        self.selected_layer_id
    }

    pub fn selected_layer(&self) -> Option<&CurveLayer> {
        self.selected_layer_id.and_then(|id| self.layers.get(&id))
    }

    pub fn selected_layer_mut(&mut self) -> Option<&mut CurveLayer> {
        self.selected_layer_id
            .and_then(move |id| self.layers.get_mut(&id))
    }

    /// Layer in Einfüge-Reihenfolge.
    pub fn layers_iter(&self) -> impl Iterator<Item = (LayerId, &CurveLayer)> {
        self.layers.iter().map(|(id, layer)| (*id, layer))
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Findet einen bereits geöffneten Layer anhand seines Dateipfads.
    pub fn find_by_path(&self, path: &Path) -> Option<LayerId> {
        self.layers
            .iter()
            .find(|(_, layer)| layer.is_file_exists && layer.path == path)
            .map(|(id, _)| *id)
    }

    /// Vereinigte Extrema aller gültigen Kurven, `None` ohne gültige Kurve.
    pub fn extrems(&self) -> Option<CurveExtrems> {
        self.layers
            .values()
            .filter_map(|layer| layer.curve.extrems().ok())
            .reduce(|acc, extrems| acc.union(&extrems))
    }

    /// Anzahl der Layer mit ungespeicherten Änderungen.
    pub fn unsaved_count(&self) -> usize {
        self.layers
            .values()
            .filter(|layer| layer.has_unsaved_changes)
            .count()
    }

    /// `true`, wenn mindestens eine Kurvenlänge veraltet ist.
    pub fn has_dirty_lengths(&self) -> bool {
        self.layers
            .values()
            .any(|layer| layer.curve.is_length_dirty())
    }

    /// Berechnet veraltete Kurvenlängen neu und gibt die Anzahl zurück.
    pub fn refresh_lengths(&mut self) -> usize {
        let mut refreshed = 0;
        for layer in self.layers.values_mut() {
            if layer.curve.is_length_dirty() {
                layer.curve.length();
                refreshed += 1;
            }
        }
        refreshed
    }
}
