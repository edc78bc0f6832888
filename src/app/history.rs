use super::SelectionState;
use crate::core::CurveDocument;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der Klon des Dokuments findet erst beim nächsten `Arc::make_mut()` in einem
/// Use-Case statt.
#[derive(Clone)]
pub struct Snapshot {
    /// Dokument (Arc-Klon für O(1)-Snapshot)
    pub document: Arc<CurveDocument>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            document: Arc::clone(&state.document),
            selection: state.selection.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    ///
    /// Ein laufender Drag wird dabei abgebrochen.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.document = self.document;
        state.selection = self.selection;
        state.selection.is_dragging = false;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen fertigen Snapshot auf und verwirft den Redo-Stack.
    ///
    /// Der Snapshot wird vorab gebaut, damit `AppState` nicht gleichzeitig
    /// mutabel und immutabel geliehen wird.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Ändert die maximale Tiefe; überzählige älteste Einträge fallen weg.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
        for stack in [&mut self.undo_stack, &mut self.redo_stack] {
            let excess = stack.len().saturating_sub(max_depth);
            stack.drain(..excess);
        }
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Holt den letzten Undo-Eintrag und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Eintrag und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::core::CurveLayer;

    fn make_snapshot_with_layer_count(count: usize) -> Snapshot {
        let mut document = CurveDocument::new();
        for i in 0..count {
            document.add_layer(CurveLayer::new(format!("layer_{i}")));
        }
        let mut state = AppState::new();
        state.document = Arc::new(document);
        Snapshot::from_state(&state)
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_layer_count(2));

        let restored = history
            .pop_undo_with_current(make_snapshot_with_layer_count(5))
            .expect("undo vorhanden");

        assert_eq!(restored.document.layer_count(), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_layer_count(2));
        let _restored = history.pop_undo_with_current(make_snapshot_with_layer_count(5));

        let redone = history
            .pop_redo_with_current(make_snapshot_with_layer_count(2))
            .expect("redo vorhanden");

        assert_eq!(redone.document.layer_count(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_layer_count(1));
        let _restored = history.pop_undo_with_current(make_snapshot_with_layer_count(3));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_layer_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_layer_count(i));
        }

        let mut undo_count = 0;
        while history.can_undo() {
            history.pop_undo_with_current(make_snapshot_with_layer_count(9));
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }

    #[test]
    fn shrinking_max_depth_drops_oldest_entries() {
        let mut history = EditHistory::new_with_capacity(10);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_layer_count(i));
        }

        history.set_max_depth(2);
        let newest = history
            .pop_undo_with_current(make_snapshot_with_layer_count(9))
            .expect("undo vorhanden");
        assert_eq!(newest.document.layer_count(), 5);
        let older = history
            .pop_undo_with_current(make_snapshot_with_layer_count(9))
            .expect("undo vorhanden");
        assert_eq!(older.document.layer_count(), 4);
        assert!(!history.can_undo());
    }

    #[test]
    fn snapshot_is_not_affected_by_later_mutation() {
        let mut state = AppState::new();
        Arc::make_mut(&mut state.document).add_layer(CurveLayer::default());
        let snap = Snapshot::from_state(&state);

        Arc::make_mut(&mut state.document).add_layer(CurveLayer::new("zweiter"));
        assert_eq!(state.document.layer_count(), 2);
        assert_eq!(snap.document.layer_count(), 1, "Copy-on-Write erwartet");
    }

    #[test]
    fn snapshot_apply_to_restores_selection_and_stops_drag() {
        let mut original = AppState::new();
        original.selection.selected_point_id = Some(3);
        original.selection.is_dragging = true;
        let snap = Snapshot::from_state(&original);

        let mut target = AppState::new();
        snap.apply_to(&mut target);

        assert_eq!(target.selection.selected_point_id, Some(3));
        assert!(!target.selection.is_dragging);
    }
}
