/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selektierter Punkt im selektierten Layer (Kontroll- oder Tangentenpunkt)
    pub selected_point_id: Option<usize>,
    /// Ob der selektierte Punkt gezogen werden darf
    pub can_drag_selected_point: bool,
    /// Ob gerade ein Drag läuft
    pub is_dragging: bool,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt Punkt-Selektion und Drag auf.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
