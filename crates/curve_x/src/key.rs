//! Curve-Keys: Kontrollpunkt, lokale Tangenten und Tangenten-Constraint.

use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Kopplung der beiden Tangenten eines Keys.
///
/// Beim Setzen einer Tangente wird die Geschwister-Tangente gemäß Modus nachgeführt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TangentMode {
    /// Geschwister = exakt die negierte bearbeitete Tangente
    #[default]
    Mirrored,
    /// Geschwister behält Länge, zeigt in die Gegenrichtung
    Aligned,
    /// Tangenten unabhängig
    Broken,
}

impl TangentMode {
    /// Alle Modi in Persistenz-Reihenfolge.
    pub const ALL: [TangentMode; 3] = [Self::Mirrored, Self::Aligned, Self::Broken];

    /// Ganzzahliger Code im `.cvx`-Format.
    pub fn code(self) -> u8 {
        match self {
            Self::Mirrored => 0,
            Self::Aligned => 1,
            Self::Broken => 2,
        }
    }

    /// Modus aus dem `.cvx`-Code, `None` außerhalb von 0..=2.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Nächster Modus im Zyklus Mirrored → Aligned → Broken → Mirrored.
    pub fn next(self) -> Self {
        match self {
            Self::Mirrored => Self::Aligned,
            Self::Aligned => Self::Broken,
            Self::Broken => Self::Mirrored,
        }
    }

    /// Berechnet die Geschwister-Tangente nach einer Änderung von `edited`.
    ///
    /// Aligned mit Null-Tangente hat keine Richtung: das Geschwister bleibt dann unverändert.
    pub fn constrain_sibling(self, edited: Point, sibling: Point) -> Point {
        match self {
            Self::Mirrored => -edited,
            Self::Aligned => match edited.try_normalize() {
                Some(direction) => -direction * sibling.length(),
                None => sibling,
            },
            Self::Broken => sibling,
        }
    }

    /// Anzeigename für Host-Ausgaben.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mirrored => "Mirrored",
            Self::Aligned => "Aligned",
            Self::Broken => "Broken",
        }
    }
}

/// Koordinatenraum eines Tangentenpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointSpace {
    /// Offset relativ zum Kontrollpunkt
    #[default]
    Local,
    /// Absolute Position (`control + tangent`)
    Global,
}

/// Welchen Punkt eines Keys eine Punkt-ID adressiert (`point_id % 3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSlot {
    Control,
    RightTangent,
    LeftTangent,
}

impl PointSlot {
    /// Slot einer Punkt-ID: 0 = Kontrollpunkt, 1 = rechte, 2 = linke Tangente.
    pub fn of_point_id(point_id: usize) -> Self {
        match point_id % 3 {
            0 => Self::Control,
            1 => Self::RightTangent,
            _ => Self::LeftTangent,
        }
    }
}

/// Ein editierbarer Key der Kurve.
///
/// Tangenten liegen im lokalen Raum. Der erste Key nutzt seine linke, der letzte
/// seine rechte Tangente nie; beide werden trotzdem gespeichert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    /// Kontrollpunkt (global, liegt auf der Kurve)
    pub control: Point,
    /// Eingehende Tangente (lokal)
    pub left_tangent: Point,
    /// Ausgehende Tangente (lokal)
    pub right_tangent: Point,
    /// Kopplung der Tangenten
    pub tangent_mode: TangentMode,
}

impl CurveKey {
    /// Key ohne Tangenten im Modus Mirrored.
    pub fn new(control: Point) -> Self {
        Self::with_tangents(control, Point::ZERO, Point::ZERO, TangentMode::Mirrored)
    }

    pub fn with_tangents(
        control: Point,
        left_tangent: Point,
        right_tangent: Point,
        tangent_mode: TangentMode,
    ) -> Self {
        Self {
            control,
            left_tangent,
            right_tangent,
            tangent_mode,
        }
    }

    /// Setzt die linke Tangente und führt die rechte gemäß Modus nach.
    pub fn set_left_tangent(&mut self, tangent: Point) {
        self.left_tangent = tangent;
        self.right_tangent = self.tangent_mode.constrain_sibling(tangent, self.right_tangent);
    }

    /// Setzt die rechte Tangente und führt die linke gemäß Modus nach.
    pub fn set_right_tangent(&mut self, tangent: Point) {
        self.right_tangent = tangent;
        self.left_tangent = self.tangent_mode.constrain_sibling(tangent, self.left_tangent);
    }

    pub fn left_tangent_global(&self) -> Point {
        self.control + self.left_tangent
    }

    pub fn right_tangent_global(&self) -> Point {
        self.control + self.right_tangent
    }
}
