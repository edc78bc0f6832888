//! Auswertungsmodus für die Darstellung einer Kurve.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wie die Polylinie einer Kurve abgetastet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveInterpolateMode {
    /// Gleichmäßig im Kurvenparameter (Prozent)
    #[default]
    Bezier,
    /// Y als Funktion von X
    TimeEvaluation,
    /// Gleichmäßig entlang der Bogenlänge
    DistanceEvaluation,
}

impl CurveInterpolateMode {
    pub const ALL: [Self; 3] = [
        Self::Bezier,
        Self::TimeEvaluation,
        Self::DistanceEvaluation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Bezier => "Bezier",
            Self::TimeEvaluation => "Time Evaluation",
            Self::DistanceEvaluation => "Distance Evaluation",
        }
    }
}

impl fmt::Display for CurveInterpolateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CurveInterpolateMode {
    type Err = anyhow::Error;

    /// Akzeptiert die CLI-Kurzformen `bezier`, `time`, `distance`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bezier" | "percent" => Ok(Self::Bezier),
            "time" => Ok(Self::TimeEvaluation),
            "distance" => Ok(Self::DistanceEvaluation),
            other => anyhow::bail!(
                "Unbekannter Auswertungsmodus '{}' (erwartet: bezier, time, distance)",
                other
            ),
        }
    }
}
