//! Fehlertypen der Kurven-Engine und des `.cvx`-Formats.

use thiserror::Error;

/// Fehler bei Zugriff auf oder Auswertung von einer [`Curve`](crate::Curve).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Key-ID außerhalb von `[0, keys_count)`.
    #[error("Key-ID {key_id} außerhalb des gültigen Bereichs (Keys: {keys_count})")]
    KeyIndexOutOfRange {
        /// Angefragte Key-ID
        key_id: usize,
        /// Anzahl vorhandener Keys
        keys_count: usize,
    },
    /// Punkt-ID außerhalb von `[0, points_count)`.
    #[error("Punkt-ID {point_id} außerhalb des gültigen Bereichs (Punkte: {points_count})")]
    PointIndexOutOfRange {
        /// Angefragte Punkt-ID
        point_id: usize,
        /// Anzahl adressierbarer Punkte
        points_count: usize,
    },
    /// Die Kurve hat weniger als zwei Keys und kann nicht ausgewertet werden.
    #[error("Ungültige Kurve: {keys_count} Key(s), mindestens 2 erforderlich")]
    InvalidCurve {
        /// Anzahl vorhandener Keys
        keys_count: usize,
    },
    /// Constraint-Schreibzugriff auf einen Kontrollpunkt statt einer Tangente.
    #[error("Punkt-ID {point_id} adressiert einen Kontrollpunkt, keine Tangente")]
    NotATangentPoint {
        /// Angefragte Punkt-ID
        point_id: usize,
    },
}

/// Fehler beim Einlesen einer `.cvx`-Datei.
///
/// Zeilennummern sind 1-basiert und beziehen sich auf den Originaltext.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Text enthält keine (nicht-leere) Zeile.
    #[error("Versionszeile fehlt")]
    MissingVersion,
    /// Erste Zeile ist keine lesbare `version:<n>`-Zeile.
    #[error("Zeile {line}: ungültige Versionszeile '{content}'")]
    InvalidVersion { line: usize, content: String },
    /// Version gelesen, aber nicht unterstützt.
    #[error("Formatversion {found} wird nicht unterstützt (erwartet: {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    /// Key-Zeile hat nicht die Form `<i>:<7 Felder>`.
    #[error("Zeile {line}: fehlerhafte Key-Zeile ({reason})")]
    MalformedKeyLine { line: usize, reason: String },
    /// Key-Index nicht fortlaufend.
    #[error("Zeile {line}: Key-Index {found} erwartet {expected}")]
    UnexpectedKeyIndex {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Koordinate ist keine gültige Zahl.
    #[error("Zeile {line}: ungültige Zahl '{value}'")]
    InvalidNumber { line: usize, value: String },
    /// Tangenten-Modus außerhalb von 0..=2.
    #[error("Zeile {line}: ungültiger Tangenten-Modus '{value}'")]
    InvalidTangentMode { line: usize, value: String },
}
