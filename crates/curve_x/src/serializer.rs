//! Serialisierung von Kurven im `.cvx`-Textformat.
//!
//! Aufbau (Zeilenende `\n`):
//!
//! ```text
//! version:1
//! 0:<cx>,<cy>,<lx>,<ly>,<rx>,<ry>,<mode>
//! 1:...
//! ```
//!
//! Tangenten sind lokal, `mode` ist der Code aus [`TangentMode::code`].

use crate::curve::Curve;
use crate::error::FormatError;
use crate::key::{CurveKey, TangentMode};
use crate::point::{format_point, Point};
use std::path::{Path, PathBuf};

/// Aktuelle Formatversion.
pub const FORMAT_VERSION: u32 = 1;
/// Dateiendung für Kurvendateien (ohne Punkt).
pub const FORMAT_EXTENSION: &str = "cvx";

const VERSION_KEY: &str = "version";
const KEY_FIELD_COUNT: usize = 7;

/// Serialisiert alle Keys einer Kurve.
pub fn serialize(curve: &Curve) -> String {
    let mut out = format!("{VERSION_KEY}:{FORMAT_VERSION}\n");
    for (key_id, key) in curve.keys().iter().enumerate() {
        out.push_str(&format!(
            "{}:{},{},{},{}\n",
            key_id,
            format_point(key.control),
            format_point(key.left_tangent),
            format_point(key.right_tangent),
            key.tangent_mode.code()
        ));
    }
    out
}

/// Liest eine Kurve aus `.cvx`-Text.
///
/// Leerzeilen und `\r` werden ignoriert. Bei einem Fehler wird keine Teil-Kurve
/// zurückgegeben.
pub fn unserialize(text: &str) -> Result<Curve, FormatError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line_no, header) = lines.next().ok_or(FormatError::MissingVersion)?;
    let version = parse_version(line_no, header)?;
    if version != FORMAT_VERSION {
        return Err(FormatError::UnsupportedVersion {
            found: version,
            expected: FORMAT_VERSION,
        });
    }

    let mut keys = Vec::new();
    for (line_no, line) in lines {
        keys.push(parse_key_line(line_no, line, keys.len())?);
    }

    log::debug!("Kurve gelesen: {} Keys (Format v{})", keys.len(), version);
    Ok(Curve::from_keys(keys))
}

/// Erzwingt die `.cvx`-Endung (ersetzt eine abweichende Endung).
pub fn with_format_extension(path: &Path) -> PathBuf {
    let has_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(FORMAT_EXTENSION));
    if has_extension {
        path.to_path_buf()
    } else {
        path.with_extension(FORMAT_EXTENSION)
    }
}

fn parse_version(line: usize, header: &str) -> Result<u32, FormatError> {
    let invalid = || FormatError::InvalidVersion {
        line,
        content: header.to_string(),
    };

    let (name, value) = header.split_once(':').ok_or_else(invalid)?;
    if name.trim() != VERSION_KEY {
        return Err(invalid());
    }
    value.trim().parse().map_err(|_| invalid())
}

fn parse_key_line(line: usize, content: &str, expected: usize) -> Result<CurveKey, FormatError> {
    let (index, data) = content
        .split_once(':')
        .ok_or_else(|| FormatError::MalformedKeyLine {
            line,
            reason: "':' fehlt".to_string(),
        })?;

    let found: usize = index
        .trim()
        .parse()
        .map_err(|_| FormatError::MalformedKeyLine {
            line,
            reason: format!("Key-Index '{}' ist keine Ganzzahl", index.trim()),
        })?;
    if found != expected {
        return Err(FormatError::UnexpectedKeyIndex {
            line,
            expected,
            found,
        });
    }

    let fields: Vec<&str> = data.split(',').map(str::trim).collect();
    if fields.len() != KEY_FIELD_COUNT {
        return Err(FormatError::MalformedKeyLine {
            line,
            reason: format!("{} Felder statt {}", fields.len(), KEY_FIELD_COUNT),
        });
    }

    let number = |value: &str| -> Result<f32, FormatError> {
        value.parse().map_err(|_| FormatError::InvalidNumber {
            line,
            value: value.to_string(),
        })
    };
    let point = |x: &str, y: &str| -> Result<Point, FormatError> {
        Ok(Point::new(number(x)?, number(y)?))
    };

    let control = point(fields[0], fields[1])?;
    let left_tangent = point(fields[2], fields[3])?;
    let right_tangent = point(fields[4], fields[5])?;
    let tangent_mode = fields[6]
        .parse::<u8>()
        .ok()
        .and_then(TangentMode::from_code)
        .ok_or_else(|| FormatError::InvalidTangentMode {
            line,
            value: fields[6].to_string(),
        })?;

    Ok(CurveKey::with_tangents(
        control,
        left_tangent,
        right_tangent,
        tangent_mode,
    ))
}

#[cfg(test)]
mod tests;
