//! Force kinds and applied force entries

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MAGNITUDE;

/// Kind of force the user can place on the diagram
///
/// Unknown names are kept as `Other` rather than rejected; the diagram treats
/// them like any other force.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ForceKind {
    Gravity,
    Normal,
    Friction,
    Applied,
    Other(String),
}

impl ForceKind {
    /// Name used in level data and `data-force` attributes
    pub fn as_str(&self) -> &str {
        match self {
            ForceKind::Gravity => "gravity",
            ForceKind::Normal => "normal",
            ForceKind::Friction => "friction",
            ForceKind::Applied => "applied",
            ForceKind::Other(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "gravity" => ForceKind::Gravity,
            "normal" => ForceKind::Normal,
            "friction" => ForceKind::Friction,
            "applied" => ForceKind::Applied,
            other => ForceKind::Other(other.to_string()),
        }
    }

    /// Human-readable name for status labels
    pub fn display_name(&self) -> &str {
        match self {
            ForceKind::Gravity => "Gravity",
            ForceKind::Normal => "Normal Force",
            ForceKind::Friction => "Friction",
            ForceKind::Applied => "Applied Force",
            ForceKind::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ForceKind::Other(_))
    }
}

impl From<String> for ForceKind {
    fn from(name: String) -> Self {
        match ForceKind::from_name(&name) {
            ForceKind::Other(_) => ForceKind::Other(name),
            kind => kind,
        }
    }
}

impl From<ForceKind> for String {
    fn from(kind: ForceKind) -> Self {
        match kind {
            ForceKind::Other(name) => name,
            kind => kind.as_str().to_string(),
        }
    }
}

impl fmt::Display for ForceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A force placed on the diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedForce {
    pub kind: ForceKind,
    /// Not used by answer checking; carried for the renderer
    pub magnitude: f32,
    /// Bearing in whole degrees, stored as given. `None` when the input
    /// could not be read as a number.
    pub angle: Option<i32>,
}

impl AppliedForce {
    pub fn new(kind: ForceKind, angle: Option<i32>) -> Self {
        Self {
            kind,
            magnitude: DEFAULT_MAGNITUDE,
            angle,
        }
    }
}

/// Read an angle the way a loose integer prefix parser does.
///
/// Leading whitespace and an optional sign are accepted, `0x` switches to hex,
/// and parsing stops at the first character that is not a digit. Returns
/// `None` when no digits are found or the value does not fit in an `i32`;
/// a browser's `parseInt` would keep such a value as a large number, but no
/// bearing that size can match a level answer either way.
pub fn parse_angle(text: &str) -> Option<i32> {
    let s = text.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}
