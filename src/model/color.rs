//! Hex color values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GoStyleError;

/// A CSS hex color, always stored with a leading `#`.
///
/// Accepts 3, 4, 6 or 8 hex digits. Case is preserved as given, so
/// `00ff00` becomes `#00ff00` rather than `#00FF00`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parses and normalizes a hex color, adding a missing `#`.
    pub fn parse(value: &str) -> Result<Self, GoStyleError> {
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !matches!(digits.len(), 3 | 4 | 6 | 8) {
            return Err(GoStyleError::invalid(
                "Color",
                trimmed,
                "expected 3, 4, 6 or 8 hex digits",
            ));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GoStyleError::invalid(
                "Color",
                trimmed,
                "contains non-hex characters",
            ));
        }

        Ok(Self(format!("#{}", digits)))
    }

    /// Returns the color including its leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self("#FF0000".to_string())
    }
}

impl FromStr for HexColor {
    type Err = GoStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexColor::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = GoStyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HexColor::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColor({})", self.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
