//! Opacity values constrained to `[0.0, 1.0]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GoStyleError;

/// Fill opacity of a diagram region.
#[derive(Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Opacity(f64);

impl Opacity {
    pub const TRANSPARENT: Opacity = Opacity(0.0);
    pub const OPAQUE: Opacity = Opacity(1.0);

    /// Creates an opacity, rejecting non-finite values and values outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, GoStyleError> {
        if !value.is_finite() {
            return Err(GoStyleError::invalid(
                "Opacity",
                value.to_string(),
                "must be a finite number",
            ));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(GoStyleError::invalid(
                "Opacity",
                value.to_string(),
                "must be between 0 and 1",
            ));
        }
        // Normalize -0.0 so it formats as "0".
        Ok(Self(value + 0.0))
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self(0.5)
    }
}

impl FromStr for Opacity {
    type Err = GoStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<f64>()
            .map_err(|e| GoStyleError::invalid("Opacity", trimmed, e.to_string()))?;
        Opacity::new(value)
    }
}

impl TryFrom<f64> for Opacity {
    type Error = GoStyleError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Opacity::new(value)
    }
}

impl From<Opacity> for f64 {
    fn from(opacity: Opacity) -> Self {
        opacity.0
    }
}

impl fmt::Debug for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opacity({})", self.0)
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
