//! Newtype IDs for GO terms and taxonomies.
//!
//! Both are positive integers. Construction goes through [`GoId::new`] /
//! [`TaxonomyId::new`] so a zero ID can never exist.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GoStyleError;

/// Identifier of a GO subcellular location term (the "GO ID").
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct GoId(u64);

impl GoId {
    /// Creates a new GoId, rejecting zero.
    pub fn new(id: u64) -> Result<Self, GoStyleError> {
        if id == 0 {
            return Err(GoStyleError::invalid("ID", "0", "must be a positive integer"));
        }
        Ok(Self(id))
    }

    /// Returns the underlying u64 value.
    #[inline]
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for GoId {
    type Error = GoStyleError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        GoId::new(id)
    }
}

impl From<GoId> for u64 {
    fn from(id: GoId) -> Self {
        id.0
    }
}

/// Parses `5634`, `GO:0005634` or `GO0005634`.
impl FromStr for GoId {
    type Err = GoStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = match trimmed.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("go") => {
                let rest = &trimmed[2..];
                rest.strip_prefix(':').unwrap_or(rest)
            }
            _ => trimmed,
        };

        let id = digits
            .parse::<u64>()
            .map_err(|e| GoStyleError::invalid("ID", trimmed, e.to_string()))?;
        GoId::new(id)
    }
}

impl fmt::Debug for GoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GoId({})", self.0)
    }
}

impl fmt::Display for GoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the organism whose diagram is rendered.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TaxonomyId(u64);

impl TaxonomyId {
    /// Homo sapiens.
    pub const HUMAN: TaxonomyId = TaxonomyId(9606);

    /// Creates a new TaxonomyId, rejecting zero.
    pub fn new(id: u64) -> Result<Self, GoStyleError> {
        if id == 0 {
            return Err(GoStyleError::invalid(
                "Tax ID",
                "0",
                "must be a positive integer",
            ));
        }
        Ok(Self(id))
    }

    /// Returns the underlying u64 value.
    #[inline]
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for TaxonomyId {
    fn default() -> Self {
        TaxonomyId::HUMAN
    }
}

impl TryFrom<u64> for TaxonomyId {
    type Error = GoStyleError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        TaxonomyId::new(id)
    }
}

impl From<TaxonomyId> for u64 {
    fn from(id: TaxonomyId) -> Self {
        id.0
    }
}

impl FromStr for TaxonomyId {
    type Err = GoStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u64>()
            .map_err(|e| GoStyleError::invalid("Tax ID", s.trim(), e.to_string()))?;
        TaxonomyId::new(id)
    }
}

impl fmt::Debug for TaxonomyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaxonomyId({})", self.0)
    }
}

impl fmt::Display for TaxonomyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
