use serde::{Deserialize, Serialize};

use super::color::HexColor;
use super::ids::GoId;
use super::opacity::Opacity;

/// The styling applied to one GO ID's diagram region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// The GO term whose region is recolored.
    pub id: GoId,

    /// Fill color, always with a leading `#`.
    pub color: HexColor,

    /// Fill opacity in `[0, 1]`.
    pub opacity: Opacity,
}

impl AnnotationRecord {
    /// Creates a new record with the given properties.
    pub fn new(id: GoId, color: HexColor, opacity: Opacity) -> Self {
        Self { id, color, opacity }
    }
}
