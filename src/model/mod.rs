//! Core selection model.
//!
//! A selection is an [`AnnotationSet`]: an ordered list of
//! [`AnnotationRecord`]s, each pairing a [`GoId`] with a [`HexColor`] and an
//! [`Opacity`]. The value types validate on construction, so a record that
//! exists is always renderable.
//!
//! # Example
//!
//! ```
//! use gostyle::model::{AnnotationRecord, AnnotationSet, GoId, HexColor, Opacity};
//!
//! let mut set = AnnotationSet::new();
//! set.add(AnnotationRecord::new(
//!     GoId::new(5045)?,
//!     HexColor::parse("FF0000")?,
//!     Opacity::new(0.5)?,
//! ))?;
//!
//! assert_eq!(set.id_list(), "5045");
//! assert_eq!(set.records()[0].color.as_str(), "#FF0000");
//! # Ok::<(), gostyle::GoStyleError>(())
//! ```

mod color;
mod ids;
mod opacity;
mod record;
mod report;
mod set;

pub use color::HexColor;
pub use ids::{GoId, TaxonomyId};
pub use opacity::Opacity;
pub use record::AnnotationRecord;
pub use report::{ImportIssue, ImportIssueCode, ImportReport};
pub use set::AnnotationSet;
