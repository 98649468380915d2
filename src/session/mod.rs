//! Session state and user commands.
//!
//! A [`Session`] owns the selection for one user. Each user intent is a
//! [`Command`] applied synchronously; callers re-read the session (for
//! example through [`Session::surface`]) after every command.

use tracing::debug;

use crate::error::GoStyleError;
use crate::model::{
    AnnotationRecord, AnnotationSet, GoId, HexColor, ImportReport, Opacity, TaxonomyId,
};
use crate::page::Surface;
use crate::style::StyleOptions;

/// One user intent against the selection.
#[derive(Clone, Debug)]
pub enum Command {
    /// Add a new GO ID; fails if it is already selected.
    Add(AnnotationRecord),
    /// Change color and opacity of a selected GO ID, keeping its position.
    Edit {
        id: GoId,
        color: HexColor,
        opacity: Opacity,
    },
    /// Remove a GO ID from the selection.
    Delete(GoId),
    /// Remove everything.
    Clear,
    /// Bulk import tab-separated text.
    Paste(String),
    /// Export the selection as tab-separated text.
    Copy,
    /// Switch the organism diagram.
    SetTaxonomy(TaxonomyId),
}

/// What a successfully applied command did.
#[derive(Clone, Debug)]
pub enum Outcome {
    Changed,
    Unchanged,
    Imported(ImportReport),
    Copied(String),
}

/// Selection plus organism for one user.
#[derive(Clone, Debug, Default)]
pub struct Session {
    selection: AnnotationSet,
    tax_id: TaxonomyId,
}

impl Session {
    /// Creates an empty session showing the human diagram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session around an existing selection.
    pub fn with_selection(selection: AnnotationSet, tax_id: TaxonomyId) -> Self {
        Self { selection, tax_id }
    }

    pub fn selection(&self) -> &AnnotationSet {
        &self.selection
    }

    pub fn tax_id(&self) -> TaxonomyId {
        self.tax_id
    }

    pub fn into_selection(self) -> AnnotationSet {
        self.selection
    }

    /// Applies a command. A failed command leaves the session unchanged.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, GoStyleError> {
        debug!(?command, "apply");

        match command {
            Command::Add(record) => {
                self.selection.add(record)?;
                Ok(Outcome::Changed)
            }
            Command::Edit { id, color, opacity } => {
                self.selection.edit(id, color, opacity)?;
                Ok(Outcome::Changed)
            }
            Command::Delete(id) => Ok(match self.selection.delete(id) {
                Some(_) => Outcome::Changed,
                None => Outcome::Unchanged,
            }),
            Command::Clear => {
                if self.selection.is_empty() {
                    return Ok(Outcome::Unchanged);
                }
                self.selection.clear();
                Ok(Outcome::Changed)
            }
            Command::Paste(text) => {
                let report = self.selection.bulk_import(&text)?;
                Ok(Outcome::Imported(report))
            }
            Command::Copy => Ok(Outcome::Copied(self.selection.export()?)),
            Command::SetTaxonomy(tax_id) => {
                if tax_id == self.tax_id {
                    return Ok(Outcome::Unchanged);
                }
                self.tax_id = tax_id;
                Ok(Outcome::Changed)
            }
        }
    }

    /// Reads back what the visualization should show.
    ///
    /// # Errors
    /// [`GoStyleError::NoSelection`] when nothing is selected.
    pub fn surface(&self, opts: &StyleOptions) -> Result<Surface, GoStyleError> {
        Surface::new(&self.selection, self.tax_id, opts)
    }
}
