//! The ordered, id-unique annotation set.

use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

use super::color::HexColor;
use super::ids::GoId;
use super::opacity::Opacity;
use super::record::AnnotationRecord;
use super::report::{ImportIssue, ImportIssueCode, ImportReport};
use crate::error::GoStyleError;
use crate::style::{render_styles, StyleOptions};
use crate::tsv::{self, ImportRow};

/// An ordered collection of annotation records, unique by GO ID.
///
/// Order is insertion order. [`edit`](Self::edit) keeps a record's position,
/// while [`bulk_import`](Self::bulk_import) moves any overwritten record to
/// the end.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnnotationSet {
    records: Vec<AnnotationRecord>,
}

impl AnnotationSet {
    /// Creates a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AnnotationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotationRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: GoId) -> Option<&AnnotationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: GoId) -> bool {
        self.position(id).is_some()
    }

    /// Returns the GO IDs in set order.
    pub fn ids(&self) -> Vec<GoId> {
        self.records.iter().map(|r| r.id).collect()
    }

    /// Returns the GO IDs joined with commas, as the component's `gos` attribute expects.
    pub fn id_list(&self) -> String {
        self.records
            .iter()
            .map(|r| r.id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn position(&self, id: GoId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Appends a new record.
    ///
    /// # Errors
    /// Returns [`GoStyleError::DuplicateId`] if the ID is already present; the
    /// set is left unchanged.
    pub fn add(&mut self, record: AnnotationRecord) -> Result<(), GoStyleError> {
        if self.contains(record.id) {
            return Err(GoStyleError::DuplicateId(record.id));
        }
        debug!(id = %record.id, color = %record.color, opacity = %record.opacity, "add");
        self.records.push(record);
        Ok(())
    }

    /// Replaces the color and opacity of an existing record in place.
    ///
    /// # Errors
    /// Returns [`GoStyleError::NotFound`] if no record has this ID.
    pub fn edit(
        &mut self,
        id: GoId,
        color: HexColor,
        opacity: Opacity,
    ) -> Result<(), GoStyleError> {
        let idx = self.position(id).ok_or(GoStyleError::NotFound(id))?;
        debug!(%id, %color, %opacity, position = idx, "edit");
        self.records[idx] = AnnotationRecord::new(id, color, opacity);
        Ok(())
    }

    /// Removes the record with this ID and returns it.
    ///
    /// Deleting an absent ID is a no-op that returns `None`.
    pub fn delete(&mut self, id: GoId) -> Option<AnnotationRecord> {
        let idx = self.position(id)?;
        debug!(%id, position = idx, "delete");
        Some(self.records.remove(idx))
    }

    pub fn clear(&mut self) {
        debug!(removed = self.records.len(), "clear");
        self.records.clear();
    }

    /// Parses a tab-separated block and merges it into the set.
    ///
    /// The whole input is parsed before anything is applied, so any error
    /// leaves the set untouched. Existing IDs are overwritten and moved to
    /// the end; see [`bulk_import_rows`](Self::bulk_import_rows).
    ///
    /// # Errors
    /// [`GoStyleError::EmptyInput`] for blank input,
    /// [`GoStyleError::Schema`] if a required column is missing, and
    /// [`GoStyleError::Parse`] for ragged rows, invalid UTF-8 or bad cells.
    pub fn bulk_import(&mut self, text: &str) -> Result<ImportReport, GoStyleError> {
        let rows = tsv::parse_rows(text)?;
        Ok(self.bulk_import_rows(rows))
    }

    /// Merges already-parsed rows into the set, in order.
    ///
    /// For every row, a record with the same ID is removed first and the new
    /// record is appended, so updated entries end up last.
    pub fn bulk_import_rows(&mut self, rows: Vec<ImportRow>) -> ImportReport {
        let mut report = ImportReport::new();
        report.rows = rows.len();

        let preexisting: HashSet<GoId> = self.records.iter().map(|r| r.id).collect();
        let mut seen: HashSet<GoId> = HashSet::new();

        for ImportRow { line, record } in rows {
            let id = record.id;

            if !seen.insert(id) {
                warn!(%id, line, "GO ID repeated in pasted data, later row wins");
                report.add(ImportIssue::new(
                    ImportIssueCode::RepeatedId,
                    id,
                    line,
                    format!("GO ID {} appears more than once; this row overrides the earlier one", id),
                ));
            } else if preexisting.contains(&id) {
                report.replaced.push(id);
                report.add(ImportIssue::new(
                    ImportIssueCode::ReplacedExisting,
                    id,
                    line,
                    format!("GO ID {} already existed and was replaced", id),
                ));
            } else {
                report.added += 1;
            }

            if let Some(idx) = self.position(id) {
                self.records.remove(idx);
            }
            self.records.push(record);
        }

        info!(
            rows = report.rows,
            added = report.added,
            replaced = report.replaced.len(),
            "bulk import applied"
        );
        report
    }

    /// Renders the set as tab-separated text that [`bulk_import`](Self::bulk_import) reads back.
    pub fn export(&self) -> Result<String, GoStyleError> {
        tsv::to_tsv_string(self)
    }

    /// Renders the per-record stylesheet for the diagram.
    pub fn render_styles(&self, opts: &StyleOptions) -> String {
        render_styles(self, opts)
    }
}

impl<'a> IntoIterator for &'a AnnotationSet {
    type Item = &'a AnnotationRecord;
    type IntoIter = std::slice::Iter<'a, AnnotationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
