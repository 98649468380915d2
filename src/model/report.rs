//! Bulk import report types.
//!
//! A paste never fails because of overwrites or repeats, but callers may
//! want to tell the user that existing entries moved or that a row lost to
//! a later one.

use serde::Serialize;
use std::fmt;

use super::ids::GoId;

/// The result of applying a bulk import to a set.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ImportReport {
    /// Number of data rows read from the input.
    pub rows: usize,

    /// Number of IDs that were not in the set before the import.
    pub added: usize,

    /// IDs that already existed and were replaced (and moved to the end).
    pub replaced: Vec<GoId>,

    /// Notable conditions seen while importing.
    pub issues: Vec<ImportIssue>,
}

impl ImportReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an issue to the report.
    pub fn add(&mut self, issue: ImportIssue) {
        self.issues.push(issue);
    }

    /// Returns true if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Imported {} row(s): {} added, {} replaced",
            self.rows,
            self.added,
            self.replaced.len()
        )?;

        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }

        Ok(())
    }
}

/// A single note produced while importing.
#[derive(Clone, Debug, Serialize)]
pub struct ImportIssue {
    /// A stable code for the issue type.
    pub code: ImportIssueCode,

    /// The GO ID the issue is about.
    pub id: GoId,

    /// 1-based line number in the pasted text.
    pub line: u64,

    /// A human-readable description of the issue.
    pub message: String,
}

impl ImportIssue {
    pub fn new(code: ImportIssueCode, id: GoId, line: u64, message: impl Into<String>) -> Self {
        Self {
            code,
            id,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ImportIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[WARN ] {:?} on line {}: {}",
            self.code, self.line, self.message
        )
    }
}

/// A stable code identifying the type of import issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ImportIssueCode {
    /// The same ID appears on more than one row of the input; the last row wins.
    RepeatedId,
    /// The row replaced a record that existed before the import.
    ReplacedExisting,
}
