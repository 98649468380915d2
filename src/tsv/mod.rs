//! Tab-separated exchange format reader and writer.
//!
//! This is the clipboard format used for bulk copy and paste of a selection.
//!
//! # Format Reference
//!
//! UTF-8 text, tab delimited, with a header row. Three columns are required:
//! - `ID`: GO ID as a positive integer (`5634`, `GO:0005634` and `5634.0` are accepted)
//! - `Color`: hex color, with or without the leading `#`
//! - `Opacity`: decimal in `[0, 1]`
//!
//! Columns may come in any order and extra columns are ignored, so a table
//! copied out of a spreadsheet with additional notes still imports.
//!
//! The writer always emits `ID\tColor\tOpacity` followed by one row per
//! record in set order.

use std::fs;
use std::path::Path;

use crate::error::GoStyleError;
use crate::model::{AnnotationRecord, AnnotationSet, GoId, HexColor, Opacity};

/// Column names, in the order the writer emits them.
pub const HEADER: [&str; 3] = ["ID", "Color", "Opacity"];

/// Largest float that still converts to an integer ID exactly.
const MAX_EXACT_FLOAT_ID: f64 = 9_007_199_254_740_992.0;

/// A parsed data row together with its 1-based line number.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportRow {
    pub line: u64,
    pub record: AnnotationRecord,
}

// ============================================================================
// Public API
// ============================================================================

/// Parses pasted text into rows without applying them to any set.
///
/// # Errors
/// See [`parse_rows_slice`].
pub fn parse_rows(text: &str) -> Result<Vec<ImportRow>, GoStyleError> {
    parse_rows_slice(text.as_bytes())
}

/// Parses raw bytes into rows.
///
/// Useful for fuzzing and processing raw bytes without requiring UTF-8 upfront.
///
/// # Errors
/// - [`GoStyleError::EmptyInput`] if the input is empty or whitespace only
/// - [`GoStyleError::Schema`] if `ID`, `Color` or `Opacity` is missing
/// - [`GoStyleError::Parse`] if the data is not valid tab-separated text
///   (ragged rows, invalid UTF-8) or a cell cannot be converted
pub fn parse_rows_slice(bytes: &[u8]) -> Result<Vec<ImportRow>, GoStyleError> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(GoStyleError::EmptyInput);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader.headers().map_err(read_error)?;
    let columns = Columns::locate(headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(read_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(ImportRow {
            line,
            record: columns.parse(&record, line)?,
        });
    }

    Ok(rows)
}

/// Reads a set from a tab-separated string.
pub fn from_tsv_str(text: &str) -> Result<AnnotationSet, GoStyleError> {
    from_tsv_slice(text.as_bytes())
}

/// Reads a set from tab-separated bytes.
pub fn from_tsv_slice(bytes: &[u8]) -> Result<AnnotationSet, GoStyleError> {
    let rows = parse_rows_slice(bytes)?;
    let mut set = AnnotationSet::new();
    set.bulk_import_rows(rows);
    Ok(set)
}

/// Reads a set from a tab-separated file.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use gostyle::tsv::read_tsv;
///
/// let set = read_tsv(Path::new("selection.tsv"))?;
/// println!("{}", set.id_list());
/// # Ok::<(), gostyle::GoStyleError>(())
/// ```
pub fn read_tsv(path: &Path) -> Result<AnnotationSet, GoStyleError> {
    let bytes = fs::read(path)?;
    from_tsv_slice(&bytes)
}

/// Writes a set to a tab-separated string.
pub fn to_tsv_string(set: &AnnotationSet) -> Result<String, GoStyleError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(HEADER)
        .map_err(|source| GoStyleError::Csv { source })?;
    for record in set {
        writer
            .write_record([
                record.id.to_string(),
                record.color.to_string(),
                record.opacity.to_string(),
            ])
            .map_err(|source| GoStyleError::Csv { source })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| GoStyleError::Io(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| GoStyleError::Parse {
        line: 0,
        message: format!("Invalid UTF-8 in output: {}", e),
    })
}

/// Writes a set to a tab-separated file.
pub fn write_tsv(path: &Path, set: &AnnotationSet) -> Result<(), GoStyleError> {
    let text = to_tsv_string(set)?;
    fs::write(path, text)?;
    Ok(())
}

/// Converts a csv read failure into a line-tagged parse error.
fn read_error(err: csv::Error) -> GoStyleError {
    let line = err.position().map(|p| p.line()).unwrap_or(1);
    let message = match err.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {} fields, found {}", expected_len, len),
        csv::ErrorKind::Utf8 { .. } => "invalid UTF-8".to_string(),
        _ => err.to_string(),
    };
    GoStyleError::Parse { line, message }
}

// ============================================================================
// Column handling
// ============================================================================

/// Field indices of the required columns within a header row.
struct Columns {
    id: usize,
    color: usize,
    opacity: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self, GoStyleError> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        match (find(HEADER[0]), find(HEADER[1]), find(HEADER[2])) {
            (Some(id), Some(color), Some(opacity)) => Ok(Self { id, color, opacity }),
            (id, color, opacity) => {
                let missing = [id, color, opacity]
                    .iter()
                    .zip(HEADER)
                    .filter(|(idx, _)| idx.is_none())
                    .map(|(_, name)| name)
                    .collect();
                Err(GoStyleError::Schema { missing })
            }
        }
    }

    fn parse(&self, record: &csv::StringRecord, line: u64) -> Result<AnnotationRecord, GoStyleError> {
        let cell = |idx: usize| record.get(idx).unwrap_or_default();
        let at_line = |err: GoStyleError| GoStyleError::Parse {
            line,
            message: err.to_string(),
        };

        let id = parse_id(cell(self.id)).map_err(at_line)?;
        let color = HexColor::parse(cell(self.color)).map_err(at_line)?;
        let opacity = cell(self.opacity).parse::<Opacity>().map_err(at_line)?;

        Ok(AnnotationRecord::new(id, color, opacity))
    }
}

/// Parses an ID cell, also accepting integral floats such as `5045.0`.
fn parse_id(cell: &str) -> Result<GoId, GoStyleError> {
    cell.parse::<GoId>().or_else(|err| match cell.parse::<f64>() {
        Ok(v) if v.fract() == 0.0 && v >= 1.0 && v <= MAX_EXACT_FLOAT_ID => GoId::new(v as u64),
        _ => Err(err),
    })
}

// ============================================================================
// Tests
// ============================================================================
