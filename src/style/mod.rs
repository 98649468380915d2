//! Stylesheet rendering for the SwissBioPics diagram.
//!
//! Each GO term maps to three class families in the SVG: `GO<id>`,
//! `mp_GO<id>` and `part_GO<id>`. Every family gets the same three rules,
//! so a record always renders to nine rule blocks.

use std::fmt::{self, Write};
use std::str::FromStr;

use crate::error::GoStyleError;
use crate::model::{AnnotationRecord, AnnotationSet, HexColor};

/// Class-name prefixes the diagram uses for a GO term.
pub const CLASS_FAMILIES: [&str; 3] = ["GO", "mp_GO", "part_GO"];

/// Rule blocks emitted per class family.
pub const RULES_PER_FAMILY: usize = 3;

/// Rule blocks emitted per record.
pub const RULES_PER_RECORD: usize = CLASS_FAMILIES.len() * RULES_PER_FAMILY;

/// Longest accepted CSS color keyword.
const MAX_COLOR_NAME_LEN: usize = 32;

/// Stroke color for `.coloured` outlines.
///
/// Either a hex color (normalized like [`HexColor`]) or a CSS color keyword
/// made of ASCII letters only, such as `black` or `darkslategray`. Nothing
/// else is accepted, so the value can be written into a rule verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct Stroke(String);

impl Stroke {
    pub fn parse(value: &str) -> Result<Self, GoStyleError> {
        let trimmed = value.trim();

        if trimmed.starts_with('#') || trimmed.chars().any(|c| c.is_ascii_digit()) {
            return HexColor::parse(trimmed)
                .map(|color| Self(color.into()))
                .map_err(|_| {
                    GoStyleError::invalid("Stroke", trimmed, "expected a hex color or a color name")
                });
        }

        if trimmed.is_empty()
            || trimmed.len() > MAX_COLOR_NAME_LEN
            || !trimmed.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(GoStyleError::invalid(
                "Stroke",
                trimmed,
                "expected a hex color or a color name",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self("black".to_string())
    }
}

impl FromStr for Stroke {
    type Err = GoStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stroke::parse(s)
    }
}

impl fmt::Debug for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stroke({})", self.0)
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Options for stylesheet rendering.
#[derive(Clone, Debug, Default)]
pub struct StyleOptions {
    /// Stroke color applied to `.coloured` outlines.
    pub stroke: Stroke,
}

/// Renders the rules for every record, in set order.
///
/// An empty set renders to the empty string.
pub fn render_styles(set: &AnnotationSet, opts: &StyleOptions) -> String {
    let mut css = String::new();
    for record in set {
        write_record_rules(&mut css, record, opts);
    }
    css
}

/// Renders the nine rules for a single record.
pub fn render_record(record: &AnnotationRecord, opts: &StyleOptions) -> String {
    let mut css = String::new();
    write_record_rules(&mut css, record, opts);
    css
}

fn write_record_rules(out: &mut String, record: &AnnotationRecord, opts: &StyleOptions) {
    let (id, color, opacity) = (record.id, &record.color, record.opacity);

    for family in CLASS_FAMILIES {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "svg .{family}{id} *:not(text) {{fill:{color}; opacity:{opacity};}}"
        );
        let _ = writeln!(
            out,
            "svg .{family}{id} *:not(path, .coloured) {{opacity:{opacity};}}"
        );
        let _ = writeln!(out, "svg .{family}{id} .coloured {{stroke:{};}}", opts.stroke);
    }
}

/// Counts the rule blocks in a stylesheet.
pub fn rule_count(css: &str) -> usize {
    css.matches('{').count()
}
