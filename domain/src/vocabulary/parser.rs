//! Parser for comma-separated vocabulary files.
//!
//! Expected header: `motOriginal,motAmeliore,raison[,categorie,niveau]`.
//! Fields may be wrapped in double quotes, in which case they can hold
//! commas and `""` stands for a literal quote. A field never spans lines.

use crate::error::{Error, PipelineErrorKind};
use log::*;

pub const DEFAULT_LEVEL: &str = "courant";

const ORIGINAL_HEADER: &str = "motoriginal";
const IMPROVED_HEADER: &str = "motameliore";
const REASON_HEADER: &str = "raison";
const CATEGORY_HEADER: &str = "categorie";
const LEVEL_HEADER: &str = "niveau";

/// One valid row of a vocabulary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub original: String,
    pub improved: String,
    pub reason: String,
    /// Value of the optional `categorie` column, when present and non-blank.
    pub category: Option<String>,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFile {
    pub entries: Vec<ParsedEntry>,
    /// Non-blank data rows dropped because `motOriginal` or `motAmeliore` was empty.
    pub skipped_rows: usize,
}

struct Columns {
    original: usize,
    improved: usize,
    reason: usize,
    category: Option<usize>,
    level: Option<usize>,
}

/// Parses a whole file. Fails with `MalformedVocabularyFile` only when a
/// required header is missing; invalid rows are skipped.
pub fn parse(content: &str) -> Result<ParsedFile, Error> {
    let mut lines = content.lines();
    let header = lines.next().unwrap_or_default();
    let columns = resolve_columns(header)?;

    let mut entries = Vec::new();
    let mut skipped_rows = 0;

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let values = split_fields(line);
        let field = |index: usize| values.get(index).cloned().unwrap_or_default();

        let original = field(columns.original);
        let improved = field(columns.improved);
        if original.is_empty() || improved.is_empty() {
            skipped_rows += 1;
            continue;
        }

        let category = columns
            .category
            .map(field)
            .filter(|category| !category.is_empty());
        let level = columns
            .level
            .map(field)
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());

        entries.push(ParsedEntry {
            original,
            improved,
            reason: field(columns.reason),
            category,
            level,
        });
    }

    if skipped_rows > 0 {
        debug!("Skipped {skipped_rows} vocabulary rows without an original or improved term");
    }

    Ok(ParsedFile {
        entries,
        skipped_rows,
    })
}

fn resolve_columns(header: &str) -> Result<Columns, Error> {
    let names: Vec<String> = split_fields(header)
        .into_iter()
        .map(|h| h.to_lowercase())
        .collect();
    let position = |name: &str| names.iter().position(|h| h == name);

    match (
        position(ORIGINAL_HEADER),
        position(IMPROVED_HEADER),
        position(REASON_HEADER),
    ) {
        (Some(original), Some(improved), Some(reason)) => Ok(Columns {
            original,
            improved,
            reason,
            category: position(CATEGORY_HEADER),
            level: position(LEVEL_HEADER),
        }),
        _ => {
            warn!("Vocabulary file header is missing required columns: {header}");
            Err(Error::pipeline(PipelineErrorKind::MalformedVocabularyFile))
        }
    }
}

/// Splits one line into trimmed fields. A double quote opens a quoted field
/// only at the start of a field; an unterminated quote runs to the end of
/// the line.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut field).trim().to_string()),
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_string());

    fields
}
