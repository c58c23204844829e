use std::path::Path;

use crate::core::reference_table::ReferenceTable;
use crate::core::types::RefId;
use crate::parsing::sam::{register, register_with_id, ParseError};

/// Build a reference table from a names file: one name per line, optionally
/// followed by a tab and an explicit id
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_names_file(path: &Path) -> Result<ReferenceTable, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_names_text(&content)
}

/// Build a reference table from names text.
///
/// Lines without an id column get the next free id. Blank lines and lines
/// starting with `#` are ignored.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for an unparseable id or an empty table,
/// `ParseError::DuplicateReference` if a name repeats, or
/// `ParseError::TooManyReferences` if the limit is exceeded.
pub fn parse_names_text(text: &str) -> Result<ReferenceTable, ParseError> {
    let mut table = ReferenceTable::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        match line.split_once('\t') {
            Some((name, id)) => {
                let id: i32 = id.trim().parse().map_err(|_| {
                    ParseError::InvalidFormat(format!("Invalid id on line {line_num}: '{id}'"))
                })?;
                register_with_id(&mut table, name.trim(), RefId(id))?;
            }
            None => register(&mut table, line.trim().to_string(), Vec::new())?,
        }
    }

    if table.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No references found in names file".to_string(),
        ));
    }

    Ok(table)
}
