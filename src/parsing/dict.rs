use std::path::Path;

use crate::core::reference_table::ReferenceTable;
use crate::parsing::sam::ParseError;

/// Build a reference table from a Picard sequence dictionary (.dict) file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_dict_file(path: &Path) -> Result<ReferenceTable, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_dict_text(&content)
}

/// Build a reference table from dictionary text
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the text has no `@SQ` lines,
/// `ParseError::DuplicateReference` if a name repeats, or
/// `ParseError::TooManyReferences` if the limit is exceeded.
pub fn parse_dict_text(text: &str) -> Result<ReferenceTable, ParseError> {
    // .dict files are essentially SAM headers with only @HD and @SQ lines
    crate::parsing::sam::parse_header_text(text)
}
