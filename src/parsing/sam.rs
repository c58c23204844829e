use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::reference_table::ReferenceTable;
use crate::core::types::RefId;
use crate::utils::validation::validate_reference_name;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many references: {0} exceeds maximum allowed (10000000)")]
    TooManyReferences(usize),

    #[error("Duplicate reference name: {0}")]
    DuplicateReference(String),
}

/// Build a reference table from the header of a SAM file, ids in `@SQ` order
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidFormat` if no references are found, or
/// `ParseError::TooManyReferences` if the limit is exceeded.
pub fn parse_sam_header(path: &Path) -> Result<ReferenceTable, ParseError> {
    header_to_table(&read_sam_header(path)?)
}

/// Build a reference table from the header of a BAM file
///
/// # Errors
///
/// See [`parse_sam_header`].
pub fn parse_bam_header(path: &Path) -> Result<ReferenceTable, ParseError> {
    header_to_table(&read_bam_header(path)?)
}

/// Build a reference table from the header of a CRAM file
///
/// # Errors
///
/// See [`parse_sam_header`].
pub fn parse_cram_header(path: &Path) -> Result<ReferenceTable, ParseError> {
    header_to_table(&read_cram_header(path)?)
}

fn read_sam_header(path: &Path) -> Result<noodles::sam::Header, ParseError> {
    use noodles::sam;

    let mut reader = std::fs::File::open(path)
        .map(BufReader::new)
        .map(sam::io::Reader::new)?;

    reader
        .read_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))
}

fn read_bam_header(path: &Path) -> Result<noodles::sam::Header, ParseError> {
    use noodles::bam;

    let mut reader = std::fs::File::open(path).map(bam::io::Reader::new)?;

    reader
        .read_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))
}

fn read_cram_header(path: &Path) -> Result<noodles::sam::Header, ParseError> {
    use noodles::cram;

    let mut reader = std::fs::File::open(path).map(cram::io::Reader::new)?;

    reader
        .read_file_definition()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;

    reader
        .read_file_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))
}

/// Convert a noodles header to a `ReferenceTable`, ids in `@SQ` order
fn header_to_table(header: &noodles::sam::Header) -> Result<ReferenceTable, ParseError> {
    use noodles::sam::header::record::value::map::tag::Other;

    let mut table = ReferenceTable::new();

    for (name, map) in header.reference_sequences() {
        // AN (Alternate Names) tag - comma-separated list of aliases
        let mut aliases = Vec::new();
        if let Ok(an_tag) = Other::try_from(*b"AN") {
            if let Some(aliases_value) = map.other_fields().get(&an_tag) {
                aliases = split_aliases(&aliases_value.to_string());
            }
        }

        register(&mut table, name.to_string(), aliases)?;
    }

    if table.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No @SQ lines found in header".to_string(),
        ));
    }

    Ok(table)
}

/// Build a reference table from raw header text (`@SQ` lines)
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if no `@SQ` line carries an `SN` tag,
/// `ParseError::DuplicateReference` if a name repeats, or
/// `ParseError::TooManyReferences` if the limit is exceeded.
pub fn parse_header_text(text: &str) -> Result<ReferenceTable, ParseError> {
    let mut table = ReferenceTable::new();

    for line in text.lines() {
        if !line.starts_with("@SQ") {
            continue;
        }

        let mut name: Option<String> = None;
        let mut aliases: Vec<String> = Vec::new();

        for field in line.split('\t').skip(1) {
            if let Some((tag, value)) = field.split_once(':') {
                match tag {
                    "SN" => name = Some(value.to_string()),
                    "AN" => aliases = split_aliases(value),
                    _ => {}
                }
            }
        }

        match name {
            Some(name) => register(&mut table, name, aliases)?,
            None => warn!(line = %line, "@SQ line without SN tag, ignoring"),
        }
    }

    if table.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No @SQ lines found in header".to_string(),
        ));
    }

    Ok(table)
}

fn split_aliases(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Add a reference and its aliases, warning about names no hint can carry
pub(crate) fn register(
    table: &mut ReferenceTable,
    name: String,
    aliases: Vec<String>,
) -> Result<(), ParseError> {
    warn_if_unhintable(&name);

    let id = table.push(name)?;
    for alias in aliases {
        table.add_alias(alias, id);
    }
    Ok(())
}

/// Add a reference under an explicit id, warning if hints cannot name it
pub(crate) fn register_with_id(
    table: &mut ReferenceTable,
    name: &str,
    id: RefId,
) -> Result<(), ParseError> {
    warn_if_unhintable(name);
    table.insert(name, id)
}

fn warn_if_unhintable(name: &str) {
    if let Err(e) = validate_reference_name(name) {
        warn!(reference = %name, "{e}; hints cannot refer to it");
    }
}
