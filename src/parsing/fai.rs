//! Reference tables from FASTA index (.fai) files using noodles.
//!
//! Ids follow the order of the index, which is the order of the FASTA.
//! Format: `name\tlength\toffset\tline_bases\tline_width`

use std::io::BufReader;
use std::path::Path;

use crate::core::reference_table::ReferenceTable;
use crate::parsing::sam::{register, ParseError};

/// Build a reference table from a FASTA index (.fai) file using noodles
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidFormat` if no references are found, or
/// `ParseError::TooManyReferences` if the limit is exceeded.
pub fn parse_fai_file(path: &Path) -> Result<ReferenceTable, ParseError> {
    use noodles::fasta;

    let reader = std::fs::File::open(path).map(BufReader::new)?;

    let index = fasta::fai::io::Reader::new(reader)
        .read_index()
        .map_err(|e| ParseError::Noodles(format!("Failed to parse FAI file: {e}")))?;

    index_to_table(&index)
}

fn index_to_table(index: &noodles::fasta::fai::Index) -> Result<ReferenceTable, ParseError> {
    let mut table = ReferenceTable::new();

    for record in index.as_ref() {
        let name = String::from_utf8_lossy(record.name()).to_string();
        register(&mut table, name, Vec::new())?;
    }

    if table.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No references found in FAI file".to_string(),
        ));
    }

    Ok(table)
}

/// Build a reference table from FAI text
///
/// Only the name column is used; lines with fewer than two columns are skipped.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the text has no references,
/// `ParseError::DuplicateReference` if a name repeats, or
/// `ParseError::TooManyReferences` if the limit is exceeded.
pub fn parse_fai_text(text: &str) -> Result<ReferenceTable, ParseError> {
    let mut table = ReferenceTable::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 2 {
            continue;
        }

        register(&mut table, fields[0].to_string(), Vec::new())?;
    }

    if table.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No references found in FAI file".to_string(),
        ));
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RefId;

    #[test]
    fn test_parse_fai_text() {
        let fai = "chr1\t248956422\t112\t70\t71
chr2\t242193529\t253404903\t70\t71
chrM\t16569\t3099922541\t70\t71
";

        let table = parse_fai_text(fai).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("chr1"), Some(RefId(0)));
        assert_eq!(table.get("chrM"), Some(RefId(2)));
        assert_eq!(table.name(RefId(1)), Some("chr2"));
    }

    #[test]
    fn test_parse_fai_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ref.fa.fai");
        std::fs::write(&path, "chrA\t100\t6\t60\t61\nchrB\t50\t114\t60\t61\n").unwrap();

        let table = parse_fai_file(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("chrB"), Some(RefId(1)));
    }

    #[test]
    fn test_parse_fai_empty() {
        let result = parse_fai_text("");
        assert!(result.is_err());
    }
}
