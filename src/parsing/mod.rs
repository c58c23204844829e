//! Parsers for reference dictionaries and read-name sources.
//!
//! Reference tables can be built from:
//!
//! - **FASTA index (.fai) files**: names in index order
//! - **Picard .dict files**: `@SQ` lines, including `AN` aliases
//! - **SAM/BAM/CRAM headers**: `@SQ` lines, including `AN` aliases
//! - **Names files**: one name per line, with an optional explicit id column
//!
//! Read names are streamed from FASTQ, SAM, BAM or plain text files by
//! [`reads::read_names`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use read_hints::parsing::{load_reference_table, ReferenceFormat};
//! use std::path::Path;
//!
//! // Detect the format from the extension
//! let table = load_reference_table(Path::new("hg38.fa.fai"), None).unwrap();
//!
//! // Or force it
//! let table = load_reference_table(Path::new("refs.txt"), Some(ReferenceFormat::Names)).unwrap();
//! ```

use std::path::Path;

use crate::core::reference_table::ReferenceTable;
use crate::parsing::sam::ParseError;

pub mod dict;
pub mod fai;
pub mod names;
pub mod reads;
pub mod sam;

/// File types a reference table can be loaded from
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ReferenceFormat {
    Fai,
    Dict,
    Sam,
    Bam,
    Cram,
    Names,
}

impl ReferenceFormat {
    /// Guess the format from the file extension; unknown extensions are names files
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("fai") => Self::Fai,
            Some("dict") => Self::Dict,
            Some("sam") => Self::Sam,
            Some("bam") => Self::Bam,
            Some("cram") => Self::Cram,
            _ => Self::Names,
        }
    }
}

/// Load a reference table, detecting the format from the extension unless given
///
/// # Errors
///
/// Returns the `ParseError` of the underlying parser.
pub fn load_reference_table(
    path: &Path,
    format: Option<ReferenceFormat>,
) -> Result<ReferenceTable, ParseError> {
    match format.unwrap_or_else(|| ReferenceFormat::detect(path)) {
        ReferenceFormat::Fai => fai::parse_fai_file(path),
        ReferenceFormat::Dict => dict::parse_dict_file(path),
        ReferenceFormat::Sam => sam::parse_sam_header(path),
        ReferenceFormat::Bam => sam::parse_bam_header(path),
        ReferenceFormat::Cram => sam::parse_cram_header(path),
        ReferenceFormat::Names => names::parse_names_file(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_reference_format() {
        assert_eq!(ReferenceFormat::detect(Path::new("hg38.fa.fai")), ReferenceFormat::Fai);
        assert_eq!(ReferenceFormat::detect(Path::new("hg38.dict")), ReferenceFormat::Dict);
        assert_eq!(ReferenceFormat::detect(Path::new("x.BAM")), ReferenceFormat::Bam);
        assert_eq!(ReferenceFormat::detect(Path::new("refs.txt")), ReferenceFormat::Names);
        assert_eq!(ReferenceFormat::detect(Path::new("refs")), ReferenceFormat::Names);
    }
}
