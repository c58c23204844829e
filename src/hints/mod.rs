//! Detection and decoding of alignment hints embedded in read names.
//!
//! A hint block starts with the sentinel `!h!` and carries one or more
//! `!`-delimited records. Two record layouts exist:
//!
//! | Layout   | Record                                                   | Decodes to      |
//! |----------|----------------------------------------------------------|-----------------|
//! | Point    | `!<ref>!<offset>!<orientation>!<length>!<five-prime>`    | [`SeedHit`]     |
//! | Interval | `!<ref>![-]<left>!<right>!<length>!<five-prime>`         | [`IntervalHit`] |
//!
//! The final five-prime field of a record is ended by the first non-digit or
//! by the end of the name, not by a delimiter. A `!` there starts the next
//! record.
//!
//! ## Example
//!
//! ```
//! use read_hints::core::reference_table::ReferenceTable;
//! use read_hints::hints::{detect, decode_point_hints};
//! use read_hints::{RefId, Strand};
//!
//! let table = ReferenceTable::from_names(["chr1", "chr2"]).unwrap();
//! let name = b"read7!h!!chr2!100!+!50!10";
//!
//! let offset = detect(name).unwrap();
//! let mut hits = Vec::new();
//! decode_point_hints(name, offset, &table, &mut hits).unwrap();
//!
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].ref_id, RefId(1));
//! assert_eq!(hits[0].ref_offset, 100);
//! assert_eq!(hits[0].strand, Strand::Forward);
//! ```

use thiserror::Error;

use crate::core::hit::{IntervalHit, SeedHit};
use crate::core::reference_table::RefIdLookup;

pub mod decode;
pub mod detect;
pub mod interval;
pub mod point;
pub mod scanner;

pub use decode::{decode_hints, HintLayout};
pub use detect::detect;
pub use interval::{decode_interval_hints, IntervalLayout};
pub use point::{decode_point_hints, PointLayout};

/// Field of a hint record, used for error context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintField {
    ReferenceName,
    Offset,
    Orientation,
    Length,
    FivePrimeOffset,
    LeftOffset,
    RightOffset,
}

impl std::fmt::Display for HintField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::ReferenceName => "reference name",
            Self::Offset => "reference offset",
            Self::Orientation => "orientation",
            Self::Length => "seed length",
            Self::FivePrimeOffset => "read 5' offset",
            Self::LeftOffset => "left offset",
            Self::RightOffset => "right offset",
        };
        f.write_str(label)
    }
}

/// Errors raised while decoding a hint block.
///
/// All of them abort the decode of the current read name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    #[error("No hint sentinel '!h!' at offset {offset}")]
    MissingSentinel { offset: usize },

    #[error("Bad reference name: {name}")]
    UnknownReference { name: String },

    #[error("While parsing hint {field}, expected digit but got \"{found}\" at position {position}")]
    MalformedOffset {
        field: HintField,
        found: char,
        position: usize,
    },

    #[error("While parsing hint seed length, expected digit but got \"{found}\" at position {position}")]
    MalformedLength { found: char, position: usize },

    #[error("Hint right offset {right} is not greater than left offset {left}")]
    InvalidInterval { left: i64, right: i64 },

    #[error("Hint reference name longer than {limit} characters")]
    NameBufferOverflow { limit: usize },

    #[error("Hint ended inside the {field} field")]
    UnexpectedEnd { field: HintField },

    #[error("Expected '!' after hint {field} but got \"{found}\" at position {position}")]
    ExpectedDelimiter {
        field: HintField,
        found: char,
        position: usize,
    },

    #[error("Hint {field} is too large")]
    NumericOverflow { field: HintField },
}

/// Detect and decode the point hints of a read name.
///
/// Returns `Ok(None)` if the name carries no hint block. On error no hits are
/// returned, even for records decoded before the failure.
///
/// # Errors
///
/// Returns the first `HintError` hit while decoding.
pub fn parse_point_hints<R>(name: &[u8], table: &R) -> Result<Option<Vec<SeedHit>>, HintError>
where
    R: RefIdLookup + ?Sized,
{
    let Some(offset) = detect(name) else {
        return Ok(None);
    };
    let mut hits = Vec::new();
    decode_point_hints(name, offset, table, &mut hits)?;
    Ok(Some(hits))
}

/// Detect and decode the interval hints of a read name.
///
/// Returns `Ok(None)` if the name carries no hint block. On error no hits are
/// returned, even for records decoded before the failure.
///
/// # Errors
///
/// Returns the first `HintError` hit while decoding.
pub fn parse_interval_hints<R>(
    name: &[u8],
    table: &R,
) -> Result<Option<Vec<IntervalHit>>, HintError>
where
    R: RefIdLookup + ?Sized,
{
    let Some(offset) = detect(name) else {
        return Ok(None);
    };
    let mut hits = Vec::new();
    decode_interval_hints(name, offset, table, &mut hits)?;
    Ok(Some(hits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference_table::ReferenceTable;
    use crate::core::types::RefId;

    fn table() -> ReferenceTable {
        ReferenceTable::from_names(["chr1", "chr2"]).unwrap()
    }

    #[test]
    fn test_parse_point_hints_without_sentinel() {
        assert_eq!(parse_point_hints(b"plain_read/1", &table()).unwrap(), None);
    }

    #[test]
    fn test_parse_point_hints() {
        let hits = parse_point_hints(b"r!h!!chr1!5!-!20!0", &table())
            .unwrap()
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].ref_id, RefId(0));
    }

    #[test]
    fn test_parse_interval_hints_discards_partial_output() {
        let result = parse_interval_hints(b"r!h!!chr1!1!9!8!0!chr3!1!9!8!0", &table());
        assert_eq!(
            result,
            Err(HintError::UnknownReference {
                name: "chr3".to_string()
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = HintError::MalformedOffset {
            field: HintField::LeftOffset,
            found: 'q',
            position: 12,
        };
        assert_eq!(
            err.to_string(),
            "While parsing hint left offset, expected digit but got \"q\" at position 12"
        );
        let err = HintError::UnknownReference {
            name: "chrUn".to_string(),
        };
        assert_eq!(err.to_string(), "Bad reference name: chrUn");
    }
}
