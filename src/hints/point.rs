//! Point hints: one reference offset and strand per record.

use crate::core::hit::SeedHit;
use crate::core::reference_table::RefIdLookup;
use crate::core::types::{RefId, Strand};
use crate::hints::decode::{decode_hints, HintLayout};
use crate::hints::scanner::FieldScanner;
use crate::hints::{HintError, HintField};

/// `!<ref>!<offset>!<orientation>!<length>!<five-prime>`
#[derive(Debug, Clone, Copy, Default)]
pub struct PointLayout;

#[derive(Debug, Clone, Copy)]
pub struct PointCoordinates {
    pub ref_offset: u64,
    pub strand: Strand,
    pub length: u64,
}

impl HintLayout for PointLayout {
    type Coordinates = PointCoordinates;
    type Hit = SeedHit;

    fn read_coordinates(scanner: &mut FieldScanner<'_>) -> Result<PointCoordinates, HintError> {
        let ref_offset = scanner.delimited_number(HintField::Offset)?;

        let strand = Strand::from_orientation(scanner.next_byte(HintField::Orientation)?);
        scanner.expect_delimiter(HintField::Orientation)?;

        let length = scanner.delimited_number(HintField::Length)?;

        Ok(PointCoordinates {
            ref_offset,
            strand,
            length,
        })
    }

    fn build(ref_id: RefId, coordinates: PointCoordinates, read_five_prime_offset: u64) -> SeedHit {
        SeedHit::new(
            ref_id,
            coordinates.ref_offset,
            coordinates.strand,
            coordinates.length,
            read_five_prime_offset,
        )
    }
}

/// Decode point hints from the hint block at `offset` into `hits`.
///
/// # Errors
///
/// See [`decode_hints`].
pub fn decode_point_hints<R>(
    name: &[u8],
    offset: usize,
    table: &R,
    hits: &mut Vec<SeedHit>,
) -> Result<(), HintError>
where
    R: RefIdLookup + ?Sized,
{
    decode_hints::<PointLayout, R>(name, offset, table, hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference_table::ReferenceTable;

    fn table() -> ReferenceTable {
        ReferenceTable::from_names(["chr1", "chr2", "chrX"]).unwrap()
    }

    fn decode(name: &[u8]) -> Result<Vec<SeedHit>, HintError> {
        let mut hits = Vec::new();
        decode_point_hints(name, 0, &table(), &mut hits)?;
        Ok(hits)
    }

    #[test]
    fn test_single_record() {
        let hits = decode(b"!h!!chr1!100!+!50!10").unwrap();
        assert_eq!(hits, vec![SeedHit::new(RefId(0), 100, Strand::Forward, 50, 10)]);
    }

    #[test]
    fn test_multiple_records_in_order() {
        let hits = decode(b"!h!!chr2!7!-!22!0!chrX!0!+!31!4!chr1!999!+!1!18").unwrap();
        assert_eq!(
            hits,
            vec![
                SeedHit::new(RefId(1), 7, Strand::Reverse, 22, 0),
                SeedHit::new(RefId(2), 0, Strand::Forward, 31, 4),
                SeedHit::new(RefId(0), 999, Strand::Forward, 1, 18),
            ]
        );
    }

    #[test]
    fn test_any_non_plus_orientation_is_reverse() {
        let hits = decode(b"!h!!chr1!1!?!2!3").unwrap();
        assert_eq!(hits[0].strand, Strand::Reverse);
    }

    #[test]
    fn test_empty_after_sentinel() {
        assert!(decode(b"!h!").unwrap().is_empty());
        assert!(decode(b"!h!x!chr1!1!+!2!3").unwrap().is_empty());
    }

    #[test]
    fn test_stops_at_trailing_text() {
        let hits = decode(b"!h!!chr1!100!+!50!10/1").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].read_five_prime_offset, 10);
    }

    #[test]
    fn test_missing_five_prime_offset_reads_as_zero() {
        let hits = decode(b"!h!!chr1!100!+!50!").unwrap();
        assert_eq!(hits[0].read_five_prime_offset, 0);
    }

    #[test]
    fn test_unknown_reference() {
        let result = decode(b"!h!!chr9!100!+!50!10");
        assert_eq!(
            result,
            Err(HintError::UnknownReference {
                name: "chr9".to_string()
            })
        );
    }

    #[test]
    fn test_malformed_offset() {
        assert_eq!(
            decode(b"!h!!chr1!1x0!+!50!10"),
            Err(HintError::MalformedOffset {
                field: HintField::Offset,
                found: 'x',
                position: 10
            })
        );
    }

    #[test]
    fn test_signed_offset_is_malformed() {
        assert!(matches!(
            decode(b"!h!!chr1!-5!+!50!10"),
            Err(HintError::MalformedOffset { found: '-', .. })
        ));
    }

    #[test]
    fn test_malformed_length() {
        assert!(matches!(
            decode(b"!h!!chr1!100!+!5o!10"),
            Err(HintError::MalformedLength { found: 'o', .. })
        ));
    }

    #[test]
    fn test_wide_orientation_field() {
        assert!(matches!(
            decode(b"!h!!chr1!100!++!50!10"),
            Err(HintError::ExpectedDelimiter {
                field: HintField::Orientation,
                found: '+',
                ..
            })
        ));
    }

    #[test]
    fn test_truncated_record() {
        assert_eq!(
            decode(b"!h!!chr1!100!+"),
            Err(HintError::UnexpectedEnd {
                field: HintField::Orientation
            })
        );
        assert_eq!(
            decode(b"!h!!chr1!100"),
            Err(HintError::UnexpectedEnd {
                field: HintField::Offset
            })
        );
    }

    #[test]
    fn test_error_keeps_earlier_records() {
        let mut hits = Vec::new();
        let result = decode_point_hints(b"!h!!chr1!1!+!2!3!chr1!oops", 0, &table(), &mut hits);
        assert!(result.is_err());
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_appends_to_existing_hits() {
        let mut hits = vec![SeedHit::new(RefId(2), 5, Strand::Reverse, 5, 5)];
        decode_point_hints(b"!h!!chr1!1!+!2!3", 0, &table(), &mut hits).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].ref_id, RefId(2));
        assert_eq!(hits[1].ref_id, RefId(0));
    }
}
