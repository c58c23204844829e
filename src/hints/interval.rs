//! Interval hints: a left/right reference range per record.
//!
//! A `-` before the left offset negates it and the encoded length.

use crate::core::hit::IntervalHit;
use crate::core::reference_table::RefIdLookup;
use crate::core::types::{RefId, Strand};
use crate::hints::decode::{decode_hints, HintLayout};
use crate::hints::scanner::FieldScanner;
use crate::hints::{HintError, HintField};

/// `!<ref>![-]<left>!<right>!<length>!<five-prime>`
///
/// The layout has no orientation field; interval hits are always forward.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalLayout;

#[derive(Debug, Clone, Copy)]
pub struct IntervalCoordinates {
    pub left: i64,
    pub span: i64,
    pub hit_length: i64,
}

impl HintLayout for IntervalLayout {
    type Coordinates = IntervalCoordinates;
    type Hit = IntervalHit;

    fn read_coordinates(scanner: &mut FieldScanner<'_>) -> Result<IntervalCoordinates, HintError> {
        let negative = scanner.eat(b'-');
        let left = to_signed(
            scanner.delimited_number(HintField::LeftOffset)?,
            negative,
            HintField::LeftOffset,
        )?;

        let right = to_signed(
            scanner.delimited_number(HintField::RightOffset)?,
            false,
            HintField::RightOffset,
        )?;
        if right <= left {
            return Err(HintError::InvalidInterval { left, right });
        }

        // A negative left offset also flips the sign of the encoded length
        let hit_length = to_signed(
            scanner.delimited_number(HintField::Length)?,
            negative,
            HintField::Length,
        )?;

        let span = right
            .checked_sub(left)
            .and_then(|width| width.checked_add(1))
            .ok_or(HintError::NumericOverflow {
                field: HintField::RightOffset,
            })?;

        Ok(IntervalCoordinates {
            left,
            span,
            hit_length,
        })
    }

    fn build(
        ref_id: RefId,
        coordinates: IntervalCoordinates,
        read_five_prime_offset: u64,
    ) -> IntervalHit {
        IntervalHit {
            ref_id,
            left: coordinates.left,
            strand: Strand::Forward,
            span: coordinates.span,
            hit_length: coordinates.hit_length,
            read_five_prime_offset,
        }
    }
}

/// Apply the sign to a decoded magnitude, so `i64::MIN` is still reachable
fn to_signed(magnitude: u64, negative: bool, field: HintField) -> Result<i64, HintError> {
    let value = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    i64::try_from(value).map_err(|_| HintError::NumericOverflow { field })
}

/// Decode interval hints from the hint block at `offset` into `hits`.
///
/// # Errors
///
/// See [`decode_hints`]. Additionally returns `HintError::InvalidInterval` if a
/// right offset is not greater than its left offset.
pub fn decode_interval_hints<R>(
    name: &[u8],
    offset: usize,
    table: &R,
    hits: &mut Vec<IntervalHit>,
) -> Result<(), HintError>
where
    R: RefIdLookup + ?Sized,
{
    decode_hints::<IntervalLayout, R>(name, offset, table, hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference_table::ReferenceTable;

    fn table() -> ReferenceTable {
        ReferenceTable::from_names(["chr1", "chr2"]).unwrap()
    }

    fn decode(name: &[u8]) -> Result<Vec<IntervalHit>, HintError> {
        let mut hits = Vec::new();
        decode_interval_hints(name, 0, &table(), &mut hits)?;
        Ok(hits)
    }

    #[test]
    fn test_positive_interval() {
        let hits = decode(b"!h!!chr2!200!250!0!5").unwrap();
        assert_eq!(
            hits,
            vec![IntervalHit {
                ref_id: RefId(1),
                left: 200,
                strand: Strand::Forward,
                span: 51,
                hit_length: 0,
                read_five_prime_offset: 5,
            }]
        );
        assert_eq!(hits[0].right(), 250);
    }

    #[test]
    fn test_length_field_kept_apart_from_span() {
        let hits = decode(b"!h!!chr1!10!19!35!2").unwrap();
        assert_eq!(hits[0].span, 10);
        assert_eq!(hits[0].hit_length, 35);
    }

    #[test]
    fn test_negative_left_flips_length_sign() {
        let hits = decode(b"!h!!chr2!-10!5!0!3").unwrap();
        assert_eq!(hits[0].left, -10);
        assert_eq!(hits[0].span, 16);
        assert_eq!(hits[0].hit_length, 0);
        assert_eq!(hits[0].read_five_prime_offset, 3);

        let hits = decode(b"!h!!chr2!-10!5!40!3").unwrap();
        assert_eq!(hits[0].hit_length, -40);
    }

    #[test]
    fn test_multiple_records() {
        let hits = decode(b"!h!!chr1!0!99!100!0!chr2!-3!3!7!12").unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].ref_id, RefId(0));
        assert_eq!(hits[0].span, 100);
        assert_eq!(hits[1].ref_id, RefId(1));
        assert_eq!(hits[1].left, -3);
        assert_eq!(hits[1].hit_length, -7);
        assert_eq!(hits[1].read_five_prime_offset, 12);
    }

    #[test]
    fn test_always_forward() {
        let hits = decode(b"!h!!chr1!0!1!2!3").unwrap();
        assert_eq!(hits[0].strand, Strand::Forward);
    }

    #[test]
    fn test_reversed_interval() {
        assert_eq!(
            decode(b"!h!!chr2!300!250!0!0"),
            Err(HintError::InvalidInterval {
                left: 300,
                right: 250
            })
        );
    }

    #[test]
    fn test_empty_interval() {
        assert_eq!(
            decode(b"!h!!chr2!250!250!0!0"),
            Err(HintError::InvalidInterval {
                left: 250,
                right: 250
            })
        );
    }

    #[test]
    fn test_malformed_left_offset() {
        assert_eq!(
            decode(b"!h!!chr1!2a0!250!0!0"),
            Err(HintError::MalformedOffset {
                field: HintField::LeftOffset,
                found: 'a',
                position: 10
            })
        );
    }

    #[test]
    fn test_malformed_right_offset() {
        assert!(matches!(
            decode(b"!h!!chr1!200!-250!0!0"),
            Err(HintError::MalformedOffset {
                field: HintField::RightOffset,
                found: '-',
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_length() {
        assert!(matches!(
            decode(b"!h!!chr1!200!250!+!0"),
            Err(HintError::MalformedLength { found: '+', .. })
        ));
    }

    #[test]
    fn test_unknown_reference_before_fields() {
        // Reference lookup fails before the malformed offset is reached
        assert_eq!(
            decode(b"!h!!chrZ!zz!250!0!0"),
            Err(HintError::UnknownReference {
                name: "chrZ".to_string()
            })
        );
    }

    #[test]
    fn test_offset_too_large() {
        assert_eq!(
            decode(b"!h!!chr1!9223372036854775808!9223372036854775809!0!0"),
            Err(HintError::NumericOverflow {
                field: HintField::LeftOffset
            })
        );
    }

    #[test]
    fn test_span_overflow() {
        assert_eq!(
            decode(b"!h!!chr1!-9223372036854775807!9223372036854775807!0!0"),
            Err(HintError::NumericOverflow {
                field: HintField::RightOffset
            })
        );
    }

    #[test]
    fn test_negative_magnitudes_reach_i64_min() {
        let hits = decode(b"!h!!chr1!-5!5!9223372036854775808!0").unwrap();
        assert_eq!(hits[0].hit_length, i64::MIN);

        // The left offset itself fits; only the span cannot be represented
        assert_eq!(
            decode(b"!h!!chr1!-9223372036854775808!0!0!0"),
            Err(HintError::NumericOverflow {
                field: HintField::RightOffset
            })
        );

        assert_eq!(
            decode(b"!h!!chr1!-9223372036854775809!0!0!0"),
            Err(HintError::NumericOverflow {
                field: HintField::LeftOffset
            })
        );
    }
}
