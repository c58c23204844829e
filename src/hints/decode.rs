//! The record loop shared by every hint layout.

use tracing::debug;

use crate::core::reference_table::RefIdLookup;
use crate::core::types::RefId;
use crate::hints::detect::{has_sentinel_at, SENTINEL};
use crate::hints::scanner::FieldScanner;
use crate::hints::{HintError, HintField};

/// How the coordinate fields of one hint record are laid out.
///
/// Every record starts with `!<ref>!` and ends with the read 5' offset; the
/// fields in between are read by the layout.
pub trait HintLayout {
    /// Coordinate fields read from one record
    type Coordinates;

    /// Record produced for each hint
    type Hit;

    /// Read the coordinate fields, up to and including the `!` before the
    /// read 5' offset.
    ///
    /// # Errors
    ///
    /// Returns a `HintError` describing the first malformed field.
    fn read_coordinates(scanner: &mut FieldScanner<'_>) -> Result<Self::Coordinates, HintError>;

    fn build(ref_id: RefId, coordinates: Self::Coordinates, read_five_prime_offset: u64)
        -> Self::Hit;
}

/// Decode the hint block starting at `offset`, appending one hit per record.
///
/// `offset` must point at the `!h!` sentinel, as reported by
/// [`detect`](crate::hints::detect::detect). Decoding stops once the byte after
/// a record is not `!`. Hits decoded before an error stay in `hits`.
///
/// # Errors
///
/// Returns `HintError::MissingSentinel` if `offset` does not point at `!h!`,
/// `HintError::UnknownReference` if a reference name is not in `table`, or
/// the layout's error for a malformed record.
pub fn decode_hints<L, R>(
    name: &[u8],
    offset: usize,
    table: &R,
    hits: &mut Vec<L::Hit>,
) -> Result<(), HintError>
where
    L: HintLayout,
    R: RefIdLookup + ?Sized,
{
    if !has_sentinel_at(name, offset) {
        return Err(HintError::MissingSentinel { offset });
    }

    let mut scanner = FieldScanner::new(name, offset + SENTINEL.len());
    let mut decoded = 0usize;

    while scanner.at_delimiter() {
        scanner.expect_delimiter(HintField::ReferenceName)?;
        let ref_name = scanner.reference_name()?;
        let ref_id = resolve(table, ref_name)?;

        let coordinates = L::read_coordinates(&mut scanner)?;
        let five_prime = scanner.trailing_number(HintField::FivePrimeOffset)?;

        hits.push(L::build(ref_id, coordinates, five_prime));
        decoded += 1;
    }

    debug!(offset, records = decoded, "Decoded hint block");
    Ok(())
}

fn resolve<R>(table: &R, ref_name: &[u8]) -> Result<RefId, HintError>
where
    R: RefIdLookup + ?Sized,
{
    std::str::from_utf8(ref_name)
        .ok()
        .and_then(|name| table.ref_id(name))
        .ok_or_else(|| HintError::UnknownReference {
            name: String::from_utf8_lossy(ref_name).into_owned(),
        })
}
