use serde::{Deserialize, Serialize};

use crate::core::types::{RefId, Strand};

/// A point hint: a seed of `length` bases placed at one reference offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedHit {
    /// Resolved reference id
    pub ref_id: RefId,

    /// 0-based offset into the reference
    pub ref_offset: u64,

    /// Strand the seed aligns to
    pub strand: Strand,

    /// Length of the seed in bases
    pub length: u64,

    /// Offset of the seed from the 5' end of the read
    pub read_five_prime_offset: u64,
}

impl SeedHit {
    #[must_use]
    pub fn new(
        ref_id: RefId,
        ref_offset: u64,
        strand: Strand,
        length: u64,
        read_five_prime_offset: u64,
    ) -> Self {
        Self {
            ref_id,
            ref_offset,
            strand,
            length,
            read_five_prime_offset,
        }
    }
}

/// An interval hint: a reference range rather than a single offset
///
/// `span` is the number of reference positions covered by the interval,
/// `right - left + 1`. `hit_length` is the length field as encoded, negated
/// when the left offset was encoded negative. The two usually differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalHit {
    /// Resolved reference id
    pub ref_id: RefId,

    /// Left reference offset; may be negative
    pub left: i64,

    /// Always forward for interval hints
    pub strand: Strand,

    /// Number of reference positions covered, `right - left + 1`
    pub span: i64,

    /// Encoded hit length, sign-flipped when `left` was encoded negative
    pub hit_length: i64,

    /// Offset of the hit from the 5' end of the read
    pub read_five_prime_offset: u64,
}

impl IntervalHit {
    /// Right reference offset (inclusive) of the interval
    #[must_use]
    pub fn right(&self) -> i64 {
        self.left + (self.span - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_right_offset() {
        let hit = IntervalHit {
            ref_id: RefId(0),
            left: -10,
            strand: Strand::Forward,
            span: 16,
            hit_length: 0,
            read_five_prime_offset: 3,
        };
        assert_eq!(hit.right(), 5);
    }

    #[test]
    fn test_seed_hit_json_shape() {
        let hit = SeedHit::new(RefId(2), 100, Strand::Reverse, 50, 10);
        let json = serde_json::to_value(hit).unwrap();
        assert_eq!(json["ref_id"], 2);
        assert_eq!(json["strand"], "-");
        assert_eq!(json["read_five_prime_offset"], 10);
    }
}
