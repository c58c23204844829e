//! Core data types for hint decoding.
//!
//! - [`RefId`], [`Strand`]: reference identifiers and orientation
//! - [`SeedHit`]: a point hint, one reference offset plus a seed length
//! - [`IntervalHit`]: an interval hint, a reference range
//! - [`ReferenceTable`], [`RefIdLookup`]: resolving reference names to ids
//!
//! [`RefId`]: types::RefId
//! [`Strand`]: types::Strand
//! [`SeedHit`]: hit::SeedHit
//! [`IntervalHit`]: hit::IntervalHit
//! [`ReferenceTable`]: reference_table::ReferenceTable
//! [`RefIdLookup`]: reference_table::RefIdLookup

pub mod hit;
pub mod reference_table;
pub mod types;
