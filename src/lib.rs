//! # read-hints
//!
//! A library for decoding alignment hints embedded in sequencing read names.
//!
//! Some pipelines carry a presumed alignment location for a read inside the
//! read name itself, so a downstream aligner can try those locations first.
//! The hints follow the sentinel `!h!` as a run of `!`-delimited records, each
//! naming a reference sequence, a position (or a range), and where in the read
//! the hinted seed starts.
//!
//! `read-hints` finds the hint block, decodes its records into typed hits, and
//! resolves reference names to numeric ids through a reference table.
//!
//! ## Example
//!
//! ```rust
//! use read_hints::{ReferenceTable, RefId, Strand};
//! use read_hints::hints::{parse_interval_hints, parse_point_hints};
//!
//! let table = ReferenceTable::from_names(["chr1", "chr2"]).unwrap();
//!
//! let hits = parse_point_hints(b"r1!h!!chr1!100!+!50!10", &table).unwrap().unwrap();
//! assert_eq!(hits[0].ref_id, RefId(0));
//! assert_eq!(hits[0].strand, Strand::Forward);
//!
//! let hits = parse_interval_hints(b"r2!h!!chr2!200!250!0!5", &table).unwrap().unwrap();
//! assert_eq!(hits[0].left, 200);
//! assert_eq!(hits[0].span, 51);
//!
//! // No hint block at all
//! assert!(parse_point_hints(b"r3", &table).unwrap().is_none());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Hit records, reference ids and the reference table
//! - [`hints`]: Hint block detection and decoding
//! - [`parsing`]: Reference tables from FAI/dict/SAM files, read names from FASTQ/SAM/BAM
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod hints;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::hit::{IntervalHit, SeedHit};
pub use crate::core::reference_table::{RefIdLookup, ReferenceTable};
pub use crate::core::types::*;
pub use crate::hints::HintError;
