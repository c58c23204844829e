//! Command-line interface for read-hints.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **detect**: Report which read names carry a hint block, and where
//! - **decode**: Decode the hint blocks of read names against a reference table
//!
//! ## Usage
//!
//! ```text
//! # Which reads in a FASTQ carry hints?
//! read-hints detect reads.fq.gz
//!
//! # Decode point hints, resolving references from a FASTA index
//! read-hints decode reads.fq --references hg38.fa.fai
//!
//! # Decode interval hints from read names on stdin, as JSON
//! cat names.txt | read-hints decode - --references hg38.dict --intervals --format json
//! ```

use clap::{Parser, Subcommand};

pub mod decode;
pub mod detect;

#[derive(Parser)]
#[command(name = "read-hints")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Detect and decode alignment hints embedded in read names")]
#[command(
    long_about = "read-hints finds hint blocks ('!h!...') embedded in sequencing read names and decodes them.\n\nEach hint names a reference sequence and a presumed alignment location for a seed of the read. Reference names are resolved to numeric ids using a FASTA index, sequence dictionary, SAM/BAM header, or plain list of names."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report read names that carry a hint block
    Detect(detect::DetectArgs),

    /// Decode the hint blocks of read names
    Decode(decode::DecodeArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
