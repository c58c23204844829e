use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use tracing::warn;

use crate::cli::OutputFormat;
use crate::core::hit::{IntervalHit, SeedHit};
use crate::core::reference_table::ReferenceTable;
use crate::core::types::RefId;
use crate::hints::{decode_hints, detect, HintLayout, IntervalLayout, PointLayout};
use crate::parsing::reads::{read_names, ReadNames, ReadsFormat};
use crate::parsing::{load_reference_table, ReferenceFormat};

#[derive(Args)]
pub struct DecodeArgs {
    /// Reads to decode (FASTQ, SAM, BAM, or one name per line; .gz accepted for text and FASTQ).
    /// Use '-' for names on stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format (auto-detected from the extension by default)
    #[arg(long)]
    pub input_format: Option<ReadsFormat>,

    /// Reference names (FAI, .dict, SAM/BAM/CRAM header, or one name per line)
    #[arg(short, long, required = true)]
    pub references: PathBuf,

    /// Format of the references file (auto-detected from the extension by default)
    #[arg(long)]
    pub references_format: Option<ReferenceFormat>,

    /// Decode interval hints instead of point hints
    #[arg(long)]
    pub intervals: bool,

    /// Stop at the first hint block that cannot be decoded instead of skipping the read
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Default)]
struct DecodeSummary {
    reads: usize,
    hinted: usize,
    failed: usize,
    hits: usize,
}

/// Execute decode subcommand
///
/// # Errors
///
/// Returns an error if the references or reads cannot be read, or, with
/// `--strict`, if any hint block fails to decode.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DecodeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let table = load_reference_table(&args.references, args.references_format).with_context(
        || {
            format!(
                "Failed to load references from {}",
                args.references.display()
            )
        },
    )?;

    if verbose {
        eprintln!(
            "Loaded {} references from {}",
            table.len(),
            args.references.display()
        );
    }

    let input_format = args
        .input_format
        .unwrap_or_else(|| ReadsFormat::detect(&args.input));
    let names = read_names(&args.input, input_format)?;

    let summary = if args.intervals {
        decode_reads::<IntervalLayout>(names, &table, args.strict, format)?
    } else {
        decode_reads::<PointLayout>(names, &table, args.strict, format)?
    };

    if verbose {
        eprintln!(
            "Scanned {} reads: {} with hints, {} failed to decode, {} hits",
            summary.reads, summary.hinted, summary.failed, summary.hits
        );
    }

    Ok(())
}

fn decode_reads<L>(
    names: ReadNames,
    table: &ReferenceTable,
    strict: bool,
    format: OutputFormat,
) -> anyhow::Result<DecodeSummary>
where
    L: HintLayout,
    L::Hit: HitRow,
{
    let mut summary = DecodeSummary::default();
    let mut json_rows = Vec::new();
    let mut hits: Vec<L::Hit> = Vec::new();

    if matches!(format, OutputFormat::Tsv) {
        println!("{}", <L::Hit as HitRow>::TSV_HEADER);
    }

    for name in names {
        let name = name?;
        summary.reads += 1;

        let Some(offset) = detect(&name) else {
            continue;
        };
        summary.hinted += 1;

        let read_name = String::from_utf8_lossy(&name);
        hits.clear();
        if let Err(e) = decode_hints::<L, _>(&name, offset, table, &mut hits) {
            if strict {
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to decode hints in read '{read_name}'")));
            }
            warn!(read = %read_name, error = %e, "Could not decode hint block, skipping read");
            summary.failed += 1;
            continue;
        }
        summary.hits += hits.len();

        match format {
            OutputFormat::Text => {
                println!("{read_name}");
                for hit in &hits {
                    println!("  {}", hit.describe(ref_name(table, hit.ref_id())));
                }
            }
            OutputFormat::Tsv => {
                for hit in &hits {
                    println!(
                        "{read_name}\t{}\t{}",
                        ref_name(table, hit.ref_id()),
                        hit.tsv_fields()
                    );
                }
            }
            OutputFormat::Json => {
                let mut rows = Vec::with_capacity(hits.len());
                for hit in &hits {
                    let mut row = serde_json::to_value(hit)?;
                    row["ref_name"] = serde_json::json!(ref_name(table, hit.ref_id()));
                    rows.push(row);
                }
                json_rows.push(serde_json::json!({
                    "read_name": read_name,
                    "hint_offset": offset,
                    "hits": rows,
                }));
            }
        }
    }

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&json_rows)?);
    }

    Ok(summary)
}

fn ref_name(table: &ReferenceTable, id: RefId) -> &str {
    table.name(id).unwrap_or("*")
}

/// Output shape of one decoded hit
trait HitRow: Serialize {
    const TSV_HEADER: &'static str;

    fn ref_id(&self) -> RefId;

    /// Human-readable one-liner
    fn describe(&self, ref_name: &str) -> String;

    /// TSV columns after the read and reference names
    fn tsv_fields(&self) -> String;
}

impl HitRow for SeedHit {
    const TSV_HEADER: &'static str =
        "read_name\tref_name\tref_id\tref_offset\tstrand\tlength\tread_five_prime_offset";

    fn ref_id(&self) -> RefId {
        self.ref_id
    }

    fn describe(&self, ref_name: &str) -> String {
        format!(
            "{ref_name}:{} ({}) length {}, read 5' offset {}",
            self.ref_offset, self.strand, self.length, self.read_five_prime_offset
        )
    }

    fn tsv_fields(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.ref_id, self.ref_offset, self.strand, self.length, self.read_five_prime_offset
        )
    }
}

impl HitRow for IntervalHit {
    const TSV_HEADER: &'static str =
        "read_name\tref_name\tref_id\tleft\tright\tspan\thit_length\tread_five_prime_offset";

    fn ref_id(&self) -> RefId {
        self.ref_id
    }

    fn describe(&self, ref_name: &str) -> String {
        format!(
            "{ref_name}:{}-{} ({}) span {}, hit length {}, read 5' offset {}",
            self.left,
            self.right(),
            self.strand,
            self.span,
            self.hit_length,
            self.read_five_prime_offset
        )
    }

    fn tsv_fields(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.ref_id,
            self.left,
            self.right(),
            self.span,
            self.hit_length,
            self.read_five_prime_offset
        )
    }
}
