use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::hints::detect;
use crate::parsing::reads::{read_names, ReadsFormat};

#[derive(Args)]
pub struct DetectArgs {
    /// Reads to scan (FASTQ, SAM, BAM, or one name per line; .gz accepted for text and FASTQ).
    /// Use '-' for names on stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format (auto-detected from the extension by default)
    #[arg(long)]
    pub input_format: Option<ReadsFormat>,

    /// Also list reads without a hint block
    #[arg(long)]
    pub all: bool,
}

/// Execute detect subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DetectArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let input_format = args
        .input_format
        .unwrap_or_else(|| ReadsFormat::detect(&args.input));
    let names = read_names(&args.input, input_format)?;

    let mut reads = 0usize;
    let mut hinted = 0usize;
    let mut json_rows = Vec::new();

    if matches!(format, OutputFormat::Tsv) {
        println!("read_name\thint_offset");
    }

    for name in names {
        let name = name?;
        reads += 1;

        let offset = detect(&name);
        if offset.is_some() {
            hinted += 1;
        } else if !args.all {
            continue;
        }

        let read_name = String::from_utf8_lossy(&name);
        match format {
            OutputFormat::Text => match offset {
                Some(offset) => println!("{read_name}: hint block at offset {offset}"),
                None => println!("{read_name}: no hints"),
            },
            OutputFormat::Tsv => {
                let offset = offset.map_or_else(|| "NA".to_string(), |o| o.to_string());
                println!("{read_name}\t{offset}");
            }
            OutputFormat::Json => json_rows.push(serde_json::json!({
                "read_name": read_name,
                "hint_offset": offset,
            })),
        }
    }

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&json_rows)?);
    }

    if verbose {
        eprintln!("Scanned {reads} reads, {hinted} carry a hint block");
    }

    Ok(())
}
