use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod hints;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("read_hints=debug,info")
    } else {
        EnvFilter::new("read_hints=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Detect(args) => {
            cli::detect::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Decode(args) => {
            cli::decode::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
