use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod parsing;
mod tools;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Diagnostics go to stderr, summaries to stdout
    let filter = if cli.verbose {
        EnvFilter::new("probemap=debug,info")
    } else {
        EnvFilter::new("probemap=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Build(args) => {
            cli::build::run(args, &cli.tools, cli.format)?;
        }
        cli::Commands::TabToFasta(args) => {
            cli::tab_to_fasta::run(args, cli.format)?;
        }
        cli::Commands::Align(args) => {
            cli::align::run(args, &cli.tools, cli.format)?;
        }
        cli::Commands::Extract(args) => {
            cli::extract::run(args, cli.format)?;
        }
    }

    Ok(())
}
