//! Command-line interface for probemap.
//!
//! Four modes, each run as a separate invocation:
//!
//! - **BUILD**: Build a bowtie index from a cDNA FASTA file
//! - **TABTOFASTA**: Convert a table of probe names and sequences to FASTA
//! - **ALIGN**: Align probe sequences against the bowtie index
//! - **EXTRACT**: Extract probe to locus and locus to probe mappings
//!
//! ## Usage
//!
//! ```text
//! probemap BUILD myCDNA.fasta myBowtieIndex
//! probemap TABTOFASTA probes.tsv 1 2 3 probes.fa
//! probemap ALIGN myBowtieIndex probes.fa unaligned.fa aligned.txt
//! probemap EXTRACT aligned.txt probe_to_locus.tsv locus_to_probe.tsv
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::tools::bowtie::{BOWTIE, BOWTIE_BUILD};
use crate::tools::ToolSummary;

pub mod align;
pub mod build;
pub mod extract;
pub mod tab_to_fasta;

#[derive(Parser)]
#[command(name = "probemap")]
#[command(version)]
#[command(about = "Map microarray probes to loci by aligning them against a cDNA set with bowtie")]
#[command(
    long_about = "probemap prepares microarray probe annotations.\n\nRun the modes in order: BUILD a bowtie index from the cDNA sequences, convert the probe table to FASTA with TABTOFASTA, ALIGN the probes against the index, then EXTRACT the probe name to locus ID mappings and vice versa.\n\nLocus IDs are the transcript model IDs truncated at the first '.'."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Format of the run summary written to stdout
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub tools: ToolPaths,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a bowtie index from a cDNA FASTA file
    #[command(name = "BUILD", visible_alias = "build")]
    Build(build::BuildArgs),

    /// Reformat a table of probe names and sequences into a FASTA file
    #[command(name = "TABTOFASTA", visible_alias = "tabtofasta")]
    TabToFasta(tab_to_fasta::TabToFastaArgs),

    /// Align the probes to the cDNA index
    #[command(name = "ALIGN", visible_alias = "align")]
    Align(align::AlignArgs),

    /// Extract probe name to locus ID mappings and vice versa
    #[command(name = "EXTRACT", visible_alias = "extract")]
    Extract(extract::ExtractArgs),
}

/// Locations of the external bowtie executables
#[derive(clap::Args, Debug, Clone)]
pub struct ToolPaths {
    /// bowtie-build executable used by BUILD
    #[arg(long = "bowtie-build", global = true, default_value = BOWTIE_BUILD)]
    pub bowtie_build: PathBuf,

    /// bowtie executable used by ALIGN
    #[arg(long = "bowtie", global = true, default_value = BOWTIE)]
    pub bowtie: PathBuf,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// A per-run summary printed to stdout once a mode finishes
pub trait RunSummary: Serialize {
    /// Field names and rendered values, in display order
    fn rows(&self) -> Vec<(&'static str, String)>;
}

impl RunSummary for ToolSummary {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("program", self.program.clone()),
            (
                "exit_code",
                self.exit_code
                    .map_or_else(|| "signal".to_string(), |c| c.to_string()),
            ),
            ("stdout", self.stdout.clone()),
        ]
    }
}

/// Print a run summary in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_summary<S: RunSummary>(summary: &S, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for (name, value) in summary.rows() {
                if !value.is_empty() {
                    println!("{name}: {value}");
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        OutputFormat::Tsv => {
            let rows = summary.rows();
            let header: Vec<&str> = rows.iter().map(|(name, _)| *name).collect();
            // Embedded newlines and tabs would break the row
            let values: Vec<String> = rows
                .iter()
                .map(|(_, value)| value.replace(['\t', '\n'], " "))
                .collect();
            println!("{}", header.join("\t"));
            println!("{}", values.join("\t"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_modes_and_aliases() {
        let cli = Cli::try_parse_from(["probemap", "BUILD", "cdna.fa", "idx"]).unwrap();
        assert!(matches!(cli.command, Commands::Build(_)));

        let cli = Cli::try_parse_from(["probemap", "extract", "a.txt", "p.tsv", "l.tsv"]).unwrap();
        assert!(matches!(cli.command, Commands::Extract(_)));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["probemap", "FROBNICATE", "x"]).is_err());
        assert!(Cli::try_parse_from(["probemap"]).is_err());
    }

    #[test]
    fn test_tool_paths_default_and_override() {
        let cli = Cli::try_parse_from(["probemap", "BUILD", "cdna.fa", "idx"]).unwrap();
        assert_eq!(cli.tools.bowtie_build, PathBuf::from("bowtie-build"));
        assert_eq!(cli.tools.bowtie, PathBuf::from("bowtie"));

        let cli = Cli::try_parse_from([
            "probemap",
            "BUILD",
            "--bowtie-build",
            "/opt/bin/bowtie-build",
            "cdna.fa",
            "idx",
        ])
        .unwrap();
        assert_eq!(cli.tools.bowtie_build, PathBuf::from("/opt/bin/bowtie-build"));
    }
}
