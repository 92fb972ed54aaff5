//! CLI command definitions and handlers.
//!
//! Each subcommand is implemented as a function that takes the parsed arguments
//! and returns an `anyhow::Result<()>`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::batch::{BatchConfig, BatchService};
use crate::{input, output};

/// Marcbrainz CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Look up a batch of barcodes and write MARC + CSV output files
    Lookup {
        /// Path to the line-delimited barcode file
        barcodes: PathBuf,
        /// User-Agent sent to the catalog services, e.g. "myapp/1.0 (me@example.org)"
        #[arg(short, long, env = "MARCBRAINZ_USER_AGENT")]
        user_agent: String,
        /// Discogs personal access token (or set DISCOGS_TOKEN env var)
        #[arg(short = 't', long, env = "DISCOGS_TOKEN")]
        discogs_token: Option<String>,
        /// Enrich records with Discogs producer/engineer credits (requires a token)
        #[arg(long)]
        contributors: bool,
        /// Output filename prefix (default: search_results_<yymmdd_hhmm>)
        #[arg(short, long)]
        output_prefix: Option<String>,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    match &cli.command {
        Commands::Lookup {
            barcodes,
            user_agent,
            discogs_token,
            contributors,
            output_prefix,
        } => cmd_lookup(
            &rt,
            barcodes,
            user_agent,
            discogs_token.as_deref(),
            *contributors,
            output_prefix.as_deref(),
        ),
    }
}

fn cmd_lookup(
    rt: &Runtime,
    barcodes: &PathBuf,
    user_agent: &str,
    discogs_token: Option<&str>,
    contributors: bool,
    output_prefix: Option<&str>,
) -> anyhow::Result<()> {
    if contributors && discogs_token.is_none() {
        anyhow::bail!("--contributors requires a Discogs token (--discogs-token or DISCOGS_TOKEN)");
    }

    let identifiers = input::read_identifiers(barcodes)?;
    println!("Looking up {} barcode(s) from {:?}", identifiers.len(), barcodes);

    let mut config = BatchConfig::new(user_agent);
    config.discogs_token = discogs_token.map(String::from);
    config.enable_contributor_enrichment = contributors;

    let prefix = output_prefix
        .map(String::from)
        .unwrap_or_else(output::default_prefix);
    let paths = output::OutputPaths::from_prefix(&prefix);

    let outcome = rt.block_on(async {
        let service = BatchService::from_config(&config);
        service.process(&identifiers).await
    });

    output::write_outputs(&paths, &outcome.records, &outcome.rows)?;

    println!();
    println!(
        "Done! {} found, {} not found, {} skipped",
        outcome.found, outcome.not_found, outcome.skipped
    );
    println!("  MARC: {}", paths.marc.display());
    println!("  CSV:  {}", paths.csv.display());

    Ok(())
}
