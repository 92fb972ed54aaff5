//! Marcbrainz - batch barcode-to-MARC record generation.
//!
//! Reads a file of barcodes, looks each one up against MusicBrainz (and
//! optionally Discogs for contributor credits), and writes a binary MARC
//! file plus a CSV summary of the run.

pub mod batch;
pub mod cli;
pub mod error;
pub mod input;
pub mod lookup;
pub mod mapper;
pub mod marc;
pub mod output;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("marcbrainz=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
