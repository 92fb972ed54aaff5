//! Command-line interface for marcbrainz.
//!
//! This module provides the batch lookup command that turns a barcode file
//! into MARC and CSV output files. Everything is driven by flags and
//! environment variables; nothing is prompted for interactively.

mod commands;

pub use commands::{Cli, Commands, run_command};
