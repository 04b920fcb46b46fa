//! CLI type definitions
//!
//! This module contains the clap command structures that define the CLI
//! interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stellar-curator")]
#[command(about = "Maintenance jobs for the Stellar theme site directory", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the YAML configuration file
    #[arg(short, long, global = true, default_value = "config.yml")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse submission issues into the versioned data document
    ParseIssues,

    /// Probe every listed site and reflect the result as issue labels
    CheckSites,
}
