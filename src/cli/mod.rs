//! Command-line interface for credseed.

pub mod commands;

use clap::{Parser, Subcommand};

/// credseed - API client credential provisioning
#[derive(Parser)]
#[command(name = "credseed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Provision API client credentials for the given users
    #[command(alias = "s")]
    Seed {
        /// Users as username[:role]; role defaults to read-write.
        /// Supported roles: admin, read-write, read-only, write-only
        users: Vec<String>,

        /// Print created credentials as JSON
        #[arg(long)]
        json: bool,
    },

    /// List provisioned API clients (signing keys are not shown)
    #[command(alias = "ls", alias = "l")]
    List {
        /// Print clients as JSON
        #[arg(long)]
        json: bool,
    },
}
