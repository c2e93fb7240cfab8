//! CLI module for the storefront
//!
//! Subcommands:
//! - `serve`: apply pending migrations and run the HTTP API
//! - `migrate`: apply pending migrations and exit

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// Storefront - accounts, catalog and carts over HTTP
#[derive(Parser)]
#[command(name = "storefront")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Apply database migrations and exit
    Migrate,
}
