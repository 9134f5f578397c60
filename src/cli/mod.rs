//! CLI interface for Apexgate

pub mod commands;
mod output;
pub mod shell;

pub use output::*;

use clap::{Parser, Subcommand, ValueEnum};

use crate::directory::Role;

#[derive(Parser)]
#[command(name = "apexgate")]
#[command(version)]
#[command(about = "Role-gated session router for the APEX LMS", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new apexgate.toml configuration file
    Init,

    /// Seed the user directory (a no-op when it is already populated)
    Bootstrap,

    /// List the user directory
    Users {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show the route authorization table
    Routes {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Evaluate one page load and print the decision
    Check {
        /// The requested page
        #[arg(short, long)]
        page: String,

        /// Evaluate with the account matching this email signed in
        #[arg(short, long, conflicts_with = "role")]
        email: Option<String>,

        /// Evaluate with the first seeded account of this role signed in
        #[arg(short, long)]
        role: Option<Role>,
    },

    /// Open an interactive browser tab against the gate
    Browse {
        /// Page to start on
        #[arg(short, long, default_value = "index.html")]
        page: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
