//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - serve: run the HTTP API (default when no subcommand is given)
//! - catalog: print the seeded tool catalog

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Toolshelf - an in-memory AI tool catalog with favorites
#[derive(Parser, Debug)]
#[command(name = "toolshelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config and $PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Write logs to this file instead of stderr
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Print the tool catalog
    Catalog {
        /// Only show tools in this category (case-insensitive)
        #[arg(short = 'C', long)]
        category: Option<String>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            host: None,
            port: None,
            log_file: None,
        }
    }
}
