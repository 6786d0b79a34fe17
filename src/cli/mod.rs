//! CLI module for toolshelf - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for running the server
//! and inspecting the catalog.

pub mod commands;

pub use commands::Cli;
