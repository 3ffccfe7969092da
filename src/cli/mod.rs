//! Command-line interface for page-forge.
//!
//! Provides commands for generating page content documents and for
//! inspecting how a prompt classifies.

mod commands;

pub use commands::{parse_cli, run, run_with_cli, Cli};
