//! CLI command handlers

pub mod commands;

pub use commands::{process_client_file, reconcile, RunReport, RunSummary};
