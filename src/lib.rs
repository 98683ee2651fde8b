//! timesheet-recon - S4Hana vs client timesheet reconciliation
//!
//! Reads the monthly S4Hana hours export and every client-submitted squad
//! timesheet, compares hours per person and day, and writes one workbook with
//! a sheet of flagged days per squad.
//!
//! # Features
//!
//! - Fixed-layout parsing of both sources, configurable through YAML
//! - Client hours compared only through the current reporting cutoff
//! - Leave days detected from highlighted cells in the client timesheet
//! - Per-file failure isolation: a broken timesheet never stops the run
//!
//! # Example
//!
//! ```no_run
//! use timesheet_recon::cli;
//! use timesheet_recon::config::ReconConfig;
//! use std::path::Path;
//!
//! let config = ReconConfig::default();
//! let today = chrono::Local::now().date_naive();
//! let run = cli::reconcile(&config, today, Path::new("."))?;
//!
//! println!("Sheets: {}", run.sheets.len());
//! println!("Failed: {}", run.summary.failed);
//! # Ok::<(), timesheet_recon::error::ReconError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use config::ReconConfig;
pub use error::{ReconError, ReconResult};
pub use types::{LeaveFlag, LeaveRecord, Observation, PersonSeries, ReconciliationRow};
