//! Run configuration
//!
//! Column positions, header offsets and labels for both spreadsheet layouts,
//! enumerated once at startup. Every field defaults to the layout of the
//! monthly S4Hana dump and the squad timesheets, so running without a config
//! file reproduces the standard report.

use crate::error::{ReconError, ReconResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Excel refuses longer sheet names
pub const SHEET_NAME_LIMIT: usize = 31;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReconConfig {
    /// S4Hana timesheet dump
    pub hana_file: PathBuf,
    /// Folder holding one timesheet per squad
    pub client_dir: PathBuf,
    /// File suffixes treated as spreadsheets; anything else is skipped
    pub extensions: Vec<String>,
    pub hana: HanaLayout,
    pub client: ClientLayout,
    pub report: ReportSettings,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            hana_file: PathBuf::from("hana.xlsx"),
            client_dir: PathBuf::from("Client"),
            extensions: vec![".xlsx".to_string(), ".xls".to_string()],
            hana: HanaLayout::default(),
            client: ClientLayout::default(),
            report: ReportSettings::default(),
        }
    }
}

/// Layout of the S4Hana export (all indexes 0-based)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HanaLayout {
    pub header_row_offset: usize,
    pub name_column: usize,
    /// Date columns (`dd.mm.yyyy`) run from here to the last column
    pub first_date_column: usize,
}

impl Default for HanaLayout {
    fn default() -> Self {
        Self {
            header_row_offset: 1,
            name_column: 1,
            first_date_column: 4,
        }
    }
}

/// Layout of a client timesheet (all indexes 0-based)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientLayout {
    pub header_row_offset: usize,
    pub name_column: usize,
    pub country_column: usize,
    /// Day-of-month columns start here and end before `stop_column_label`
    pub first_date_column: usize,
    /// Rows are read while their country equals this value
    pub target_country: String,
    pub stop_column_label: String,
    /// Fill color (`#RRGGBB`) marking a leave day
    pub leave_color: String,
}

impl Default for ClientLayout {
    fn default() -> Self {
        Self {
            header_row_offset: 11,
            name_column: 0,
            country_column: 3,
            first_date_column: 4,
            target_country: "India".to_string(),
            stop_column_label: "Total Billable Hours".to_string(),
            leave_color: "#FFFF00".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Report file name is `<Month>_<file_suffix>`
    pub file_suffix: String,
    pub header_color: String,
    /// Characters dropped from the front of a client file name to form its sheet name
    pub sheet_prefix_len: usize,
    /// Padding added to the widest value of each column
    pub extra_cell_width: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            file_suffix: "Timesheet_Report.xlsx".to_string(),
            header_color: "#FFD8B1".to_string(),
            sheet_prefix_len: 18,
            extra_cell_width: 4,
        }
    }
}

impl ReconConfig {
    /// Load a YAML config file; missing keys keep their defaults
    pub fn load(path: &Path) -> ReconResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: ReconConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ReconResult<()> {
        parse_hex_color(&self.client.leave_color)?;
        parse_hex_color(&self.report.header_color)?;

        if self.hana.first_date_column <= self.hana.name_column {
            return Err(ReconError::Config(format!(
                "hana.first_date_column ({}) must come after hana.name_column ({})",
                self.hana.first_date_column, self.hana.name_column
            )));
        }

        let client = &self.client;
        if client.first_date_column <= client.name_column
            || client.first_date_column <= client.country_column
        {
            return Err(ReconError::Config(format!(
                "client.first_date_column ({}) must come after the name and country columns",
                client.first_date_column
            )));
        }

        if self.extensions.is_empty() {
            return Err(ReconError::Config(
                "at least one spreadsheet extension is required".to_string(),
            ));
        }

        Ok(())
    }

    /// True when the file name ends with one of the configured spreadsheet suffixes
    pub fn is_spreadsheet(&self, file_name: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }
}

/// Parse `#RRGGBB` into its 24-bit value
pub fn parse_hex_color(color: &str) -> ReconResult<u32> {
    let hex = color
        .strip_prefix('#')
        .filter(|hex| hex.len() == 6)
        .ok_or_else(|| ReconError::Config(format!("color must look like #RRGGBB: {}", color)))?;

    u32::from_str_radix(hex, 16)
        .map_err(|_| ReconError::Config(format!("color must look like #RRGGBB: {}", color)))
}
