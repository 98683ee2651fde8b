//! Discrepancy report exporter
//!
//! One workbook per run, one worksheet per client timesheet. Each sheet holds
//! a colored header, one centered row per flagged day, columns sized to their
//! content, no gridlines and a filter over the whole table.

use crate::config::{parse_hex_color, ReportSettings, SHEET_NAME_LIMIT};
use crate::error::{ReconError, ReconResult};
use crate::types::ReconciliationRow;
use chrono::NaiveDate;
use regex::Regex;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet};
use std::path::Path;

pub const REPORT_HEADERS: [&str; 5] = ["Name", "Day", "S4Hana Hours", "Client Hours", "Leave"];

/// Sheet written when no client file produced a report
const DEFAULT_SHEET_NAME: &str = "Sheet";

/// Excel report builder, shared by every client file of a run
pub struct ReportExporter {
    workbook: Workbook,
    header_format: Format,
    cell_format: Format,
    extra_cell_width: usize,
    sheet_names: Vec<String>,
}

impl ReportExporter {
    pub fn new(settings: &ReportSettings) -> ReconResult<Self> {
        let header_color = parse_hex_color(&settings.header_color)?;

        Ok(Self {
            workbook: Workbook::new(),
            header_format: Format::new().set_background_color(Color::RGB(header_color)),
            cell_format: Format::new().set_align(FormatAlign::Center),
            extra_cell_width: settings.extra_cell_width,
            sheet_names: Vec::new(),
        })
    }

    /// Names of the sheets added so far, in order
    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    /// Sheet name for a client file that does not clash with an existing sheet
    pub fn sheet_name_for(&self, file_name: &str, prefix_len: usize) -> ReconResult<String> {
        let base = derive_sheet_name(file_name, prefix_len)?;
        Ok(unique_sheet_name(&base, &self.sheet_names))
    }

    /// Add a finished worksheet; nothing is added if any write fails
    pub fn add_sheet(&mut self, name: &str, rows: &[ReconciliationRow]) -> ReconResult<()> {
        let mut worksheet = Worksheet::new();
        worksheet.set_name(name)?;

        let mut widths: Vec<usize> = REPORT_HEADERS.iter().map(|h| h.chars().count()).collect();

        for (col, header) in REPORT_HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &self.header_format)?;
        }

        for (idx, row) in rows.iter().enumerate() {
            let excel_row = (idx + 1) as u32;
            let rendered = [
                row.person.clone(),
                row.day.to_string(),
                format_number(row.hana_hours),
                format_number(row.client_hours),
                row.leave.to_string(),
            ];

            worksheet.write_string_with_format(excel_row, 0, &row.person, &self.cell_format)?;
            worksheet.write_number_with_format(excel_row, 1, row.day, &self.cell_format)?;
            worksheet.write_number_with_format(excel_row, 2, row.hana_hours, &self.cell_format)?;
            worksheet.write_number_with_format(
                excel_row,
                3,
                row.client_hours,
                &self.cell_format,
            )?;
            worksheet.write_string_with_format(
                excel_row,
                4,
                row.leave.as_str(),
                &self.cell_format,
            )?;

            for (width, text) in widths.iter_mut().zip(rendered.iter()) {
                *width = (*width).max(text.chars().count());
            }
        }

        for (col, width) in widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, (width + self.extra_cell_width) as f64)?;
        }

        worksheet.set_screen_gridlines(false);
        worksheet.autofilter(0, 0, rows.len() as u32, (REPORT_HEADERS.len() - 1) as u16)?;

        self.workbook.push_worksheet(worksheet);
        self.sheet_names.push(name.to_string());
        Ok(())
    }

    /// Write the workbook; an empty report keeps a single blank sheet
    pub fn save(mut self, path: &Path) -> ReconResult<()> {
        if self.sheet_names.is_empty() {
            self.workbook.add_worksheet().set_name(DEFAULT_SHEET_NAME)?;
        }

        self.workbook.save(path)?;
        Ok(())
    }
}

/// `<Month>_<suffix>`, e.g. `October_Timesheet_Report.xlsx`
pub fn report_file_name(today: NaiveDate, suffix: &str) -> String {
    format!("{}_{}", today.format("%B"), suffix)
}

/// Sheet name from a client file name: extension and a fixed-length prefix
/// dropped, then cut to Excel's sheet name limit
pub fn derive_sheet_name(file_name: &str, prefix_len: usize) -> ReconResult<String> {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());

    // Characters Excel refuses in sheet names
    let forbidden = Regex::new(r"[\[\]:*?/\\]")
        .map_err(|e| ReconError::Config(format!("Regex error: {}", e)))?;
    let sanitize = |name: &str| -> String {
        forbidden
            .replace_all(name, "_")
            .trim_matches('\'')
            .chars()
            .take(SHEET_NAME_LIMIT)
            .collect()
    };

    let stripped = sanitize(&stem.chars().skip(prefix_len).collect::<String>());
    if !stripped.is_empty() {
        return Ok(stripped);
    }

    let whole = sanitize(&stem);
    Ok(if whole.is_empty() {
        DEFAULT_SHEET_NAME.to_string()
    } else {
        whole
    })
}

/// Append `~2`, `~3`, … until the name is free (Excel compares names case-insensitively)
fn unique_sheet_name(base: &str, taken: &[String]) -> String {
    let is_taken = |name: &str| taken.iter().any(|t| t.eq_ignore_ascii_case(name));
    if !is_taken(base) {
        return base.to_string();
    }

    (2..)
        .map(|n| {
            let suffix = format!("~{}", n);
            let keep = SHEET_NAME_LIMIT - suffix.len();
            format!("{}{}", base.chars().take(keep).collect::<String>(), suffix)
        })
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Format a number for display, removing unnecessary decimal places
pub fn format_number(n: f64) -> String {
    let rounded = (n * 1e6).round() / 1e6;
    format!("{:.6}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
