use crate::config::ReconConfig;
use crate::core::{cutoff_day, reconcile as reconcile_series};
use crate::error::ReconResult;
use crate::excel::exporter::report_file_name;
use crate::excel::{Grid, ReportExporter, StyledSheet};
use crate::parser::{ClientParser, HanaParser, LeaveExtractor};
use crate::types::{PersonSeries, ReconciliationRow};
use chrono::NaiveDate;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// File tallies of one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Every entry of the client folder, spreadsheet or not
    pub found: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.found - self.failed - self.skipped
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub report_path: PathBuf,
    pub sheets: Vec<String>,
    pub summary: RunSummary,
}

/// Execute the reconciliation: Hana dump once, then every client timesheet
///
/// A client file that fails contributes nothing and the run goes on; a Hana
/// or folder failure aborts the run before any report is written.
pub fn reconcile(config: &ReconConfig, today: NaiveDate, output_dir: &Path) -> ReconResult<RunReport> {
    println!("{}", "📊 Timesheet Reconciliation".bold().green());
    println!("   S4Hana:  {}", config.hana_file.display());
    println!("   Clients: {}\n", config.client_dir.display());

    let hana_file = config.hana_file.display();
    info!("\"{}\" read start", hana_file);
    let hana_grid = Grid::open(&config.hana_file, config.hana.header_row_offset)?;
    info!("\"{}\" read successfully", hana_file);

    info!("\"{}\" parse start", hana_file);
    let hana = HanaParser::new(&config.hana).parse(&hana_grid)?;
    info!("\"{}\" parsed successfully ({} persons)", hana_file, hana.len());

    let cutoff = cutoff_day(today);
    debug!(cutoff, "client hours compared through day {}", cutoff);

    let (exporter, summary) = reconcile_client_dir(config, &hana, cutoff)?;
    let sheets = exporter.sheet_names().to_vec();

    let report_path = output_dir.join(report_file_name(today, &config.report.file_suffix));
    exporter.save(&report_path)?;
    info!("\"{}\" generated successfully", report_path.display());
    info!(
        "Report for Client timesheets: {} SUCCESS, {} FAILED {} SKIPPED",
        summary.succeeded(),
        summary.failed,
        summary.skipped
    );

    println!(
        "\n{} Report: {}\n",
        "✅".green(),
        report_path.display().to_string().bright_blue()
    );

    Ok(RunReport {
        report_path,
        sheets,
        summary,
    })
}

/// Reconcile every spreadsheet in the client folder into one report workbook
fn reconcile_client_dir(
    config: &ReconConfig,
    hana: &PersonSeries,
    cutoff: u32,
) -> ReconResult<(ReportExporter, RunSummary)> {
    let directory = &config.client_dir;
    info!("Start parse timesheets from \"{}\" folder", directory.display());

    let mut entries = fs::read_dir(directory)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut summary = RunSummary {
        found: entries.len(),
        ..RunSummary::default()
    };
    info!("{} files found", summary.found);

    let mut exporter = ReportExporter::new(&config.report)?;

    for entry in entries {
        let file_name = entry.file_name().to_string_lossy().into_owned();

        if !config.is_spreadsheet(&file_name) {
            summary.skipped += 1;
            warn!("\"{}\" is not an excel file", file_name);
            continue;
        }

        let outcome = process_client_file(config, hana, &entry.path(), cutoff).and_then(|rows| {
            let sheet_name =
                exporter.sheet_name_for(&file_name, config.report.sheet_prefix_len)?;
            exporter.add_sheet(&sheet_name, &rows)?;
            Ok((sheet_name, rows.len()))
        });

        match outcome {
            Ok((sheet_name, flagged)) => {
                info!(
                    "Report for \"{}\" generated successfully (sheet \"{}\", {} rows)",
                    file_name, sheet_name, flagged
                );
            }
            Err(e) => {
                summary.failed += 1;
                error!("\"{}\" occurred when processing {}", e, file_name);
            }
        }
    }

    Ok((exporter, summary))
}

/// Parse one client timesheet and compare it against the Hana series
pub fn process_client_file(
    config: &ReconConfig,
    hana: &PersonSeries,
    path: &Path,
    cutoff: u32,
) -> ReconResult<Vec<ReconciliationRow>> {
    let layout = &config.client;

    let grid = Grid::open(path, layout.header_row_offset)?;
    let client = ClientParser::new(layout, cutoff).parse(&grid)?;
    info!("\"{}\" parsed successfully", path.display());

    let sheet = StyledSheet::open(path)?;
    let leaves = LeaveExtractor::new(layout).extract(&sheet)?;
    debug!(
        persons = client.len(),
        leave_marked = !leaves.is_empty(),
        "client series ready"
    );

    Ok(reconcile_series(hana, &client, &leaves))
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
