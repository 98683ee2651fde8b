use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use timesheet_recon::cli;
use timesheet_recon::config::ReconConfig;
use tracing::error;

#[derive(Parser)]
#[command(name = "timesheet-recon")]
#[command(about = "Compare S4Hana hours with client timesheets and report the days that disagree")]
#[command(long_about = "timesheet-recon - S4Hana vs client timesheet reconciliation

Reads the S4Hana dump (hana.xlsx) and every timesheet in the Client folder,
then writes <Month>_Timesheet_Report.xlsx with one sheet per client file.

A day is reported when S4Hana and client hours differ, or when both are zero.
The Leave column is Yes when the client highlighted that day in yellow.

Client hours are compared through Friday of the current week, or through
month end once that Friday falls in the next month.

EXAMPLES:
  timesheet-recon                                # hana.xlsx + Client/ in the current folder
  timesheet-recon --as-of 2026-10-31             # month-end run for October
  timesheet-recon --config recon.yaml -v         # custom layout, debug logging")]
#[command(version)]
struct Cli {
    /// YAML file overriding column positions, labels and colors
    #[arg(short, long, env = "TIMESHEET_RECON_CONFIG")]
    config: Option<PathBuf>,

    /// S4Hana timesheet dump (default: hana.xlsx)
    #[arg(long)]
    hana: Option<PathBuf>,

    /// Folder of client timesheets (default: Client)
    #[arg(long)]
    client_dir: Option<PathBuf>,

    /// Folder the report is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Reconcile as if today were this date (YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Show debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "timesheet_recon=debug"
    } else {
        "timesheet_recon=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_target(false)
        .with_writer(std::io::stdout)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => ReconConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReconConfig::default(),
    };

    if let Some(hana) = cli.hana {
        config.hana_file = hana;
    }
    if let Some(client_dir) = cli.client_dir {
        config.client_dir = client_dir;
    }
    config.validate()?;

    let today = cli
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    cli::reconcile(&config, today, &cli.output_dir).with_context(|| {
        format!(
            "Reconciliation of {} against {} failed",
            config.hana_file.display(),
            config.client_dir.display()
        )
    })?;

    Ok(())
}
