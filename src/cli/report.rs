//! CLI commands for reports
//!
//! Summary, category breakdown and spending advice over the current ledger.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::reports::{format_breakdown, format_summary};
use crate::services::ReportService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show total income, expenses and savings
    Summary,

    /// Show spending per category
    Breakdown {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Flag categories where spending looks high
    #[command(alias = "advice")]
    Advise,
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> SpendwiseResult<()> {
    let service = ReportService::new(storage, settings);
    let symbol = &settings.currency_symbol;

    match cmd {
        ReportCommands::Summary => {
            print!("{}", format_summary(service.summary().as_ref(), symbol));
        }

        ReportCommands::Breakdown { output } => {
            let breakdown = service.breakdown();
            match (breakdown, output) {
                (Some(breakdown), Some(path)) => {
                    let file = File::create(&path).map_err(|e| {
                        SpendwiseError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    let mut writer = BufWriter::new(file);
                    breakdown.export_csv(&mut writer)?;
                    println!("Breakdown exported to: {}", path.display());
                }
                (breakdown, _) => {
                    print!("{}", format_breakdown(breakdown.as_ref(), symbol));
                }
            }
        }

        ReportCommands::Advise => match service.advice() {
            Ok(advice) => print!("{}", advice.format_terminal(symbol)),
            Err(SpendwiseError::InsufficientData(message)) => println!("{}", message),
            Err(e) => return Err(e),
        },
    }

    Ok(())
}
