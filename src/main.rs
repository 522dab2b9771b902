use anyhow::Result;
use clap::{Parser, Subcommand};

use spendwise::cli::{
    handle_budget_command, handle_entry_command, handle_report_command, BudgetCommands,
    EntryCommands, ReportCommands,
};
use spendwise::config::{paths::SpendwisePaths, settings::Settings};
use spendwise::display::format_category_list;
use spendwise::logging::init_tracing;
use spendwise::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendwise",
    version,
    about = "Track income and expenses from the command line",
    long_about = "Spendwise records dated income and expense entries, shows where \
                  your money goes by category and flags categories where spending \
                  looks high compared to your income and savings."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Entry(EntryCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Budget profile commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// List the configured expense categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SpendwisePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths, &settings)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Entry(cmd)) => {
            handle_entry_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Categories) => {
            print!("{}", format_category_list(&settings.categories));
        }
        Some(Commands::Config) => {
            let paths = storage.paths();
            if !paths.is_initialized() {
                settings.save(paths)?;
            }
            println!("Spendwise Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", storage.ledger.path().display());
            println!("Budget file:    {}", storage.budget.path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Advice policy:   {}", settings.advice.name());
        }
        None => {
            println!("Spendwise - income and expense tracking");
            println!();
            println!("Run 'spendwise --help' for usage information.");
        }
    }

    Ok(())
}
