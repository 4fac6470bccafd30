use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use finrep::cli::{handle_export_command, handle_report_command, ExportArgs, ReportArgs};
use finrep::config::{FinrepPaths, Settings};
use finrep::models::ReportKind;

#[derive(Parser)]
#[command(
    name = "finrep",
    version,
    about = "Terminal client for balance-sheet and profit-and-loss reporting APIs",
    long_about = "finrep fetches balance-sheet and profit-and-loss reports from a \
                  remote reporting API for a date range, renders them as terminal \
                  tables, and exports them to CSV or XLSX files."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the balance sheet for a date range
    #[command(alias = "bs")]
    Balance(ReportArgs),

    /// Show the profit and loss statement for a date range
    #[command(alias = "pl")]
    Pnl(ReportArgs),

    /// Export a report to a CSV or XLSX file
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinrepPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Balance(args)) => {
            handle_report_command(&settings, ReportKind::Balance, args).await?;
        }
        Some(Commands::Pnl(args)) => {
            handle_report_command(&settings, ReportKind::Pnl, args).await?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&settings, args).await?;
        }
        Some(Commands::Config) => {
            println!("finrep Configuration");
            println!("====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  API base URL:    {}", settings.api_base_url);
            println!("  Company ID:      {}", settings.company_id);
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("finrep - Terminal client for financial reporting APIs");
            println!();
            println!("Run 'finrep --help' for usage information.");
            println!("Run 'finrep balance' to fetch the balance sheet.");
        }
    }

    Ok(())
}
