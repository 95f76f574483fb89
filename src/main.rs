use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_sheets::cli::{handle_clear_month, handle_export, handle_init, handle_run, handle_show};
use budget_sheets::config::{BudgetPaths, SessionConfig, Settings};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Terminal budget planner backed by a spreadsheet-style workbook",
    long_about = "budget-sheets splits your monthly income into needs, wants and savings \
                  using the 50/30/20 or 70/20/10 plan, records what you spent per category \
                  and moves any surplus or deficit to savings."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan this month's budget interactively (default)
    Run,

    /// Create the workbook with the standard layout
    Init {
        /// Replace an existing workbook
        #[arg(long)]
        force: bool,
    },

    /// Print a sheet as a table
    Show {
        /// Sheet name (general, needs or wants)
        sheet: String,
    },

    /// Export a sheet as CSV
    Export {
        /// Sheet name (general, needs or wants)
        sheet: String,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Erase one month's row of a sheet
    ClearMonth {
        /// Sheet name (general, needs or wants)
        sheet: String,
        /// Month name or number (defaults to the active month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("budget_sheets=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    match cli.command {
        None | Some(Commands::Run) => {
            if let Err(err) = handle_run(&paths, &settings) {
                if err.is_fatal_deficit() {
                    eprintln!("{}", err);
                    eprintln!("Your savings cannot cover this overspend. The session has ended.");
                    return Ok(ExitCode::FAILURE);
                }
                return Err(err.into());
            }
        }
        Some(Commands::Init { force }) => handle_init(&paths, &settings, force)?,
        Some(Commands::Show { sheet }) => handle_show(&paths, &sheet)?,
        Some(Commands::Export { sheet, output }) => handle_export(&paths, &sheet, output)?,
        Some(Commands::ClearMonth { sheet, month }) => {
            handle_clear_month(&paths, &settings, &sheet, month)?
        }
        Some(Commands::Config) => {
            let session = SessionConfig::from_settings(&settings)?;
            println!("budget-sheets Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Workbook file:  {}", paths.workbook_file().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Active month:     {}", session.month_label());
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Log filter:       {}", settings.log_filter);
            println!("  Default needs:    {}", session.default_needs.names().join(", "));
            println!("  Default wants:    {}", session.default_wants.names().join(", "));
        }
    }

    Ok(ExitCode::SUCCESS)
}
