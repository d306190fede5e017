use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cardcycle::cli::{
    handle_dashboard_command, handle_label_command, handle_trends_command, handle_window_command,
    resolve_today, DashboardArgs, LabelArgs, TrendsArgs, WindowArgs,
};
use cardcycle::config::{CardcyclePaths, Settings};
use cardcycle::logging::init_tracing;
use cardcycle::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "cardcycle",
    version,
    about = "Credit card billing and performance period calculator",
    long_about = "cardcycle maps each card's billing day and performance start day to \
                  the date windows its issuer uses, and shows a monthly dashboard of \
                  cashflow, benefit tier progress and expected billing."
)]
struct Cli {
    /// Ledger file to read instead of the one in the data directory
    #[arg(long, global = true, env = "CARDCYCLE_LEDGER")]
    ledger: Option<PathBuf>,

    /// Date to treat as today (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Monthly cashflow, card performance and billing
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Performance and billing windows of one card
    Window(WindowArgs),

    /// Transactions with the month they are charged in
    #[command(alias = "labels")]
    Label(LabelArgs),

    /// Cumulative income and spending per payment method
    Trends(TrendsArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = CardcyclePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let today = resolve_today(cli.today.as_deref())?;

    let storage = Storage::new(&paths, cli.ledger);

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing cardcycle at: {}", paths.base_dir().display());
            initialize_storage(&paths, &settings)?;
            println!("Initialization complete!");
            println!("Ledger file: {}", paths.ledger_file().display());
        }
        Some(Commands::Config) => {
            println!("cardcycle Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", storage.ledger.path().display());
            println!("Initialized:    {}", if paths.is_initialized() { "yes" } else { "no" });
            println!();
            println!("Settings:");
            println!("  Carry-over enabled: {}", settings.carry_over_enabled);
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Trend months:       {}", settings.trend_months);
        }
        Some(Commands::Dashboard(args)) => {
            storage.load_all()?;
            handle_dashboard_command(&storage, &settings, today, args)?;
        }
        Some(Commands::Window(args)) => {
            storage.load_all()?;
            handle_window_command(&storage, today, args)?;
        }
        Some(Commands::Label(args)) => {
            storage.load_all()?;
            handle_label_command(&storage, &settings, today, args)?;
        }
        Some(Commands::Trends(args)) => {
            storage.load_all()?;
            handle_trends_command(&storage, &settings, today, args)?;
        }
        None => {
            println!("cardcycle - credit card billing and performance periods");
            println!();
            println!("Run 'cardcycle --help' for usage information.");
            println!("Run 'cardcycle dashboard' for this month's overview.");
        }
    }

    Ok(())
}
