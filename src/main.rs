use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use budget_tracker::cli::{
    handle_budget_command, handle_export_command, run_menu, BudgetCommands, ExportFormat,
};
use budget_tracker::config::{Settings, TrackerPaths};
use budget_tracker::models::Ledger;
use budget_tracker::storage::{initialize_storage, LedgerStore};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Console budget tracker",
    long_about = "Track spending against per-category budgets. Run without a \
                  command to use the interactive menu, or use the subcommands \
                  for one-shot changes and reports."
)]
struct Cli {
    /// Directory holding settings and the ledger file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Ledger file to use instead of the configured one
    #[arg(long, global = true, env = "BUDGET_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Increase log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (the default)
    #[command(alias = "ui")]
    Menu,

    #[command(flatten)]
    Budget(BudgetCommands),

    /// Export the ledger to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Write default settings and the starting ledger file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    budget_tracker::logging::init(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let store = LedgerStore::new(cli.file.unwrap_or_else(|| settings.ledger_path(&paths)));

    match cli.command {
        None | Some(Commands::Menu) => {
            let mut ledger = store.load_or_seed(&settings.seed_categories)?;
            let categories = settings.menu_categories();
            let outcome = run_menu(
                &mut ledger,
                &categories,
                &settings.currency_symbol,
                io::stdin().lock(),
                io::stdout(),
            );
            save_ledger(&store, &ledger);
            outcome?;
        }
        Some(Commands::Budget(cmd)) => {
            let mut ledger = store.load_or_seed(&settings.seed_categories)?;
            let before = cmd.is_mutation().then(|| ledger.clone());
            let outcome = handle_budget_command(&mut ledger, &settings, cmd, &mut io::stdout());
            if before.is_some_and(|before| before != ledger) {
                save_ledger(&store, &ledger);
            }
            outcome?;
        }
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => {
            let ledger = store.load_or_seed(&settings.seed_categories)?;
            handle_export_command(&ledger, &output, format, pretty)?;
        }
        Some(Commands::Init) => {
            println!("Initializing budget tracker at: {}", paths.base_dir().display());
            if initialize_storage(&paths, &settings, &store)? {
                println!(
                    "Created {} with {} categories.",
                    store.path().display(),
                    settings.seed_categories.len()
                );
            } else {
                println!("Ledger file already exists: {}", store.path().display());
            }
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", store.path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Seed categories: {}", settings.seed_categories.len());
        }
    }

    Ok(())
}

/// Save the ledger, reporting failure without aborting
fn save_ledger(store: &LedgerStore, ledger: &Ledger) {
    if let Err(e) = store.save(ledger) {
        eprintln!("Error saving budgets: {}", e);
    }
}
