use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wallet::cli::{handle_record_command, run_menu, RecordCommands};
use wallet::config::{paths::WalletPaths, settings::Settings};
use wallet::storage::RecordStore;

#[derive(Parser)]
#[command(
    name = "wallet",
    version,
    about = "Terminal-based personal income and expense ledger",
    long_about = "Wallet records dated income and expense entries in a plain \
                  comma-delimited file and reports your balance. Run without a \
                  subcommand for the interactive menu."
)]
struct Cli {
    /// Records file (defaults to records.txt in the data directory)
    #[arg(short, long, global = true, env = "WALLET_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Menu,

    #[command(flatten)]
    Record(RecordCommands),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to disk
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = WalletPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let records_file = settings.resolve_records_file(&paths, cli.file);

    match cli.command {
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
            }
            println!("Wallet Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Records file:   {}", records_file.display());
            println!();
            println!("Settings:");
            println!("  Default currency: {}", settings.default_currency);
        }
        Some(Commands::Record(cmd)) => {
            let mut store = RecordStore::open(&records_file)?;
            if let Some(notice) = store.notice() {
                eprintln!("{}", notice);
            }
            handle_record_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Menu) | None => {
            let mut store = RecordStore::open(&records_file)?;
            run_menu(&mut store, &settings, io::stdin().lock(), io::stdout())?;
        }
    }

    Ok(())
}

/// Log to stderr; the filter comes from `WALLET_LOG` and defaults to warnings
fn init_tracing() {
    let filter = EnvFilter::try_from_env("WALLET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
