use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use gofinances::cli::{
    handle_add_command, handle_config_command, handle_export_command, handle_list_command,
    handle_summary_command, AddArgs, ExportFormat, SummaryFormat,
};
use gofinances::config::{FinancePaths, Settings};
use gofinances::models::UserId;
use gofinances::storage::open_file_store;

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "GOFINANCES_LOG";

#[derive(Parser)]
#[command(
    name = "gofinances",
    version,
    about = "Terminal personal-finance dashboard",
    long_about = "gofinances shows your income, expenses and balance from the \
                  transactions you register, in a terminal dashboard or as \
                  plain command output."
)]
struct Cli {
    /// Id of the user whose transactions are shown
    #[arg(short, long, global = true, env = "GOFINANCES_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Tui,

    /// Print the income, expense and total cards
    Summary {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: SummaryFormat,
    },

    /// List transactions
    #[command(alias = "ls")]
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Register a new transaction
    Add(AddArgs),

    /// Export the dashboard
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    paths.ensure_directories()?;
    init_logging(&paths, matches!(command, Commands::Tui));

    let settings = Settings::load_or_create(&paths)?;

    let store = open_file_store(&paths)?;
    let user = || require_user(cli.user.as_deref());

    match command {
        Commands::Tui => gofinances::tui::run_tui(store, &settings, user()?)?,
        Commands::Summary { format } => {
            handle_summary_command(store.as_ref(), &settings, &user()?, format)?
        }
        Commands::List { limit } => {
            handle_list_command(store.as_ref(), &settings, &user()?, limit)?
        }
        Commands::Add(args) => handle_add_command(store.as_ref(), &settings, &user()?, args)?,
        Commands::Export {
            format,
            output,
            pretty,
        } => handle_export_command(store.as_ref(), &settings, &user()?, format, output, pretty)?,
        Commands::Config => handle_config_command(&paths, &settings)?,
    }

    Ok(())
}

fn require_user(user: Option<&str>) -> Result<UserId> {
    let Some(user) = user else {
        bail!("No user given. Pass --user <ID> or set GOFINANCES_USER");
    };
    UserId::parse(user).map_err(anyhow::Error::msg)
}

/// Log to stderr for commands; the TUI owns the terminal, so it logs to a file
fn init_logging(paths: &FinancePaths, tui: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    if tui {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(paths.log_file());
        if let Ok(file) = file {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
