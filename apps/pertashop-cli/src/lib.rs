//! # Pertashop CLI Library
//!
//! Everything behind the `pertashop` binary. `main.rs` only calls [`run`].
//!
//! ## Module Organization
//! ```text
//! pertashop_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap flags and subcommands
//! ├── console.rs      ◄─── Prompts, rules, panels
//! ├── table.rs        ◄─── Boxed tables for dashboard and report
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── pertashop.toml + environment
//! │   └── station.rs  ◄─── Inventory + ledger + storage, commit order
//! ├── commands/
//! │   ├── mod.rs      ◄─── Subcommand dispatch
//! │   ├── menu.rs     ◄─── Main menu loop (options 1-6)
//! │   ├── dashboard.rs
//! │   ├── sale.rs
//! │   ├── report.rs
//! │   ├── stock.rs
//! │   └── price.rs
//! └── error.rs        ◄─── AppError shown to the operator
//! ```

pub mod cli;
pub mod commands;
pub mod console;
pub mod error;
pub mod state;
pub mod table;

use chrono::Local;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Args;
use console::{Console, Terminal};
use error::AppResult;
use pertashop_store::Storage;
use state::{AppConfig, Station};

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber on stderr, RUST_LOG overrides                  │
/// │     • Default: WARN (-v: INFO, DEBUG for pertashop crates)              │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • --config or platform config dir, then env, then --data-dir        │
/// │     • Invalid file: warn and use defaults                               │
/// │                                                                         │
/// │  3. Open Storage ─────────────────────────────────────────────────────► │
/// │     • Create the data directory if missing                              │
/// │     • Load stok_bbm.csv (defaults) and penjualan.csv (empty)            │
/// │                                                                         │
/// │  4. Dispatch ─────────────────────────────────────────────────────────► │
/// │     • Subcommand: run once, exit code reflects the result               │
/// │     • No subcommand: interactive menu until option 6 or Ctrl-D          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e.message);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info,pertashop=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn execute(args: Args) -> AppResult<()> {
    let config = AppConfig::load_or_default(args.config).with_data_dir(args.data_dir);
    let storage = Storage::open(config.storage_config())?;
    info!(data_dir = %storage.data_dir().display(), "Data directory ready");

    let mut station = Station::open(storage);
    let today = Local::now().date_naive();

    match args.command {
        Some(command) => {
            let mut out = io::stdout().lock();
            commands::run_command(command, &mut station, &config.display, &mut out, today)
        }
        None => {
            let mut console = Console::new(Terminal::new()?, io::stdout());
            commands::menu::run_menu(&mut console, &mut station, &config.display)
        }
    }
}
