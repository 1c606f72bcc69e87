//! `finscan`: look up seafood by tag code and keep a local scan history,
//! purchase marks, and a fisherman's catch log.
//!
//! # Usage
//!
//! ```text
//! finscan scan FISH002
//! finscan history
//! finscan login fisherman
//! finscan catch add --species "Pacific Cod" --location Kodiak --weight 4.2
//! ```

mod app;
mod config;
mod view;

use std::{io::Write as _, path::PathBuf};

use anyhow::{Context, Result};
use app::App;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use config::{CliConfig, expand_tilde};
use finscan_core::{catch::NewCatch, geo::Coordinates, role::Role, scan::ScanGate};
use finscan_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "finscan", version, about = "Seafood tag lookup and catch log")]
struct Args {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE", default_value = "finscan.toml")]
  config: PathBuf,

  /// SQLite state file (overrides `store_path` from the config).
  #[arg(long, env = "FINSCAN_STORE")]
  store: Option<PathBuf>,

  /// Simulated scan latency in milliseconds (overrides `scan_delay_ms`).
  #[arg(long, value_name = "MS")]
  delay_ms: Option<u64>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Simulate scanning a tag. Picks a random catalog code when none is given.
  Scan { code: Option<String> },

  /// Show a record and its scores without recording a scan.
  Show {
    id:   String,
    #[arg(long)]
    json: bool,
  },

  /// List every catalog record with both scores.
  Catalog {
    #[arg(long)]
    json: bool,
  },

  /// Recent scans, newest first.
  History {
    /// Forget all recent scans.
    #[arg(long)]
    clear: bool,
  },

  /// Toggle the purchase mark on a record.
  Purchase { id: String },

  /// Records marked as purchased.
  Purchases,

  /// Origins of purchased records.
  Map,

  /// Store the role that selects consumer or fisherman features.
  Login { role: Role },

  Logout,

  Whoami,

  /// Fisherman catch log.
  #[command(subcommand)]
  Catch(CatchCommand),
}

#[derive(Subcommand, Debug)]
enum CatchCommand {
  /// Append a catch to the log.
  Add {
    #[arg(long)]
    species:  String,
    #[arg(long)]
    location: String,
    /// Kilograms, as a decimal.
    #[arg(long)]
    weight:   String,
    /// Calendar date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    date:     Option<NaiveDate>,
    #[arg(long, default_value = "")]
    notes:    String,
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat:      Option<f64>,
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon:      Option<f64>,
  },

  /// Show every logged catch.
  List,

  /// Delete the whole catch log.
  Clear,

  /// Print a tag for a logged catch.
  Label { id: String },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();
  let mut cfg = CliConfig::load(&args.config)?;
  if let Some(ms) = args.delay_ms {
    cfg.scan_delay_ms = ms;
  }

  let store_path = expand_tilde(args.store.as_ref().unwrap_or(&cfg.store_path));
  if let Some(parent) = store_path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("creating {}", parent.display()))?;
  }

  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let app = App::new(cfg.catalog()?, store, ScanGate::new(cfg.scan_delay()));
  let output = run(&app, args.command).await?;

  let mut stdout = std::io::stdout().lock();
  stdout.write_all(output.as_bytes())?;
  stdout.flush()?;
  Ok(())
}

async fn run(app: &App<SqliteStore>, command: Command) -> Result<String> {
  match command {
    Command::Scan { code } => {
      eprintln!("Scanning...");
      app.scan(code).await
    }
    Command::Show { id, json } => app.show(&id, json).await,
    Command::Catalog { json } => app.catalog_listing(json),
    Command::History { clear: true } => app.clear_history().await,
    Command::History { clear: false } => app.history().await,
    Command::Purchase { id } => app.toggle_purchase(&id).await,
    Command::Purchases => app.purchases().await,
    Command::Map => app.map().await,
    Command::Login { role } => app.login(role).await,
    Command::Logout => app.logout().await,
    Command::Whoami => app.whoami().await,
    Command::Catch(cmd) => run_catch(app, cmd).await,
  }
}

async fn run_catch(app: &App<SqliteStore>, command: CatchCommand) -> Result<String> {
  match command {
    CatchCommand::Add { species, location, weight, date, notes, lat, lon } => {
      let coordinates = match (lat, lon) {
        (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
        _ => None,
      };
      let input = NewCatch {
        species,
        location,
        date: date.unwrap_or_else(|| Local::now().date_naive()),
        weight,
        notes,
        coordinates,
      };
      app.log_catch(input).await
    }
    CatchCommand::List => app.catches().await,
    CatchCommand::Clear => app.clear_catches().await,
    CatchCommand::Label { id } => app.catch_label(&id).await,
  }
}
