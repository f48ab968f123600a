//! Laptop CO2 calculator - main entry point
//!
//! Launches the TUI by default; subcommands give headless access to the same
//! catalog, search and comparison logic.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use laptop_co2::aggregate::Aggregate;
use laptop_co2::catalog::{Catalog, LaptopRecord};
use laptop_co2::cli::{Cli, Commands};
use laptop_co2::config_file::CalculatorConfig;
use laptop_co2::error::CalculatorError;
use laptop_co2::query::search;
use laptop_co2::report;
use laptop_co2::selection::{SelectOutcome, SelectionSet};
use laptop_co2::App;

/// Where log output goes
enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Off,
}

/// Initialize the tracing subscriber. `RUST_LOG` overrides the configured level.
fn init_logger(level: &str, target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .context("Invalid log filter")?;

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        LogTarget::File(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        LogTarget::Off => {}
    }
    Ok(())
}

/// Main application entry point
fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = CalculatorConfig::load_or_default(cli.config.as_deref())?;

    let log_target = match (&cli.command, &config.log_file) {
        (None, Some(path)) => LogTarget::File(path.as_path()),
        (None, None) => LogTarget::Off,
        (Some(_), _) => LogTarget::Stderr,
    };
    init_logger(&config.log_level, log_target)?;
    info!("Laptop CO2 calculator starting up");

    let catalog = Catalog::builtin();
    catalog.validate().map_err(CalculatorError::from)?;
    debug!(records = catalog.len(), "catalog validated");

    match cli.command {
        None => run_tui(&config),
        Some(Commands::Catalog { json }) => {
            print_records(catalog.records().iter().collect(), json)
        }
        Some(Commands::Search { term, json }) => print_records(search(&term, &catalog), json),
        Some(Commands::Compare { ids, json }) => compare(&catalog, &ids, json),
        Some(Commands::InitConfig { path }) => {
            CalculatorConfig::default().save_to_file(&path)?;
            info!("Default configuration written to {:?}", path);
            println!("✓ Default configuration written to {}", path.display());
            Ok(())
        }
        Some(Commands::Validate { path }) => {
            let config = CalculatorConfig::load_from_file(&path)?;
            config.validate()?;
            info!("Configuration validation successful");
            println!("✓ Configuration file is valid: {}", path.display());
            Ok(())
        }
    }
}

/// Run the TUI
fn run_tui(config: &CalculatorConfig) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| CalculatorError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen).map_err(|e| {
        CalculatorError::terminal(format!("Failed to enter alternate screen: {}", e))
    })?;

    let result = (|| -> Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)
            .map_err(|e| CalculatorError::terminal(format!("Failed to create terminal: {}", e)))?;
        let mut app = App::new(config);
        app.run(&mut terminal)?;
        Ok(())
    })();

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}

fn print_records(records: Vec<&LaptopRecord>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("Geen laptops gevonden.");
        return Ok(());
    }

    println!("{:>3}  {:<40} {:>6}  {:>10}", "ID", "LAPTOP", "JAAR", "KG CO2 EQ");
    for record in records {
        let badge = if record.is_refurbished { " (R)" } else { "" };
        println!(
            "{:>3}  {:<40} {:>6}  {:>10}",
            record.id,
            format!("{}{}", record.display_name(), badge),
            record.year,
            record.co2
        );
    }
    Ok(())
}

/// Build a selection from ids in order and print the report
fn compare(catalog: &Catalog<'static>, ids: &[String], json: bool) -> Result<()> {
    let mut selection = SelectionSet::new();
    for id in ids {
        let record = catalog
            .get(id)
            .ok_or_else(|| CalculatorError::unknown_id(id.as_str()))?;
        let outcome = selection.select(record);
        if let SelectOutcome::AlreadySelected(record) = outcome {
            let (message, _) = report::select_message(&outcome);
            warn!(id = record.id, "duplicate id on command line");
            eprintln!("{} ({})", message, record.display_name());
        }
    }

    let aggregate = Aggregate::from_selection(&selection);
    if json {
        let output = serde_json::json!({
            "selection": selection,
            "aggregate": aggregate,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", report::text_report(&selection, &aggregate));
    }
    Ok(())
}
