use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use dinner_picker::catalog::{load_meal_data, SheetNames};
use dinner_picker::cli::{Cli, Command};
use dinner_picker::error::{DinnerError, Result};
use dinner_picker::interface::{
    display_history, display_history_json, display_recipes, display_suggestion,
    normalize_location, prompt_location,
};
use dinner_picker::models::HistoryEntry;
use dinner_picker::planner::{filter_recipes, suggest_dinner, Chooser, RandomChooser};
use dinner_picker::state::{open_store, ArchiveLog, TableStore};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();

    tracing::debug!("dinner_picker started with verbosity level: {}", verbose);
}

fn run(cli: Cli) -> Result<()> {
    let sheets = cli.sheets.to_sheet_names();
    let command = cli.command.unwrap_or_default();

    let needs_inputs = !matches!(command, Command::History { .. });
    if needs_inputs && !Path::new(&cli.file).exists() {
        return Err(DinnerError::Storage(format!(
            "recipe workbook not found: {}",
            cli.file
        )));
    }
    let mut store = open_store(&cli.file);

    match command {
        Command::Suggest {
            time,
            any_time,
            location,
            seed,
            no_log,
        } => cmd_suggest(
            store.as_mut(),
            &sheets,
            Command::time_limit(time, any_time),
            location,
            seed,
            no_log,
        ),
        Command::List { time, all } => cmd_list(store.as_ref(), &sheets, time, all),
        Command::History { limit, json } => cmd_history(store.as_mut(), &sheets, limit, json),
    }
}

/// Suggest a dinner, then record it in the archive.
///
/// When nothing qualifies the fallback message is still recorded unless
/// `--no-log` is given. A failed write does not retract the printed suggestion.
fn cmd_suggest(
    store: &mut dyn TableStore,
    sheets: &SheetNames,
    time_limit: Option<u32>,
    location: Option<String>,
    seed: Option<u64>,
    no_log: bool,
) -> Result<()> {
    let data = load_meal_data(store, sheets)?;

    let mut chooser: Box<dyn Chooser> = match seed {
        Some(seed) => Box::new(RandomChooser::new(StdRng::seed_from_u64(seed))),
        None => Box::new(RandomChooser::new(rand::thread_rng())),
    };

    let suggestion = suggest_dinner(&data.recipes, &data.disliked, time_limit, chooser.as_mut());
    display_suggestion(&suggestion);

    if no_log {
        return Ok(());
    }

    if suggestion.is_none_available() {
        tracing::info!("No recipe qualified; recording the fallback message");
    }

    let location = match location {
        Some(loc) => normalize_location(&loc),
        None => prompt_location()?,
    };

    let entry = HistoryEntry::at(&chrono::Local::now(), suggestion.label(), &location);
    let total = ArchiveLog::new(store, sheets.archive.as_str()).record(&entry)?;
    println!("Logged to '{}' ({} entries).", sheets.archive, total);

    Ok(())
}

/// List the recipe catalog, filtered by dislikes and time unless `all` is set.
fn cmd_list(
    store: &dyn TableStore,
    sheets: &SheetNames,
    time_limit: Option<u32>,
    all: bool,
) -> Result<()> {
    let data = load_meal_data(store, sheets)?;

    let recipes = if all {
        data.recipes.iter().collect::<Vec<_>>()
    } else {
        filter_recipes(&data.recipes, &data.disliked, time_limit)
    };

    display_recipes(&recipes);
    Ok(())
}

/// Show past dinner choices.
fn cmd_history(
    store: &mut dyn TableStore,
    sheets: &SheetNames,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut entries = ArchiveLog::new(store, sheets.archive.as_str()).entries()?;

    if let Some(limit) = limit {
        let skip = entries.len().saturating_sub(limit);
        entries.drain(..skip);
    }

    if json {
        display_history_json(&entries)
    } else {
        display_history(&entries);
        Ok(())
    }
}
