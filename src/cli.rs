use clap::{Args, Parser, Subcommand};

use crate::catalog::SheetNames;

/// Default time budget in minutes.
pub const DEFAULT_TIME_BUDGET: u32 = 20;

/// dinner_picker — suggests tonight's dinner from your recipe spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "dinner_picker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe workbook (.xlsx), or a directory of CSV sheets.
    #[arg(short, long, default_value = "recipes_data.xlsx", global = true)]
    pub file: String,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub sheets: SheetArgs,
}

/// Sheet name overrides.
#[derive(Args, Debug)]
pub struct SheetArgs {
    /// Sheet listing disliked ingredients.
    #[arg(long, default_value = "dislikes", global = true)]
    pub dislikes_sheet: String,

    /// Sheet with ingredient costs.
    #[arg(long, default_value = "ingredients", global = true)]
    pub ingredients_sheet: String,

    /// Sheet with recipes.
    #[arg(long, default_value = "recipes", global = true)]
    pub recipes_sheet: String,

    /// Sheet the dinner history is appended to.
    #[arg(long, default_value = "archive", global = true)]
    pub archive_sheet: String,
}

impl SheetArgs {
    pub fn to_sheet_names(&self) -> SheetNames {
        SheetNames {
            dislikes: self.dislikes_sheet.clone(),
            ingredients: self.ingredients_sheet.clone(),
            recipes: self.recipes_sheet.clone(),
            archive: self.archive_sheet.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Suggest a dinner and record where you ate it.
    Suggest {
        /// Minutes available for cooking.
        #[arg(short, long, default_value_t = DEFAULT_TIME_BUDGET, conflicts_with = "any_time")]
        time: u32,

        /// Ignore preparation time entirely.
        #[arg(long)]
        any_time: bool,

        /// Where you ate; skips the prompt.
        #[arg(short, long)]
        location: Option<String>,

        /// Seed for a reproducible pick.
        #[arg(long)]
        seed: Option<u64>,

        /// Do not append the choice to the archive.
        #[arg(long)]
        no_log: bool,
    },

    /// List recipes with their time and cost.
    List {
        /// Only show recipes that fit in this many minutes.
        #[arg(short, long)]
        time: Option<u32>,

        /// Show every recipe, including ones with disliked ingredients.
        #[arg(long, conflicts_with = "time")]
        all: bool,
    },

    /// Show past dinner choices.
    History {
        /// Only show the most recent N entries.
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print entries as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// Time ceiling requested by `suggest`.
    pub fn time_limit(time: u32, any_time: bool) -> Option<u32> {
        if any_time { None } else { Some(time) }
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Suggest {
            time: DEFAULT_TIME_BUDGET,
            any_time: false,
            location: None,
            seed: None,
            no_log: false,
        }
    }
}
