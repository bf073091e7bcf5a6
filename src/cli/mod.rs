//! Command-line parsing for the restaurant picker.
//!
//! Clap handles the surface (flags, help, version). Values are taken as text and
//! validated here so that every input problem maps to the same exit code.

use clap::Parser;

use crate::domain::{FilterConfig, Meal, MenuTypeId};
use crate::error::AppError;

const EXAMPLES: &str = "\
Examples:
  $ rw --meal dinner --menu-types 3,4 --count 3
  $ rw -m lunch -t 1,2 -c 5
  $ rw --force-api -m both -c 10";

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "rw",
    version,
    about = "Random restaurant picker for Restaurant Week",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Meal period: lunch, dinner or both.
    #[arg(short = 'm', long, default_value = "both", value_name = "MEAL")]
    pub meal: String,

    /// Menu types (1-4, comma separated). 1: Menu RW, 2: Menu +Plus, 3: Menu Premium, 4: Menu Diamond.
    #[arg(short = 't', long = "menu-types", default_value = "1,2,3,4", value_name = "TYPES")]
    pub menu_types: String,

    /// Number of restaurants to suggest.
    #[arg(short = 'c', long, default_value = "5", value_name = "N", allow_hyphen_values = true)]
    pub count: String,

    /// Ignore the cache file and fetch fresh data from the API.
    #[arg(short = 'f', long = "force-api")]
    pub force_api: bool,
}

impl Cli {
    /// Validate raw arguments into a [`FilterConfig`].
    pub fn filter_config(&self) -> Result<FilterConfig, AppError> {
        let meal = self.meal.parse::<Meal>().map_err(AppError::invalid_input)?;

        let menu_types = parse_menu_types(&self.menu_types);
        if menu_types.is_empty() {
            return Err(AppError::invalid_input(
                "At least one valid menu type (1-4) must be given.",
            ));
        }

        let count = parse_count(&self.count)?;

        Ok(FilterConfig {
            meal,
            menu_types,
            count,
            force_refresh: self.force_api,
        })
    }
}

/// Comma-separated menu type ids. Unparseable or out-of-range tokens are dropped,
/// as are repeats.
pub fn parse_menu_types(raw: &str) -> Vec<MenuTypeId> {
    let mut out = Vec::new();
    for id in raw
        .split(',')
        .filter_map(|token| token.trim().parse::<u8>().ok())
        .filter_map(MenuTypeId::new)
    {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

/// A positive integer. Values beyond `usize::MAX` saturate, since no list is that long.
pub fn parse_count(raw: &str) -> Result<usize, AppError> {
    let digits = raw.trim();
    let digits = digits.strip_prefix('+').unwrap_or(digits);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_positive());
    }

    // Only overflow can fail here.
    let count = digits.parse::<usize>().unwrap_or(usize::MAX);
    if count == 0 {
        return Err(not_positive());
    }
    Ok(count)
}

fn not_positive() -> AppError {
    AppError::invalid_input("The number of restaurants must be a positive number.")
}
