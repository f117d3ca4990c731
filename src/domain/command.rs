//! # Commands
//!
//! The closed set of commands the bot understands. Each variant carries its
//! already-parsed arguments; parsing lives in `application::parsing`.

use crate::domain::types::{Genre, Rating, UNKNOWN_YEAR};

/// Number of movies listed when the user does not ask for a count.
pub const DEFAULT_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Top(FilterArgs),
    Random(FilterArgs),
    Trending(FilterArgs),
    Movie(MovieQuery),
    Watchlist(WatchlistCommand),
    Help,
    Unrecognized,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Top(_) => "top",
            Command::Random(_) => "random",
            Command::Trending(_) => "trending",
            Command::Movie(_) => "movie",
            Command::Watchlist(_) => "watchlist",
            Command::Help => "help",
            Command::Unrecognized => "unrecognized",
        }
    }
}

/// Count, year and genre filters shared by `top`, `random` and `trending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterArgs {
    pub count: usize,
    pub year: Option<String>,
    pub genre: Option<Genre>,
}

impl Default for FilterArgs {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            year: None,
            genre: None,
        }
    }
}

impl FilterArgs {
    pub fn has_filters(&self) -> bool {
        self.year.is_some() || self.genre.is_some()
    }
}

/// A title with an optional release year, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    pub title: String,
    pub year: Option<String>,
}

/// A title with a mandatory year, used to address existing entries. The year
/// is `None` when the user typed `unknown` for an undated entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRef {
    pub title: String,
    pub year: Option<String>,
}

impl EntryRef {
    pub fn year_label(&self) -> &str {
        self.year.as_deref().unwrap_or(UNKNOWN_YEAR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchlistCommand {
    Create,
    Add(MovieQuery),
    Remove(EntryRef),
    Watched(EntryRef),
    Rate { rating: Rating, target: EntryRef },
    See,
    Delete,
    /// Recognised shape but unusable arguments.
    Invalid(WatchlistUsage),
    Unknown,
}

/// Corrective messages for malformed watchlist arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchlistUsage {
    MissingSubcommand,
    MissingTitle,
    MissingTitleAndYear,
    MissingRateTarget,
    InvalidYear,
    RatingOutOfRange,
}
