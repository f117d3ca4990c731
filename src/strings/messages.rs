//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Includes usage corrections, watchlist confirmations, and list headers.

use crate::domain::types::{ListKind, Rating, UNKNOWN_YEAR};

pub const READY: &str =
    "I am ready to recommend movies. If you need a list of commands type 'help'.";
pub const UNRECOGNIZED: &str = "Command not recognized. Try: top [...], random [...], trending [...], movie [...] or watchlist [...].";
pub const CATALOG_UNAVAILABLE: &str =
    "⚠️ The movie catalog could not be reached right now. Please try again later.";

// Listings
pub const NO_MATCHES: &str = "No movies matched those filters.";

pub fn top_header(count: usize) -> String {
    format!("**Top {count} Movies:**")
}

pub fn random_header(count: usize) -> String {
    format!("**{count} Random Movies:**")
}

pub fn trending_header(count: usize) -> String {
    format!("**Top {count} Trending Movies:**")
}

// Movie details
pub const MOVIE_NOT_FOUND: &str = "Movie not found.";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_SIMILAR: &str = "No similar movies found.";
pub const SIMILAR_HEADER: &str = "**Similar Movies:**";

// Watchlist
pub const WATCHLIST_USAGE: &str =
    "Invalid command. Use 'watchlist create', 'watchlist add <movie> <year>', etc.";
pub const WATCHLIST_UNKNOWN: &str =
    "Unknown command. Use 'watchlist create', 'watchlist add <movie> <year>', etc.";
pub const PROVIDE_TITLE: &str = "Please provide a movie name.";
pub const PROVIDE_TITLE_AND_YEAR: &str = "Please provide a movie name and year.";
pub const PROVIDE_RATE_TARGET: &str = "Please provide a movie name and year to rate.";
pub const INVALID_YEAR: &str =
    "Please provide a valid 4-digit year, or 'unknown' for a movie without one.";
pub const RATING_OUT_OF_RANGE: &str = "Please provide a rating between 1 and 10.";
pub const WATCHLIST_EXISTS: &str = "You already have a watchlist.";
pub const WATCHLIST_CREATED: &str = "Your watchlist has been created!";
pub const NO_WATCHLIST: &str =
    "You don't have a watchlist yet. Create one with 'watchlist create'.";
pub const WATCHLIST_DELETED: &str = "Your watchlist has been deleted.";
pub const NOTHING_TO_DELETE: &str = "You don't have a watchlist to delete.";
pub const EMPTY_LIST: &str = "None";

pub fn already_in_watchlist(title: &str, year: Option<&str>) -> String {
    format!("'{title} ({})' is already in your watchlist.", year.unwrap_or(UNKNOWN_YEAR))
}

pub fn added_to_watchlist(title: &str, year: &str) -> String {
    format!("Added '{title} ({year})' to your watchlist.")
}

pub fn not_in_catalog(title: &str) -> String {
    format!("Movie '{title}' not found on TMDB.")
}

pub fn removed(kind: ListKind, title: &str, year: &str) -> String {
    match kind {
        ListKind::ToWatch => format!("Removed '{title} ({year})' from your watchlist."),
        ListKind::Watched => format!("Removed '{title} ({year})' from your watched list."),
    }
}

pub fn not_in_either_list(title: &str, year: &str) -> String {
    format!("'{title} ({year})' not found in your watchlist or watched list.")
}

pub fn moved_to_watched(title: &str, year: &str) -> String {
    format!("Moved '{title} ({year})' to your watched list.")
}

pub fn not_in_watchlist(title: &str, year: &str) -> String {
    format!("'{title} ({year})' not found in your watchlist.")
}

pub fn rated(title: &str, year: &str, rating: Rating) -> String {
    format!("Rated '{title} ({year})' with {}/10.", rating.value())
}

pub fn not_in_watched(title: &str, year: &str) -> String {
    format!("'{title} ({year})' not found in your watched list.")
}
