//! # Command Parsing
//!
//! Turns raw chat text into a [`Command`]. Classification is by case-insensitive
//! prefix in a fixed order: `top`, `random`, `trending`, `movie `, `watchlist`,
//! then the exact word `help`.

use crate::domain::command::{
    Command, EntryRef, FilterArgs, MovieQuery, WatchlistCommand, WatchlistUsage,
};
use crate::domain::types::{Genre, Rating, UNKNOWN_YEAR};

pub fn parse_command(input: &str) -> Command {
    let text = input.trim().to_lowercase();
    let args: Vec<&str> = text.split_whitespace().skip(1).collect();

    if text.starts_with("top") {
        Command::Top(parse_filters(args))
    } else if text.starts_with("random") {
        Command::Random(parse_filters(args))
    } else if text.starts_with("trending") {
        Command::Trending(parse_filters(args))
    } else if text.starts_with("movie ") {
        let (title, year) = split_title_year(&args);
        Command::Movie(MovieQuery { title, year })
    } else if text.starts_with("watchlist") {
        Command::Watchlist(parse_watchlist(&args))
    } else if text == "help" {
        Command::Help
    } else {
        Command::Unrecognized
    }
}

/// Parses count/year/genre tokens. Last occurrence of each wins; anything else is ignored.
pub fn parse_filters<'a>(tokens: impl IntoIterator<Item = &'a str>) -> FilterArgs {
    let mut filters = FilterArgs::default();

    for token in tokens {
        if is_year(token) {
            filters.year = Some(token.to_string());
        } else if is_digits(token) {
            if let Ok(count) = token.parse::<usize>() {
                filters.count = count;
            }
        } else if let Some(genre) = Genre::from_token(token) {
            filters.genre = Some(genre);
        }
    }

    filters
}

fn parse_watchlist(tokens: &[&str]) -> WatchlistCommand {
    let Some((sub, rest)) = tokens.split_first() else {
        return WatchlistCommand::Invalid(WatchlistUsage::MissingSubcommand);
    };

    match *sub {
        "create" => WatchlistCommand::Create,
        "add" => {
            if rest.is_empty() {
                return WatchlistCommand::Invalid(WatchlistUsage::MissingTitle);
            }
            let (title, year) = split_title_year(rest);
            WatchlistCommand::Add(MovieQuery { title, year })
        }
        "remove" => match entry_ref(rest, WatchlistUsage::MissingTitleAndYear) {
            Ok(target) => WatchlistCommand::Remove(target),
            Err(usage) => WatchlistCommand::Invalid(usage),
        },
        "watched" => match entry_ref(rest, WatchlistUsage::MissingTitleAndYear) {
            Ok(target) => WatchlistCommand::Watched(target),
            Err(usage) => WatchlistCommand::Invalid(usage),
        },
        "see" => WatchlistCommand::See,
        "delete" => WatchlistCommand::Delete,
        digits if is_digits(digits) => {
            let Some(rating) = digits.parse::<u8>().ok().and_then(Rating::new) else {
                return WatchlistCommand::Invalid(WatchlistUsage::RatingOutOfRange);
            };
            match entry_ref(rest, WatchlistUsage::MissingRateTarget) {
                Ok(target) => WatchlistCommand::Rate { rating, target },
                Err(usage) => WatchlistCommand::Invalid(usage),
            }
        }
        _ => WatchlistCommand::Unknown,
    }
}

/// `<title words...> <yyyy|unknown>`; needs at least one title word and a year.
fn entry_ref(tokens: &[&str], missing: WatchlistUsage) -> Result<EntryRef, WatchlistUsage> {
    let [title @ .., year] = tokens else {
        return Err(missing);
    };
    if title.is_empty() {
        return Err(missing);
    }
    let year = if is_year(year) {
        Some(year.to_string())
    } else if year.eq_ignore_ascii_case(UNKNOWN_YEAR) {
        None
    } else {
        return Err(WatchlistUsage::InvalidYear);
    };
    Ok(EntryRef {
        title: title.join(" "),
        year,
    })
}

/// Splits a trailing 4-digit year off a title. A lone year token is the title
/// itself (`movie 1917`).
pub fn split_title_year(tokens: &[&str]) -> (String, Option<String>) {
    match tokens {
        [title @ .., year] if !title.is_empty() && is_year(year) => {
            (title.join(" "), Some(year.to_string()))
        }
        _ => (tokens.join(" "), None),
    }
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

fn is_year(token: &str) -> bool {
    token.len() == 4 && is_digits(token)
}
