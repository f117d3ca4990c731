//! # Reply Formatter
//!
//! Renders catalog results and watchlists as the markdown text sent back to chat.

use crate::domain::types::{Movie, UNKNOWN_YEAR, UserWatchlist, WatchlistEntry};
use crate::strings::messages;

/// `"{rank}. {title} ({year}) - ⭐ {rating}"`, rank starting at 1.
pub fn movie_line(rank: usize, movie: &Movie) -> String {
    format!(
        "{rank}. {} ({}) - ⭐ {:.1}",
        movie.title,
        movie.year().unwrap_or(UNKNOWN_YEAR),
        movie.vote_average
    )
}

/// Numbers at most `count` movies; never pads when fewer are available.
pub fn movie_list(movies: &[Movie], count: usize) -> String {
    movies
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, movie)| movie_line(i + 1, movie))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header followed by the numbered list, or a short note when nothing matched.
pub fn listing(header: &str, movies: &[Movie], count: usize) -> String {
    if movies.is_empty() {
        return format!("{header}\n{}", messages::NO_MATCHES);
    }
    let body = movie_list(movies, count);
    if body.is_empty() {
        header.to_string()
    } else {
        format!("{header}\n{body}")
    }
}

pub fn movie_details(movie: &Movie, similar: &[Movie]) -> String {
    let similar_text = if similar.is_empty() {
        messages::NO_SIMILAR.to_string()
    } else {
        similar
            .iter()
            .map(|m| format!("- {} ({})", m.title, m.year().unwrap_or(UNKNOWN_YEAR)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "**{} ({})**\n{}\n\n{}\n{}",
        movie.title,
        movie.year().unwrap_or(UNKNOWN_YEAR),
        movie.overview().unwrap_or(messages::NO_DESCRIPTION),
        messages::SIMILAR_HEADER,
        similar_text
    )
}

pub fn watchlist_overview(list: &UserWatchlist) -> String {
    format!(
        "**Your Watchlist**\n\n**To Watch:**\n{}\n\n**Watched:**\n{}",
        bullet_list(&list.to_watch),
        bullet_list(&list.watched)
    )
}

fn bullet_list(entries: &[WatchlistEntry]) -> String {
    if entries.is_empty() {
        return messages::EMPTY_LIST.to_string();
    }
    entries
        .iter()
        .map(|entry| match entry.rating {
            Some(rating) => format!(
                "- {} ({}) ⭐ {}/10",
                entry.title,
                entry.year_label(),
                rating.value()
            ),
            None => format!("- {} ({})", entry.title, entry.year_label()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
