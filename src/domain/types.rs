//! # Domain Types
//!
//! Common data structures used across the bot: catalog movies, genre filters,
//! and the per-user watchlist records.

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown wherever a release year is missing.
pub const UNKNOWN_YEAR: &str = "Unknown";

/// A single movie as returned by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default)]
    pub overview: Option<String>,
}

/// TMDB sends explicit `null` for some fields on sparse records.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Movie {
    /// Release year taken from the first four characters of the release date.
    pub fn year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .map(str::trim)
            .filter(|date| !date.is_empty())
            .map(|date| date.get(..4).unwrap_or(date))
    }

    pub fn overview(&self) -> Option<&str> {
        self.overview.as_deref().map(str::trim).filter(|o| !o.is_empty())
    }
}

/// Genre vocabulary accepted by the filter grammar, mapped to catalog genre ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Drama,
    Documentary,
    Family,
    History,
    Music,
    Fantasy,
    War,
    Western,
    Horror,
    Mystery,
    Romance,
    SciFi,
    Thriller,
}

impl Genre {
    pub const ALL: [Genre; 18] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Comedy,
        Genre::Crime,
        Genre::Drama,
        Genre::Documentary,
        Genre::Family,
        Genre::History,
        Genre::Music,
        Genre::Fantasy,
        Genre::War,
        Genre::Western,
        Genre::Horror,
        Genre::Mystery,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "action",
            Genre::Adventure => "adventure",
            Genre::Animation => "animation",
            Genre::Comedy => "comedy",
            Genre::Crime => "crime",
            Genre::Drama => "drama",
            Genre::Documentary => "documentary",
            Genre::Family => "family",
            Genre::History => "history",
            Genre::Music => "music",
            Genre::Fantasy => "fantasy",
            Genre::War => "war",
            Genre::Western => "western",
            Genre::Horror => "horror",
            Genre::Mystery => "mystery",
            Genre::Romance => "romance",
            Genre::SciFi => "sci-fi",
            Genre::Thriller => "thriller",
        }
    }

    /// TMDB genre id used for the `with_genres` filter.
    pub fn catalog_id(&self) -> u32 {
        match self {
            Genre::Action => 28,
            Genre::Adventure => 12,
            Genre::Animation => 16,
            Genre::Comedy => 35,
            Genre::Crime => 80,
            Genre::Drama => 18,
            Genre::Documentary => 99,
            Genre::Family => 10751,
            Genre::History => 36,
            Genre::Music => 10402,
            Genre::Fantasy => 14,
            Genre::War => 10752,
            Genre::Western => 37,
            Genre::Horror => 27,
            Genre::Mystery => 9648,
            Genre::Romance => 10749,
            Genre::SciFi => 878,
            Genre::Thriller => 53,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.to_lowercase();
        Self::ALL.into_iter().find(|g| g.as_str() == token)
    }
}

/// Sort order for catalog discovery queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    RatingDesc,
    PopularityDesc,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::RatingDesc => "vote_average.desc",
            SortOrder::PopularityDesc => "popularity.desc",
        }
    }
}

/// Filtered discovery request against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverQuery {
    pub sort: SortOrder,
    pub genre: Option<Genre>,
    pub year: Option<String>,
}

/// A user rating, always within 1..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Option<Self> {
        (1..=10).contains(&value).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Which half of a watchlist an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    ToWatch,
    Watched,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub title: String,
    pub year: Option<String>,
    pub catalog_id: u64,
    pub rating: Option<Rating>,
}

impl WatchlistEntry {
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.year().map(str::to_string),
            catalog_id: movie.id,
            rating: None,
        }
    }

    pub fn year_label(&self) -> &str {
        self.year.as_deref().unwrap_or(UNKNOWN_YEAR)
    }

    /// Case-insensitive title match plus exact year match.
    pub fn matches(&self, title: &str, year: Option<&str>) -> bool {
        normalize_title(&self.title) == normalize_title(title) && self.year.as_deref() == year
    }
}

/// The to-watch and watched lists of one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserWatchlist {
    pub to_watch: Vec<WatchlistEntry>,
    pub watched: Vec<WatchlistEntry>,
}

impl UserWatchlist {
    pub fn is_empty(&self) -> bool {
        self.to_watch.is_empty() && self.watched.is_empty()
    }
}

/// Lowercases and collapses whitespace so titles compare the same way everywhere.
pub fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
