//! In-memory stand-ins for the catalog and chat collaborators, used by unit tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::error::CatalogError;
use crate::domain::traits::{CatalogProvider, ChatProvider};
use crate::domain::types::{DiscoverQuery, Movie};

pub fn movie(id: u64, title: &str, release_date: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        release_date: Some(release_date.to_string()),
        vote_average: 7.5,
        overview: Some(format!("About {title}.")),
    }
}

/// Catalog that answers from fixed data and records every call.
#[derive(Default)]
pub struct FakeCatalog {
    listing: Vec<Movie>,
    search: HashMap<String, Vec<Movie>>,
    similar: HashMap<u64, Vec<Movie>>,
    failing: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    /// `movies` answers both discover and trending.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            listing: movies,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, title: &str, results: Vec<Movie>) -> Self {
        self.search.insert(title.to_lowercase(), results);
        self
    }

    pub fn with_similar(mut self, movie_id: u64, results: Vec<Movie>) -> Self {
        self.similar.insert(movie_id, results);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), CatalogError> {
        self.calls.lock().unwrap().push(call.clone());
        if self.failing {
            return Err(CatalogError::Transport {
                endpoint: call,
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogProvider for FakeCatalog {
    async fn discover(&self, query: &DiscoverQuery) -> Result<Vec<Movie>, CatalogError> {
        let mut call = format!("discover {}", query.sort.as_param());
        if let Some(genre) = query.genre {
            call.push_str(&format!(" genre={}", genre.catalog_id()));
        }
        if let Some(year) = &query.year {
            call.push_str(&format!(" year={year}"));
        }
        self.record(call)?;
        Ok(self.listing.clone())
    }

    async fn search(&self, title: &str, year: Option<&str>) -> Result<Vec<Movie>, CatalogError> {
        let call = match year {
            Some(year) => format!("search {title} year={year}"),
            None => format!("search {title}"),
        };
        self.record(call)?;
        Ok(self
            .search
            .get(&title.to_lowercase())
            .map(|movies| {
                movies
                    .iter()
                    .filter(|m| year.is_none() || m.year() == year)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn similar(&self, movie_id: u64) -> Result<Vec<Movie>, CatalogError> {
        self.record(format!("similar {movie_id}"))?;
        Ok(self.similar.get(&movie_id).cloned().unwrap_or_default())
    }

    async fn trending(&self) -> Result<Vec<Movie>, CatalogError> {
        self.record("trending".to_string())?;
        Ok(self.listing.clone())
    }
}

/// Chat room that keeps every message it was asked to send and every typing
/// toggle. While `failing` is set, sends are rejected.
#[derive(Default)]
pub struct FakeChat {
    sent: Mutex<Vec<String>>,
    typing: Mutex<Vec<bool>>,
    failing: AtomicBool,
}

impl FakeChat {
    pub fn failing() -> Self {
        let chat = Self::default();
        chat.set_failing(true);
        chat
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn typing_calls(&self) -> Vec<bool> {
        self.typing.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for FakeChat {
    async fn send_message(&self, content: &str) -> Result<String, String> {
        if self.failing.load(Ordering::SeqCst) {
            return Err("M_FORBIDDEN: not allowed to send".to_string());
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(content.to_string());
        Ok(format!("$event{}", sent.len()))
    }

    async fn typing(&self, active: bool) -> Result<(), String> {
        self.typing.lock().unwrap().push(active);
        Ok(())
    }

    fn room_id(&self) -> String {
        "!movies:example.org".to_string()
    }
}
