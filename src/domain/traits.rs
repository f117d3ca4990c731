//! # Domain Traits
//!
//! Abstract interfaces for the external collaborators (Chat, Catalog).
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;

use crate::domain::error::CatalogError;
use crate::domain::types::{DiscoverQuery, Movie};

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the room
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Send a typing indicator
    async fn typing(&self, active: bool) -> Result<(), String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Abstract interface for the movie metadata catalog.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Filtered listing, sorted as requested.
    async fn discover(&self, query: &DiscoverQuery) -> Result<Vec<Movie>, CatalogError>;

    /// Title search, optionally narrowed to a release year.
    async fn search(&self, title: &str, year: Option<&str>) -> Result<Vec<Movie>, CatalogError>;

    /// Titles the catalog considers similar to `movie_id`.
    async fn similar(&self, movie_id: u64) -> Result<Vec<Movie>, CatalogError>;

    /// Today's trending feed.
    async fn trending(&self) -> Result<Vec<Movie>, CatalogError>;
}
