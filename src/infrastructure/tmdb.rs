//! # TMDB Catalog Client
//!
//! Implements the `CatalogProvider` trait against The Movie Database v3 API.
//! Every request is a GET on `{base_url}/{endpoint}` with the API key and
//! locale appended to the query string. No retries, no caching.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::domain::config::CatalogConfig;
use crate::domain::error::CatalogError;
use crate::domain::traits::CatalogProvider;
use crate::domain::types::{DiscoverQuery, Movie};

pub const DISCOVER_ENDPOINT: &str = "discover/movie";
pub const SEARCH_ENDPOINT: &str = "search/movie";
pub const TRENDING_ENDPOINT: &str = "trending/movie/day";

pub fn similar_endpoint(movie_id: u64) -> String {
    format!("movie/{movie_id}/similar")
}

/// One page of results; only `results` is used.
#[derive(Debug, Deserialize)]
struct ResultsPage {
    #[serde(default)]
    results: Vec<Movie>,
}

/// Error body TMDB returns with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    status_message: Option<String>,
}

pub struct TmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
    language: String,
    min_vote_count: u32,
}

impl TmdbClient {
    /// Builds the client, resolving the API key up front so a missing key fails at startup.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let api_key = config.api_key()?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            language: config.language.clone(),
            min_vote_count: config.min_vote_count,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// GET an endpoint with the given query parameters plus credentials and locale.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let mut query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        query.push(("api_key", self.api_key.as_str()));
        query.push(("language", self.language.as_str()));

        tracing::debug!("Catalog GET {} params={:?}", endpoint, params);

        let response = self
            .http
            .get(self.url(endpoint))
            .query(&query)
            .send()
            .await
            .map_err(|e| CatalogError::Transport {
                endpoint: endpoint.to_string(),
                message: e.without_url().to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| CatalogError::Transport {
            endpoint: endpoint.to_string(),
            message: e.without_url().to_string(),
        })?;

        if !status.is_success() {
            return Err(CatalogError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| CatalogError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }

    async fn fetch_results(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<Movie>, CatalogError> {
        let page: ResultsPage = self.fetch(endpoint, params).await?;
        tracing::debug!("Catalog {} returned {} results", endpoint, page.results.len());
        Ok(page.results)
    }
}

#[async_trait]
impl CatalogProvider for TmdbClient {
    async fn discover(&self, query: &DiscoverQuery) -> Result<Vec<Movie>, CatalogError> {
        self.fetch_results(DISCOVER_ENDPOINT, &discover_params(query, self.min_vote_count))
            .await
    }

    async fn search(&self, title: &str, year: Option<&str>) -> Result<Vec<Movie>, CatalogError> {
        self.fetch_results(SEARCH_ENDPOINT, &search_params(title, year))
            .await
    }

    async fn similar(&self, movie_id: u64) -> Result<Vec<Movie>, CatalogError> {
        self.fetch_results(&similar_endpoint(movie_id), &[]).await
    }

    async fn trending(&self) -> Result<Vec<Movie>, CatalogError> {
        self.fetch_results(TRENDING_ENDPOINT, &[]).await
    }
}

pub fn discover_params(query: &DiscoverQuery, min_vote_count: u32) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("sort_by", query.sort.as_param().to_string()),
        ("vote_count.gte", min_vote_count.to_string()),
    ];
    if let Some(genre) = query.genre {
        params.push(("with_genres", genre.catalog_id().to_string()));
    }
    if let Some(year) = &query.year {
        params.push(("primary_release_year", year.clone()));
    }
    params
}

pub fn search_params(title: &str, year: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = vec![("query", title.to_string())];
    if let Some(year) = year {
        params.push(("year", year.to_string()));
    }
    params
}

/// Prefer TMDB's own `status_message`, fall back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.status_message)
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Genre, SortOrder};

    fn config() -> CatalogConfig {
        CatalogConfig {
            base_url: "https://api.themoviedb.org/3/".to_string(),
            api_key: Some("test-key".to_string()),
            ..CatalogConfig::default()
        }
    }

    #[test]
    fn test_url_joining() {
        let client = TmdbClient::new(&config()).unwrap();
        assert_eq!(
            client.url("discover/movie"),
            "https://api.themoviedb.org/3/discover/movie"
        );
        assert_eq!(
            client.url(&similar_endpoint(27205)),
            "https://api.themoviedb.org/3/movie/27205/similar"
        );
    }

    #[test]
    fn test_new_requires_api_key() {
        let config = CatalogConfig {
            api_key_env: "CINEBOT_TEST_UNSET_TMDB_KEY".to_string(),
            ..CatalogConfig::default()
        };
        assert!(TmdbClient::new(&config).is_err());
    }

    #[test]
    fn test_discover_params_with_filters() {
        let query = DiscoverQuery {
            sort: SortOrder::RatingDesc,
            genre: Some(Genre::Comedy),
            year: Some("2015".to_string()),
        };
        assert_eq!(
            discover_params(&query, 1000),
            vec![
                ("sort_by", "vote_average.desc".to_string()),
                ("vote_count.gte", "1000".to_string()),
                ("with_genres", "35".to_string()),
                ("primary_release_year", "2015".to_string()),
            ]
        );
    }

    #[test]
    fn test_discover_params_popularity_without_filters() {
        let query = DiscoverQuery {
            sort: SortOrder::PopularityDesc,
            genre: None,
            year: None,
        };
        assert_eq!(
            discover_params(&query, 500),
            vec![
                ("sort_by", "popularity.desc".to_string()),
                ("vote_count.gte", "500".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_params() {
        assert_eq!(
            search_params("dune", Some("2021")),
            vec![("query", "dune".to_string()), ("year", "2021".to_string())]
        );
        assert_eq!(search_params("heat", None), vec![("query", "heat".to_string())]);
    }

    #[test]
    fn test_results_page_decoding() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 27205, "title": "Inception", "release_date": "2010-07-15",
                 "vote_average": 8.369, "overview": "Cobb steals secrets."},
                {"id": 1, "title": "No Date", "release_date": null}
            ],
            "total_pages": 1
        }"#;
        let page: ResultsPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].year(), Some("2010"));
        assert_eq!(page.results[1].vote_average, 0.0);
        assert_eq!(page.results[1].year(), None);
    }

    #[test]
    fn test_results_page_missing_results() {
        let page: ResultsPage = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"status_code": 7, "status_message": "Invalid API key: You must be granted a valid key.", "success": false}"#;
        assert_eq!(
            error_message(body),
            "Invalid API key: You must be granted a valid key."
        );
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
    }
}
