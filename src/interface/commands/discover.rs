//! # Listing Commands
//!
//! Handles `top`, `random` and `trending`. All three share the count/year/genre
//! filter grammar and render a numbered list.

use rand::seq::SliceRandom;

use crate::application::formatter;
use crate::domain::command::FilterArgs;
use crate::domain::error::CatalogError;
use crate::domain::traits::CatalogProvider;
use crate::domain::types::{DiscoverQuery, Movie, SortOrder};
use crate::strings::messages;

fn query(args: &FilterArgs, sort: SortOrder) -> DiscoverQuery {
    DiscoverQuery {
        sort,
        genre: args.genre,
        year: args.year.clone(),
    }
}

/// Highest rated movies (minimum vote threshold applies), first N.
pub async fn handle_top(
    catalog: &dyn CatalogProvider,
    args: &FilterArgs,
) -> Result<String, CatalogError> {
    let movies = catalog.discover(&query(args, SortOrder::RatingDesc)).await?;
    Ok(formatter::listing(
        &messages::top_header(args.count),
        &movies,
        args.count,
    ))
}

/// N movies drawn without replacement from the same result set `top` uses.
pub async fn handle_random(
    catalog: &dyn CatalogProvider,
    args: &FilterArgs,
) -> Result<String, CatalogError> {
    let movies = catalog.discover(&query(args, SortOrder::RatingDesc)).await?;
    let picked = sample(&movies, args.count);
    Ok(formatter::listing(
        &messages::random_header(args.count),
        &picked,
        args.count,
    ))
}

/// Trending feed when unfiltered, otherwise popularity-sorted discovery.
pub async fn handle_trending(
    catalog: &dyn CatalogProvider,
    args: &FilterArgs,
) -> Result<String, CatalogError> {
    let movies = if args.has_filters() {
        catalog
            .discover(&query(args, SortOrder::PopularityDesc))
            .await?
    } else {
        catalog.trending().await?
    };
    Ok(formatter::listing(
        &messages::trending_header(args.count),
        &movies,
        args.count,
    ))
}

fn sample(movies: &[Movie], count: usize) -> Vec<Movie> {
    let mut rng = rand::thread_rng();
    movies.choose_multiple(&mut rng, count).cloned().collect()
}
