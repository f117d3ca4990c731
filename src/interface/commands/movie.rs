//! # Movie Command
//!
//! Handles `movie <name> [year]`: details of the best search hit plus up to
//! five similar titles.

use crate::application::formatter;
use crate::domain::command::MovieQuery;
use crate::domain::error::CatalogError;
use crate::domain::traits::CatalogProvider;
use crate::strings::messages;

const SIMILAR_LIMIT: usize = 5;

pub async fn handle_movie(
    catalog: &dyn CatalogProvider,
    query: &MovieQuery,
) -> Result<String, CatalogError> {
    let results = catalog.search(&query.title, query.year.as_deref()).await?;
    let Some(movie) = results.into_iter().next() else {
        return Ok(messages::MOVIE_NOT_FOUND.to_string());
    };

    let mut similar = catalog.similar(movie.id).await?;
    similar.truncate(SIMILAR_LIMIT);

    Ok(formatter::movie_details(&movie, &similar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{FakeCatalog, movie};

    #[tokio::test]
    async fn test_not_found() {
        let catalog = FakeCatalog::default();
        let query = MovieQuery {
            title: "nothing like this".to_string(),
            year: None,
        };
        let reply = handle_movie(&catalog, &query).await.unwrap();
        assert_eq!(reply, messages::MOVIE_NOT_FOUND);
        assert_eq!(catalog.calls(), vec!["search nothing like this".to_string()]);
    }

    #[tokio::test]
    async fn test_details_with_at_most_five_similar() {
        let similar = (10..18).map(|i| movie(i, &format!("Similar {i}"), "2012-01-01")).collect();
        let catalog = FakeCatalog::default()
            .with_search("inception", vec![movie(27205, "Inception", "2010-07-15")])
            .with_similar(27205, similar);
        let query = MovieQuery {
            title: "inception".to_string(),
            year: None,
        };

        let reply = handle_movie(&catalog, &query).await.unwrap();
        assert!(reply.starts_with("**Inception (2010)**\nAbout Inception.\n"));
        assert_eq!(reply.matches("\n- Similar").count(), 5);
        assert_eq!(
            catalog.calls(),
            vec!["search inception".to_string(), "similar 27205".to_string()]
        );
    }

    #[tokio::test]
    async fn test_year_narrows_search() {
        let catalog = FakeCatalog::default().with_search(
            "dune",
            vec![movie(841, "Dune", "1984-12-14"), movie(438631, "Dune", "2021-09-15")],
        );
        let query = MovieQuery {
            title: "dune".to_string(),
            year: Some("2021".to_string()),
        };

        let reply = handle_movie(&catalog, &query).await.unwrap();
        assert!(reply.starts_with("**Dune (2021)**"));
        assert!(reply.ends_with(messages::NO_SIMILAR));
        assert_eq!(catalog.calls()[0], "search dune year=2021");
    }
}
