//! # Watchlist Command
//!
//! Handles `watchlist <sub-command>` for the calling user. Only `add` talks to
//! the catalog; the store lock is never held across that call.

use crate::application::formatter;
use crate::application::watchlist::{AddOutcome, CreateOutcome, SharedWatchlistStore};
use crate::domain::command::{MovieQuery, WatchlistCommand, WatchlistUsage};
use crate::domain::error::CatalogError;
use crate::domain::traits::CatalogProvider;
use crate::domain::types::WatchlistEntry;
use crate::strings::messages;

pub async fn handle_watchlist(
    catalog: &dyn CatalogProvider,
    store: &SharedWatchlistStore,
    user_id: &str,
    command: WatchlistCommand,
) -> Result<String, CatalogError> {
    let reply = match command {
        WatchlistCommand::Create => match store.lock().await.create(user_id) {
            CreateOutcome::Created => messages::WATCHLIST_CREATED.to_string(),
            CreateOutcome::AlreadyExists => messages::WATCHLIST_EXISTS.to_string(),
        },
        WatchlistCommand::Add(query) => return handle_add(catalog, store, user_id, &query).await,
        WatchlistCommand::Remove(target) => {
            match store.lock().await.remove(user_id, &target.title, target.year.as_deref()) {
                Some((kind, entry)) => messages::removed(kind, &entry.title, entry.year_label()),
                None => messages::not_in_either_list(&target.title, target.year_label()),
            }
        }
        WatchlistCommand::Watched(target) => {
            match store.lock().await.mark_watched(user_id, &target.title, target.year.as_deref()) {
                Some(entry) => messages::moved_to_watched(&entry.title, entry.year_label()),
                None => messages::not_in_watchlist(&target.title, target.year_label()),
            }
        }
        WatchlistCommand::Rate { rating, target } => {
            match store
                .lock()
                .await
                .rate(user_id, &target.title, target.year.as_deref(), rating)
            {
                Some(entry) => messages::rated(&entry.title, entry.year_label(), rating),
                None => messages::not_in_watched(&target.title, target.year_label()),
            }
        }
        WatchlistCommand::See => match store.lock().await.get(user_id) {
            Some(list) if !list.is_empty() => formatter::watchlist_overview(list),
            _ => messages::NO_WATCHLIST.to_string(),
        },
        WatchlistCommand::Delete => {
            if store.lock().await.delete(user_id) {
                messages::WATCHLIST_DELETED.to_string()
            } else {
                messages::NOTHING_TO_DELETE.to_string()
            }
        }
        WatchlistCommand::Invalid(usage) => usage_message(usage).to_string(),
        WatchlistCommand::Unknown => messages::WATCHLIST_UNKNOWN.to_string(),
    };
    Ok(reply)
}

async fn handle_add(
    catalog: &dyn CatalogProvider,
    store: &SharedWatchlistStore,
    user_id: &str,
    query: &MovieQuery,
) -> Result<String, CatalogError> {
    let year = query.year.as_deref();
    if store.lock().await.has_pending(user_id, &query.title, year) {
        return Ok(messages::already_in_watchlist(&query.title, year));
    }

    let results = catalog.search(&query.title, year).await?;
    let Some(movie) = results.first() else {
        return Ok(messages::not_in_catalog(&query.title));
    };

    // The resolved title may differ from what was typed, so the store re-checks.
    let reply = match store
        .lock()
        .await
        .add(user_id, WatchlistEntry::from_movie(movie))
    {
        AddOutcome::Added(entry) => messages::added_to_watchlist(&entry.title, entry.year_label()),
        AddOutcome::Duplicate(entry) => {
            messages::already_in_watchlist(&entry.title, entry.year.as_deref())
        }
    };
    Ok(reply)
}

fn usage_message(usage: WatchlistUsage) -> &'static str {
    match usage {
        WatchlistUsage::MissingSubcommand => messages::WATCHLIST_USAGE,
        WatchlistUsage::MissingTitle => messages::PROVIDE_TITLE,
        WatchlistUsage::MissingTitleAndYear => messages::PROVIDE_TITLE_AND_YEAR,
        WatchlistUsage::MissingRateTarget => messages::PROVIDE_RATE_TARGET,
        WatchlistUsage::InvalidYear => messages::INVALID_YEAR,
        WatchlistUsage::RatingOutOfRange => messages::RATING_OUT_OF_RANGE,
    }
}
