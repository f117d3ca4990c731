//! # Watchlist Store
//!
//! In-memory mapping of user id to [`UserWatchlist`]. Constructed once at
//! startup and handed to the router; nothing here survives a restart.
//! Records are created lazily by the first write (`create` or a successful `add`).

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::types::{ListKind, Rating, UserWatchlist, WatchlistEntry};

pub type SharedWatchlistStore = Arc<Mutex<WatchlistStore>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(WatchlistEntry),
    Duplicate(WatchlistEntry),
}

#[derive(Debug, Default)]
pub struct WatchlistStore {
    lists: HashMap<String, UserWatchlist>,
}

impl WatchlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> SharedWatchlistStore {
        Arc::new(Mutex::new(self))
    }

    pub fn get(&self, user_id: &str) -> Option<&UserWatchlist> {
        self.lists.get(user_id)
    }

    /// Registers an empty record unless the user already has entries.
    pub fn create(&mut self, user_id: &str) -> CreateOutcome {
        match self.lists.get(user_id) {
            Some(list) if !list.is_empty() => CreateOutcome::AlreadyExists,
            _ => {
                self.lists.entry(user_id.to_string()).or_default();
                CreateOutcome::Created
            }
        }
    }

    /// Whether `(title, year)` is already waiting in the to-watch list.
    pub fn has_pending(&self, user_id: &str, title: &str, year: Option<&str>) -> bool {
        self.lists
            .get(user_id)
            .is_some_and(|list| list.to_watch.iter().any(|e| e.matches(title, year)))
    }

    pub fn add(&mut self, user_id: &str, entry: WatchlistEntry) -> AddOutcome {
        let list = self.lists.entry(user_id.to_string()).or_default();
        if let Some(existing) = list
            .to_watch
            .iter()
            .find(|e| e.matches(&entry.title, entry.year.as_deref()))
        {
            return AddOutcome::Duplicate(existing.clone());
        }
        list.to_watch.push(entry.clone());
        AddOutcome::Added(entry)
    }

    /// Removes the first match, looking in to-watch before watched.
    pub fn remove(
        &mut self,
        user_id: &str,
        title: &str,
        year: Option<&str>,
    ) -> Option<(ListKind, WatchlistEntry)> {
        let list = self.lists.get_mut(user_id)?;
        if let Some(entry) = take_matching(&mut list.to_watch, title, year) {
            return Some((ListKind::ToWatch, entry));
        }
        take_matching(&mut list.watched, title, year).map(|entry| (ListKind::Watched, entry))
    }

    /// Moves an entry from to-watch to watched, clearing any rating.
    pub fn mark_watched(
        &mut self,
        user_id: &str,
        title: &str,
        year: Option<&str>,
    ) -> Option<WatchlistEntry> {
        let list = self.lists.get_mut(user_id)?;
        let mut entry = take_matching(&mut list.to_watch, title, year)?;
        entry.rating = None;
        list.watched.push(entry.clone());
        Some(entry)
    }

    /// Rates an entry that is already in the watched list.
    pub fn rate(
        &mut self,
        user_id: &str,
        title: &str,
        year: Option<&str>,
        rating: Rating,
    ) -> Option<WatchlistEntry> {
        let entry = self
            .lists
            .get_mut(user_id)?
            .watched
            .iter_mut()
            .find(|e| e.matches(title, year))?;
        entry.rating = Some(rating);
        Some(entry.clone())
    }

    pub fn delete(&mut self, user_id: &str) -> bool {
        self.lists.remove(user_id).is_some()
    }
}

fn take_matching(
    entries: &mut Vec<WatchlistEntry>,
    title: &str,
    year: Option<&str>,
) -> Option<WatchlistEntry> {
    let index = entries.iter().position(|e| e.matches(title, year))?;
    Some(entries.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = "@alice:example.org";

    fn entry(title: &str, year: Option<&str>) -> WatchlistEntry {
        WatchlistEntry {
            title: title.to_string(),
            year: year.map(str::to_string),
            catalog_id: 42,
            rating: None,
        }
    }

    fn store_with_dune() -> WatchlistStore {
        let mut store = WatchlistStore::new();
        store.add(USER, entry("Dune", Some("2021")));
        store
    }

    #[test]
    fn test_create_is_lazy_and_idempotent_while_empty() {
        let mut store = WatchlistStore::new();
        assert!(store.get(USER).is_none());
        assert_eq!(store.create(USER), CreateOutcome::Created);
        assert_eq!(store.create(USER), CreateOutcome::Created);
        assert!(store.get(USER).is_some_and(UserWatchlist::is_empty));
    }

    #[test]
    fn test_create_with_entries_reports_existing() {
        let mut store = store_with_dune();
        assert_eq!(store.create(USER), CreateOutcome::AlreadyExists);
        assert_eq!(store.get(USER).unwrap().to_watch.len(), 1);
    }

    #[test]
    fn test_duplicate_add_rejected() {
        let mut store = store_with_dune();
        assert!(store.has_pending(USER, "DUNE", Some("2021")));
        assert!(!store.has_pending(USER, "dune", None));

        let outcome = store.add(USER, entry("dune", Some("2021")));
        assert!(matches!(outcome, AddOutcome::Duplicate(_)));
        assert_eq!(store.get(USER).unwrap().to_watch.len(), 1);

        let outcome = store.add(USER, entry("Dune", Some("1984")));
        assert!(matches!(outcome, AddOutcome::Added(_)));
        assert_eq!(store.get(USER).unwrap().to_watch.len(), 2);
    }

    #[test]
    fn test_mark_watched_moves_entry() {
        let mut store = store_with_dune();
        let moved = store.mark_watched(USER, "dune", Some("2021")).unwrap();
        assert_eq!(moved.title, "Dune");
        assert_eq!(moved.rating, None);

        let list = store.get(USER).unwrap();
        assert!(list.to_watch.is_empty());
        assert_eq!(list.watched.len(), 1);

        assert!(store.mark_watched(USER, "dune", Some("2021")).is_none());
    }

    #[test]
    fn test_rate_only_watched_entries() {
        let mut store = store_with_dune();
        let seven = Rating::new(7).unwrap();
        assert!(store.rate(USER, "dune", Some("2021"), seven).is_none());

        store.mark_watched(USER, "dune", Some("2021"));
        let rated = store.rate(USER, "Dune", Some("2021"), seven).unwrap();
        assert_eq!(rated.rating, Some(seven));
        assert_eq!(store.get(USER).unwrap().watched[0].rating, Some(seven));
    }

    #[test]
    fn test_remove_prefers_to_watch() {
        let mut store = WatchlistStore::new();
        store.add(USER, entry("Alien", Some("1979")));
        store.mark_watched(USER, "alien", Some("1979"));
        // Re-adding after watching puts the same title in both lists.
        store.add(USER, entry("Alien", Some("1979")));

        let (kind, _) = store.remove(USER, "alien", Some("1979")).unwrap();
        assert_eq!(kind, ListKind::ToWatch);
        let (kind, _) = store.remove(USER, "alien", Some("1979")).unwrap();
        assert_eq!(kind, ListKind::Watched);
        assert!(store.remove(USER, "alien", Some("1979")).is_none());
    }

    #[test]
    fn test_undated_entry_addressed_without_year() {
        let mut store = WatchlistStore::new();
        store.add(USER, entry("Heat", None));
        assert!(store.mark_watched(USER, "heat", Some("1995")).is_none());

        let moved = store.mark_watched(USER, "heat", None).unwrap();
        assert_eq!(moved.year_label(), "Unknown");
        let rated = store.rate(USER, "HEAT", None, Rating::new(8).unwrap()).unwrap();
        assert_eq!(rated.rating, Rating::new(8));

        let (kind, _) = store.remove(USER, "heat", None).unwrap();
        assert_eq!(kind, ListKind::Watched);
        assert!(store.get(USER).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_user_operations() {
        let mut store = WatchlistStore::new();
        assert!(store.remove(USER, "dune", Some("2021")).is_none());
        assert!(store.mark_watched(USER, "dune", Some("2021")).is_none());
        assert!(!store.delete(USER));
        assert!(store.get(USER).is_none());
    }

    #[test]
    fn test_delete_drops_record() {
        let mut store = store_with_dune();
        assert!(store.delete(USER));
        assert!(store.get(USER).is_none());
        assert!(!store.delete(USER));
    }

    #[test]
    fn test_users_are_isolated() {
        let store = store_with_dune();
        assert!(!store.has_pending("@bob:example.org", "dune", Some("2021")));
        assert!(store.get("@bob:example.org").is_none());
    }
}
