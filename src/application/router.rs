//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It parses the text into a `Command`, dispatches it with the shared catalog and
//! watchlist store, and sends the reply back through the chat provider.

use anyhow::Result;
use std::sync::Arc;

use crate::application::parsing::parse_command;
use crate::application::watchlist::SharedWatchlistStore;
use crate::domain::command::Command;
use crate::domain::error::CatalogError;
use crate::domain::traits::{CatalogProvider, ChatProvider};
use crate::interface::commands;
use crate::strings::{logs, messages};

pub struct CommandRouter {
    catalog: Arc<dyn CatalogProvider>,
    watchlists: SharedWatchlistStore,
}

impl CommandRouter {
    pub fn new(catalog: Arc<dyn CatalogProvider>, watchlists: SharedWatchlistStore) -> Self {
        Self {
            catalog,
            watchlists,
        }
    }

    /// Handles one chat message end to end. Catalog failures are logged and
    /// answered with a generic reply; only a failed send is returned as an error.
    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider,
    {
        let _ = chat.typing(true).await;

        let reply = match self.respond(sender, message).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(endpoint = e.endpoint(), "{}", logs::catalog_fail(&e.to_string()));
                messages::CATALOG_UNAVAILABLE.to_string()
            }
        };

        let _ = chat.typing(false).await;

        chat.send_message(&reply)
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!(e))
    }

    /// Produces the reply text for `message` sent by `sender`.
    pub async fn respond(&self, sender: &str, message: &str) -> Result<String, CatalogError> {
        let command = parse_command(message);
        tracing::info!(
            "Router dispatching cmd='{}' sender='{}'",
            command.name(),
            sender
        );

        let catalog = self.catalog.as_ref();
        match command {
            Command::Top(args) => commands::discover::handle_top(catalog, &args).await,
            Command::Random(args) => commands::discover::handle_random(catalog, &args).await,
            Command::Trending(args) => commands::discover::handle_trending(catalog, &args).await,
            Command::Movie(query) => commands::movie::handle_movie(catalog, &query).await,
            Command::Watchlist(cmd) => {
                commands::watchlist::handle_watchlist(catalog, &self.watchlists, sender, cmd).await
            }
            Command::Help => Ok(commands::help::handle_help()),
            Command::Unrecognized => Ok(messages::UNRECOGNIZED.to_string()),
        }
    }
}
