//! # Main Entry Point
//!
//! Wires the layers together:
//! - Domain: Configuration, Commands and Types
//! - Infrastructure: Matrix, TMDB
//! - Application: Router, Parsing, Watchlist Store, Logging
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::application::logging::init_logging;
use crate::application::router::CommandRouter;
use crate::application::watchlist::WatchlistStore;
use crate::domain::config::AppConfig;
use crate::domain::traits::{CatalogProvider, ChatProvider};
use crate::infrastructure::matrix::MatrixService;
use crate::infrastructure::tmdb::TmdbClient;
use crate::strings::{logs, messages};

const ANNOUNCE_TIMEOUT: Duration = Duration::from_secs(60);
const ANNOUNCE_POLL: Duration = Duration::from_secs(2);

/// Matrix movie recommendation bot backed by TMDB.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(long, env = "CINEBOT_CONFIG", default_value = "data/config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&args.config)?;

    // 2. Logging Setup
    let _guard = init_logging(&config.logging)?;
    tracing::info!("{}", logs::config_loaded(&args.config.display().to_string()));
    tracing::info!("{}", logs::STARTING);

    // 3. Infrastructure (fail fast on missing secrets)
    let password = config.services.matrix.password()?;
    let catalog: Arc<dyn CatalogProvider> = Arc::new(TmdbClient::new(&config.services.catalog)?);

    // 4. Application
    let router = Arc::new(CommandRouter::new(catalog, WatchlistStore::new().shared()));

    // 5. Matrix Setup
    let matrix = &config.services.matrix;
    let client = Client::builder()
        .homeserver_url(&matrix.homeserver)
        .build()
        .await
        .context("Failed to build Matrix client")?;

    client
        .matrix_auth()
        .login_username(&matrix.username, &password)
        .send()
        .await
        .context("Matrix login failed")?;

    tracing::info!("{}", logs::logged_in(&matrix.username));

    if let Some(name) = &matrix.display_name {
        tracing::info!("{}", logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    // 6. Startup Announcement
    let announce_rooms: HashSet<String> = config.bot.announce_rooms.iter().cloned().collect();
    if !announce_rooms.is_empty() {
        tokio::spawn(announce_ready(client.clone(), announce_rooms));
    }

    // 7. Event Handlers
    let start_time = SystemTime::now();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            let event_time = UNIX_EPOCH + Duration::from_millis(ev.origin_server_ts().get().into());
            if event_time < start_time {
                return;
            }

            let MessageType::Text(text_content) = &original_msg.content.msgtype else {
                return;
            };
            if original_msg.sender == room.own_user_id() {
                return;
            }

            let body = &text_content.body;
            tracing::info!(
                "{}",
                logs::incoming_message(room.room_id().as_str(), original_msg.sender.as_str(), body)
            );

            let chat = MatrixService::new(room);
            if let Err(e) = router
                .route(&chat, body, original_msg.sender.as_str())
                .await
            {
                tracing::error!("{}", logs::route_fail(&e.to_string()));
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
            if let Err(e) = room.join().await {
                tracing::error!(
                    "{}",
                    logs::invite_join_fail(room.room_id().as_str(), &e.to_string())
                );
            }
        }
    });

    // 8. Sync Loop
    tracing::info!("{}", logs::SYNC_LOOP_START);
    if let Err(e) = client.sync(SyncSettings::default()).await {
        tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
        return Err(e).context("Matrix sync loop stopped");
    }

    Ok(())
}

/// Waits for the first sync to populate joined rooms, then greets every
/// configured announce room once.
async fn announce_ready(client: Client, announce_rooms: HashSet<String>) {
    let start = Instant::now();

    loop {
        if start.elapsed() > ANNOUNCE_TIMEOUT {
            tracing::warn!("{}", logs::ANNOUNCE_TIMEOUT);
            return;
        }

        let rooms = client.joined_rooms();
        if !rooms.is_empty() {
            for room in rooms {
                if !announce_rooms.contains(room.room_id().as_str()) {
                    continue;
                }
                let chat = MatrixService::new(room);
                if let Err(e) = chat.send_message(messages::READY).await {
                    tracing::error!("{}", logs::announce_fail(&chat.room_id(), &e));
                }
            }
            return;
        }

        tokio::time::sleep(ANNOUNCE_POLL).await;
    }
}
