//! # Application Layer
//!
//! Contains the core business logic and orchestration of the bot.
//! This includes command parsing and routing, the watchlist store, reply formatting and logging setup.

pub mod formatter;
pub mod logging;
pub mod parsing;
pub mod router;
pub mod watchlist;

#[cfg(test)]
pub mod testing;
