//! # Command Handlers
//!
//! Contains specific handler functions for each supported command family
//! (`top`, `random`, `trending`, `movie`, `watchlist`, `help`).
//! These handlers are invoked by the Router.

pub mod discover;
pub mod help;
pub mod movie;
pub mod watchlist;
