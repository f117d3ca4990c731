//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (ChatProvider, CatalogProvider).

pub mod matrix;
pub mod tmdb;
