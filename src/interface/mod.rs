//! # Interface Layer
//!
//! Command handlers invoked by the router. Each returns the reply text; sending
//! it is the router's job.

pub mod commands;
