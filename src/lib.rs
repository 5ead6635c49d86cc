//! Pokedex CLI - An interactive PokeAPI client
//!
//! Pages through location areas, explores encounters and catches creatures,
//! with API responses kept in a time-expiring in-memory cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
pub use tasks::spawn_reaper_task;
