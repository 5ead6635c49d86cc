//! API Module
//!
//! Client for the remote PokeAPI, backed by the response cache.
//!
//! # Endpoints
//! - `GET /location-area/` - Paged listing of location areas
//! - `GET /location-area/{name}` - Encounters in one location area
//! - `GET /pokemon/{name}` - A single pokemon

pub mod client;

pub use client::PokeApiClient;
