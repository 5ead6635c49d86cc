//! Location area DTOs
//!
//! The subset of the `location-area` endpoints used by `map`, `mapb` and `explore`.

use serde::{Deserialize, Serialize};

/// A named link to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Creates a new NamedResource
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One page of `GET /location-area/`.
///
/// `next` and `previous` hold absolute page URLs, or nothing at either end
/// of the listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationAreaPage {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Body of `GET /location-area/{name}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A creature that can be encountered in a location area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}
