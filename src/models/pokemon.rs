//! Pokemon DTOs
//!
//! The subset of `GET /pokemon/{name}` used by `catch` and `inspect`.

use serde::{Deserialize, Deserializer, Serialize};

use super::NamedResource;

/// Body of `GET /pokemon/{name}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Some forms report `null`; those are read as 0
    #[serde(default, deserialize_with = "null_as_zero")]
    pub base_experience: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}
