//! PokeAPI response models
//!
//! Defines the DTOs deserialized from the remote API. Only the fields the
//! REPL commands use are modelled; everything else is ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
