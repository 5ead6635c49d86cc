//! Pokedex Module
//!
//! The session's collection of caught creatures and the catch roll.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::Pokemon;

// == Caught Pokemon ==
/// A creature in the collection, with the moment it was caught.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

// == Pokedex ==
/// The session's collection of caught creatures, ordered by name.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, CaughtPokemon>,
}

impl Pokedex {
    // == Constructor ==
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Records a catch. Catching the same creature again refreshes the entry.
    pub fn add(&mut self, pokemon: Pokemon) {
        let caught = CaughtPokemon {
            pokemon,
            caught_at: Utc::now(),
        };
        self.caught.insert(caught.pokemon.name.clone(), caught);
    }

    // == Get ==
    /// Returns the caught creature named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.caught.get(name)
    }

    // == Names ==
    /// Names of every caught creature in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }

    // == Length ==
    /// Returns the number of caught creatures.
    pub fn len(&self) -> usize {
        self.caught.len()
    }

    // == Is Empty ==
    /// Returns true if nothing has been caught yet.
    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}

// == Catch Roll ==
/// Decides a catch from a roll drawn in `[0, base_experience)`.
///
/// The roll has to beat half the base experience, rounded down. A creature
/// with no base experience is always caught.
pub fn is_caught(base_experience: u32, roll: u32) -> bool {
    base_experience == 0 || roll > base_experience / 2
}

/// Rolls for a catch against `base_experience`.
pub fn roll_catch<R: Rng + ?Sized>(base_experience: u32, rng: &mut R) -> bool {
    if base_experience == 0 {
        return true;
    }
    is_caught(base_experience, rng.gen_range(0..base_experience))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pokemon(name: &str, base_experience: u32) -> Pokemon {
        Pokemon {
            name: name.to_string(),
            base_experience,
            ..Default::default()
        }
    }

    #[test]
    fn test_catch_threshold() {
        // difficulty for 112 is 56
        assert!(!is_caught(112, 0));
        assert!(!is_caught(112, 56));
        assert!(is_caught(112, 57));
        assert!(is_caught(112, 111));
    }

    #[test]
    fn test_catch_small_base_experience() {
        // A single possible roll of 0 never beats a difficulty of 0
        assert!(!is_caught(1, 0));
        // Difficulty 1: only a roll of 2 wins
        assert!(!is_caught(3, 1));
        assert!(is_caught(3, 2));
    }

    #[test]
    fn test_zero_base_experience_always_caught() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(is_caught(0, 0));
        assert!(roll_catch(0, &mut rng));
    }

    #[test]
    fn test_roll_catch_is_roughly_fair() {
        let mut rng = StdRng::seed_from_u64(42);
        let caught = (0..2000).filter(|_| roll_catch(100, &mut rng)).count();

        // Rolls 51..=99 win: 49%
        assert!((800..1200).contains(&caught), "caught {caught} of 2000");
    }

    #[test]
    fn test_pokedex_add_and_list() {
        let mut pokedex = Pokedex::new();
        assert!(pokedex.is_empty());

        pokedex.add(pokemon("pidgey", 50));
        pokedex.add(pokemon("caterpie", 39));
        pokedex.add(pokemon("pidgey", 50));

        assert_eq!(pokedex.len(), 2);
        assert_eq!(pokedex.names().collect::<Vec<_>>(), vec!["caterpie", "pidgey"]);
        assert_eq!(pokedex.get("caterpie").unwrap().pokemon.base_experience, 39);
        assert!(pokedex.get("mew").is_none());
    }
}
