//! Session Module
//!
//! Everything a command may read or change lives here and is passed to the
//! command explicitly.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::api::PokeApiClient;
use crate::models::LocationAreaPage;
use crate::repl::{CommandRegistry, Pokedex};

// == Pagination ==
/// Position in the location area listing.
#[derive(Debug, Clone, Default)]
pub struct Pagination {
    /// URL of the page after the one last shown
    pub next: Option<String>,
    /// URL of the page before the one last shown
    pub previous: Option<String>,
    started: bool,
}

impl Pagination {
    // == Update ==
    /// Moves the cursors to the neighbours of `page`.
    pub fn update(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
        self.started = true;
    }

    // == Is Started ==
    /// Returns true once any page has been shown.
    pub fn is_started(&self) -> bool {
        self.started
    }
}

// == Session ==
/// State shared by every command of one REPL run.
#[derive(Debug)]
pub struct Session {
    pub client: PokeApiClient,
    pub registry: CommandRegistry,
    pub pagination: Pagination,
    pub pokedex: Pokedex,
    pub rng: StdRng,
}

impl Session {
    // == Constructor ==
    /// Creates a session with the standard commands and an entropy-seeded RNG.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Creates a session with a caller-provided RNG.
    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        Self {
            client,
            registry: CommandRegistry::default(),
            pagination: Pagination::default(),
            pokedex: Pokedex::new(),
            rng,
        }
    }
}
