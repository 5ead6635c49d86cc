//! REPL Commands
//!
//! The command table and the behaviour of each command.

use std::io::Write;

use tracing::debug;

use crate::error::{PokedexError, Result};
use crate::repl::pokedex::roll_catch;
use crate::repl::Session;

// == Constants ==
/// Printed by `exit` and at end of input.
pub const GOODBYE: &str = "Closing the Pokedex... Goodbye!";

// == Command ==
/// Every command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// What the REPL loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

// == Command Registry ==
/// A command table entry.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub command: Command,
}

/// Command table, kept in registration order so `help` output is stable.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
}

impl CommandRegistry {
    // == Constructor ==
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    // == Register ==
    /// Adds a command, replacing any existing command with the same name.
    pub fn register(&mut self, name: &'static str, description: &'static str, command: Command) {
        let spec = CommandSpec {
            name,
            description,
            command,
        };
        match self.commands.iter_mut().find(|c| c.name == name) {
            Some(existing) => *existing = spec,
            None => self.commands.push(spec),
        }
    }

    // == Lookup ==
    /// Finds the command registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<Command> {
        self.commands
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.command)
    }

    // == Iter ==
    /// Iterates over the entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register("help", "Displays a help message", Command::Help);
        registry.register("exit", "Exit the Pokedex", Command::Exit);
        registry.register("map", "Display the next 20 location areas", Command::Map);
        registry.register(
            "mapb",
            "Display the previous 20 location areas if they exist",
            Command::MapBack,
        );
        registry.register("explore", "See all Pokemon in a location area", Command::Explore);
        registry.register("catch", "Try to catch a Pokemon", Command::Catch);
        registry.register("inspect", "Show details of a caught Pokemon", Command::Inspect);
        registry.register("pokedex", "List every caught Pokemon", Command::Pokedex);
        registry
    }
}

impl Command {
    // == Execute ==
    /// Runs the command against the session, writing user output to `out`.
    pub async fn execute<W: Write>(
        self,
        session: &mut Session,
        args: &[String],
        out: &mut W,
    ) -> Result<Control> {
        debug!(command = ?self, ?args, "executing command");

        match self {
            Command::Help => help(session, out),
            Command::Exit => {
                writeln!(out, "{GOODBYE}")?;
                Ok(Control::Exit)
            }
            Command::Map => map(session, out).await,
            Command::MapBack => map_back(session, out).await,
            Command::Explore => explore(session, args, out).await,
            Command::Catch => catch(session, args, out).await,
            Command::Inspect => inspect(session, args, out),
            Command::Pokedex => pokedex(session, out),
        }
    }
}

// == Command Handlers ==
fn help<W: Write>(session: &Session, out: &mut W) -> Result<Control> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for spec in session.registry.iter() {
        writeln!(out, "{}: {}", spec.name, spec.description)?;
    }
    Ok(Control::Continue)
}

async fn map<W: Write>(session: &mut Session, out: &mut W) -> Result<Control> {
    let url = if session.pagination.is_started() {
        match session.pagination.next.clone() {
            Some(url) => Some(url),
            None => {
                writeln!(out, "you're on the last page")?;
                return Ok(Control::Continue);
            }
        }
    } else {
        None
    };

    show_page(session, url.as_deref(), out).await
}

async fn map_back<W: Write>(session: &mut Session, out: &mut W) -> Result<Control> {
    let Some(url) = session.pagination.previous.clone() else {
        writeln!(out, "you're on the first page")?;
        return Ok(Control::Continue);
    };

    show_page(session, Some(&url), out).await
}

async fn show_page<W: Write>(
    session: &mut Session,
    url: Option<&str>,
    out: &mut W,
) -> Result<Control> {
    let page = session.client.list_location_areas(url).await?;
    session.pagination.update(&page);

    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    Ok(Control::Continue)
}

async fn explore<W: Write>(session: &mut Session, args: &[String], out: &mut W) -> Result<Control> {
    let Some(name) = args.first() else {
        return Err(PokedexError::MissingArgument("location name"));
    };

    writeln!(out, "Exploring {name}...")?;

    let area = match session.client.location_area(name).await {
        Ok(area) => area,
        Err(err) if err.is_not_found() => {
            writeln!(out, "Location {name} not found")?;
            return Ok(Control::Continue);
        }
        Err(err) => return Err(err),
    };

    if area.pokemon_encounters.is_empty() {
        writeln!(out, "No Pokemon found in this location")?;
        return Ok(Control::Continue);
    }

    writeln!(out, "Found Pokemon:")?;
    for encounter in &area.pokemon_encounters {
        writeln!(out, " - {}", encounter.pokemon.name)?;
    }
    Ok(Control::Continue)
}

async fn catch<W: Write>(session: &mut Session, args: &[String], out: &mut W) -> Result<Control> {
    let Some(name) = args.first() else {
        return Err(PokedexError::MissingArgument("Pokemon name"));
    };

    writeln!(out, "Throwing a Pokeball at {name}...")?;

    let pokemon = match session.client.pokemon(name).await {
        Ok(pokemon) => pokemon,
        Err(err) if err.is_not_found() => {
            writeln!(out, "Pokemon not found")?;
            return Ok(Control::Continue);
        }
        Err(err) => return Err(err),
    };

    if roll_catch(pokemon.base_experience, &mut session.rng) {
        writeln!(out, "{} was caught!", pokemon.name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        session.pokedex.add(pokemon);
    } else {
        writeln!(out, "{} escaped!", pokemon.name)?;
    }
    Ok(Control::Continue)
}

fn inspect<W: Write>(session: &Session, args: &[String], out: &mut W) -> Result<Control> {
    let Some(name) = args.first() else {
        return Err(PokedexError::MissingArgument("Pokemon name"));
    };

    let Some(caught) = session.pokedex.get(name) else {
        writeln!(out, "you have not caught that pokemon")?;
        return Ok(Control::Continue);
    };

    let pokemon = &caught.pokemon;
    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for pokemon_type in &pokemon.types {
        writeln!(out, "  - {}", pokemon_type.type_.name)?;
    }
    writeln!(
        out,
        "Caught: {}",
        caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    Ok(Control::Continue)
}

fn pokedex<W: Write>(session: &Session, out: &mut W) -> Result<Control> {
    if session.pokedex.is_empty() {
        writeln!(out, "Your Pokedex is empty. Try the catch command.")?;
        return Ok(Control::Continue);
    }

    writeln!(out, "Your Pokedex:")?;
    for name in session.pokedex.names() {
        writeln!(out, " - {name}")?;
    }
    Ok(Control::Continue)
}
