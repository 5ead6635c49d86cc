//! REPL Module
//!
//! Reads commands line by line, dispatches them through the session's
//! command table and prints their output.

mod commands;
mod pokedex;
mod session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::error::{PokedexError, Result};

pub use commands::{Command, CommandRegistry, CommandSpec, Control, GOODBYE};
pub use pokedex::{is_caught, roll_catch, CaughtPokemon, Pokedex};
pub use session::{Pagination, Session};

// == Constants ==
/// Printed before every line of input.
pub const PROMPT: &str = "Pokedex > ";

// == Clean Input ==
/// Lower-cases `text` and splits it into whitespace-separated words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

// == Run ==
/// Runs the read-eval-print loop until `exit` or end of input.
///
/// Command failures are reported to `out` and the loop continues; only
/// failures to read input or write output end it with an error.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            writeln!(out, "{GOODBYE}")?;
            return Ok(());
        };

        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };

        let result = match session.registry.lookup(name) {
            Some(command) => command.execute(session, args, &mut *out).await,
            None => Err(PokedexError::UnknownCommand(name.clone())),
        };

        match result {
            Ok(Control::Continue) => {}
            Ok(Control::Exit) => return Ok(()),
            Err(err) => {
                warn!(command = %name, error = %err, "command failed");
                writeln!(out, "Error: {err}")?;
            }
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PokeApiClient;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn offline_session() -> Session {
        let client = PokeApiClient::with_http_client(
            reqwest::Client::new(),
            "http://127.0.0.1:9",
            Duration::from_secs(60),
        );
        Session::with_rng(client, StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_clean_input() {
        assert_eq!(clean_input("  hello  world  "), vec!["hello", "world"]);
        assert_eq!(clean_input(" Hello World "), vec!["hello", "world"]);
        assert_eq!(clean_input("CATCH\tPikachu\n"), vec!["catch", "pikachu"]);
        assert!(clean_input("   ").is_empty());
    }

    #[tokio::test]
    async fn test_run_until_exit() {
        let mut session = offline_session();
        let mut out = Vec::new();

        run(&mut session, &b"\nfly\nmapb\nexit\nhelp\n"[..], &mut out)
            .await
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(
            output,
            format!(
                "{PROMPT}{PROMPT}Error: Unknown command: fly\n{PROMPT}you're on the first page\n{PROMPT}{GOODBYE}\n"
            )
        );
    }

    #[tokio::test]
    async fn test_run_stops_at_end_of_input() {
        let mut session = offline_session();
        let mut out = Vec::new();

        run(&mut session, &b"pokedex"[..], &mut out).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.ends_with(&format!("{PROMPT}\n{GOODBYE}\n")));
    }

    #[tokio::test]
    async fn test_run_reports_command_errors() {
        let mut session = offline_session();
        let mut out = Vec::new();

        // Connection refused on the discard port
        run(&mut session, &b"map\nexit\n"[..], &mut out).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Error: Request failed"));
        assert!(output.ends_with(&format!("{GOODBYE}\n")));
    }
}
