//! Pokedex CLI - An interactive PokeAPI client
//!
//! Pages through location areas, explores encounters and catches creatures,
//! with API responses kept in a time-expiring in-memory cache.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::{repl, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr, so the REPL output stays clean)
/// 2. Load configuration from environment variables
/// 3. Create the API client, which starts the cache reaper
/// 4. Run the REPL on stdin/stdout until `exit` or end of input
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_interval={}s, http_timeout={}s",
        config.base_url, config.cache_interval, config.http_timeout
    );

    let client = PokeApiClient::new(&config).context("failed to build the HTTP client")?;
    let mut session = Session::new(client);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(&mut session, stdin, &mut stdout)
        .await
        .context("REPL terminated")?;

    // Dropping the session drops the cache and stops its reaper
    drop(session);
    info!("Pokedex shutdown complete");
    Ok(())
}
