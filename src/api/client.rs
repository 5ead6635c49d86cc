//! PokeAPI Client
//!
//! HTTP fetch helper that answers repeated requests from the response cache.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Client for the PokeAPI REST endpoints.
///
/// Owns one [`Cache`] for its whole lifetime, so repeated requests for the
/// same URL within the cache interval are served without touching the
/// network.
#[derive(Debug)]
pub struct PokeApiClient {
    /// Shared HTTP connection pool
    http: reqwest::Client,
    /// Raw response bodies keyed by request URL
    cache: Cache,
    /// API root without a trailing slash
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client from configuration.
    ///
    /// Must be called from within a Tokio runtime, which hosts the cache reaper.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self::with_http_client(
            http,
            &config.base_url,
            config.cache_interval(),
        ))
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_http_client(http: reqwest::Client, base_url: &str, cache_interval: Duration) -> Self {
        Self {
            http,
            cache: Cache::new(cache_interval),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the response cache.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Returns the API root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // == URLs ==
    /// URL of the first page of the location area listing.
    pub fn first_location_page_url(&self) -> String {
        format!("{}/location-area/?offset=0&limit=20", self.base_url)
    }

    /// URL of a single location area.
    pub fn location_area_url(&self, name: &str) -> Result<String> {
        Ok(format!("{}/location-area/{}", self.base_url, path_segment(name)?))
    }

    /// URL of a single pokemon.
    pub fn pokemon_url(&self, name: &str) -> Result<String> {
        Ok(format!("{}/pokemon/{}", self.base_url, path_segment(name)?))
    }

    // == Fetch ==
    /// Returns the body of `GET url`, from the cache when possible.
    ///
    /// Only successful responses are cached.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "cache hit");
            return Ok(body);
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let body = body.to_vec();
        self.cache.put(url, body.clone()).await;
        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Endpoints ==
    /// Fetches a page of location areas; `None` fetches the first page.
    pub async fn list_location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        match page_url {
            Some(url) => self.get_json(url).await,
            None => self.get_json(&self.first_location_page_url()).await,
        }
    }

    /// Fetches a location area and its encounters.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.get_json(&self.location_area_url(name)?).await
    }

    /// Fetches a pokemon.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.get_json(&self.pokemon_url(name)?).await
    }
}

/// Checks that `name` stays a single path segment once placed in a URL.
///
/// API resource names are ASCII letters, digits, `-`, `_` and `.`; anything
/// else could change the path or add a query, so it is rejected.
fn path_segment(name: &str) -> Result<&str> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(name)
    } else {
        Err(PokedexError::InvalidName(name.to_string()))
    }
}
