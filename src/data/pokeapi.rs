//! PokeAPI client
//!
//! This module fetches paginated location listings and Pokemon details from
//! PokeAPI. Every request goes through a cache-first path: the raw response
//! body is memoized under the full request URL, so repeated commands within
//! the staleness window skip the network entirely.

use reqwest::Client;
use thiserror::Error;

use super::{LocationArea, NamedResource, PaginatedResponse, Pokemon};
use crate::cache::ResponseCache;

/// Base URL for PokeAPI v2
const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Errors that can occur when fetching from PokeAPI
#[derive(Debug, Error)]
pub enum PokeApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    BadStatus {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Client for fetching data from PokeAPI
///
/// Owns the response cache; callers exchange URLs and decoded values with it
/// and never touch the cached bytes directly.
#[derive(Debug)]
pub struct PokeApiClient {
    http: Client,
    cache: ResponseCache,
}

impl PokeApiClient {
    /// Creates a new client around the given response cache
    pub fn new(cache: ResponseCache) -> Self {
        Self {
            http: Client::new(),
            cache,
        }
    }

    /// Creates a new client with a custom HTTP client
    #[allow(dead_code)]
    pub fn with_client(http: Client, cache: ResponseCache) -> Self {
        Self { http, cache }
    }

    /// URL of the first location-area page at the given page size
    pub fn location_areas_url(page_limit: u32) -> String {
        format!("{POKEAPI_BASE_URL}/location-area?limit={page_limit}&offset=0")
    }

    /// Fetches one page of the location-area listing.
    ///
    /// Takes a full URL rather than a page number because PokeAPI hands back
    /// the next/previous page links verbatim.
    pub async fn location_areas(
        &self,
        url: &str,
    ) -> Result<PaginatedResponse<NamedResource>, PokeApiError> {
        let payload = self.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&payload)?)
    }

    /// Fetches a single location area with its possible encounters.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea, PokeApiError> {
        let url = format!("{POKEAPI_BASE_URL}/location-area/{name}");
        let payload = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&payload)?)
    }

    /// Fetches a Pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon, PokeApiError> {
        let url = format!("{POKEAPI_BASE_URL}/pokemon/{name}");
        let payload = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&payload)?)
    }

    /// Returns the raw response body for `url`, from cache when present.
    ///
    /// On a miss the body is fetched over HTTP, stored under the full URL,
    /// and returned. Non-success statuses are reported as errors and nothing
    /// is cached for them.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, PokeApiError> {
        if let Some(payload) = self.cache.get(url) {
            tracing::debug!(url, "cache hit");
            return Ok(payload);
        }

        tracing::debug!(url, "cache miss");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokeApiError::BadStatus {
                status,
                url: url.to_string(),
            });
        }

        let payload = response.bytes().await?.to_vec();
        self.cache.add(url, payload.clone());
        Ok(payload)
    }

    /// Shuts down the owned cache, stopping its sweeper.
    pub async fn close(self) {
        self.cache.close().await;
    }
}
