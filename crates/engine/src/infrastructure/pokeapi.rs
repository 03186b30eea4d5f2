//! PokeAPI catalog client
//!
//! Implements the CatalogPort trait against the public PokeAPI REST service.

use async_trait::async_trait;
use pokedex_domain::{EntityKind, Identifier};
use reqwest::{Client, Url};
use std::time::Duration;

use crate::infrastructure::ports::{CatalogError, CatalogPort};

/// Client for the PokeAPI catalog
///
/// Endpoints are `{base}/{resource}/{key}/`, e.g. `pokemon/25/`. The
/// underlying `reqwest::Client` is a connection pool; it is cloned into every
/// request and never mutated after construction.
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: Url,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CatalogError::setup(format!("invalid base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::setup(format!(
                "base URL '{}' cannot carry a path",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CatalogError::setup)?;

        Ok(Self { client, base_url })
    }

    /// Full URL for one key. The key is a single percent-encoded path
    /// segment, lowercased since the catalog only knows lowercase slugs.
    pub fn endpoint_url(&self, kind: EntityKind, key: &Identifier) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::setup(format!("base URL '{}' cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .push(kind.resource())
            .push(&key.as_str().to_lowercase())
            .push("");
        Ok(url)
    }
}

#[async_trait]
impl CatalogPort for PokeApiClient {
    async fn fetch_document(
        &self,
        kind: EntityKind,
        key: &Identifier,
    ) -> Result<serde_json::Value, CatalogError> {
        let url = self.endpoint_url(kind, key)?;
        tracing::debug!(url = %url, "GET catalog document");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(CatalogError::request_failed)?;

        if !response.status().is_success() {
            return Err(CatalogError::status(response.status().as_u16(), url.to_string()));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(CatalogError::invalid_response)
    }
}
