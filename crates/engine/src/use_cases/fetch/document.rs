//! Fetch one catalog document.

use std::sync::Arc;
use std::time::Duration;

use pokedex_domain::{EntityKind, EntryError, Identifier, Resolved};

use crate::infrastructure::ports::CatalogPort;

/// Fetches a single document and turns every failure into a marker for
/// that key.
///
/// Each call is bounded by `timeout`; a stalled request yields
/// [`EntryError::Timeout`] instead of hanging its batch.
#[derive(Clone)]
pub struct FetchDocument {
    catalog: Arc<dyn CatalogPort>,
    timeout: Duration,
}

impl FetchDocument {
    pub fn new(catalog: Arc<dyn CatalogPort>, timeout: Duration) -> Self {
        Self { catalog, timeout }
    }

    pub async fn execute(&self, kind: EntityKind, key: Identifier) -> Resolved<serde_json::Value> {
        if key.is_blank() {
            tracing::warn!(kind = %kind, "Skipping blank identifier");
            return Err(EntryError::fetch(kind, key, "blank identifier"));
        }

        let outcome = tokio::time::timeout(self.timeout, self.catalog.fetch_document(kind, &key)).await;

        match outcome {
            Ok(Ok(document)) => {
                tracing::debug!(kind = %kind, key = %key, "Fetched catalog document");
                Ok(document)
            }
            Ok(Err(e)) => {
                tracing::warn!(kind = %kind, key = %key, error = %e, "Catalog fetch failed");
                Err(EntryError::fetch(kind, key, e))
            }
            Err(_) => {
                tracing::warn!(
                    kind = %kind,
                    key = %key,
                    timeout_secs = self.timeout.as_secs(),
                    "Catalog fetch timed out"
                );
                Err(EntryError::timeout(kind, key, self.timeout.as_secs()))
            }
        }
    }
}
