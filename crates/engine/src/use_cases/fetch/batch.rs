//! Concurrent fan-out of [`FetchDocument`] over a key list.

use futures_util::future::join_all;
use pokedex_domain::{EntityKind, EntryError, Identifier, Resolved};

use super::FetchDocument;
use crate::infrastructure::catalog::{construct, CatalogDocument};

/// Issues one fetch per key concurrently and waits for all of them.
///
/// Output position N always belongs to input key N, whatever order the
/// requests complete in. A failed key produces a marker in its slot and
/// never cancels its siblings.
#[derive(Clone)]
pub struct BatchFetch {
    fetch: FetchDocument,
}

impl BatchFetch {
    pub fn new(fetch: FetchDocument) -> Self {
        Self { fetch }
    }

    /// Fetch raw documents for every key.
    pub async fn execute(
        &self,
        kind: EntityKind,
        keys: &[Identifier],
    ) -> Vec<Resolved<serde_json::Value>> {
        if keys.is_empty() {
            return Vec::new();
        }

        tracing::debug!(kind = %kind, count = keys.len(), "Starting catalog batch");
        let results = join_all(keys.iter().map(|key| self.fetch.execute(kind, key.clone()))).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::debug!(kind = %kind, count = keys.len(), failed, "Catalog batch settled");
        results
    }

    /// Fetch every key and build its entity; construction failures become
    /// markers just like fetch failures.
    pub async fn resolve<D: CatalogDocument>(&self, keys: &[Identifier]) -> Vec<Resolved<D::Entity>> {
        let kind = D::KIND;
        let documents = self.execute(kind, keys).await;

        keys.iter()
            .zip(documents)
            .map(|(key, document)| {
                let document = document?;
                construct::<D>(document).map_err(|e| {
                    tracing::warn!(kind = %kind, key = %key, error = %e, "Could not build entity");
                    EntryError::construction(kind, key.clone(), e)
                })
            })
            .collect()
    }
}
