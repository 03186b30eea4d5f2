//! Scriptable in-memory catalog for pipeline tests.
//!
//! Unlike `MockCatalogPort`, the stub can delay individual keys, which lets
//! tests reorder completions and observe how many fetches overlap.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use pokedex_domain::{EntityKind, Identifier};

use crate::infrastructure::ports::{CatalogError, CatalogPort};

type Slot = (EntityKind, String);

#[derive(Default)]
pub struct StubCatalog {
    responses: HashMap<Slot, Result<serde_json::Value, CatalogError>>,
    delays: HashMap<Slot, Duration>,
    calls: Mutex<Vec<Slot>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, kind: EntityKind, key: &str, document: serde_json::Value) -> Self {
        self.responses.insert((kind, key.to_string()), Ok(document));
        self
    }

    pub fn with_failure(mut self, kind: EntityKind, key: &str, error: CatalogError) -> Self {
        self.responses.insert((kind, key.to_string()), Err(error));
        self
    }

    pub fn with_delay(mut self, kind: EntityKind, key: &str, delay: Duration) -> Self {
        self.delays.insert((kind, key.to_string()), delay);
        self
    }

    /// Every fetch issued so far, in start order.
    pub fn calls(&self) -> Vec<(EntityKind, String)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Highest number of fetches that were awaiting at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogPort for StubCatalog {
    async fn fetch_document(
        &self,
        kind: EntityKind,
        key: &Identifier,
    ) -> Result<serde_json::Value, CatalogError> {
        let slot = (kind, key.as_str().to_string());
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(slot.clone());
        }

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(&slot) {
            tokio::time::sleep(*delay).await;
        } else {
            tokio::task::yield_now().await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.responses.get(&slot).cloned().unwrap_or_else(|| {
            Err(CatalogError::status(
                404,
                format!("stub://{}/{}/", kind.resource(), key),
            ))
        })
    }
}
