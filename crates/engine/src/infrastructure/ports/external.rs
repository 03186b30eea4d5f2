//! External service port traits (remote catalog).

use async_trait::async_trait;
use pokedex_domain::{EntityKind, Identifier};

use super::error::CatalogError;

/// Keyed read access to the remote catalog.
///
/// One call is one GET against the endpoint for `kind`, returning the raw
/// JSON document. Implementations must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogPort: Send + Sync {
    async fn fetch_document(
        &self,
        kind: EntityKind,
        key: &Identifier,
    ) -> Result<serde_json::Value, CatalogError>;
}
