//! Test fixtures: catalog documents and a scriptable catalog stub.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::catalog::creature_json;
//! use crate::test_fixtures::catalog_stub::StubCatalog;
//!
//! let catalog = StubCatalog::new()
//!     .with_document(EntityKind::Creature, "4", creature_json("charmander", 4, &[], &[], &[]));
//! ```

pub mod catalog;
pub mod catalog_stub;
