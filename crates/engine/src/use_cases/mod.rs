//! Use cases - request orchestration.
//!
//! `fetch` holds the catalog lookup primitives; `pipeline` strings them
//! together with input loading and rendering.

pub mod fetch;
pub mod pipeline;

pub use fetch::{BatchFetch, FetchDocument};
pub use pipeline::{Pipeline, PipelineError, PokedexRequest, RequestContext};
