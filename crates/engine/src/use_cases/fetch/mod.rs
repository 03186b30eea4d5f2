//! Catalog fetch use cases.
//!
//! [`FetchDocument`] is the single-key primitive; [`BatchFetch`] fans it out
//! over a key list and keeps results aligned with the keys.

mod batch;
mod document;

pub use batch::BatchFetch;
pub use document::FetchDocument;
