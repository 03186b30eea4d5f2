//! Pokedex engine library.
//!
//! Fetches creatures, abilities and moves from the PokeAPI catalog and
//! renders them to the console or a file.
//!
//! ## Structure
//!
//! - `use_cases/` - Fetch primitives and the request pipeline
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - Command line entry point
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for unit and pipeline tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
