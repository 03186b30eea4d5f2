//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod pokeapi;
pub mod ports;
