//! Entry points. The pokedex is driven from the command line only.

pub mod cli;

pub use cli::Cli;
