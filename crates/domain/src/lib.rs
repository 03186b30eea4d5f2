//! Pokedex Domain - the entity model for catalog lookups.
//!
//! Entities are built by the engine from catalog documents and never touch
//! the network themselves. A [`Creature`] starts out holding lightweight
//! summaries of its abilities, moves and stats and can later have those
//! collections replaced by fully resolved entities.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Ability, Creature, Entity, Move, Stat};
pub use error::{DomainError, EntryError, Resolved, ERROR_PLACEHOLDER};
pub use ids::Identifier;
pub use value_objects::{
    english_text, AbilitySummary, EffectEntry, EntityKind, MoveSummary, ReferenceKey, References,
    RequestMode, StatSummary, ENGLISH,
};
