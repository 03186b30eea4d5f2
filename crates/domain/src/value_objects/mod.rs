//! Value objects - Immutable objects defined by their attributes

mod effect;
mod kind;
mod references;
mod summaries;

pub use effect::{english_text, EffectEntry, ENGLISH};
pub use kind::{EntityKind, RequestMode};
pub use references::References;
pub use summaries::{AbilitySummary, MoveSummary, ReferenceKey, StatSummary};
