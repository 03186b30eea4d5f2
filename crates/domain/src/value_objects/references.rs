//! Two-state reference collections.
//!
//! A creature lists its abilities, moves and stats as summaries. Expansion
//! swaps a summary list for the entities it names, one slot per summary, in
//! the same order. There is no way back to the summary state.

use crate::error::Resolved;
use crate::ids::Identifier;
use crate::value_objects::ReferenceKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum References<S, T> {
    /// Summaries as listed on the creature document
    Unexpanded(Vec<S>),
    /// Resolved entities (or markers), positionally aligned with the summaries
    Expanded(Vec<Resolved<T>>),
}

impl<S, T> References<S, T> {
    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Expanded(_))
    }

    /// Summaries, while the collection has not been expanded.
    pub fn summaries(&self) -> Option<&[S]> {
        match self {
            Self::Unexpanded(summaries) => Some(summaries),
            Self::Expanded(_) => None,
        }
    }

    /// Resolved slots, once the collection has been expanded.
    pub fn resolved(&self) -> Option<&[Resolved<T>]> {
        match self {
            Self::Unexpanded(_) => None,
            Self::Expanded(resolved) => Some(resolved),
        }
    }

    /// Successfully resolved entities, skipping markers.
    pub fn entities(&self) -> impl Iterator<Item = &T> {
        self.resolved()
            .unwrap_or_default()
            .iter()
            .filter_map(|slot| slot.as_ref().ok())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Unexpanded(summaries) => summaries.len(),
            Self::Expanded(resolved) => resolved.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: ReferenceKey, T: ReferenceKey> References<S, T> {
    /// Catalog keys for every slot, in order, in either state.
    pub fn keys(&self) -> Vec<Identifier> {
        match self {
            Self::Unexpanded(summaries) => summaries.iter().map(ReferenceKey::key).collect(),
            Self::Expanded(resolved) => resolved
                .iter()
                .map(|slot| match slot {
                    Ok(entity) => entity.key(),
                    Err(marker) => marker.key().clone(),
                })
                .collect(),
        }
    }
}

impl<S, T> Default for References<S, T> {
    fn default() -> Self {
        Self::Unexpanded(Vec::new())
    }
}
