//! Lightweight cross-references carried by an unexpanded creature.

use std::fmt;

use crate::ids::Identifier;

/// An ability on a creature, before the ability itself is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilitySummary {
    pub name: String,
}

impl AbilitySummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A learnable move, with the level from its first version-group detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSummary {
    pub name: String,
    pub level_learned_at: Option<u32>,
}

impl MoveSummary {
    pub fn new(name: impl Into<String>, level_learned_at: Option<u32>) -> Self {
        Self {
            name: name.into(),
            level_learned_at,
        }
    }
}

/// A base stat value as listed on the creature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatSummary {
    pub name: String,
    pub base_stat: u32,
}

impl StatSummary {
    pub fn new(name: impl Into<String>, base_stat: u32) -> Self {
        Self {
            name: name.into(),
            base_stat,
        }
    }
}

/// Anything that names a catalog entry to fetch on expansion.
pub trait ReferenceKey {
    fn key(&self) -> Identifier;
}

impl ReferenceKey for AbilitySummary {
    fn key(&self) -> Identifier {
        Identifier::new(self.name.as_str())
    }
}

impl ReferenceKey for MoveSummary {
    fn key(&self) -> Identifier {
        Identifier::new(self.name.as_str())
    }
}

impl ReferenceKey for StatSummary {
    fn key(&self) -> Identifier {
        Identifier::new(self.name.as_str())
    }
}

impl fmt::Display for AbilitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for MoveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level_learned_at {
            Some(level) => write!(f, "Move name: {}, Level acquired: {}", self.name, level),
            None => write!(f, "Move name: {}, Level acquired: N/A", self.name),
        }
    }
}

impl fmt::Display for StatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.base_stat)
    }
}
