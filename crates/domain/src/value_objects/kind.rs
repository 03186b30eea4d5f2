use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The four kinds of entity the catalog serves, one endpoint each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Creature,
    Ability,
    Move,
    Stat,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [Self::Creature, Self::Ability, Self::Move, Self::Stat];

    /// Path segment used by the catalog for this kind.
    pub fn resource(&self) -> &'static str {
        match self {
            Self::Creature => "pokemon",
            Self::Ability => "ability",
            Self::Move => "move",
            Self::Stat => "stat",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource())
    }
}

/// What a request asks for. Stats are only reachable through expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestMode {
    #[default]
    Creature,
    Ability,
    Move,
}

impl RequestMode {
    /// The entity kind fetched for the request's own keys.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Creature => EntityKind::Creature,
            Self::Ability => EntityKind::Ability,
            Self::Move => EntityKind::Move,
        }
    }
}

impl fmt::Display for RequestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().resource())
    }
}

impl FromStr for RequestMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pokemon" | "creature" => Ok(Self::Creature),
            "ability" => Ok(Self::Ability),
            "move" => Ok(Self::Move),
            other => Err(DomainError::parse(format!(
                "Unknown mode '{}' (expected pokemon, ability or move)",
                other
            ))),
        }
    }
}
