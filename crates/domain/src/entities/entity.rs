//! The polymorphic catalog entity.

use std::fmt;

use crate::entities::{Ability, Creature, Move, Stat};
use crate::value_objects::EntityKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Creature(Creature),
    Ability(Ability),
    Move(Move),
    Stat(Stat),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Creature(_) => EntityKind::Creature,
            Self::Ability(_) => EntityKind::Ability,
            Self::Move(_) => EntityKind::Move,
            Self::Stat(_) => EntityKind::Stat,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Creature(c) => c.name(),
            Self::Ability(a) => a.name(),
            Self::Move(m) => m.name(),
            Self::Stat(s) => s.name(),
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Self::Creature(c) => c.id(),
            Self::Ability(a) => a.id(),
            Self::Move(m) => m.id(),
            Self::Stat(s) => s.id(),
        }
    }

    pub fn as_creature(&self) -> Option<&Creature> {
        match self {
            Self::Creature(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Creature> for Entity {
    fn from(value: Creature) -> Self {
        Self::Creature(value)
    }
}

impl From<Ability> for Entity {
    fn from(value: Ability) -> Self {
        Self::Ability(value)
    }
}

impl From<Move> for Entity {
    fn from(value: Move) -> Self {
        Self::Move(value)
    }
}

impl From<Stat> for Entity {
    fn from(value: Stat) -> Self {
        Self::Stat(value)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Creature(c) => fmt::Display::fmt(c, f),
            Self::Ability(a) => fmt::Display::fmt(a, f),
            Self::Move(m) => fmt::Display::fmt(m, f),
            Self::Stat(s) => fmt::Display::fmt(s, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_delegates_to_variant() {
        let entity: Entity = Move::new("tackle", 33).into();
        assert_eq!(entity.kind(), EntityKind::Move);
        assert_eq!(entity.name(), "tackle");
        assert_eq!(entity.id(), 33);
        assert!(entity.as_creature().is_none());
        assert!(entity.to_string().starts_with("Name: tackle\nID: 33\n"));
    }
}
