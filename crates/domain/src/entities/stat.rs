//! Stat entity - A base statistic such as hp or speed

use std::fmt;

use crate::ids::Identifier;
use crate::value_objects::ReferenceKey;

/// Shown when a stat has no associated move damage class.
const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    name: String,
    id: u32,
    is_battle_only: bool,
    move_damage_class: Option<String>,
}

impl Stat {
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
            is_battle_only: false,
            move_damage_class: None,
        }
    }

    pub fn battle_only(mut self, is_battle_only: bool) -> Self {
        self.is_battle_only = is_battle_only;
        self
    }

    pub fn with_move_damage_class(mut self, damage_class: Option<String>) -> Self {
        self.move_damage_class = damage_class;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_battle_only(&self) -> bool {
        self.is_battle_only
    }

    pub fn move_damage_class(&self) -> &str {
        self.move_damage_class.as_deref().unwrap_or(NOT_APPLICABLE)
    }
}

impl ReferenceKey for Stat {
    fn key(&self) -> Identifier {
        Identifier::new(self.name.as_str())
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "ID: {}", self.id)?;
        let battle_only = if self.is_battle_only { "True" } else { "False" };
        writeln!(f, "Is_Battle_Only: {}", battle_only)?;
        write!(f, "Move Damage Class: {}", self.move_damage_class())
    }
}
