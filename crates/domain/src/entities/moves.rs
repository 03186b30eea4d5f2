//! Move entity - An attack or technique a creature can learn

use std::fmt;

use crate::ids::Identifier;
use crate::value_objects::{english_text, EffectEntry, ReferenceKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    name: String,
    id: u32,
    generation: String,
    accuracy: Option<u32>,
    pp: Option<u32>,
    power: Option<u32>,
    move_type: String,
    damage_class: String,
    short_effect: String,
}

impl Move {
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
            generation: String::new(),
            accuracy: None,
            pp: None,
            power: None,
            move_type: String::new(),
            damage_class: String::new(),
            short_effect: String::new(),
        }
    }

    pub fn with_generation(mut self, generation: impl Into<String>) -> Self {
        self.generation = generation.into();
        self
    }

    /// Accuracy, PP and power are all nullable in the catalog.
    pub fn with_numbers(mut self, accuracy: Option<u32>, pp: Option<u32>, power: Option<u32>) -> Self {
        self.accuracy = accuracy;
        self.pp = pp;
        self.power = power;
        self
    }

    pub fn with_type(mut self, move_type: impl Into<String>) -> Self {
        self.move_type = move_type.into();
        self
    }

    pub fn with_damage_class(mut self, damage_class: impl Into<String>) -> Self {
        self.damage_class = damage_class.into();
        self
    }

    /// English short effects, concatenated.
    pub fn with_effect_entries(mut self, entries: &[EffectEntry]) -> Self {
        self.short_effect = english_text(entries, |e| &e.short_effect, "");
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn generation(&self) -> &str {
        &self.generation
    }

    pub fn accuracy(&self) -> Option<u32> {
        self.accuracy
    }

    pub fn pp(&self) -> Option<u32> {
        self.pp
    }

    pub fn power(&self) -> Option<u32> {
        self.power
    }

    pub fn move_type(&self) -> &str {
        &self.move_type
    }

    pub fn damage_class(&self) -> &str {
        &self.damage_class
    }

    pub fn short_effect(&self) -> &str {
        &self.short_effect
    }
}

impl ReferenceKey for Move {
    fn key(&self) -> Identifier {
        Identifier::new(self.name.as_str())
    }
}

struct Nullable(Option<u32>);

impl fmt::Display for Nullable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Generation: {}", self.generation)?;
        writeln!(f, "Accuracy: {}", Nullable(self.accuracy))?;
        writeln!(f, "PP: {}", Nullable(self.pp))?;
        writeln!(f, "Power: {}", Nullable(self.power))?;
        writeln!(f, "Type: {}", self.move_type)?;
        writeln!(f, "Damage Class: {}", self.damage_class)?;
        write!(f, "Effect (Short): {}", self.short_effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_numbers_render_as_none() {
        let growl = Move::new("growl", 45)
            .with_generation("generation-i")
            .with_numbers(Some(100), Some(40), None)
            .with_type("normal")
            .with_damage_class("status");

        let rendered = growl.to_string();
        assert!(rendered.contains("Accuracy: 100\n"));
        assert!(rendered.contains("PP: 40\n"));
        assert!(rendered.contains("Power: None\n"));
        assert_eq!(growl.power(), None);
    }

    #[test]
    fn short_effect_ignores_other_locales() {
        let tackle = Move::new("tackle", 33).with_effect_entries(&[
            EffectEntry::new("Inflicts regular damage.", "Inflicts regular damage.", "en"),
            EffectEntry::new("Fügt Schaden zu.", "Schaden.", "de"),
        ]);
        assert_eq!(tackle.short_effect(), "Inflicts regular damage.");
    }
}
