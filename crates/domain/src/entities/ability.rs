//! Ability entity - A passive trait a creature can have

use std::fmt;

use crate::ids::Identifier;
use crate::value_objects::{english_text, EffectEntry, ReferenceKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    name: String,
    id: u32,
    generation: String,
    /// English long-form effect text
    effect: String,
    /// English one-line effect text
    short_effect: String,
    /// Creatures that can have this ability, in catalog order
    pokemon: Vec<String>,
}

impl Ability {
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
            generation: String::new(),
            effect: String::new(),
            short_effect: String::new(),
            pokemon: Vec::new(),
        }
    }

    pub fn with_generation(mut self, generation: impl Into<String>) -> Self {
        self.generation = generation.into();
        self
    }

    /// Derive `effect` and `short_effect` from localized entries, keeping
    /// English only and joining multiple entries with newlines.
    pub fn with_effect_entries(mut self, entries: &[EffectEntry]) -> Self {
        self.effect = english_text(entries, |e| &e.effect, "\n");
        self.short_effect = english_text(entries, |e| &e.short_effect, "\n");
        self
    }

    pub fn with_pokemon(mut self, pokemon: Vec<String>) -> Self {
        self.pokemon = pokemon;
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

    pub fn effect(&self) -> &str {
        &self.effect
    }

    pub fn short_effect(&self) -> &str {
        &self.short_effect
    }

    pub fn pokemon(&self) -> &[String] {
        &self.pokemon
    }
}

impl ReferenceKey for Ability {
    fn key(&self) -> Identifier {
        Identifier::new(self.name.as_str())
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Generation: {}", self.generation)?;
        writeln!(f, "Effect: {}", self.effect)?;
        writeln!(f, "Effect (Short): {}", self.short_effect)?;
        write!(f, "Pokemon: {}", self.pokemon.join(", "))
    }
}
