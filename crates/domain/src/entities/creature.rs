//! Creature entity - The main catalog object
//!
//! A creature references its abilities, moves and stats. Straight from the
//! catalog those references are summaries ([`References::Unexpanded`]);
//! expansion replaces each list with the resolved entities. A creature is
//! expanded as soon as any of the three lists has been replaced, and it
//! never goes back.

use std::fmt;

use crate::entities::{Ability, Move, Stat};
use crate::error::Resolved;
use crate::ids::Identifier;
use crate::value_objects::{AbilitySummary, MoveSummary, References, StatSummary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    name: String,
    id: u32,
    height: u32,
    weight: u32,
    /// Type names in slot order (e.g. "grass", "poison")
    types: Vec<String>,
    abilities: References<AbilitySummary, Ability>,
    moves: References<MoveSummary, Move>,
    stats: References<StatSummary, Stat>,
}

impl Creature {
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
            height: 0,
            weight: 0,
            types: Vec::new(),
            abilities: References::default(),
            moves: References::default(),
            stats: References::default(),
        }
    }

    pub fn with_size(mut self, height: u32, weight: u32) -> Self {
        self.height = height;
        self.weight = weight;
        self
    }

    pub fn with_types(mut self, types: Vec<String>) -> Self {
        self.types = types;
        self
    }

    pub fn with_abilities(mut self, abilities: Vec<AbilitySummary>) -> Self {
        self.abilities = References::Unexpanded(abilities);
        self
    }

    pub fn with_moves(mut self, moves: Vec<MoveSummary>) -> Self {
        self.moves = References::Unexpanded(moves);
        self
    }

    pub fn with_stats(mut self, stats: Vec<StatSummary>) -> Self {
        self.stats = References::Unexpanded(stats);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn abilities(&self) -> &References<AbilitySummary, Ability> {
        &self.abilities
    }

    pub fn moves(&self) -> &References<MoveSummary, Move> {
        &self.moves
    }

    pub fn stats(&self) -> &References<StatSummary, Stat> {
        &self.stats
    }

    /// True once any reference list has been replaced by resolved entities.
    pub fn is_expanded(&self) -> bool {
        self.abilities.is_expanded() || self.moves.is_expanded() || self.stats.is_expanded()
    }

    /// Ability names to fetch on expansion, in listing order.
    pub fn ability_keys(&self) -> Vec<Identifier> {
        self.abilities.keys()
    }

    pub fn move_keys(&self) -> Vec<Identifier> {
        self.moves.keys()
    }

    pub fn stat_keys(&self) -> Vec<Identifier> {
        self.stats.keys()
    }

    /// Replace the ability summaries with resolved slots, one per key from
    /// [`Creature::ability_keys`].
    pub fn expand_abilities(&mut self, resolved: Vec<Resolved<Ability>>) {
        self.abilities = References::Expanded(resolved);
    }

    pub fn expand_moves(&mut self, resolved: Vec<Resolved<Move>>) {
        self.moves = References::Expanded(resolved);
    }

    pub fn expand_stats(&mut self, resolved: Vec<Resolved<Stat>>) {
        self.stats = References::Expanded(resolved);
    }
}

fn write_section<S, T>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    references: &References<S, T>,
) -> fmt::Result
where
    S: fmt::Display,
    T: fmt::Display,
{
    write!(f, "\n{}:\n------\n", title)?;
    match references {
        References::Unexpanded(summaries) => {
            let lines: Vec<String> = summaries.iter().map(ToString::to_string).collect();
            write!(f, "{}", lines.join("\n"))
        }
        References::Expanded(resolved) => {
            let blocks: Vec<String> = resolved
                .iter()
                .map(|slot| match slot {
                    Ok(entity) => entity.to_string(),
                    Err(marker) => marker.placeholder().to_string(),
                })
                .collect();
            write!(f, "{}", blocks.join("\n\n"))
        }
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Height: {}", self.height)?;
        writeln!(f, "Weight: {}", self.weight)?;
        writeln!(f, "Types: {}", self.types.join(" "))?;
        write_section(f, "Stats", &self.stats)?;
        writeln!(f)?;
        write_section(f, "Abilities", &self.abilities)?;
        writeln!(f)?;
        write_section(f, "Moves", &self.moves)
    }
}
