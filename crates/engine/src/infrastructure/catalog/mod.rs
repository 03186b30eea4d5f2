//! Catalog document schemas and their conversion into domain entities.
//!
//! Construction is two steps: deserialize the raw JSON into the schema for
//! its kind, then map the schema onto the domain type. Only the first step
//! can fail; a missing required field is reported as
//! [`DomainError::MissingField`], any other shape problem as
//! [`DomainError::Malformed`].

pub mod documents;

use pokedex_domain::{
    Ability, AbilitySummary, Creature, DomainError, EffectEntry, EntityKind, Move, MoveSummary,
    Stat, StatSummary,
};
use serde::de::DeserializeOwned;

pub use documents::{
    AbilityDocument, CreatureDocument, EffectEntryDocument, MoveDocument, StatDocument,
};

/// A catalog schema that converts into one domain entity.
pub trait CatalogDocument: DeserializeOwned {
    const KIND: EntityKind;
    type Entity: Send;

    fn into_entity(self) -> Self::Entity;
}

/// Build a domain entity from a raw catalog document.
pub fn construct<D: CatalogDocument>(document: serde_json::Value) -> Result<D::Entity, DomainError> {
    serde_json::from_value::<D>(document)
        .map(D::into_entity)
        .map_err(|e| classify(D::KIND, e))
}

fn classify(kind: EntityKind, error: serde_json::Error) -> DomainError {
    let message = error.to_string();
    match message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
    {
        Some(field) => DomainError::missing_field(kind, field),
        None => DomainError::malformed(kind, message),
    }
}

fn effect_entries(entries: Vec<EffectEntryDocument>) -> Vec<EffectEntry> {
    entries
        .into_iter()
        .map(|e| EffectEntry::new(e.effect, e.short_effect, e.language.name))
        .collect()
}

impl CatalogDocument for CreatureDocument {
    const KIND: EntityKind = EntityKind::Creature;
    type Entity = Creature;

    fn into_entity(self) -> Creature {
        let mut types = self.types;
        types.sort_by_key(|t| t.slot);

        Creature::new(self.name, self.id)
            .with_size(self.height, self.weight)
            .with_types(types.into_iter().map(|t| t.type_ref.name).collect())
            .with_abilities(
                self.abilities
                    .into_iter()
                    .map(|a| AbilitySummary::new(a.ability.name))
                    .collect(),
            )
            .with_moves(
                self.moves
                    .into_iter()
                    .map(|m| {
                        let level = m.version_group_details.first().map(|d| d.level_learned_at);
                        MoveSummary::new(m.move_ref.name, level)
                    })
                    .collect(),
            )
            .with_stats(
                self.stats
                    .into_iter()
                    .map(|s| StatSummary::new(s.stat.name, s.base_stat))
                    .collect(),
            )
    }
}

impl CatalogDocument for AbilityDocument {
    const KIND: EntityKind = EntityKind::Ability;
    type Entity = Ability;

    fn into_entity(self) -> Ability {
        Ability::new(self.name, self.id)
            .with_generation(self.generation.name)
            .with_effect_entries(&effect_entries(self.effect_entries))
            .with_pokemon(self.pokemon.into_iter().map(|p| p.pokemon.name).collect())
    }
}

impl CatalogDocument for MoveDocument {
    const KIND: EntityKind = EntityKind::Move;
    type Entity = Move;

    fn into_entity(self) -> Move {
        Move::new(self.name, self.id)
            .with_generation(self.generation.name)
            .with_numbers(self.accuracy, self.pp, self.power)
            .with_type(self.type_ref.name)
            .with_damage_class(self.damage_class.name)
            .with_effect_entries(&effect_entries(self.effect_entries))
    }
}

impl CatalogDocument for StatDocument {
    const KIND: EntityKind = EntityKind::Stat;
    type Entity = Stat;

    fn into_entity(self) -> Stat {
        Stat::new(self.name, self.id)
            .battle_only(self.is_battle_only)
            .with_move_damage_class(self.move_damage_class.map(|c| c.name))
    }
}
