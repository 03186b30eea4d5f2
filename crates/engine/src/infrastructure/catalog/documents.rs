//! Type definitions for PokeAPI JSON documents.
//!
//! These types mirror the subset of the PokeAPI schema the pokedex reads.
//! Required fields are plain; nullable or optional ones are `Option` or
//! carry `#[serde(default)]`. They are deserialized and then converted to
//! domain entities.

use serde::Deserialize;

/// A `{ "name": ..., "url": ... }` link to another catalog resource.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// A localized effect description.
#[derive(Debug, Deserialize)]
pub struct EffectEntryDocument {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub short_effect: String,
    pub language: NamedResource,
}

// =============================================================================
// Creature (`pokemon/{key}/`)
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct CreatureDocument {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub moves: Vec<MoveSlot>,
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<VersionGroupDetail>,
}

#[derive(Debug, Deserialize)]
pub struct VersionGroupDetail {
    pub level_learned_at: u32,
}

#[derive(Debug, Deserialize)]
pub struct StatSlot {
    pub stat: NamedResource,
    pub base_stat: u32,
}

// =============================================================================
// Ability (`ability/{key}/`)
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct AbilityDocument {
    pub id: u32,
    pub name: String,
    pub generation: NamedResource,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntryDocument>,
    #[serde(default)]
    pub pokemon: Vec<AbilityHolder>,
}

#[derive(Debug, Deserialize)]
pub struct AbilityHolder {
    pub pokemon: NamedResource,
}

// =============================================================================
// Move (`move/{key}/`)
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct MoveDocument {
    pub id: u32,
    pub name: String,
    pub generation: NamedResource,
    pub accuracy: Option<u32>,
    pub pp: Option<u32>,
    pub power: Option<u32>,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
    pub damage_class: NamedResource,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntryDocument>,
}

// =============================================================================
// Stat (`stat/{key}/`)
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct StatDocument {
    pub id: u32,
    pub name: String,
    pub is_battle_only: bool,
    pub move_damage_class: Option<NamedResource>,
}
