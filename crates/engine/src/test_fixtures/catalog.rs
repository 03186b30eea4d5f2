//! JSON builders shaped like PokeAPI responses.

use serde_json::{json, Value};

fn resource(kind: &str, name: &str) -> Value {
    json!({ "name": name, "url": format!("https://pokeapi.co/api/v2/{}/{}/", kind, name) })
}

/// A `pokemon/{key}/` document of type fire, with every move learned at level 1.
pub fn creature_json(
    name: &str,
    id: u32,
    abilities: &[&str],
    moves: &[&str],
    stats: &[&str],
) -> Value {
    json!({
        "id": id,
        "name": name,
        "height": 6,
        "weight": 85,
        "base_experience": 62,
        "types": [{ "slot": 1, "type": resource("type", "fire") }],
        "abilities": abilities
            .iter()
            .enumerate()
            .map(|(i, a)| json!({ "ability": resource("ability", a), "is_hidden": i > 0, "slot": i + 1 }))
            .collect::<Vec<_>>(),
        "moves": moves
            .iter()
            .map(|m| json!({
                "move": resource("move", m),
                "version_group_details": [{
                    "level_learned_at": 1,
                    "move_learn_method": resource("move-learn-method", "level-up"),
                }],
            }))
            .collect::<Vec<_>>(),
        "stats": stats
            .iter()
            .map(|s| json!({ "base_stat": 39, "effort": 0, "stat": resource("stat", s) }))
            .collect::<Vec<_>>(),
    })
}

/// An `ability/{key}/` document with German, English and French effect entries.
pub fn ability_json(name: &str, id: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "is_main_series": true,
        "generation": resource("generation", "generation-iii"),
        "effect_entries": [
            {
                "effect": "Erhöht die Stärke von Pflanzen-Attacken.",
                "short_effect": "Stärkt Pflanzen-Attacken.",
                "language": resource("language", "de"),
            },
            {
                "effect": "Strengthens grass moves to inflict 1.5x damage.",
                "short_effect": "Strengthens grass moves in a pinch.",
                "language": resource("language", "en"),
            },
            {
                "effect": "Renforce les capacités Plante.",
                "short_effect": "Renforce Plante.",
                "language": resource("language", "fr"),
            },
        ],
        "pokemon": [
            { "is_hidden": false, "slot": 1, "pokemon": resource("pokemon", "bulbasaur") },
            { "is_hidden": false, "slot": 1, "pokemon": resource("pokemon", "ivysaur") },
        ],
    })
}

/// A `move/{key}/` document for a plain physical normal-type move.
pub fn move_json(name: &str, id: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "accuracy": 100,
        "pp": 35,
        "power": 40,
        "priority": 0,
        "generation": resource("generation", "generation-i"),
        "type": resource("type", "normal"),
        "damage_class": resource("move-damage-class", "physical"),
        "effect_entries": [{
            "effect": "Inflicts regular damage.",
            "short_effect": "Inflicts regular damage with no additional effect.",
            "language": resource("language", "en"),
        }],
    })
}

/// A `stat/{key}/` document; `damage_class` of `None` serializes as null.
pub fn stat_json(name: &str, id: u32, damage_class: Option<&str>) -> Value {
    json!({
        "id": id,
        "name": name,
        "game_index": id,
        "is_battle_only": false,
        "move_damage_class": damage_class.map(|c| resource("move-damage-class", c)),
    })
}
