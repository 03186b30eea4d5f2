//! Stage planning: which stages run, in which order.

use pokedex_domain::RequestMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LoadInput,
    FetchCreatures,
    FetchExpandedCreatures,
    FetchAbilities,
    FetchMoves,
    RenderOutput,
}

/// The stage list for a request. Always input first, output last, and
/// exactly one fetch stage in between.
pub fn plan(mode: RequestMode, expand: bool) -> Vec<Stage> {
    let fetch = match (mode, expand) {
        (RequestMode::Creature, false) => Stage::FetchCreatures,
        (RequestMode::Creature, true) => Stage::FetchExpandedCreatures,
        (RequestMode::Ability, _) => Stage::FetchAbilities,
        (RequestMode::Move, _) => Stage::FetchMoves,
    };
    vec![Stage::LoadInput, fetch, Stage::RenderOutput]
}
