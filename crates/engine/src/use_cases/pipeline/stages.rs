//! Fetch stages. Each one replaces `context.result` wholesale, one slot per
//! raw key, in key order.

use pokedex_domain::{Creature, Entity, Resolved};

use super::context::RequestContext;
use crate::infrastructure::catalog::{
    AbilityDocument, CatalogDocument, CreatureDocument, MoveDocument, StatDocument,
};
use crate::use_cases::fetch::BatchFetch;

/// Fetch and build one entity per raw key.
pub async fn fetch_entities<D>(batch: &BatchFetch, context: &mut RequestContext)
where
    D: CatalogDocument,
    D::Entity: Into<Entity>,
{
    let resolved = batch.resolve::<D>(&context.raw_keys).await;
    context.result = into_results(resolved);
}

/// Fetch creatures, then resolve each surviving creature's references.
///
/// Creatures are expanded one after another. For a single creature the
/// ability, move and stat batches run concurrently.
pub async fn fetch_expanded_creatures(batch: &BatchFetch, context: &mut RequestContext) {
    let mut creatures = batch.resolve::<CreatureDocument>(&context.raw_keys).await;

    for slot in creatures.iter_mut() {
        let Ok(creature) = slot else {
            continue;
        };
        expand_creature(batch, creature).await;
    }

    context.result = into_results(creatures);
}

async fn expand_creature(batch: &BatchFetch, creature: &mut Creature) {
    let ability_keys = creature.ability_keys();
    let move_keys = creature.move_keys();
    let stat_keys = creature.stat_keys();

    tracing::debug!(
        creature = creature.name(),
        abilities = ability_keys.len(),
        moves = move_keys.len(),
        stats = stat_keys.len(),
        "Expanding creature"
    );

    let (abilities, moves, stats) = tokio::join!(
        batch.resolve::<AbilityDocument>(&ability_keys),
        batch.resolve::<MoveDocument>(&move_keys),
        batch.resolve::<StatDocument>(&stat_keys),
    );

    creature.expand_abilities(abilities);
    creature.expand_moves(moves);
    creature.expand_stats(stats);
}

fn into_results<T: Into<Entity>>(resolved: Vec<Resolved<T>>) -> Vec<Resolved<Entity>> {
    resolved.into_iter().map(|slot| slot.map(Into::into)).collect()
}
