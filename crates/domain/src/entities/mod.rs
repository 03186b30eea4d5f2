//! Domain entities - Catalog objects with a name and a numeric id

mod ability;
mod creature;
mod entity;
mod moves;
mod stat;

pub use ability::Ability;
pub use creature::Creature;
pub use entity::Entity;
pub use moves::Move;
pub use stat::Stat;
