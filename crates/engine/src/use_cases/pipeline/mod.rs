//! The request pipeline.
//!
//! [`plan`] picks the stage list from the request's mode and expand flag;
//! [`Pipeline::run`] executes those stages in order against one
//! [`RequestContext`]. Stages never overlap: the only concurrency is inside
//! a fetch stage's batches.

pub mod context;
pub mod error;
pub mod input;
pub mod output;
pub mod plan;
pub mod stages;

use std::sync::Arc;

use crate::infrastructure::catalog::{AbilityDocument, CreatureDocument, MoveDocument};
use crate::infrastructure::ports::ClockPort;
use crate::use_cases::fetch::BatchFetch;

pub use context::{InputSource, OutputTarget, PokedexRequest, RequestContext};
pub use error::PipelineError;
pub use output::Renderer;
pub use plan::{plan, Stage};

/// Fixed driver for the planned stages.
pub struct Pipeline {
    batch: BatchFetch,
    renderer: Renderer,
}

impl Pipeline {
    pub fn new(batch: BatchFetch, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            batch,
            renderer: Renderer::new(clock),
        }
    }

    /// Run every planned stage against `context`.
    ///
    /// Only input and output problems fail the run; a key that cannot be
    /// fetched or built shows up as a marker in `context.result`.
    pub async fn run(&self, context: &mut RequestContext) -> Result<(), PipelineError> {
        for stage in plan(context.mode, context.expand) {
            tracing::info!(stage = ?stage, "Running pipeline stage");
            self.run_stage(stage, context).await?;
        }
        Ok(())
    }

    async fn run_stage(&self, stage: Stage, context: &mut RequestContext) -> Result<(), PipelineError> {
        match stage {
            Stage::LoadInput => {
                context.raw_keys = input::load_keys(&context.source).await?;
                context.request_count = context.raw_keys.len();
                tracing::info!(count = context.request_count, "Loaded identifiers");
            }
            Stage::FetchCreatures => {
                stages::fetch_entities::<CreatureDocument>(&self.batch, context).await;
            }
            Stage::FetchExpandedCreatures => {
                stages::fetch_expanded_creatures(&self.batch, context).await;
            }
            Stage::FetchAbilities => {
                stages::fetch_entities::<AbilityDocument>(&self.batch, context).await;
            }
            Stage::FetchMoves => {
                stages::fetch_entities::<MoveDocument>(&self.batch, context).await;
            }
            Stage::RenderOutput => {
                self.renderer.render(context)?;
            }
        }
        Ok(())
    }
}
