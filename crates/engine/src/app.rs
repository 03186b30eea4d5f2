//! Application composition.

use std::sync::Arc;

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::ports::{CatalogPort, ClockPort};
use crate::use_cases::fetch::{BatchFetch, FetchDocument};
use crate::use_cases::pipeline::{Pipeline, PipelineError, PokedexRequest, RequestContext};

/// Main application state.
///
/// Wires the catalog and clock ports into the pipeline. One `App` serves any
/// number of requests; requests do not share state.
pub struct App {
    pub pipeline: Pipeline,
}

impl App {
    pub fn new(catalog: Arc<dyn CatalogPort>, clock: Arc<dyn ClockPort>, config: &AppConfig) -> Self {
        let fetch = FetchDocument::new(catalog, config.request_timeout);
        let pipeline = Pipeline::new(BatchFetch::new(fetch), clock);
        Self { pipeline }
    }

    /// Run one request end to end and hand back the finished context.
    pub async fn execute(&self, request: PokedexRequest) -> Result<RequestContext, PipelineError> {
        tracing::debug!(request = %request, "Executing request");
        let mut context = RequestContext::new(request);
        self.pipeline.run(&mut context).await?;
        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{CatalogError, MockCatalogPort};
    use crate::test_fixtures::catalog::stat_json;
    use crate::use_cases::pipeline::{InputSource, OutputTarget};
    use crate::use_cases::pipeline::output::TIMESTAMP_FORMAT;
    use chrono::{Local, TimeZone, Utc};
    use pokedex_domain::{EntityKind, RequestMode};

    #[tokio::test]
    async fn execute_runs_every_stage() {
        let mut catalog = MockCatalogPort::new();
        catalog
            .expect_fetch_document()
            .times(1)
            .returning(|kind, key| {
                assert_eq!(kind, EntityKind::Creature);
                assert_eq!(key.as_str(), "25");
                Err(CatalogError::status(404, "https://pokeapi.co/api/v2/pokemon/25/"))
            });
        let instant = Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap();
        let clock = FixedClock(instant);
        let app = App::new(Arc::new(catalog), Arc::new(clock), &AppConfig::default());

        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("out.txt");
        let request = PokedexRequest::new(RequestMode::Creature, InputSource::Inline(vec!["25".into()]))
            .with_output(OutputTarget::File(report.clone()));

        let context = app.execute(request).await.unwrap();

        assert_eq!(context.request_count, 1);
        assert!(context.result[0].is_err());
        assert_eq!(
            std::fs::read_to_string(report).unwrap(),
            format!(
                "Timestamp: {}\nNumber of requests: 1\nAn error occurred. Skipping this request.\n",
                instant.with_timezone(&Local).format(TIMESTAMP_FORMAT)
            )
        );
    }

    #[tokio::test]
    async fn app_is_reusable_across_requests() {
        let mut catalog = MockCatalogPort::new();
        catalog
            .expect_fetch_document()
            .times(2)
            .returning(|_, _| Ok(stat_json("hp", 1, None)));
        let app = App::new(
            Arc::new(catalog),
            Arc::new(FixedClock(Utc::now())),
            &AppConfig::default(),
        );
        let dir = tempfile::tempdir().unwrap();

        for name in ["first.txt", "second.txt"] {
            let request = PokedexRequest::new(RequestMode::Ability, InputSource::Inline(vec!["x".into()]))
                .with_output(OutputTarget::File(dir.path().join(name)));
            let context = app.execute(request).await.unwrap();
            // A stat document is not an ability document
            assert!(context.result[0].is_err());
        }
    }
}
