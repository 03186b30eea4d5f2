//! Output stage: render the ordered results to the console or a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::Arc;

use chrono::Local;
use pokedex_domain::{Entity, Resolved};

use super::context::{OutputTarget, RequestContext};
use super::error::PipelineError;
use crate::infrastructure::ports::ClockPort;

/// Header timestamp format in local wall-clock time, e.g. `19/10/2026 14:05`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

pub struct Renderer {
    clock: Arc<dyn ClockPort>,
}

impl Renderer {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self { clock }
    }

    pub fn render(&self, context: &RequestContext) -> Result<(), PipelineError> {
        match &context.output {
            OutputTarget::Console => {
                let stdout = io::stdout();
                let mut writer = stdout.lock();
                write_console(&context.result, &mut writer)
                    .and_then(|_| writer.flush())
                    .map_err(|e| PipelineError::output(&context.output, e))
            }
            OutputTarget::File(path) => {
                let file = File::create(path).map_err(|e| PipelineError::output(&context.output, e))?;
                let mut writer = BufWriter::new(file);
                self.write_report(&context.result, context.request_count, &mut writer)
                    .and_then(|_| writer.flush())
                    .map_err(|e| PipelineError::output(&context.output, e))?;
                tracing::info!(path = %path.display(), "Wrote results to file");
                Ok(())
            }
        }
    }

    /// File layout: timestamp and request count header, then one item per line.
    pub fn write_report<W: Write>(
        &self,
        results: &[Resolved<Entity>],
        request_count: usize,
        writer: &mut W,
    ) -> io::Result<()> {
        let timestamp = self.clock.now().with_timezone(&Local).format(TIMESTAMP_FORMAT);
        writeln!(writer, "Timestamp: {}", timestamp)?;
        writeln!(writer, "Number of requests: {}", request_count)?;
        for slot in results {
            writeln!(writer, "{}", render_slot(slot))?;
        }
        Ok(())
    }
}

/// Console layout: every item followed by a blank line.
pub fn write_console<W: Write>(results: &[Resolved<Entity>], writer: &mut W) -> io::Result<()> {
    for slot in results {
        writeln!(writer, "{}\n", render_slot(slot))?;
    }
    Ok(())
}

/// An entity's text, or the placeholder for a marker.
pub fn render_slot(slot: &Resolved<Entity>) -> String {
    match slot {
        Ok(entity) => entity.to_string(),
        Err(marker) => marker.placeholder().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockClockPort;
    use crate::use_cases::pipeline::context::{InputSource, PokedexRequest};
    use chrono::{TimeZone, Utc};
    use pokedex_domain::{
        Ability, EntityKind, EntryError, Identifier, RequestMode, ERROR_PLACEHOLDER,
    };

    fn results() -> Vec<Resolved<Entity>> {
        vec![
            Ok(Ability::new("stench", 1).into()),
            Err(EntryError::fetch(EntityKind::Ability, Identifier::new("nope"), "404")),
        ]
    }

    #[test]
    fn console_separates_items_with_blank_line() {
        let mut out = Vec::new();
        write_console(&results(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = format!(
            "{}\n\n{}\n\n",
            Ability::new("stench", 1),
            ERROR_PLACEHOLDER
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn report_has_timestamp_and_count_header() {
        let instant = Utc.with_ymd_and_hms(2026, 3, 7, 9, 5, 0).unwrap();
        let mut clock = MockClockPort::new();
        clock.expect_now().times(1).returning(move || instant);
        let renderer = Renderer::new(Arc::new(clock));

        let mut out = Vec::new();
        renderer.write_report(&results(), 2, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = format!(
            "Timestamp: {}",
            instant.with_timezone(&Local).format(TIMESTAMP_FORMAT)
        );
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(expected.as_str()));
        assert_eq!(lines.next(), Some("Number of requests: 2"));
        assert_eq!(lines.next(), Some("Name: stench"));
        assert!(text.ends_with(&format!("{}\n", ERROR_PLACEHOLDER)));
    }

    #[test]
    fn render_writes_file_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let instant = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let renderer = Renderer::new(Arc::new(FixedClock(instant)));

        let mut context = RequestContext::new(
            PokedexRequest::new(RequestMode::Ability, InputSource::Inline(vec!["stench".into()]))
                .with_output(OutputTarget::File(path.clone())),
        );
        context.request_count = 1;
        context.result = vec![Ok(Ability::new("stench", 1).into())];

        renderer.render(&context).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let header = format!(
            "Timestamp: {}\nNumber of requests: 1\nName: stench\n",
            instant.with_timezone(&Local).format(TIMESTAMP_FORMAT)
        );
        assert!(written.starts_with(&header));
    }

    #[test]
    fn timestamp_uses_local_wall_clock() {
        let instant = Utc.with_ymd_and_hms(2026, 6, 30, 23, 45, 0).unwrap();
        let renderer = Renderer::new(Arc::new(FixedClock(instant)));

        let mut out = Vec::new();
        renderer.write_report(&[], 0, &mut out).unwrap();

        let local = instant.with_timezone(&Local).naive_local();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.lines().next(),
            Some(format!("Timestamp: {}", local.format("%d/%m/%Y %H:%M")).as_str())
        );
    }

    #[test]
    fn unwritable_file_is_an_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("report.txt");
        let renderer = Renderer::new(Arc::new(FixedClock(Utc::now())));

        let mut context = RequestContext::new(
            PokedexRequest::new(RequestMode::Move, InputSource::Inline(vec![]))
                .with_output(OutputTarget::File(path)),
        );
        context.result = Vec::new();

        let err = renderer.render(&context).unwrap_err();
        assert!(matches!(err, PipelineError::Output { .. }));
    }
}
