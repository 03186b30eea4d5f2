//! Run-level failures. Per-key problems never end up here; they stay in
//! their result slot as an [`pokedex_domain::EntryError`].

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to read input file {path}: {source}")]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output to {target}: {source}")]
    Output {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub fn input_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputFile {
            path: path.into(),
            source,
        }
    }

    pub fn output(target: impl ToString, source: std::io::Error) -> Self {
        Self::Output {
            target: target.to_string(),
            source,
        }
    }
}
