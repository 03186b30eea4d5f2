//! The request and the mutable context threaded through the stages.

use std::fmt;
use std::path::PathBuf;

use pokedex_domain::{Entity, Identifier, RequestMode, Resolved};

/// Where the identifiers come from. Exactly one source per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Identifiers given directly on the command line
    Inline(Vec<String>),
    /// A text file with one identifier per line
    File(PathBuf),
}

/// Where the rendered results go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Console,
    File(PathBuf),
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => f.write_str("print"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One invocation of the pokedex, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokedexRequest {
    pub mode: RequestMode,
    pub input: InputSource,
    /// Resolve a creature's abilities, moves and stats; ignored for other modes
    pub expanded: bool,
    pub output: OutputTarget,
}

impl PokedexRequest {
    pub fn new(mode: RequestMode, input: InputSource) -> Self {
        Self {
            mode,
            input,
            expanded: false,
            output: OutputTarget::Console,
        }
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }
}

impl fmt::Display for PokedexRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (file, data) = match &self.input {
            InputSource::File(path) => (path.display().to_string(), "None".to_string()),
            InputSource::Inline(keys) => ("None".to_string(), keys.join(", ")),
        };
        write!(
            f,
            "Mode: {}, Input File: {}, Input Data: {}, Expanded: {}, Output: {}",
            self.mode, file, data, self.expanded, self.output
        )
    }
}

/// Unit of work threaded through the pipeline.
///
/// The input stage fills `raw_keys` and `request_count`; exactly one fetch
/// stage replaces `result`; the output stage reads both.
#[derive(Debug)]
pub struct RequestContext {
    pub mode: RequestMode,
    pub expand: bool,
    pub source: InputSource,
    pub output: OutputTarget,
    pub raw_keys: Vec<Identifier>,
    pub result: Vec<Resolved<Entity>>,
    pub request_count: usize,
}

impl RequestContext {
    pub fn new(request: PokedexRequest) -> Self {
        Self {
            mode: request.mode,
            expand: request.expanded,
            source: request.input,
            output: request.output,
            raw_keys: Vec::new(),
            result: Vec::new(),
            request_count: 0,
        }
    }
}
