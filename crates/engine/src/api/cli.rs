//! Command line surface.
//!
//! ```text
//! pokedex pokemon --inputdata 4 7 --expanded
//! pokedex ability --inputfile abilities.txt --output report.txt
//! ```

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use pokedex_domain::RequestMode;

use crate::use_cases::pipeline::{InputSource, OutputTarget, PokedexRequest};

/// Output value that selects the console instead of a file.
pub const CONSOLE_OUTPUT: &str = "print";

/// Look up Pokemon, abilities and moves from the PokeAPI catalog
#[derive(Debug, Parser)]
#[command(name = "pokedex")]
#[command(about = "Look up Pokemon, abilities and moves", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("input").required(true).args(["inputfile", "inputdata"])))]
pub struct Cli {
    /// What to look up: pokemon, ability or move
    #[arg(value_name = "MODE", value_parser = parse_mode)]
    pub mode: RequestMode,

    /// Text file with one name or id per line
    #[arg(long, value_name = "PATH")]
    pub inputfile: Option<PathBuf>,

    /// Names or ids given directly
    #[arg(long, value_name = "ID", num_args = 1..)]
    pub inputdata: Vec<String>,

    /// Also fetch each Pokemon's abilities, moves and stats
    #[arg(long)]
    pub expanded: bool,

    /// File to write results to, or "print" for the console
    #[arg(long, value_name = "PATH", default_value = CONSOLE_OUTPUT)]
    pub output: String,
}

fn parse_mode(value: &str) -> Result<RequestMode, String> {
    value.parse::<RequestMode>().map_err(|e| e.to_string())
}

impl Cli {
    pub fn into_request(self) -> PokedexRequest {
        let input = match self.inputfile {
            Some(path) => InputSource::File(path),
            None => InputSource::Inline(self.inputdata),
        };
        let output = if self.output == CONSOLE_OUTPUT {
            OutputTarget::Console
        } else {
            OutputTarget::File(PathBuf::from(self.output))
        };

        PokedexRequest::new(self.mode, input)
            .expanded(self.expanded)
            .with_output(output)
    }
}
