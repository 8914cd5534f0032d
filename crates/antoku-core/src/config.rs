use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::AkResult;

/// Knobs of the ant colony search. Doubles as the CLI surface (every
/// field is a `--flag`) and as a JSON document for `--params` files.
#[derive(Args, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    #[arg(long, default_value_t = 4, help = "Number of parallel sub-colonies")]
    pub subcolonies: usize,

    #[arg(long, default_value_t = 10, help = "Ants per sub-colony")]
    pub ants: usize,

    #[arg(long, default_value_t = 120.0, help = "Wall-clock limit in seconds")]
    pub timeout: f64,

    #[arg(long, default_value_t = 0.9, help = "Exploitation threshold")]
    pub q0: f64,

    #[arg(
        long,
        default_value_t = 0.9,
        help = "Evaporation rate of the standard global update"
    )]
    pub rho: f64,

    #[arg(
        long,
        default_value_t = 0.05,
        help = "Evaporation rate of the communication update"
    )]
    pub rhocomm: f64,

    #[arg(
        long,
        default_value_t = 0.005,
        help = "Best-solution trail decay per non-communication iteration"
    )]
    pub evap: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            subcolonies: 4,
            ants: 10,
            timeout: 120.0,
            q0: 0.9,
            rho: 0.9,
            rhocomm: 0.05,
            evap: 0.005,
        }
    }
}

impl SearchParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AkResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays values the user typed explicitly on the command line,
    /// leaving file-provided values alone otherwise.
    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &clap::ArgMatches) {
        macro_rules! merge {
            ($field:ident, $name:expr) => {
                if matches.value_source($name) == Some(clap::parser::ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }
        merge!(subcolonies, "subcolonies");
        merge!(ants, "ants");
        merge!(timeout, "timeout");
        merge!(q0, "q0");
        merge!(rho, "rho");
        merge!(rhocomm, "rhocomm");
        merge!(evap, "evap");
    }

    pub fn max_time(&self) -> Duration {
        Duration::from_secs_f64(self.timeout.max(0.0))
    }
}
