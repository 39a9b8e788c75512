use std::path::PathBuf;

use crate::cli::Cli;

/// Settings for one run, resolved once from the command line.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub timings: bool,
    pub jobs: usize,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            output: cli.output,
            timings: cli.timings,
            jobs: cli.jobs,
        }
    }
}
