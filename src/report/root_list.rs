use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::debug;

/// Lazily reads root paths from the input list, one per line.
pub struct RootList {
    lines: Lines<BufReader<File>>,
    line_number: usize,
}

/// A root path together with its 1-based position in the input list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    pub line_number: usize,
    pub path: String,
}

impl RootList {
    pub fn open(path: &Path) -> Result<Self, RootListError> {
        debug!("Opening input list: {}", path.display());
        let file = File::open(path).context(OpenSnafu { path })?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            line_number: 0,
        })
    }
}

impl Iterator for RootList {
    type Item = Result<Root, RootListError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_number += 1;
        let line_number = self.line_number;
        Some(
            line.map(|path| Root { line_number, path })
                .context(ReadSnafu { line_number }),
        )
    }
}

#[derive(Debug, Snafu)]
pub enum RootListError {
    #[snafu(display("Input file {} doesn't exist or can't be opened: {}", path.display(), source))]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Can not read line {} of the input file: {}", line_number, source))]
    ReadError {
        line_number: usize,
        source: std::io::Error,
    },
}
