use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::checksum::Digest;

/// Writes `<digest> <path>` lines as the walk produces them.
pub struct ReportWriter<W: Write> {
    inner: BufWriter<W>,
}

impl ReportWriter<File> {
    /// Creates the report file, truncating whatever was there before.
    pub fn create(path: &Path) -> Result<Self, ReportCreationError> {
        debug!("Creating report file: {}", path.display());
        let file = File::create(path).context(CreateSnafu { path })?;
        Ok(Self::new(file))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: BufWriter::new(writer),
        }
    }

    pub fn write_line(&mut self, digest: Digest, path: &str) -> io::Result<()> {
        writeln!(self.inner, "{digest} {path}")
    }

    /// Flushes buffered lines and hands back the underlying writer.
    pub fn finish(self) -> io::Result<W> {
        self.inner.into_inner().map_err(|e| e.into_error())
    }
}

#[derive(Debug, Snafu)]
pub enum ReportCreationError {
    #[snafu(display("Output file {} can't be created: {}", path.display(), source))]
    CreateError {
        path: PathBuf,
        source: std::io::Error,
    },
}
