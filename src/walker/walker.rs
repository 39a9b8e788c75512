use std::collections::VecDeque;
use std::fs::{self, FileType};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use snafu::IntoError;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::checksum::Digest;
use crate::executor::{HashJobError, HashPool, HashedFile, PendingHash};
use crate::report::ReportWriter;
use crate::walker::summary::{
    SymlinkCycleSnafu, UnreadableDirectorySnafu, UnreadableFileSnafu, UnsupportedFileTypeSnafu,
    WalkSummary, WalkWarning,
};

/// A file whose report line waits for its hashing job.
struct InFlightFile {
    report_path: String,
    pending: PendingHash,
}

/// Walks root paths and writes one report line per file found beneath them.
///
/// Report lines always come out in traversal order, even when hashing runs
/// on a [`HashPool`] with several workers.
pub struct Walker<W: Write> {
    pool: HashPool,
    report: ReportWriter<W>,
    timings: bool,
    in_flight: VecDeque<InFlightFile>,
    summary: WalkSummary,
}

impl<W: Write> Walker<W> {
    pub fn new(pool: HashPool, report: ReportWriter<W>, timings: bool) -> Self {
        Self {
            pool,
            report,
            timings,
            in_flight: VecDeque::new(),
            summary: WalkSummary::default(),
        }
    }

    /// Walks a single root to completion.
    ///
    /// Only failures to write the report are returned; everything that goes
    /// wrong with the tree itself becomes a [`WalkWarning`].
    pub async fn walk(&mut self, root: &str) -> io::Result<()> {
        debug!("Walking root '{}'", root);
        // Directories on the branch currently being walked, indexed by depth.
        let mut branch: Vec<String> = Vec::new();

        for entry in WalkDir::new(root).follow_links(true) {
            match entry {
                Ok(entry) => self.visit_entry(entry, &mut branch).await?,
                Err(error) => self.visit_error(root, error, &branch).await?,
            }
        }

        self.drain(0).await
    }

    pub fn summary(&self) -> &WalkSummary {
        &self.summary
    }

    /// Records a problem found outside the tree itself, such as a bad input line.
    pub fn warn(&mut self, warning: WalkWarning) {
        warn!(path = warning.path(), "{}", warning);
        self.summary.warnings.push(warning);
    }

    /// Flushes the report and returns the underlying writer with the totals.
    pub async fn finish(mut self) -> io::Result<(W, WalkSummary)> {
        self.drain(0).await?;
        let writer = self.report.finish()?;
        Ok((writer, self.summary))
    }

    async fn visit_entry(&mut self, entry: DirEntry, branch: &mut Vec<String>) -> io::Result<()> {
        let report_path = entry.path().to_string_lossy().into_owned();
        // Symlinks are followed, so this is the type of the link target.
        let file_type = entry.file_type();
        if file_type.is_dir() {
            debug!("Entering '{}'", report_path);
            self.summary.directories += 1;
            branch.truncate(entry.depth());
            branch.push(report_path);
            Ok(())
        } else if file_type.is_file() {
            self.submit_file(entry.into_path(), report_path).await
        } else {
            let kind = describe_file_type(file_type);
            self.warn(UnsupportedFileTypeSnafu { path: report_path, kind }.build());
            Ok(())
        }
    }

    async fn visit_error(
        &mut self,
        root: &str,
        error: walkdir::Error,
        branch: &[String],
    ) -> io::Result<()> {
        let failed_path = error.path().map(Path::to_path_buf);
        if error.loop_ancestor().is_some() {
            let path = failed_path
                .map(|path| path.to_string_lossy().into_owned())
                .unwrap_or_default();
            self.warn(SymlinkCycleSnafu { path }.build());
            return Ok(());
        }

        match failed_path {
            Some(path) if !fs::metadata(&path).is_ok_and(|metadata| metadata.is_dir()) => {
                // Missing, dangling or inaccessible: the hash attempt reports it
                // and the file still gets a sentinel line.
                let report_path = path.to_string_lossy().into_owned();
                debug!("Can not classify '{}': {}", report_path, error);
                self.submit_file(path, report_path).await
            }
            Some(path) => {
                let report_path = path.to_string_lossy().into_owned();
                self.warn(UnreadableDirectorySnafu { path: report_path }.into_error(error.into()));
                Ok(())
            }
            None => {
                // Reading one entry of a directory listing failed.
                let report_path = error
                    .depth()
                    .checked_sub(1)
                    .and_then(|depth| branch.get(depth))
                    .or(branch.last())
                    .cloned()
                    .unwrap_or_else(|| root.to_owned());
                self.warn(UnreadableDirectorySnafu { path: report_path }.into_error(error.into()));
                Ok(())
            }
        }
    }

    async fn submit_file(&mut self, path: PathBuf, report_path: String) -> io::Result<()> {
        let pending = self.pool.submit(path).await;
        self.in_flight.push_back(InFlightFile { report_path, pending });
        self.drain(self.pool.window()).await
    }

    /// Resolves the oldest jobs until at most `keep` remain pending.
    async fn drain(&mut self, keep: usize) -> io::Result<()> {
        while self.in_flight.len() > keep {
            let Some(file) = self.in_flight.pop_front() else {
                break;
            };
            let result = file.pending.resolve().await;
            self.record(file.report_path, result)?;
        }
        Ok(())
    }

    fn record(
        &mut self,
        report_path: String,
        result: Result<HashedFile, HashJobError>,
    ) -> io::Result<()> {
        match result {
            Ok(hashed) => {
                let digest = hashed.checksum.digest;
                if self.timings {
                    info!(
                        "Hash of {} (size: {}MB) is {} (calculation took {}ms)",
                        report_path,
                        hashed.checksum.bytes >> 20,
                        digest,
                        hashed.elapsed.as_millis()
                    );
                }
                self.summary.files_hashed += 1;
                self.report.write_line(digest, &report_path)
            }
            Err(source) => {
                self.summary.files_failed += 1;
                self.report.write_line(Digest::SENTINEL, &report_path)?;
                self.warn(UnreadableFileSnafu { path: report_path }.into_error(source));
                Ok(())
            }
        }
    }
}

#[cfg_attr(not(unix), allow(unused_variables))]
fn describe_file_type(file_type: FileType) -> &'static str {
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;

        if file_type.is_fifo() {
            return "a named pipe";
        }
        if file_type.is_socket() {
            return "a socket";
        }
        if file_type.is_block_device() {
            return "a block device";
        }
        if file_type.is_char_device() {
            return "a character device";
        }
    }
    "a special file"
}
