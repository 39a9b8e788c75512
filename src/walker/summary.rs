use snafu::Snafu;

use crate::executor::HashJobError;

/// Something the walk skipped or could not read, reported and then moved past.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum WalkWarning {
    /// The hashing error already names the file.
    #[snafu(display("{}", source))]
    UnreadableFile { path: String, source: HashJobError },
    #[snafu(display("Can not read children of directory {}: {}", path, source))]
    UnreadableDirectory {
        path: String,
        source: std::io::Error,
    },
    #[snafu(display("Skipping {}: {} is neither a regular file nor a directory", path, kind))]
    UnsupportedFileType { path: String, kind: &'static str },
    #[snafu(display("Skipping directory {}: already being walked through a symbolic link cycle", path))]
    SymlinkCycle { path: String },
    #[snafu(display(
        "Line {} of the input file is blank, walking the empty path as given",
        line_number
    ))]
    BlankRootLine { line_number: usize },
}

impl WalkWarning {
    /// The offending path, as it appears (or would appear) in the report.
    /// Empty for a blank input line.
    pub fn path(&self) -> &str {
        match self {
            WalkWarning::UnreadableFile { path, .. }
            | WalkWarning::UnreadableDirectory { path, .. }
            | WalkWarning::UnsupportedFileType { path, .. }
            | WalkWarning::SymlinkCycle { path } => path,
            WalkWarning::BlankRootLine { .. } => "",
        }
    }
}

/// Running totals over every root walked so far.
#[derive(Debug, Default)]
pub struct WalkSummary {
    pub files_hashed: u64,
    pub files_failed: u64,
    pub directories: u64,
    pub warnings: Vec<WalkWarning>,
}

impl WalkSummary {
    pub fn report_lines(&self) -> u64 {
        self.files_hashed + self.files_failed
    }
}
