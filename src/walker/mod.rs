//! Recursive traversal of root paths into checksum report lines.
//!
//! Traversal runs on [`walkdir`], which keeps its own stack, so tree depth is
//! not limited by the call stack. Children are visited in the order the
//! platform's directory enumeration returns them; that order is not
//! guaranteed to be sorted or stable across file systems. Failures are
//! isolated per node: a file that can't be read still gets a `00000000` line,
//! a directory that can't be listed is skipped with a warning, and the walk
//! always moves on.

mod summary;
mod walker;

pub use summary::{WalkSummary, WalkWarning};
pub use walker::Walker;
