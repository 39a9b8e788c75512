//! Input list of root paths and the checksum report written for them.

mod report_writer;
mod root_list;

pub use report_writer::{ReportCreationError, ReportWriter};
pub use root_list::{RootList, RootListError};
