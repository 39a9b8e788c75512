use std::fs::File;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::executor::{HashPool, HashPoolCreationError};
use crate::report::{ReportCreationError, ReportWriter, RootList, RootListError};
use crate::walker::{WalkSummary, WalkWarning, Walker};

pub struct Application;

impl Application {
    /// Walks every root listed in the input file and writes the report.
    ///
    /// Per-file and per-directory problems are logged and counted in the
    /// returned summary; only setup and report I/O failures end the run early.
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<WalkSummary, ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        // The input list is opened first so a missing list never touches the output.
        let roots = RootList::open(&app_config.input).context(InputSnafu)?;
        let report = ReportWriter::<File>::create(&app_config.output).context(OutputSnafu)?;
        let pool = HashPool::new(app_config.jobs).context(HashPoolSnafu)?;

        let mut walker = Walker::new(pool, report, app_config.timings);
        let mut walk_result: Result<(), ApplicationError> = Ok(());
        for root in roots {
            let root = match root {
                Ok(root) => root,
                Err(source) => {
                    walk_result = Err(source).context(InputSnafu);
                    break;
                }
            };
            if root.path.is_empty() {
                walker.warn(WalkWarning::BlankRootLine {
                    line_number: root.line_number,
                });
            }
            if let Err(source) = walker.walk(&root.path).await {
                walk_result = Err(source).context(ReportWriteSnafu);
                break;
            }
            debug!(
                "Finished root '{}', {} report lines so far",
                root.path,
                walker.summary().report_lines()
            );
        }

        let (_, summary) = walker.finish().await.context(ReportWriteSnafu)?;
        walk_result?;
        info!(
            "Hashed {} files, {} unreadable, {} warnings",
            summary.files_hashed,
            summary.files_failed,
            summary.warnings.len()
        );
        Ok(summary)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Can not read the input file"))]
    InputError { source: RootListError },
    #[snafu(display("Can not create the output file"))]
    OutputError { source: ReportCreationError },
    #[snafu(display("Critical failure encountered while starting hashing workers"))]
    HashPoolError { source: HashPoolCreationError },
    #[snafu(display("Can not write to the output file"))]
    ReportWriteError { source: std::io::Error },
}
