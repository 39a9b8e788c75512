use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::thread::available_parallelism;
use std::time::{Duration, Instant};

use compio::dispatcher::{Dispatcher, DispatcherBuilder};
use futures_channel::oneshot::{Canceled, Receiver};
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::checksum::{Checksum, ChecksumError, hash_file};

/// Jobs allowed in flight per worker before the walker waits for the oldest one.
const JOBS_PER_WORKER: usize = 4;

/// Where file hashing runs.
///
/// With a single job everything happens inline on the caller's runtime. With
/// more, each file is handed to a dispatcher thread and the caller keeps
/// [`HashPool::window`] results pending at most.
pub enum HashPool {
    Inline,
    Dispatched {
        dispatcher: Dispatcher,
        window: usize,
    },
}

/// Checksum of a single file and how long it took to compute.
#[derive(Debug, Clone, Copy)]
pub struct HashedFile {
    pub checksum: Checksum,
    pub elapsed: Duration,
}

/// A hashing job that has been started but not necessarily finished.
pub enum PendingHash {
    Ready(Result<HashedFile, HashJobError>),
    Dispatched {
        path: PathBuf,
        receiver: Receiver<Result<HashedFile, ChecksumError>>,
    },
}

impl HashPool {
    /// `jobs == 0` picks the number of worker threads from available parallelism.
    pub fn new(jobs: usize) -> Result<Self, HashPoolCreationError> {
        let workers_num = match NonZeroUsize::new(jobs) {
            Some(jobs) => jobs,
            None => Self::determine_worker_count(),
        };
        if workers_num.get() == 1 {
            debug!("Hashing files inline");
            return Ok(HashPool::Inline);
        }

        debug!("Using {} worker threads for hashing", workers_num);
        let dispatcher = DispatcherBuilder::new()
            .worker_threads(workers_num)
            .build()
            .context(DispatcherSnafu)?;

        Ok(HashPool::Dispatched {
            dispatcher,
            window: workers_num.get() * JOBS_PER_WORKER,
        })
    }

    /// Determines the number of worker threads when none was requested
    fn determine_worker_count() -> NonZeroUsize {
        available_parallelism().unwrap_or(NonZeroUsize::MIN)
    }

    /// Number of jobs that may stay pending before the oldest must be resolved.
    pub fn window(&self) -> usize {
        match self {
            HashPool::Inline => 0,
            HashPool::Dispatched { window, .. } => *window,
        }
    }

    pub async fn submit(&self, path: PathBuf) -> PendingHash {
        match self {
            HashPool::Inline => {
                let result = timed_hash(path.clone()).await;
                PendingHash::Ready(result.context(ChecksumSnafu))
            }
            HashPool::Dispatched { dispatcher, .. } => {
                let job_path = path.clone();
                match dispatcher.dispatch(move || timed_hash(job_path)) {
                    Ok(receiver) => PendingHash::Dispatched { path, receiver },
                    Err(e) => PendingHash::Ready(Err(HashJobError::DispatchError {
                        path,
                        error: e.to_string(),
                    })),
                }
            }
        }
    }
}

impl PendingHash {
    pub async fn resolve(self) -> Result<HashedFile, HashJobError> {
        match self {
            PendingHash::Ready(result) => result,
            PendingHash::Dispatched { path, receiver } => match receiver.await {
                Ok(result) => result.context(ChecksumSnafu),
                Err(source) => Err(HashJobError::CanceledError { path, source }),
            },
        }
    }
}

async fn timed_hash(path: PathBuf) -> Result<HashedFile, ChecksumError> {
    let started = Instant::now();
    let checksum = hash_file(&path).await?;
    Ok(HashedFile {
        checksum,
        elapsed: started.elapsed(),
    })
}

#[derive(Debug, Snafu)]
pub enum HashPoolCreationError {
    #[snafu(display("Failed to create hashing dispatcher"))]
    DispatcherError { source: std::io::Error },
}

#[derive(Debug, Snafu)]
pub enum HashJobError {
    #[snafu(display("{}", source))]
    ChecksumError { source: ChecksumError },
    #[snafu(display("Failed to dispatch hashing of {}: {}", path.display(), error))]
    DispatchError { path: PathBuf, error: String },
    #[snafu(display("Hashing of {} got cancelled", path.display()))]
    CanceledError { path: PathBuf, source: Canceled },
}
