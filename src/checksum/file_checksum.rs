use std::path::{Path, PathBuf};

use compio::buf::BufResult;
use compio::fs::File;
use compio::io::AsyncReadAt;
use snafu::{ResultExt, Snafu};

use crate::checksum::{CHUNK_SIZE, Digest, Fnv32};

/// Digest of a file together with the number of bytes that went into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    pub digest: Digest,
    pub bytes: u64,
}

/// Streams the file at `path` through [`Fnv32`] in [`CHUNK_SIZE`] pieces.
///
/// Only one chunk is held in memory, so file size is unbounded. Any failure
/// is returned as is; the caller decides what a failed file means.
pub async fn hash_file(path: &Path) -> Result<Checksum, ChecksumError> {
    let file = File::open(path).await.context(OpenSnafu { path })?;

    let mut hasher = Fnv32::new();
    let mut buffer = Vec::with_capacity(CHUNK_SIZE);
    let mut offset = 0u64;
    loop {
        buffer.clear();
        let BufResult(result, returned) = file.read_at(buffer, offset).await;
        buffer = returned;
        let read = result.context(ReadSnafu { path, offset })?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
        offset += read as u64;
    }

    Ok(Checksum {
        digest: hasher.digest(),
        bytes: offset,
    })
}

#[derive(Debug, Snafu)]
pub enum ChecksumError {
    #[snafu(display("Failed to open {}: {}", path.display(), source))]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read {} at offset {}: {}", path.display(), offset, source))]
    ReadError {
        path: PathBuf,
        offset: u64,
        source: std::io::Error,
    },
}
