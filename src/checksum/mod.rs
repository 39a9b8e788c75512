//! Streaming 32-bit FNV checksums of byte sequences and files.

mod digest;
mod file_checksum;
mod fnv;

pub use digest::Digest;
pub use file_checksum::{Checksum, ChecksumError, hash_file};
pub use fnv::{CHUNK_SIZE, Fnv32};
