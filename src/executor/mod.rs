mod hash_pool;

pub use hash_pool::{HashJobError, HashPool, HashPoolCreationError, HashedFile, PendingHash};
