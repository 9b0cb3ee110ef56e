use std::error::Error as StdError;
use std::fmt;

/// Boxed source error carried across the cache and bridge seams.
pub type SourceError = Box<dyn StdError + Send + Sync>;

/// Failures observed while keeping a key consistent across the two stores.
///
/// Every variant is logged where it occurs. Only a write with no surviving
/// path is returned to callers; read failures degrade to the best available
/// value instead (see [`super::KeyStore`]).
#[derive(Debug)]
pub enum PersistenceError {
    /// The local cache rejected a read.
    CacheRead {
        /// Key that was being read.
        name: String,
        /// The underlying cache error.
        source: SourceError,
    },

    /// The local cache rejected a write.
    CacheWrite {
        /// Key that was being written.
        name: String,
        /// The underlying cache error.
        source: SourceError,
    },

    /// The authority bridge failed to read a value.
    AuthorityRead {
        /// Key that was being read.
        name: String,
        /// The underlying bridge error.
        source: SourceError,
    },

    /// The authority bridge failed to persist a value.
    AuthorityWrite {
        /// Key that was being written.
        name: String,
        /// The underlying bridge error.
        source: SourceError,
    },
}

impl PersistenceError {
    /// The key the failed operation was addressing.
    pub fn key(&self) -> &str {
        match self {
            PersistenceError::CacheRead { name, .. }
            | PersistenceError::CacheWrite { name, .. }
            | PersistenceError::AuthorityRead { name, .. }
            | PersistenceError::AuthorityWrite { name, .. } => name,
        }
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::CacheRead { name, source } => {
                write!(f, "Failed to read key {name} from local cache: {source}")
            }
            PersistenceError::CacheWrite { name, source } => {
                write!(f, "Failed to write key {name} to local cache: {source}")
            }
            PersistenceError::AuthorityRead { name, source } => {
                write!(f, "Failed to read key {name} from authority: {source}")
            }
            PersistenceError::AuthorityWrite { name, source } => {
                write!(f, "Failed to write key {name} to authority: {source}")
            }
        }
    }
}

impl StdError for PersistenceError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            PersistenceError::CacheRead { source, .. }
            | PersistenceError::CacheWrite { source, .. }
            | PersistenceError::AuthorityRead { source, .. }
            | PersistenceError::AuthorityWrite { source, .. } => Some(source.as_ref()),
        }
    }
}
