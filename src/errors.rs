use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

/// Represents all possible errors in the dirstat crate.
///
/// Not-found is deliberately absent: the predicate layer reports a missing
/// path as `false` or `None`, never as an error. Everything here is a real
/// failure and propagates unchanged to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// A listing or stat operation was asked to run on a path that does not
    /// exist or is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// An I/O operation failed for a reason other than the path not
    /// existing. The underlying error is kept intact as the source.
    #[error("{}: {source}", path.display())]
    Io {
        /// The path the operation was acting on.
        path: PathBuf,
        /// The original I/O error.
        #[source]
        source: io::Error,
    },

    /// A concurrently launched operation could not be joined.
    #[error("failed to join task: {how}")]
    Task {
        /// The reason for the failure.
        how: String,
    },

    /// A value could not be serialized before being written.
    #[error("failed to serialize {what}: {how}")]
    Serialize {
        /// The item that failed to serialize.
        what: String,
        /// The reason for the failure.
        how: String,
    },

    /// Error indicating a failure to parse data.
    #[error("failed to parse {what}: {how}")]
    Parse {
        /// The item that failed to parse.
        what: String,
        /// The reason for the failure.
        how: String,
    },
}

impl Error {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
