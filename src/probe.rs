//! Existence and type predicates for single paths.
//!
//! Every function here answers a question about one path with one metadata
//! query. A missing path is an answer (`false` or `None`), not an error;
//! any other I/O failure propagates so callers can tell "does not exist"
//! apart from "could not be determined".

use std::io;
use std::path::Path;

use tokio::fs;

use crate::errors::Error;
use crate::file::FileStat;

pub(crate) fn is_not_found(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}

/// Returns the metadata of `path`, or `None` exactly when it does not exist.
pub async fn stat_opt<P: AsRef<Path>>(path: P) -> Result<Option<FileStat>, Error> {
    let path = path.as_ref();
    match fs::metadata(path).await {
        Ok(metadata) => Ok(Some(FileStat::from_metadata(&metadata))),
        Err(e) if is_not_found(&e) => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// True iff a metadata query on `path` succeeds.
pub async fn exists<P: AsRef<Path>>(path: P) -> Result<bool, Error> {
    Ok(stat_opt(path).await?.is_some())
}

/// True iff `path` exists and is a directory.
pub async fn is_dir<P: AsRef<Path>>(path: P) -> Result<bool, Error> {
    Ok(stat_opt(path).await?.is_some_and(|st| st.is_directory))
}

/// True iff `path` exists and is a regular file.
pub async fn is_file<P: AsRef<Path>>(path: P) -> Result<bool, Error> {
    Ok(stat_opt(path).await?.is_some_and(|st| st.is_file))
}
