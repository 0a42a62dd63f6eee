//! One-shot listing of a single directory level, with caller-supplied
//! filtering and optional stat enrichment.
//!
//! Every function validates that the target is a directory, enumerates its
//! immediate children once, and returns survivors in enumeration order.
//! Nothing recurses into subdirectories and nothing is cached between
//! calls. The `*_concurrent` variants evaluate their predicate for all
//! entries at once and reassemble verdicts in entry order; sequential
//! variants evaluate one entry at a time. Both obey the same contract.

use std::future::Future;
use std::path::Path;
use std::path::PathBuf;

use futures_lite::StreamExt;
use log::debug;
use log::warn;

use crate::errors::Error;
use crate::file::DirectoryEntry;
use crate::probe;
use crate::utils::fan_out;

async fn ensure_dir(dir: &Path) -> Result<(), Error> {
    if probe::is_dir(dir).await? {
        Ok(())
    } else {
        Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        })
    }
}

/// Immediate entry names of `dir`, in the order the platform returns them.
async fn entry_names(dir: &Path) -> Result<Vec<String>, Error> {
    let mut entries = async_fs::read_dir(dir).await.map_err(|e| Error::io(dir, e))?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next().await {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Names of the immediate entries of `dir` for which `keep` returned true.
///
/// `keep` receives the full path (`dir` joined with the entry name) and is
/// called once per entry, in enumeration order. Fails with
/// [`Error::NotADirectory`] when `dir` is missing or not a directory; a
/// predicate error fails the whole call.
pub async fn filtered_names<P, F>(dir: P, mut keep: F) -> Result<Vec<String>, Error>
where
    P: AsRef<Path>,
    F: FnMut(&Path) -> Result<bool, Error>,
{
    let dir = dir.as_ref();
    ensure_dir(dir).await?;
    let names = entry_names(dir).await?;
    let mut kept = Vec::with_capacity(names.len());
    for name in names {
        if keep(&dir.join(&name))? {
            kept.push(name);
        }
    }
    debug!("{}: kept {} entries", dir.display(), kept.len());
    Ok(kept)
}

/// Like [`filtered_names`], but `keep` is a suspending predicate evaluated
/// concurrently for all entries.
///
/// All predicate futures are started before any is awaited; verdicts are
/// matched back to their entries by position, so the result order never
/// depends on which predicate settles first. The first predicate failure
/// fails the whole call.
pub async fn filtered_names_concurrent<P, F, Fut>(dir: P, keep: F) -> Result<Vec<String>, Error>
where
    P: AsRef<Path>,
    F: Fn(PathBuf) -> Fut,
    Fut: Future<Output = Result<bool, Error>> + Send + 'static,
{
    let dir = dir.as_ref();
    ensure_dir(dir).await?;
    let names = entry_names(dir).await?;
    let verdicts = fan_out(names.iter().map(|name| keep(dir.join(name)))).await?;
    let kept: Vec<String> = names
        .into_iter()
        .zip(verdicts)
        .filter_map(|(name, verdict)| verdict.then_some(name))
        .collect();
    debug!("{}: kept {} entries", dir.display(), kept.len());
    Ok(kept)
}

/// Stats every surviving name concurrently, tagging records with the entry
/// name. An entry that vanishes between listing and stat yields `None`.
async fn stat_entries(dir: &Path, names: Vec<String>) -> Result<Vec<Option<DirectoryEntry>>, Error> {
    fan_out(names.into_iter().map(|name| {
        let path = dir.join(&name);
        async move {
            match probe::stat_opt(&path).await? {
                Some(stats) => Ok(Some(DirectoryEntry { name, stats })),
                None => {
                    warn!("{}: vanished between listing and stat", path.display());
                    Ok(None)
                }
            }
        }
    }))
    .await
}

/// Stat records for the entries of `dir` that pass the sequential predicate
/// `keep`, in the surviving entries' enumeration order.
///
/// Each record carries the entry name it was derived from. A slot is `None`
/// when its entry disappeared after enumeration (an accepted race); every
/// other stat failure fails the whole call.
pub async fn filtered_stats<P, F>(dir: P, keep: F) -> Result<Vec<Option<DirectoryEntry>>, Error>
where
    P: AsRef<Path>,
    F: FnMut(&Path) -> Result<bool, Error>,
{
    let dir = dir.as_ref();
    let names = filtered_names(dir, keep).await?;
    stat_entries(dir, names).await
}

/// Like [`filtered_stats`], with a suspending predicate evaluated
/// concurrently for all entries.
pub async fn filtered_stats_concurrent<P, F, Fut>(
    dir: P,
    keep: F,
) -> Result<Vec<Option<DirectoryEntry>>, Error>
where
    P: AsRef<Path>,
    F: Fn(PathBuf) -> Fut,
    Fut: Future<Output = Result<bool, Error>> + Send + 'static,
{
    let dir = dir.as_ref();
    let names = filtered_names_concurrent(dir, keep).await?;
    stat_entries(dir, names).await
}

/// Names of the regular files immediately inside `dir`.
pub async fn file_names<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, Error> {
    filtered_names_concurrent(dir, |path| async move { probe::is_file(&path).await }).await
}

/// Names of the directories immediately inside `dir`.
pub async fn dir_names<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, Error> {
    filtered_names_concurrent(dir, |path| async move { probe::is_dir(&path).await }).await
}

/// Stat records for the regular files immediately inside `dir`.
pub async fn file_stats<P: AsRef<Path>>(dir: P) -> Result<Vec<Option<DirectoryEntry>>, Error> {
    filtered_stats_concurrent(dir, |path| async move { probe::is_file(&path).await }).await
}

/// Stat records for the directories immediately inside `dir`.
pub async fn dir_stats<P: AsRef<Path>>(dir: P) -> Result<Vec<Option<DirectoryEntry>>, Error> {
    filtered_stats_concurrent(dir, |path| async move { probe::is_dir(&path).await }).await
}
