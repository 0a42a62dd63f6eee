//! Blocking variants of the path predicates and the listing pipeline.
//!
//! Same contract as the async API: survivors come back in enumeration
//! order, a missing or non-directory target is a hard error, and an entry
//! that vanishes between listing and stat yields a `None` slot. Filtering
//! and enrichment run one entry at a time here; there is no fan-out off
//! the async runtime.

use std::fs;
use std::path::Path;

use log::debug;
use log::warn;

use crate::errors::Error;
use crate::file::DirectoryEntry;
use crate::file::FileStat;
use crate::probe::is_not_found;

/// Returns the metadata of `path`, or `None` exactly when it does not exist.
pub fn stat_opt<P: AsRef<Path>>(path: P) -> Result<Option<FileStat>, Error> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(metadata) => Ok(Some(FileStat::from_metadata(&metadata))),
        Err(e) if is_not_found(&e) => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// True iff a metadata query on `path` succeeds.
pub fn exists<P: AsRef<Path>>(path: P) -> Result<bool, Error> {
    Ok(stat_opt(path)?.is_some())
}

/// True iff `path` exists and is a directory.
pub fn is_dir<P: AsRef<Path>>(path: P) -> Result<bool, Error> {
    Ok(stat_opt(path)?.is_some_and(|st| st.is_directory))
}

/// True iff `path` exists and is a regular file.
pub fn is_file<P: AsRef<Path>>(path: P) -> Result<bool, Error> {
    Ok(stat_opt(path)?.is_some_and(|st| st.is_file))
}

fn ensure_dir(dir: &Path) -> Result<(), Error> {
    if is_dir(dir)? {
        Ok(())
    } else {
        Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        })
    }
}

fn entry_names(dir: &Path) -> Result<Vec<String>, Error> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Names of the immediate entries of `dir` for which `keep` returned true.
///
/// `keep` receives the full path (`dir` joined with the entry name) and is
/// called once per entry, in enumeration order.
pub fn filtered_names<P, F>(dir: P, mut keep: F) -> Result<Vec<String>, Error>
where
    P: AsRef<Path>,
    F: FnMut(&Path) -> Result<bool, Error>,
{
    let dir = dir.as_ref();
    ensure_dir(dir)?;
    let names = entry_names(dir)?;
    let mut kept = Vec::with_capacity(names.len());
    for name in names {
        if keep(&dir.join(&name))? {
            kept.push(name);
        }
    }
    debug!("{}: kept {} entries", dir.display(), kept.len());
    Ok(kept)
}

/// Stat records for the entries of `dir` that pass `keep`, each tagged with
/// its entry name. A slot is `None` when its entry disappeared after
/// enumeration.
pub fn filtered_stats<P, F>(dir: P, keep: F) -> Result<Vec<Option<DirectoryEntry>>, Error>
where
    P: AsRef<Path>,
    F: FnMut(&Path) -> Result<bool, Error>,
{
    let dir = dir.as_ref();
    let names = filtered_names(dir, keep)?;
    names
        .into_iter()
        .map(|name| {
            let path = dir.join(&name);
            match stat_opt(&path)? {
                Some(stats) => Ok(Some(DirectoryEntry { name, stats })),
                None => {
                    warn!("{}: vanished between listing and stat", path.display());
                    Ok(None)
                }
            }
        })
        .collect()
}

/// Names of the regular files immediately inside `dir`.
pub fn file_names<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, Error> {
    filtered_names(dir, |path| is_file(path))
}

/// Names of the directories immediately inside `dir`.
pub fn dir_names<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, Error> {
    filtered_names(dir, |path| is_dir(path))
}

/// Stat records for the regular files immediately inside `dir`.
pub fn file_stats<P: AsRef<Path>>(dir: P) -> Result<Vec<Option<DirectoryEntry>>, Error> {
    filtered_stats(dir, |path| is_file(path))
}

/// Stat records for the directories immediately inside `dir`.
pub fn dir_stats<P: AsRef<Path>>(dir: P) -> Result<Vec<Option<DirectoryEntry>>, Error> {
    filtered_stats(dir, |path| is_dir(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestRoot;

    fn sorted(mut names: Vec<String>) -> Vec<String> {
        names.sort();
        names
    }

    #[test]
    fn predicates_answer_for_files_and_dirs() {
        let root = TestRoot::new().unwrap();

        assert!(exists(root.path("file1.txt")).unwrap());
        assert!(!exists(root.path("file0.txt")).unwrap());
        assert!(is_dir(root.path("dir1")).unwrap());
        assert!(!is_dir(root.path("file1.txt")).unwrap());
        assert!(is_file(root.path("file1.txt")).unwrap());
        assert!(!is_file(root.path("dir1")).unwrap());
        assert!(stat_opt(root.path("dir0")).unwrap().is_none());
    }

    #[test]
    fn file_names_lists_only_regular_files() {
        let root = TestRoot::new().unwrap();

        assert_eq!(
            sorted(file_names(root.root.path()).unwrap()),
            vec!["file1.txt", "file2.txt", "file3.txt"]
        );
        assert_eq!(file_names(root.path("dir2")).unwrap(), Vec::<String>::new());
        assert_eq!(sorted(dir_names(root.root.path()).unwrap()), vec!["dir1", "dir2"]);
    }

    #[test]
    fn listing_a_missing_path_is_an_error() {
        let root = TestRoot::new().unwrap();

        assert!(matches!(
            file_names(root.path("dir0")),
            Err(Error::NotADirectory { .. })
        ));
        assert!(matches!(
            filtered_names(root.path("file1.txt"), |_| Ok(true)),
            Err(Error::NotADirectory { .. })
        ));
    }

    #[test]
    fn stats_are_tagged_and_ordered_like_the_names() {
        let root = TestRoot::new().unwrap();

        let stats = file_stats(root.path("dir1")).unwrap();
        let names: Vec<String> = stats
            .iter()
            .map(|entry| entry.as_ref().unwrap().name.clone())
            .collect();
        assert_eq!(names, file_names(root.path("dir1")).unwrap());
        assert_eq!(sorted(names), vec!["file1_1.txt", "file1_2.txt"]);
    }

    #[test]
    fn listing_twice_is_idempotent() {
        let root = TestRoot::new().unwrap();

        assert_eq!(
            file_names(root.root.path()).unwrap(),
            file_names(root.root.path()).unwrap()
        );
    }
}
