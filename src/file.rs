use std::fs::Metadata;
use std::time::SystemTime;

use serde::Deserialize;
use serde::Serialize;

use crate::utils::format_system_time;

/// Represents the metadata of a file or directory: its size, modification
/// time and type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Hash, Eq)]
pub struct FileStat {
    /// The size of the file in bytes. For directories, this may be zero or
    /// implementation-defined.
    pub size: u64,
    /// The last modification time of the file or directory in RFC 3339 - Z
    /// format. For example "2018-01-26T18:30:09.453Z"
    pub mtime: String,
    /// Whether this entry is a directory.
    pub is_directory: bool,
    /// Whether this entry is a regular file. Both flags are false for
    /// symlinks and special files.
    pub is_file: bool,
}

impl FileStat {
    /// Creates a `FileStat` from a `Metadata` value.
    ///
    /// Files whose modification time the platform cannot report are pinned
    /// to the Unix epoch.
    pub fn from_metadata(metadata: &Metadata) -> Self {
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        FileStat {
            size: metadata.len(),
            mtime: format_system_time(modified),
            is_directory: metadata.is_dir(),
            is_file: metadata.is_file(),
        }
    }
}

/// One directory entry that survived filtering, tagged with the name it was
/// enumerated under and carrying its metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Hash, Eq)]
pub struct DirectoryEntry {
    /// Name of the file or directory within the listed directory.
    pub name: String,
    /// Metadata of the file or directory.
    pub stats: FileStat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_from_metadata_reflects_kind() {
        let root = crate::TestRoot::new().unwrap();
        let file_md = std::fs::metadata(root.path("file1.txt")).unwrap();
        let dir_md = std::fs::metadata(root.path("dir1")).unwrap();

        let file_stat = FileStat::from_metadata(&file_md);
        assert!(file_stat.is_file);
        assert!(!file_stat.is_directory);

        let dir_stat = FileStat::from_metadata(&dir_md);
        assert!(dir_stat.is_directory);
        assert!(!dir_stat.is_file);
    }

    #[test]
    fn entry_serializes_with_name_and_stats() {
        let root = crate::TestRoot::new().unwrap();
        let metadata = std::fs::metadata(root.path("dir1/file1_2.txt")).unwrap();
        let entry = DirectoryEntry {
            name: "file1_2.txt".to_string(),
            stats: FileStat::from_metadata(&metadata),
        };

        let json: serde_json::Value = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["name"], "file1_2.txt");
        assert_eq!(json["stats"]["is_file"], true);
        assert_eq!(json["stats"]["size"], metadata.len());
    }
}
