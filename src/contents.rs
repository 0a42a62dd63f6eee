//! Reading and writing file contents.

use std::path::Path;

use serde::Serialize;
use tokio::fs;

use crate::errors::Error;
use crate::probe;

/// Reads `path` as UTF-8 text.
///
/// Returns `None` when `path` is not a regular file (missing, or a
/// directory). Read failures on an existing file propagate.
pub async fn read_to_string<P: AsRef<Path>>(path: P) -> Result<Option<String>, Error> {
    let path = path.as_ref();
    if !probe::is_file(path).await? {
        return Ok(None);
    }
    let contents = fs::read_to_string(path).await.map_err(|e| Error::io(path, e))?;
    Ok(Some(contents))
}

/// Reads `path` as UTF-8 text and splits it on `\n`.
///
/// Unlike [`read_to_string`], a missing file is an error here. The split is
/// verbatim: a trailing newline produces a trailing empty line.
pub async fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).await.map_err(|e| Error::io(path, e))?;
    Ok(contents.split('\n').map(str::to_owned).collect())
}

/// Writes `contents` to `path`, creating or truncating the file.
pub async fn write_string<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), Error> {
    let path = path.as_ref();
    fs::write(path, contents).await.map_err(|e| Error::io(path, e))
}

/// Serializes `value` as JSON and writes it to `path`, creating or
/// truncating the file.
pub async fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), Error> {
    let path = path.as_ref();
    let contents = serde_json::to_string(value).map_err(|e| Error::Serialize {
        what: path.display().to_string(),
        how: e.to_string(),
    })?;
    write_string(path, &contents).await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::TestRoot;

    #[tokio::test]
    async fn written_text_reads_back_verbatim() {
        let root = TestRoot::new().unwrap();
        let path = root.path("out/write1.txt");

        root.create_dir("out").unwrap();
        write_string(&path, "write string").await.unwrap();
        assert_eq!(
            read_to_string(&path).await.unwrap(),
            Some("write string".to_string())
        );
    }

    #[tokio::test]
    async fn read_is_none_for_missing_paths_and_dirs() {
        let root = TestRoot::new().unwrap();

        assert_eq!(read_to_string(root.path("file0.txt")).await.unwrap(), None);
        assert_eq!(read_to_string(root.path("dir1")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn json_values_serialize_before_writing() {
        let root = TestRoot::new().unwrap();

        let obj = root.path("write2.json");
        write_json(&obj, &json!({"write1": "Object", "write2": 2})).await.unwrap();
        assert_eq!(
            read_to_string(&obj).await.unwrap(),
            Some(r#"{"write1":"Object","write2":2}"#.to_string())
        );

        let null = root.path("write3.json");
        write_json(&null, &json!(null)).await.unwrap();
        assert_eq!(read_to_string(&null).await.unwrap(), Some("null".to_string()));
    }

    #[tokio::test]
    async fn lines_split_verbatim() {
        let root = TestRoot::new().unwrap();
        let path = root.path("lines.txt");

        write_string(&path, "one\ntwo\n").await.unwrap();
        assert_eq!(read_lines(&path).await.unwrap(), vec!["one", "two", ""]);

        assert!(read_lines(root.path("file0.txt")).await.is_err());
    }
}
