//! JSON file persistence.
//!
//! Files are opened, fully read or written, and closed within one call; the
//! handle is dropped on every path out, including errors.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{StoreError, StoreResult};

/// Result of a load request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file at the path; the collection was left as-is.
    Missing,
    /// The collection was replaced with this many entities.
    Loaded(usize),
    /// The load failed and the failure was logged instead of returned.
    Skipped,
}

/// Serialize `value` as indented JSON, replacing any existing file.
pub fn write_json<T>(path: &Path, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
{
    let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| {
        if e.is_io() {
            StoreError::io(path, io::Error::from(e))
        } else {
            StoreError::Serialize {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    writer.write_all(b"\n").map_err(|e| StoreError::io(path, e))?;
    writer.flush().map_err(|e| StoreError::io(path, e))
}

/// Read and deserialize a JSON file. A missing file yields `Ok(None)`.
pub fn read_json<T>(path: &Path) -> StoreResult<Option<T>>
where
    T: DeserializeOwned,
{
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::io(path, e)),
    };

    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|e| {
            if e.is_io() {
                StoreError::io(path, io::Error::from(e))
            } else {
                StoreError::Deserialize {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestItem {
        id: u64,
        name: String,
    }

    fn items() -> Vec<TestItem> {
        vec![
            TestItem {
                id: 1,
                name: "first".to_string(),
            },
            TestItem {
                id: 2,
                name: "second".to_string(),
            },
        ]
    }

    #[test]
    fn write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("items.json");

        write_json(&path, &items()).unwrap();
        let back: Option<Vec<TestItem>> = read_json(&path).unwrap();
        assert_eq!(back, Some(items()));
    }

    #[test]
    fn output_is_indented() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("items.json");

        write_json(&path, &items()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  {"));
        assert!(text.contains("\"name\": \"first\""));
    }

    #[test]
    fn write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("items.json");
        std::fs::write(&path, "this is much longer than an empty array would ever be").unwrap();

        write_json(&path, &Vec::<TestItem>::new()).unwrap();
        let back: Option<Vec<TestItem>> = read_json(&path).unwrap();
        assert_eq!(back, Some(vec![]));
    }

    #[test]
    fn missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let back: Option<Vec<TestItem>> = read_json(&temp_dir.path().join("absent.json")).unwrap();
        assert!(back.is_none());
    }

    #[test]
    fn malformed_file_is_deserialize_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "[{\"id\": 1, \"name\": ").unwrap();

        let err = read_json::<Vec<TestItem>>(&path).unwrap_err();
        assert!(err.is_deserialize(), "unexpected error: {err:?}");
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("items.json");

        let err = write_json(&path, &items()).unwrap_err();
        assert!(err.is_io(), "unexpected error: {err:?}");
    }

    #[test]
    fn reading_a_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_json::<Vec<TestItem>>(temp_dir.path()).unwrap_err();
        assert!(err.is_io(), "unexpected error: {err:?}");
    }
}
