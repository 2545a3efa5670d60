//! File access primitives.
//!
//! `FileSystem` is the seam the rest of the crate does file I/O through;
//! `LocalFs` is the only implementation. Writes are atomic (temp file, then
//! rename) so readers always see either the old content or the new content.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parsed or raw contents of a file, depending on its extension.
#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    Structured(Value),
    Raw(Vec<u8>),
}

impl FileContent {
    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            FileContent::Structured(value) => Some(value),
            FileContent::Raw(_) => None,
        }
    }
}

pub trait FileSystem {
    fn read(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, content: &str) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

/// Local filesystem implementation
pub struct LocalFs;

pub fn local() -> LocalFs {
    LocalFs
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::internal_io(
                    format!("File not found: {}", path.display()),
                    Some("read file".to_string()),
                )
            } else {
                Error::internal_io(e.to_string(), Some("read file".to_string()))
            }
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        let parent = path.parent().ok_or_else(|| {
            Error::internal_io(
                format!("Invalid path: {}", path.display()),
                Some("write file".to_string()),
            )
        })?;

        let filename = path.file_name().ok_or_else(|| {
            Error::internal_io(
                format!("Invalid path: {}", path.display()),
                Some("write file".to_string()),
            )
        })?;

        let tmp_path = parent.join(format!("{}.tmp", filename.to_string_lossy()));

        fs::write(&tmp_path, content)
            .map_err(|e| Error::internal_io(e.to_string(), Some("write temp file".to_string())))?;

        fs::rename(&tmp_path, path)
            .map_err(|e| Error::internal_io(e.to_string(), Some("rename temp file".to_string())))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Read a file, parsing it when the extension names a known serialization
/// format (`.json`, `.yml`, `.yaml`); anything else comes back as raw bytes.
pub fn read_value(path: &Path) -> Result<FileContent> {
    let bytes = fs::read(path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let text = String::from_utf8_lossy(&bytes);
            let value: Value = serde_json::from_str(&text).map_err(|e| {
                Error::validation_invalid_json(e, Some(path.display().to_string()))
            })?;
            Ok(FileContent::Structured(value))
        }
        Some("yml") | Some("yaml") => {
            let text = String::from_utf8_lossy(&bytes);
            let value: Value = serde_yml::from_str(&text).map_err(|e| {
                Error::validation_invalid_yaml(e, Some(path.display().to_string()))
            })?;
            Ok(FileContent::Structured(value))
        }
        _ => Ok(FileContent::Raw(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn read_value_parses_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"{"name":"demo","count":3}"#).unwrap();

        let content = read_value(&path).unwrap();
        let value = content.as_structured().unwrap();
        assert_eq!(value["name"], "demo");
        assert_eq!(value["count"], 3);
    }

    #[test]
    fn read_value_parses_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.yml");
        fs::write(&path, "name: demo\ncount: 3\n").unwrap();

        let content = read_value(&path).unwrap();
        let value = content.as_structured().unwrap();
        assert_eq!(value["name"], "demo");
        assert_eq!(value["count"], 3);
    }

    #[test]
    fn read_value_returns_raw_bytes_for_unknown_extensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(&path, "plain text").unwrap();

        match read_value(&path).unwrap() {
            FileContent::Raw(bytes) => assert_eq!(bytes, b"plain text"),
            other => panic!("expected raw bytes, got {:?}", other),
        }
    }

    #[test]
    fn read_value_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let err = read_value(&path).unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::ValidationInvalidJson);
    }

    #[test]
    fn write_is_atomic_and_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        local().write(&path, r#"{"ok":true}"#).unwrap();

        assert_eq!(local().read(&path).unwrap(), r#"{"ok":true}"#);
        assert!(!dir.path().join("out.json.tmp").exists());
    }

    #[test]
    fn write_replaces_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old").unwrap();

        local().write(&path, "new").unwrap();
        assert_eq!(local().read(&path).unwrap(), "new");
    }
}
