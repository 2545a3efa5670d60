//! Package manifest access: locate the nearest `package.json` by walking
//! upward, read it, and rewrite it in place.

use crate::error::{Error, Result};
use crate::files::{self, FileContent, FileSystem};
use crate::output;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "package.json";

const DEFAULT_ERROR: &str = "No package.json found!";

/// The parsed manifest plus where it was found. Both fields are `None` when
/// no manifest exists anywhere above the working directory.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub data: Option<Value>,
    pub path: Option<PathBuf>,
}

impl Manifest {
    pub fn project_dir(&self) -> Option<PathBuf> {
        self.path
            .as_ref()
            .and_then(|p| p.parent())
            .map(Path::to_path_buf)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ManifestOptions {
    pub cwd: Option<PathBuf>,
    pub error_message: Option<String>,
    pub show_error: bool,
}

/// Nearest manifest file at or above `start`.
pub fn find_up(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_absolute() {
        start.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(start)
    };

    loop {
        let candidate = dir.join(MANIFEST_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Locate and parse the nearest manifest.
///
/// A missing manifest is a soft condition: it is printed when `show_error`
/// is set and reported through the empty `Manifest`, never as an `Err`.
pub fn find(options: &ManifestOptions) -> Result<Manifest> {
    let start = match &options.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()
            .map_err(|e| Error::internal_io(e, Some("resolve working directory".to_string())))?,
    };

    let Some(path) = find_up(&start) else {
        if options.show_error {
            output::error(options.error_message.as_deref().unwrap_or(DEFAULT_ERROR));
        }
        return Ok(Manifest {
            data: None,
            path: None,
        });
    };

    let FileContent::Structured(data) = files::read_value(&path)? else {
        return Err(Error::internal_json(
            "manifest did not parse as structured data",
            Some(path.display().to_string()),
        ));
    };

    Ok(Manifest {
        data: Some(data),
        path: Some(path),
    })
}

/// Replace the nearest manifest with `data`.
///
/// Object input is serialized pretty-printed; string input is written
/// verbatim. Returns `Ok(None)` when no manifest exists to replace. The
/// rewrite is atomic (temp file, then rename), so a crash mid-write never
/// leaves the project without a manifest.
pub fn write(data: &Value, options: &ManifestOptions) -> Result<Option<PathBuf>> {
    let text = match data {
        Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other)
            .map_err(|e| Error::internal_json(e, Some("serialize manifest".to_string())))?,
    };

    let Some(path) = find(options)?.path else {
        return Ok(None);
    };

    files::local().write(&path, &text)?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn find_up_walks_to_a_parent_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), r#"{"name":"root"}"#).unwrap();

        let found = find_up(&nested).unwrap();
        assert_eq!(found, dir.path().join(MANIFEST_FILE));
    }

    #[test]
    fn find_up_prefers_the_nearest_manifest() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("pkg");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), r#"{"name":"outer"}"#).unwrap();
        fs::write(nested.join(MANIFEST_FILE), r#"{"name":"inner"}"#).unwrap();

        let found = find_up(&nested).unwrap();
        assert_eq!(found, nested.join(MANIFEST_FILE));
    }

    #[test]
    fn find_returns_empty_manifest_when_nothing_is_discoverable() {
        let dir = tempdir().unwrap();
        let manifest = find(&ManifestOptions {
            cwd: Some(dir.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap();
        assert!(manifest.data.is_none());
        assert!(manifest.path.is_none());
    }

    #[test]
    fn find_parses_the_discovered_manifest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{"name":"demo","version":"1.0.0"}"#,
        )
        .unwrap();

        let manifest = find(&ManifestOptions {
            cwd: Some(dir.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(manifest.data.as_ref().unwrap()["name"], "demo");
        assert_eq!(manifest.project_dir().unwrap(), dir.path());
    }

    #[test]
    fn write_without_a_manifest_returns_none() {
        let dir = tempdir().unwrap();
        let written = write(
            &json!({"name":"demo"}),
            &ManifestOptions {
                cwd: Some(dir.path().to_path_buf()),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(written.is_none());
    }

    #[test]
    fn write_then_find_round_trips() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), r#"{"name":"old"}"#).unwrap();
        let options = ManifestOptions {
            cwd: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        let data = json!({"name":"new","dependencies":{"left-pad":"^1.3.0"}});
        let written = write(&data, &options).unwrap().unwrap();
        assert_eq!(written, dir.path().join(MANIFEST_FILE));
        assert!(!dir.path().join("package.json.tmp").exists());

        let manifest = find(&options).unwrap();
        assert_eq!(manifest.data.unwrap(), data);
    }

    #[test]
    fn write_accepts_preserialized_text() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "{}").unwrap();
        let options = ManifestOptions {
            cwd: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        write(&json!("{\"name\":\"verbatim\"}"), &options).unwrap();
        let content = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        assert_eq!(content, "{\"name\":\"verbatim\"}");
    }
}
