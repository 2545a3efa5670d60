use crate::error::{Error, Result};
use crate::toolbox::BRAND;
use std::env;
use std::path::{PathBuf, MAIN_SEPARATOR};

/// Base stagehand config directory (universal ~/.config/stagehand/ on all platforms)
pub fn config_dir() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected("APPDATA environment variable not set on Windows")
        })?;
        Ok(PathBuf::from(appdata).join(BRAND))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected("HOME environment variable not set on Unix-like system")
        })?;
        Ok(PathBuf::from(home).join(".config").join(BRAND))
    }
}

/// Global stagehand.json config file path
pub fn config_json() -> Result<PathBuf> {
    Ok(config_dir()?.join(format!("{}.json", BRAND)))
}

/// Join path segments into a prepared directory path.
///
/// Returns `None` when every segment is blank. A leading `~` expands to the
/// home directory, and both slash styles normalize to the host separator.
/// The path is not checked for existence.
pub fn join_dir(segments: &[&str]) -> Option<String> {
    if segments.iter().all(|s| s.trim().is_empty()) {
        return None;
    }

    let joined = segments
        .iter()
        .filter(|s| !s.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(&MAIN_SEPARATOR.to_string());

    let expanded = shellexpand::tilde(&joined).to_string();

    Some(
        expanded
            .chars()
            .map(|c| {
                if c == '/' || c == '\\' {
                    MAIN_SEPARATOR
                } else {
                    c
                }
            })
            .collect(),
    )
}
