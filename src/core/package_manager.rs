//! Package-manager detection and dependency orchestration for the target
//! project's manifest.
//!
//! Detection is purely lock-file presence based. Install commands are
//! dispatched fire-and-forget: the child's exit status is not inspected,
//! matching the rest of the subprocess model. The `ncu` range-update step is
//! the exception — a broken manifest rewrite should be loud.

use crate::error::Result;
use crate::manifest::{self, ManifestOptions};
use crate::output;
use crate::runner;
use crate::shell;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PNPM_LOCK: &str = "pnpm-lock.yaml";
pub const YARN_LOCK: &str = "yarn.lock";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm i",
            PackageManager::Pnpm => "pnpm install",
            PackageManager::Yarn => "yarn install",
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which package manager manages `dir`. pnpm wins over yarn when both lock
/// files are present; npm is the fallback.
pub fn detect(dir: &Path) -> PackageManager {
    if dir.join(PNPM_LOCK).exists() {
        return PackageManager::Pnpm;
    }
    if dir.join(YARN_LOCK).exists() {
        return PackageManager::Yarn;
    }
    PackageManager::Npm
}

#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub cwd: Option<PathBuf>,
    /// Detect the package manager from lock files; `Some(false)` forces npm.
    pub detect: Option<bool>,
    pub error_message: Option<String>,
    pub show_error: bool,
}

/// Install the dependencies of the nearest manifest.
///
/// Returns `Ok(false)` without side effects when no manifest is
/// discoverable; `Ok(true)` once an install command was dispatched.
pub fn install(options: &InstallOptions) -> Result<bool> {
    let manifest = manifest::find(&ManifestOptions {
        cwd: options.cwd.clone(),
        error_message: options.error_message.clone(),
        show_error: options.show_error,
    })?;

    let Some(project_dir) = manifest.project_dir() else {
        return Ok(false);
    };

    let manager = if options.detect.unwrap_or(true) {
        detect(&project_dir)
    } else {
        PackageManager::Npm
    };

    output::spin_while(&format!("Install packages using {}", manager), || {
        runner::run_in_dir(manager.install_command(), Some(&project_dir));
        Ok(())
    })?;

    Ok(true)
}

#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    pub cwd: Option<PathBuf>,
    /// Re-run the install step after rewriting dependency ranges.
    pub install: bool,
    pub error_message: Option<String>,
    pub show_error: bool,
}

/// Rewrite the manifest's dependency ranges to latest via `ncu`, installing
/// the tool globally first if it is missing.
///
/// Returns `Ok(false)` when no manifest is discoverable. Side effects
/// (global tool install, manifest rewrite, package install) are not rolled
/// back on partial failure.
pub fn update(options: &UpdateOptions) -> Result<bool> {
    let manifest = manifest::find(&ManifestOptions {
        cwd: options.cwd.clone(),
        error_message: options.error_message.clone(),
        show_error: options.show_error,
    })?;

    let Some(path) = manifest.path else {
        return Ok(false);
    };

    if runner::which("ncu").is_none() {
        log_status!("update", "npm-check-updates not found, installing it globally");
        output::spin_while("Install ncu", || {
            runner::run_checked("npm i -g npm-check-updates").map(|_| ())
        })?;
    }

    output::spin_while("Update package.json", || {
        runner::run_checked(&format!(
            "ncu -u --packageFile {}",
            shell::quote_path(&path.to_string_lossy())
        ))
        .map(|_| ())
    })?;

    if options.install {
        let project_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let manager = detect(&project_dir);
        output::spin_while(&format!("Install packages using {}", manager), || {
            runner::run_in_dir(manager.install_command(), Some(&project_dir));
            Ok(())
        })?;
    }

    Ok(true)
}
