//! Self-update: check crates.io for a newer stagehand and reinstall in place.
//!
//! The check runs at most once per process, is disabled by configuration,
//! and is skipped entirely when the binary runs from a development checkout.
//! Every failure in this path is swallowed — an update check must never
//! abort the command the user actually asked for.

use crate::config;
use crate::error::{Error, Result};
use crate::output;
use crate::runner;
use crate::shell;
use crate::toolbox::Toolbox;
use crate::utils::fmt;
use crate::utils::text;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::time::Instant;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PACKAGE: &str = env!("CARGO_PKG_NAME");
const CRATES_IO_API: &str = "https://crates.io/api/v1/crates/stagehand";

/// One-per-process gate for the startup update check. Constructed once and
/// carried on the toolbox; flipping happens before any network traffic so a
/// re-entrant call can never double-check.
#[derive(Debug, Default)]
pub struct UpdateChecker {
    checked: bool,
}

impl UpdateChecker {
    pub fn new() -> Self {
        Self { checked: false }
    }

    /// True only the first time; all later calls short-circuit.
    pub fn begin(&mut self) -> bool {
        if self.checked {
            false
        } else {
            self.checked = true;
            true
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionCheck {
    pub current_version: String,
    pub latest_version: Option<String>,
    pub update_available: bool,
}

#[derive(Deserialize)]
struct CratesIoResponse {
    #[serde(rename = "crate")]
    crate_info: CrateInfo,
}

#[derive(Deserialize)]
struct CrateInfo {
    newest_version: String,
}

pub fn current_version() -> &'static str {
    VERSION
}

fn fetch_latest_version() -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(format!("{}/{}", PACKAGE, VERSION))
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .map_err(|e| Error::internal_io(e, Some("create HTTP client".to_string())))?;

    let response: CratesIoResponse = client
        .get(CRATES_IO_API)
        .send()
        .map_err(|e| Error::internal_io(e, Some("query crates.io".to_string())))?
        .json()
        .map_err(|e| Error::internal_json(e, Some("parse crates.io response".to_string())))?;

    Ok(response.crate_info.newest_version)
}

fn version_is_newer(latest: &str, current: &str) -> bool {
    match (Version::parse(latest), Version::parse(current)) {
        (Ok(latest), Ok(current)) => latest > current,
        _ => latest != current,
    }
}

/// Compare the running binary against the newest published version.
pub fn check_for_update() -> VersionCheck {
    let current = current_version().to_string();
    let latest = fetch_latest_version().ok();
    let update_available = latest
        .as_ref()
        .map(|l| version_is_newer(l, &current))
        .unwrap_or(false);

    VersionCheck {
        current_version: current,
        latest_version: latest,
        update_available,
    }
}

/// True when the binary appears to run from a source checkout rather than an
/// installed build: a cargo target directory in the executable path, or a
/// sibling `src` directory next to the binary's parent.
pub fn is_dev_checkout() -> bool {
    let Ok(exe) = std::env::current_exe() else {
        return false;
    };

    let exe_str = exe.to_string_lossy().replace('\\', "/");
    if exe_str.contains("/target/debug/") || exe_str.contains("/target/release/") {
        return true;
    }

    exe.parent()
        .and_then(|bin_dir| bin_dir.parent())
        .map(|install_root| install_root.join("src").is_dir())
        .unwrap_or(false)
}

/// Startup update check. Runs at most once per process, honors the
/// `checkForUpdate` config key, and silently gives up on any failure.
pub fn run_once(toolbox: &mut Toolbox) {
    if !toolbox.update_checker.begin() {
        return;
    }
    if !config::defaults(toolbox).check_for_update {
        return;
    }
    if is_dev_checkout() {
        return;
    }

    let check = check_for_update();
    if !check.update_available {
        return;
    }
    if let Some(latest) = &check.latest_version {
        log_status!(
            "update",
            "{} {} is available (current: {})",
            toolbox.brand,
            latest,
            check.current_version
        );
    }

    let _ = update_cli(
        toolbox,
        &UpdateCliOptions {
            show_infos: true,
            ..Default::default()
        },
    );
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCliOptions {
    /// Crate to reinstall; defaults to this package.
    pub package_name: Option<String>,
    /// Print spinner steps and a success line with the elapsed time.
    pub show_infos: bool,
}

/// Reinstall the CLI globally via cargo.
pub fn update_cli(toolbox: &Toolbox, options: &UpdateCliOptions) -> Result<()> {
    let started = Instant::now();
    let package = options
        .package_name
        .clone()
        .unwrap_or_else(|| PACKAGE.to_string());
    let install = format!("cargo install {}", shell::quote_arg(&package));

    if !options.show_infos {
        run_install(&install, &package)?;
        return Ok(());
    }

    output::spin_while(&format!("Update {}", package), || {
        run_install(&install, &package)
    })?;

    let version = output::spin_while(
        &format!("Get current version from {}", package),
        || Ok(text::normalize(&runner::run(&format!("{} --version", toolbox.brand)).stdout)),
    )?;

    output::success(&format!(
        "🎉 Updated to {} from {} in {}m.",
        version,
        package,
        fmt::minutes_seconds(started.elapsed())
    ));
    println!();

    Ok(())
}

fn run_install(command: &str, package: &str) -> Result<()> {
    runner::run_checked(command)
        .map(|_| ())
        .map_err(|e| e.with_hint(format!("Try: cargo install {} --force", package)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checker_begins_exactly_once() {
        let mut checker = UpdateChecker::new();
        assert!(checker.begin());
        assert!(!checker.begin());
        assert!(!checker.begin());
        assert!(checker.checked());
    }

    #[test]
    fn version_comparison_uses_semver_ordering() {
        assert!(version_is_newer("0.12.0", "0.11.0"));
        assert!(version_is_newer("1.0.0", "0.99.99"));
        assert!(version_is_newer("0.11.1", "0.11.0"));
        assert!(!version_is_newer("0.11.0", "0.11.0"));
        assert!(!version_is_newer("0.10.0", "0.11.0"));
    }

    #[test]
    fn unparseable_versions_fall_back_to_inequality() {
        assert!(version_is_newer("nightly", "0.4.2"));
        assert!(!version_is_newer("nightly", "nightly"));
    }

    #[test]
    fn current_version_is_well_formed() {
        let version = current_version();
        assert!(!version.is_empty());
        assert!(version.contains('.'));
    }
}
