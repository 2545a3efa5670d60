use clap::Args;
use serde_json::Value;
use stagehand::manifest::{self, ManifestOptions};
use stagehand::{output, update_check, Toolbox};
use std::path::PathBuf;

use crate::commands::CmdResult;

#[derive(Args, Debug, Default)]
pub struct WelcomeArgs {
    /// Directory to report as the installation target
    pub cwd: Option<String>,
}

pub fn run(toolbox: &mut Toolbox, args: WelcomeArgs) -> CmdResult {
    let cwd = args
        .cwd
        .map(PathBuf::from)
        .unwrap_or_else(|| toolbox.cwd.clone());

    output::info("Welcome :-)");
    println!(
        "You installed version {} of {} in {}",
        update_check::current_version(),
        toolbox.brand,
        cwd.display()
    );

    let manifest = manifest::find(&ManifestOptions {
        cwd: Some(cwd),
        ..Default::default()
    })?;
    if let (Some(data), Some(path)) = (manifest.data, manifest.path) {
        if let Some(name) = data.get("name").and_then(Value::as_str) {
            println!("Project manifest: {} ({})", name, path.display());
        }
    }

    Ok(0)
}
