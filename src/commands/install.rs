use clap::Args;
use stagehand::package_manager::{self, InstallOptions};
use stagehand::Toolbox;
use std::path::PathBuf;

use crate::commands::CmdResult;

#[derive(Args, Debug, Default)]
pub struct InstallArgs {
    /// Directory to search for package.json (defaults to the current directory)
    #[arg(long)]
    pub cwd: Option<String>,

    /// Skip lock-file detection and install with npm
    #[arg(long)]
    pub no_detect: bool,
}

pub fn run(_toolbox: &mut Toolbox, args: InstallArgs) -> CmdResult {
    let installed = package_manager::install(&InstallOptions {
        cwd: args.cwd.map(PathBuf::from),
        detect: if args.no_detect { Some(false) } else { None },
        show_error: true,
        ..Default::default()
    })?;

    Ok(if installed { 0 } else { 1 })
}
