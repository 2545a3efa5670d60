use clap::Args;
use stagehand::package_manager::{self, UpdateOptions};
use stagehand::Toolbox;
use std::path::PathBuf;

use crate::commands::CmdResult;

#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    /// Directory to search for package.json (defaults to the current directory)
    #[arg(long)]
    pub cwd: Option<String>,

    /// Install packages after rewriting dependency ranges
    #[arg(long)]
    pub install: bool,
}

pub fn run(_toolbox: &mut Toolbox, args: UpdateArgs) -> CmdResult {
    let updated = package_manager::update(&UpdateOptions {
        cwd: args.cwd.map(PathBuf::from),
        install: args.install,
        show_error: true,
        ..Default::default()
    })?;

    Ok(if updated { 0 } else { 1 })
}
