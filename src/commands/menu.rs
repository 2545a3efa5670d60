use clap::Args;
use stagehand::menu::{self, SelectorOptions};
use stagehand::Toolbox;

use crate::commands::{registry, CmdResult};

#[derive(Args, Debug, Default)]
pub struct MenuArgs {
    /// Open the menu at a command group (e.g. "config")
    #[arg(long)]
    pub parent: Option<String>,

    /// Skip the startup update check
    #[arg(long)]
    pub no_update_check: bool,
}

pub fn run(toolbox: &mut Toolbox, args: MenuArgs) -> CmdResult {
    let commands = registry();
    menu::command_selector(
        toolbox,
        &commands,
        &SelectorOptions {
            check_update: if args.no_update_check {
                Some(false)
            } else {
                None
            },
            parent_command: args.parent,
            welcome: None,
        },
    )?;
    Ok(0)
}
