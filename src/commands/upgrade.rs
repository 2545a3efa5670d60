use clap::Args;
use stagehand::update_check::{self, UpdateCliOptions};
use stagehand::{output, Toolbox};

use crate::commands::CmdResult;

#[derive(Args, Debug, Default)]
pub struct UpgradeArgs {
    /// Check for updates without installing
    #[arg(long)]
    pub check: bool,
}

pub fn run(toolbox: &mut Toolbox, args: UpgradeArgs) -> CmdResult {
    if args.check {
        let check = update_check::check_for_update();
        match (&check.latest_version, check.update_available) {
            (Some(latest), true) => {
                output::info(&format!(
                    "{} {} is available (current: {})",
                    toolbox.brand, latest, check.current_version
                ));
            }
            (Some(_), false) => {
                output::success(&format!(
                    "{} {} is up to date",
                    toolbox.brand, check.current_version
                ));
            }
            (None, _) => {
                output::error("Could not reach crates.io to check for updates");
            }
        }
        return Ok(0);
    }

    update_check::update_cli(
        toolbox,
        &UpdateCliOptions {
            show_infos: true,
            ..Default::default()
        },
    )?;
    Ok(0)
}
