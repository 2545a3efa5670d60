use clap::{Args, Subcommand};
use stagehand::{config, Toolbox};

use crate::commands::CmdResult;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the merged configuration record
    Show,
    /// List configuration sources in precedence order
    Path,
}

pub fn run(toolbox: &mut Toolbox, args: ConfigArgs) -> CmdResult {
    match args.command {
        ConfigCommand::Show => show(toolbox),
        ConfigCommand::Path => sources(toolbox),
    }
}

pub fn show(toolbox: &mut Toolbox) -> CmdResult {
    let record = config::load(toolbox);
    println!("{}", config::to_string_pretty(&record)?);
    Ok(0)
}

pub fn sources(toolbox: &mut Toolbox) -> CmdResult {
    println!("1. built-in defaults");
    for (index, path) in config::source_paths(toolbox).iter().enumerate() {
        let outcome = config::read_source(path);
        println!("{}. {} ({})", index + 2, path.display(), outcome.describe());
    }
    Ok(0)
}
