use clap::{Parser, Subcommand};
use stagehand::{output, Toolbox};

mod commands;

use commands::{config, install, menu, update, upgrade, welcome};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "stagehand")]
#[command(version = VERSION)]
#[command(about = "CLI toolbox for Node.js project workflow automation")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install project dependencies with the detected package manager
    Install(install::InstallArgs),
    /// Bump dependency ranges in package.json to latest
    Update(update::UpdateArgs),
    /// Upgrade stagehand to the latest version
    Upgrade(upgrade::UpgradeArgs),
    /// Manage stagehand configuration
    Config(config::ConfigArgs),
    /// Show the post-install welcome banner
    Welcome(welcome::WelcomeArgs),
    /// Pick a command from an interactive menu
    Menu(menu::MenuArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let mut toolbox = Toolbox::new();

    let result = match cli.command {
        None => menu::run(&mut toolbox, menu::MenuArgs::default()),
        Some(Commands::Install(args)) => install::run(&mut toolbox, args),
        Some(Commands::Update(args)) => update::run(&mut toolbox, args),
        Some(Commands::Upgrade(args)) => upgrade::run(&mut toolbox, args),
        Some(Commands::Config(args)) => config::run(&mut toolbox, args),
        Some(Commands::Welcome(args)) => welcome::run(&mut toolbox, args),
        Some(Commands::Menu(args)) => menu::run(&mut toolbox, args),
    };

    match result {
        Ok(code) => std::process::ExitCode::from(exit_code_to_u8(code)),
        Err(err) => {
            output::error(&err.to_string());
            output::dim_err(&format!("[{}]", err.code.as_str()));
            for hint in &err.hints {
                output::dim_err(&format!("hint: {}", hint));
            }
            std::process::ExitCode::from(1)
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
