use stagehand::menu::{CommandAction, CommandDescriptor};

pub mod config;
pub mod install;
pub mod menu;
pub mod update;
pub mod upgrade;
pub mod welcome;

/// Exit code produced by a command.
pub type CmdResult = stagehand::Result<i32>;

/// Commands exposed to the interactive selector. Menu dispatch runs each
/// command with its default arguments.
pub fn registry() -> Vec<CommandDescriptor> {
    vec![
        CommandDescriptor {
            path: &["config"],
            description: Some("Configuration helpers"),
            action: CommandAction::Group,
        },
        CommandDescriptor {
            path: &["config", "show"],
            description: Some("Print the merged configuration"),
            action: CommandAction::Run(|toolbox| config::show(toolbox)),
        },
        CommandDescriptor {
            path: &["config", "path"],
            description: Some("List configuration sources"),
            action: CommandAction::Run(|toolbox| config::sources(toolbox)),
        },
        CommandDescriptor {
            path: &["install"],
            description: Some("Install project dependencies"),
            action: CommandAction::Run(|toolbox| install::run(toolbox, Default::default())),
        },
        CommandDescriptor {
            path: &["update"],
            description: Some("Bump dependency ranges to latest"),
            action: CommandAction::Run(|toolbox| update::run(toolbox, Default::default())),
        },
        CommandDescriptor {
            path: &["upgrade"],
            description: Some("Reinstall the CLI at the latest version"),
            action: CommandAction::Run(|toolbox| upgrade::run(toolbox, Default::default())),
        },
        CommandDescriptor {
            path: &["welcome"],
            description: Some("Show the post-install banner"),
            action: CommandAction::Run(|toolbox| welcome::run(toolbox, Default::default())),
        },
    ]
}
