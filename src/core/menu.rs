//! Interactive command selector.
//!
//! The selector walks a navigation stack instead of recursing: selecting a
//! command group pushes a level, `[ back ]` pops one, `[ cancel ]` leaves.
//! Dispatching a real command terminates the process on success; a
//! user-initiated interrupt during the command is a clean farewell, anything
//! else propagates.

use crate::error::{Error, ErrorCode, Result};
use crate::output;
use crate::toolbox::Toolbox;
use crate::update_check;
use crate::utils::text;

pub const HELP_ENTRY: &str = "[ help ]";
pub const BACK_ENTRY: &str = "[ back ]";
pub const CANCEL_ENTRY: &str = "[ cancel ]";

pub enum CommandAction {
    /// Run the command with the shared toolbox; the returned code becomes the
    /// process exit code.
    Run(fn(&mut Toolbox) -> Result<i32>),
    /// Entering the command descends one menu level instead of running.
    Group,
}

/// One selectable command: a hierarchical path, an optional description, and
/// what selecting it does.
pub struct CommandDescriptor {
    pub path: &'static [&'static str],
    pub description: Option<&'static str>,
    pub action: CommandAction,
}

impl CommandDescriptor {
    fn joined(&self) -> String {
        self.path.join(" ")
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectorOptions {
    /// Trigger the once-per-process update check first. Defaults to true.
    pub check_update: Option<bool>,
    /// Hierarchy prefix to open the menu at.
    pub parent_command: Option<String>,
    /// Welcome banner; derived from the parent command when unset.
    pub welcome: Option<String>,
}

/// Entries visible at `level` under `parent`: path length is `level + 1`,
/// the joined path extends the parent prefix, and the top-level segment is
/// neither the brand nor `help`.
pub(crate) fn visible_entries(
    commands: &[CommandDescriptor],
    level: usize,
    parent: &str,
    brand: &str,
) -> Vec<String> {
    let mut entries: Vec<String> = commands
        .iter()
        .filter(|c| {
            c.path.len() == level + 1
                && c.joined().starts_with(parent)
                && c.path[0] != brand
                && c.path[0] != "help"
        })
        .map(|c| match c.description {
            Some(description) => format!("{} ({})", c.path[level], description),
            None => c.path[level].to_string(),
        })
        .collect();
    entries.sort();
    entries
}

/// Wrap the visible entries with the pseudo-entries: `[ help ]` first,
/// `[ back ]` only below the top level, `[ cancel ]` always last.
pub(crate) fn menu_items(entries: Vec<String>, level: usize) -> Vec<String> {
    let mut items = vec![HELP_ENTRY.to_string()];
    items.extend(entries);
    if level > 0 {
        items.push(BACK_ENTRY.to_string());
    }
    items.push(CANCEL_ENTRY.to_string());
    items
}

fn strip_description(label: &str) -> &str {
    match label.find(" (") {
        Some(index) => &label[..index],
        None => label,
    }
}

fn level_of(parent: &str) -> usize {
    if parent.is_empty() {
        0
    } else {
        parent.split(' ').count()
    }
}

fn print_commands(commands: &[CommandDescriptor], parent: &str, brand: &str) {
    let mut listed: Vec<&CommandDescriptor> = commands
        .iter()
        .filter(|c| c.joined().starts_with(parent) && c.path[0] != brand && c.path[0] != "help")
        .collect();
    listed.sort_by_key(|c| c.joined());

    for command in listed {
        println!(
            "  {:<24} {}",
            command.joined(),
            command.description.unwrap_or("")
        );
    }
}

/// Present the filtered command list and dispatch the selection.
pub fn command_selector(
    toolbox: &mut Toolbox,
    commands: &[CommandDescriptor],
    options: &SelectorOptions,
) -> Result<()> {
    let mut parent = options
        .parent_command
        .clone()
        .unwrap_or_default()
        .trim()
        .to_string();

    if options.check_update.unwrap_or(true) {
        update_check::run_once(toolbox);
    }

    let welcome = match &options.welcome {
        Some(welcome) => welcome.clone(),
        None if parent.is_empty() => String::new(),
        None => format!("{} commands", text::capitalize_first(&parent)),
    };
    if !welcome.is_empty() {
        output::info(&welcome);
    }

    loop {
        let level = level_of(&parent);
        let items = menu_items(
            visible_entries(commands, level, &parent, toolbox.brand),
            level,
        );

        let Some(index) = toolbox.prompter.select("Select command", &items)? else {
            output::error("No command selected!");
            return Ok(());
        };
        let label = items[index].clone();

        match label.as_str() {
            BACK_ENTRY => {
                parent = match parent.rfind(' ') {
                    Some(index) => parent[..index].to_string(),
                    None => String::new(),
                };
            }
            CANCEL_ENTRY => {
                println!("Take care 👋");
                return Ok(());
            }
            HELP_ENTRY => {
                print_commands(commands, &parent, toolbox.brand);
            }
            _ => {
                let name = strip_description(&label);
                let full = if parent.is_empty() {
                    name.to_string()
                } else {
                    format!("{} {}", parent, name)
                };

                let Some(command) = commands.iter().find(|c| c.joined() == full) else {
                    return Err(Error::validation_invalid_argument(
                        "command",
                        format!("Unknown command: {}", full),
                    )
                    .with_hint(format!("Run `{} --help` for the full list", toolbox.brand)));
                };

                match &command.action {
                    CommandAction::Group => {
                        parent = full;
                    }
                    CommandAction::Run(run) => match run(toolbox) {
                        Ok(code) => std::process::exit(code),
                        Err(err) if err.code == ErrorCode::Interrupted => {
                            println!("Goodbye ✌️");
                            return Ok(());
                        }
                        Err(err) => return Err(err),
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Prompter;

    fn noop(_: &mut Toolbox) -> Result<i32> {
        Ok(0)
    }

    fn descriptors() -> Vec<CommandDescriptor> {
        vec![
            CommandDescriptor {
                path: &["b"],
                description: None,
                action: CommandAction::Run(noop),
            },
            CommandDescriptor {
                path: &["a"],
                description: Some("first"),
                action: CommandAction::Group,
            },
            CommandDescriptor {
                path: &["a", "b"],
                description: None,
                action: CommandAction::Run(noop),
            },
            CommandDescriptor {
                path: &["stagehand"],
                description: None,
                action: CommandAction::Run(noop),
            },
            CommandDescriptor {
                path: &["help"],
                description: None,
                action: CommandAction::Run(noop),
            },
        ]
    }

    #[test]
    fn top_level_listing_filters_and_sorts() {
        let entries = visible_entries(&descriptors(), 0, "", "stagehand");
        assert_eq!(entries, vec!["a (first)".to_string(), "b".to_string()]);
    }

    #[test]
    fn nested_listing_shows_children_of_the_parent() {
        let entries = visible_entries(&descriptors(), 1, "a", "stagehand");
        assert_eq!(entries, vec!["b".to_string()]);
    }

    #[test]
    fn pseudo_entries_wrap_the_listing_at_the_top_level() {
        let items = menu_items(vec!["a".to_string(), "b".to_string()], 0);
        assert_eq!(items.first().unwrap(), HELP_ENTRY);
        assert_eq!(items.last().unwrap(), CANCEL_ENTRY);
        assert!(!items.contains(&BACK_ENTRY.to_string()));
    }

    #[test]
    fn back_entry_appears_below_the_top_level() {
        let items = menu_items(vec!["b".to_string()], 1);
        assert_eq!(items, vec![HELP_ENTRY, "b", BACK_ENTRY, CANCEL_ENTRY]);
    }

    #[test]
    fn descriptions_are_stripped_for_dispatch() {
        assert_eq!(strip_description("a (first)"), "a");
        assert_eq!(strip_description("plain"), "plain");
    }

    #[test]
    fn level_follows_the_parent_prefix() {
        assert_eq!(level_of(""), 0);
        assert_eq!(level_of("a"), 1);
        assert_eq!(level_of("a b"), 2);
    }

    struct CancellingPrompter;

    impl Prompter for CancellingPrompter {
        fn input(&self, _message: &str, _initial: &str) -> Result<String> {
            Ok(String::new())
        }

        fn select(&self, _message: &str, _items: &[String]) -> Result<Option<usize>> {
            Ok(None)
        }
    }

    #[test]
    fn aborted_selection_returns_cleanly() {
        let mut toolbox = Toolbox::with_prompter(Box::new(CancellingPrompter));
        let commands = descriptors();
        let options = SelectorOptions {
            check_update: Some(false),
            ..Default::default()
        };
        assert!(command_selector(&mut toolbox, &commands, &options).is_ok());
    }
}
