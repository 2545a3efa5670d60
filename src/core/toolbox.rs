use crate::prompt::{Prompter, TermPrompter};
use crate::update_check::UpdateChecker;
use std::path::PathBuf;

/// The CLI product name: names dotfiles, the config directory, and the
/// top-level command filtered out of menus.
pub const BRAND: &str = "stagehand";

/// Shared context handed to every operation: the brand, the working
/// directory, the prompter seam, and the once-per-process update checker.
pub struct Toolbox {
    pub brand: &'static str,
    pub cwd: PathBuf,
    pub prompter: Box<dyn Prompter>,
    pub update_checker: UpdateChecker,
}

impl Toolbox {
    pub fn new() -> Self {
        Self {
            brand: BRAND,
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            prompter: Box::new(TermPrompter),
            update_checker: UpdateChecker::new(),
        }
    }

    pub fn with_prompter(prompter: Box<dyn Prompter>) -> Self {
        Self {
            prompter,
            ..Self::new()
        }
    }

    pub fn with_cwd(cwd: PathBuf) -> Self {
        Self {
            cwd,
            ..Self::new()
        }
    }
}

impl Default for Toolbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_toolbox_has_not_checked_for_updates() {
        let toolbox = Toolbox::new();
        assert_eq!(toolbox.brand, BRAND);
        assert!(!toolbox.update_checker.checked());
    }

    #[test]
    fn with_cwd_overrides_the_working_directory() {
        let toolbox = Toolbox::with_cwd(PathBuf::from("/tmp"));
        assert_eq!(toolbox.cwd, PathBuf::from("/tmp"));
    }
}
