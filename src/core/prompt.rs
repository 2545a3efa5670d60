//! Interactive prompting behind a trait seam, so commands stay testable
//! without a terminal.

use crate::error::{Error, ErrorCode, Result};
use crate::output;
use crate::toolbox::Toolbox;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

pub trait Prompter {
    /// Free-text input with an optional initial value. Empty submissions are
    /// allowed; a Ctrl-C abort surfaces as `ErrorCode::Interrupted`.
    fn input(&self, message: &str, initial: &str) -> Result<String>;

    /// Single selection from a list. `None` means the user backed out.
    fn select(&self, message: &str, items: &[String]) -> Result<Option<usize>>;
}

/// Terminal prompter backed by dialoguer.
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn input(&self, message: &str, initial: &str) -> Result<String> {
        let theme = ColorfulTheme::default();
        if initial.is_empty() {
            Input::<String>::with_theme(&theme)
                .with_prompt(message)
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_error)
        } else {
            Input::<String>::with_theme(&theme)
                .with_prompt(message)
                .allow_empty(true)
                .default(initial.to_string())
                .interact_text()
                .map_err(prompt_error)
        }
    }

    fn select(&self, message: &str, items: &[String]) -> Result<Option<usize>> {
        let result = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact_opt();

        match result {
            Ok(choice) => Ok(choice),
            Err(err) => match prompt_error(err) {
                e if e.code == ErrorCode::Interrupted => Ok(None),
                e => Err(e),
            },
        }
    }
}

fn prompt_error(err: dialoguer::Error) -> Error {
    match err {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            Error::interrupted()
        }
        other => Error::prompt_failed(other),
    }
}

/// Per-call options for [`get_input`]. Unset fields fall back to defaults;
/// overrides are presence-based, so an explicit empty string is respected.
#[derive(Debug, Clone, Default)]
pub struct InputOptions {
    pub initial: Option<String>,
    pub name: Option<String>,
    pub error_message: Option<String>,
    pub show_error: bool,
}

impl InputOptions {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("name")
    }

    fn resolved_error_message(&self) -> String {
        match &self.error_message {
            Some(message) => message.clone(),
            None => format!("You must provide a valid {}!", self.name()),
        }
    }
}

/// Return `value` unchanged when it is non-blank; otherwise ask for it.
///
/// When the prompt comes back empty and `show_error` is set, an error line is
/// printed, but the (possibly empty) answer is still returned — the caller
/// decides whether an empty value is fatal.
pub fn get_input(toolbox: &Toolbox, value: &str, options: &InputOptions) -> Result<String> {
    if !crate::text::normalize(value).is_empty() {
        return Ok(value.to_string());
    }

    let initial = options.initial.as_deref().unwrap_or("");
    let answer = toolbox
        .prompter
        .input(&format!("Enter {}", options.name()), initial)?;

    if answer.is_empty() && options.show_error {
        output::error(&options.resolved_error_message());
    }

    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) struct StubPrompter {
        pub answer: String,
    }

    impl Prompter for StubPrompter {
        fn input(&self, _message: &str, _initial: &str) -> Result<String> {
            Ok(self.answer.clone())
        }

        fn select(&self, _message: &str, _items: &[String]) -> Result<Option<usize>> {
            Ok(None)
        }
    }

    fn toolbox_with_answer(answer: &str) -> Toolbox {
        Toolbox::with_prompter(Box::new(StubPrompter {
            answer: answer.to_string(),
        }))
    }

    #[test]
    fn non_blank_values_pass_through_unchanged() {
        let toolbox = toolbox_with_answer("unused");
        let value = get_input(&toolbox, "  keep-me  ", &InputOptions::default()).unwrap();
        assert_eq!(value, "  keep-me  ");
    }

    #[test]
    fn blank_values_trigger_a_prompt() {
        let toolbox = toolbox_with_answer("answered");
        let value = get_input(&toolbox, "  \n ", &InputOptions::default()).unwrap();
        assert_eq!(value, "answered");
    }

    #[test]
    fn empty_answers_are_returned_even_with_show_error() {
        let toolbox = toolbox_with_answer("");
        let options = InputOptions {
            name: Some("x".to_string()),
            show_error: true,
            ..Default::default()
        };
        let value = get_input(&toolbox, "", &options).unwrap();
        assert_eq!(value, "");
    }

    #[test]
    fn default_error_message_names_the_field() {
        let options = InputOptions {
            name: Some("x".to_string()),
            show_error: true,
            ..Default::default()
        };
        assert!(options.resolved_error_message().contains('x'));
    }

    #[test]
    fn explicit_error_message_overrides_the_default() {
        let options = InputOptions {
            error_message: Some("custom".to_string()),
            ..Default::default()
        };
        assert_eq!(options.resolved_error_message(), "custom");
    }
}
