#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidArgument,
    ValidationInvalidJson,
    ValidationInvalidYaml,

    PromptFailed,
    Interrupted,

    CommandFailed,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",
            ErrorCode::ValidationInvalidJson => "validation.invalid_json",
            ErrorCode::ValidationInvalidYaml => "validation.invalid_yaml",

            ErrorCode::PromptFailed => "prompt.failed",
            ErrorCode::Interrupted => "prompt.interrupted",

            ErrorCode::CommandFailed => "command.failed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub hints: Vec<String>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            hints: Vec::new(),
        }
    }

    pub fn validation_invalid_argument(
        field: impl std::fmt::Display,
        problem: impl std::fmt::Display,
    ) -> Self {
        Self::new(
            ErrorCode::ValidationInvalidArgument,
            format!("{}: {}", field, problem),
        )
    }

    pub fn validation_invalid_json(
        error: impl std::fmt::Display,
        context: Option<String>,
    ) -> Self {
        Self::new(
            ErrorCode::ValidationInvalidJson,
            with_context(format!("Invalid JSON: {}", error), context),
        )
    }

    pub fn validation_invalid_yaml(
        error: impl std::fmt::Display,
        context: Option<String>,
    ) -> Self {
        Self::new(
            ErrorCode::ValidationInvalidYaml,
            with_context(format!("Invalid YAML: {}", error), context),
        )
    }

    pub fn prompt_failed(error: impl std::fmt::Display) -> Self {
        Self::new(ErrorCode::PromptFailed, format!("Prompt failed: {}", error))
    }

    /// User-initiated abort (Ctrl-C during a prompt). Treated as a clean
    /// cancellation by dispatchers, never surfaced as a failure.
    pub fn interrupted() -> Self {
        Self::new(ErrorCode::Interrupted, "Interrupted")
    }

    pub fn command_failed(command: impl std::fmt::Display, detail: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorCode::CommandFailed,
            format!("Command failed: {}: {}", command, detail),
        )
    }

    pub fn internal_io(error: impl std::fmt::Display, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalIoError,
            with_context(format!("IO error: {}", error), context),
        )
    }

    pub fn internal_json(error: impl std::fmt::Display, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalJsonError,
            with_context(format!("JSON error: {}", error), context),
        )
    }

    pub fn internal_unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalUnexpected, message)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

fn with_context(message: String, context: Option<String>) -> String {
    match context {
        Some(context) => format!("{} ({})", message, context),
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_strings_are_stable() {
        assert_eq!(
            ErrorCode::ValidationInvalidJson.as_str(),
            "validation.invalid_json"
        );
        assert_eq!(ErrorCode::Interrupted.as_str(), "prompt.interrupted");
        assert_eq!(ErrorCode::InternalIoError.as_str(), "internal.io_error");
    }

    #[test]
    fn hints_accumulate() {
        let err = Error::command_failed("cargo install stagehand", "exit code 101")
            .with_hint("Check your network connection")
            .with_hint("Try again with --force");
        assert_eq!(err.hints.len(), 2);
        assert_eq!(err.code, ErrorCode::CommandFailed);
    }

    #[test]
    fn context_is_appended() {
        let err = Error::internal_io("permission denied", Some("write manifest".to_string()));
        assert!(err.message.contains("permission denied"));
        assert!(err.message.contains("write manifest"));
    }
}
