//! Value types exchanged with the remote-execution port.

use std::fmt;

use crate::domain::error::RemoteError;

/// A shell command destined for the target host.
///
/// `display` is what logs and error messages show; it differs from the
/// executed text only when the command carries a secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    text: String,
    display: Option<String>,
}

impl RemoteCommand {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            display: None,
        }
    }

    /// A command that is shown as `display` wherever it is printed.
    #[must_use]
    pub fn with_display(text: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            display: Some(display.into()),
        }
    }

    /// Whether the executed text holds a secret hidden from `display`.
    #[must_use]
    pub fn is_redacted(&self) -> bool {
        self.display.is_some()
    }

    /// The exact text executed on the host.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for RemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display.as_deref().unwrap_or(&self.text))
    }
}

/// Captured output of a remote command that exited successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteOutput {
    pub stdout: String,
    pub stderr: String,
}

impl RemoteOutput {
    #[must_use]
    pub fn from_stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Stdout split into lines, without line terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.stdout.lines()
    }

    /// The only line of stdout.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::UnexpectedLineCount` when stdout holds zero or
    /// more than one line.
    pub fn single_line(&self, command: &RemoteCommand) -> Result<String, RemoteError> {
        let lines: Vec<&str> = self.lines().collect();
        match lines.as_slice() {
            [line] => Ok((*line).to_string()),
            _ => Err(RemoteError::UnexpectedLineCount {
                command: command.to_string(),
                expected: 1,
                actual: lines.len(),
            }),
        }
    }
}
