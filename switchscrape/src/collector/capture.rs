//! Raw output of a single command run.

use std::time::Duration;

/// Output of one command as returned by the runner.
#[derive(Debug, Clone)]
pub struct Capture {
    /// The command that was executed.
    pub command: String,

    /// Everything the runner returned for the command.
    pub output: String,

    /// Time taken to execute the command.
    pub elapsed: Duration,

    /// The output line that matched a failure pattern, if any.
    pub failure_message: Option<String>,
}

impl Capture {
    /// Create a capture, screening `output` for any of `failure_patterns`.
    pub fn new(
        command: impl Into<String>,
        output: impl Into<String>,
        elapsed: Duration,
        failure_patterns: &[String],
    ) -> Self {
        let output = output.into();
        let failure_message = output
            .lines()
            .find(|line| failure_patterns.iter().any(|pattern| line.contains(pattern.as_str())))
            .map(|line| line.trim().to_string());

        Self {
            command: command.into(),
            output,
            elapsed,
            failure_message,
        }
    }

    /// Check if the device accepted the command.
    pub fn is_success(&self) -> bool {
        self.failure_message.is_none()
    }

    /// Get the output lines as an iterator.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        crate::extract::lines(&self.output)
    }
}
