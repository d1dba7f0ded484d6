//! Replay of previously captured command output.

use std::path::Path;

use indexmap::IndexMap;
use log::debug;

use super::CommandRunner;
use crate::error::TransportError;

/// A [`CommandRunner`] that answers from captured output instead of a device.
///
/// Commands without a capture fail with [`TransportError::NoOutput`]. Every
/// command asked for is recorded in [`history`](Self::history).
///
/// # Example
///
/// ```
/// use switchscrape::{CapturedRunner, CollectorBuilder, ShowCommand};
///
/// # tokio_test::block_on(async {
/// let runner = CapturedRunner::new()
///     .with_output("terminal length 0", "")
///     .with_output("show vlan", "VLAN Name  Status  Ports\n10   DATA  active  Gi1/0/1\n");
///
/// let mut collector = CollectorBuilder::new("sw1").build(runner);
/// let vlans = collector.collect(ShowCommand::Vlan).await.unwrap();
/// assert_eq!(vlans.len(), 1);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct CapturedRunner {
    outputs: IndexMap<String, String>,
    history: Vec<String>,
}

impl CapturedRunner {
    /// Create a runner with no captures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the captured output of `command`.
    pub fn with_output(mut self, command: impl Into<String>, output: impl Into<String>) -> Self {
        self.insert(command, output);
        self
    }

    /// Add or replace the captured output of `command`.
    pub fn insert(&mut self, command: impl Into<String>, output: impl Into<String>) {
        self.outputs.insert(command.into(), output.into());
    }

    /// Read the captured output of `command` from a file.
    pub async fn load(
        mut self,
        command: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, TransportError> {
        let output = tokio::fs::read_to_string(path.as_ref()).await?;
        let command = command.into();
        debug!(
            "Loaded {} bytes of '{}' output from {}",
            output.len(),
            command,
            path.as_ref().display()
        );
        self.insert(command, output);
        Ok(self)
    }

    /// Commands with a capture, in insertion order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.outputs.keys().map(String::as_str)
    }

    /// Commands run so far, in order.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl CommandRunner for CapturedRunner {
    async fn run(&mut self, command: &str) -> Result<String, TransportError> {
        self.history.push(command.to_string());
        self.outputs
            .get(command)
            .cloned()
            .ok_or_else(|| TransportError::NoOutput {
                command: command.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_captures() {
        let mut runner = CapturedRunner::new()
            .with_output("show version", "Version 15.2")
            .with_output("show vlan", "VLAN Name");

        assert_eq!(runner.run("show vlan").await.unwrap(), "VLAN Name");
        assert_eq!(runner.run("show version").await.unwrap(), "Version 15.2");
        assert_eq!(runner.history(), &["show vlan", "show version"]);
        assert_eq!(runner.commands().collect::<Vec<_>>(), vec!["show version", "show vlan"]);
    }

    #[tokio::test]
    async fn test_missing_capture() {
        let mut runner = CapturedRunner::new();
        let err = runner.run("show cdp neighbors").await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::NoOutput { ref command } if command == "show cdp neighbors"
        ));
        assert_eq!(runner.history().len(), 1);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = CapturedRunner::new()
            .load("show vlan", "/nonexistent/switchscrape/show_vlan.txt")
            .await;
        assert!(matches!(result, Err(TransportError::Io(_))));
    }
}
