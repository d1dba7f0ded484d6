//! Builder for creating collectors.

use std::time::Duration;

use super::CommandRunner;
use super::session::Collector;
use crate::parsers::ShowCommand;

/// Default per-command deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Commands sent once before the first report, to disable paging.
pub const DEFAULT_ON_OPEN_COMMANDS: &[&str] = &["terminal length 0"];

/// Output fragments that mark a command the device rejected.
pub const DEFAULT_FAILURE_PATTERNS: &[&str] =
    &["% Invalid input", "% Incomplete command", "% Ambiguous command"];

/// Builder for constructing collectors.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use switchscrape::{CapturedRunner, CollectorBuilder, ShowCommand};
///
/// let collector = CollectorBuilder::new("sw1.example.net")
///     .timeout(Duration::from_secs(10))
///     .command(ShowCommand::Version)
///     .command(ShowCommand::CdpNeighbors)
///     .failure_pattern("% Bad IP address")
///     .build(CapturedRunner::new());
///
/// assert_eq!(collector.commands(), &[ShowCommand::Version, ShowCommand::CdpNeighbors]);
/// ```
#[derive(Debug, Clone)]
pub struct CollectorBuilder {
    host: String,
    timeout: Duration,
    commands: Vec<ShowCommand>,
    on_open_commands: Vec<String>,
    failure_patterns: Vec<String>,
}

impl CollectorBuilder {
    /// Create a new collector builder for the specified host.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            timeout: DEFAULT_TIMEOUT,
            commands: Vec::new(),
            on_open_commands: DEFAULT_ON_OPEN_COMMANDS.iter().map(|c| c.to_string()).collect(),
            failure_patterns: DEFAULT_FAILURE_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Set the per-command timeout (default: 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a report to collect.
    pub fn command(mut self, command: ShowCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Add several reports to collect.
    pub fn commands(mut self, commands: impl IntoIterator<Item = ShowCommand>) -> Self {
        self.commands.extend(commands);
        self
    }

    /// Add an on_open command.
    pub fn on_open_command(mut self, command: impl Into<String>) -> Self {
        self.on_open_commands.push(command.into());
        self
    }

    /// Drop all on_open commands, including the default.
    pub fn clear_on_open_commands(mut self) -> Self {
        self.on_open_commands.clear();
        self
    }

    /// Add a failure pattern.
    pub fn failure_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.failure_patterns.push(pattern.into());
        self
    }

    /// Build the collector around `runner`.
    ///
    /// Without any explicit reports the collector covers every
    /// [`ShowCommand`]. Nothing is sent until the first collection.
    pub fn build<R: CommandRunner>(self, runner: R) -> Collector<R> {
        let commands = if self.commands.is_empty() {
            ShowCommand::ALL.to_vec()
        } else {
            self.commands
        };

        Collector::new(
            self.host,
            runner,
            self.timeout,
            commands,
            self.on_open_commands,
            self.failure_patterns,
        )
    }
}
