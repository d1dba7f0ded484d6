//! Collector session over a command runner.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use super::CommandRunner;
use super::capture::Capture;
use crate::error::{ParseError, Result, TransportError};
use crate::parsers::{ParsedOutput, ShowCommand};

/// Runs `show` reports against one device and parses their output.
///
/// Built with [`CollectorBuilder`](super::CollectorBuilder). The on_open
/// commands are sent once, before the first report.
pub struct Collector<R> {
    host: String,
    runner: R,
    timeout: Duration,
    commands: Vec<ShowCommand>,
    on_open_commands: Vec<String>,
    failure_patterns: Vec<String>,
    opened: bool,
}

impl<R: CommandRunner> Collector<R> {
    pub(super) fn new(
        host: String,
        runner: R,
        timeout: Duration,
        commands: Vec<ShowCommand>,
        on_open_commands: Vec<String>,
        failure_patterns: Vec<String>,
    ) -> Self {
        Self {
            host,
            runner,
            timeout,
            commands,
            on_open_commands,
            failure_patterns,
            opened: false,
        }
    }

    /// Device this collector talks to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Per-command deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Reports covered by [`collect_all`](Self::collect_all).
    pub fn commands(&self) -> &[ShowCommand] {
        &self.commands
    }

    /// Commands sent before the first report.
    pub fn on_open_commands(&self) -> &[String] {
        &self.on_open_commands
    }

    /// Output fragments treated as a rejected command.
    pub fn failure_patterns(&self) -> &[String] {
        &self.failure_patterns
    }

    /// Get a reference to the runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Consume the collector, returning the runner.
    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Send the on_open commands if they have not been sent yet.
    pub async fn open(&mut self) -> Result<()> {
        if self.opened {
            return Ok(());
        }

        for command in self.on_open_commands.clone() {
            let capture = self.send_command(&command).await?;
            if let Some(message) = capture.failure_message {
                warn!("{}: on_open command '{}' rejected: {}", self.host, command, message);
            }
        }

        self.opened = true;
        Ok(())
    }

    /// Run one raw command under the deadline and screen its output.
    ///
    /// A rejected command still returns `Ok`; check
    /// [`Capture::is_success`].
    pub async fn send_command(&mut self, command: &str) -> Result<Capture> {
        let timeout = self.timeout;
        let start = Instant::now();

        debug!("{}: sending '{}'", self.host, command);
        let output = tokio::time::timeout(timeout, self.runner.run(command))
            .await
            .map_err(|_| TransportError::Timeout(timeout))??;

        let capture = Capture::new(command, output, start.elapsed(), &self.failure_patterns);
        debug!(
            "{}: '{}' returned {} bytes in {:?}",
            self.host,
            command,
            capture.output.len(),
            capture.elapsed
        );
        Ok(capture)
    }

    /// Run and parse one report.
    ///
    /// Fails with [`TransportError::CommandFailed`] when the output carries a
    /// failure pattern, and with [`ParseError::EmptyResult`] when a table
    /// parsed cleanly but held no entries.
    pub async fn collect(&mut self, command: ShowCommand) -> Result<ParsedOutput> {
        self.open().await?;

        let capture = self.send_command(command.command()).await?;
        if let Some(message) = capture.failure_message {
            return Err(TransportError::CommandFailed {
                command: capture.command,
                message,
            }
            .into());
        }

        let parsed = command.parse(&capture.output)?;
        if parsed.is_empty() {
            return Err(ParseError::EmptyResult {
                format: command.format(),
            }
            .into());
        }

        info!("{}: {} -> {} records", self.host, command, parsed.len());
        Ok(parsed)
    }

    /// Run and parse every configured report.
    ///
    /// A failing report does not stop the rest; each gets its own result, in
    /// configured order.
    pub async fn collect_all(&mut self) -> Vec<(ShowCommand, Result<ParsedOutput>)> {
        let mut results = Vec::with_capacity(self.commands.len());

        for command in self.commands.clone() {
            let result = self.collect(command).await;
            match &result {
                Err(err) if err.is_no_data() => debug!("{}: {}: {}", self.host, command, err),
                Err(err) => warn!("{}: {}: {}", self.host, command, err),
                Ok(_) => {}
            }
            results.push((command, result));
        }

        results
    }
}
