//! Command collection and dispatch.
//!
//! The collector drives a [`CommandRunner`] (the transport that actually talks
//! to a device) through a list of `show` commands, guards each one with a
//! deadline, screens the output for CLI error markers and hands it to the
//! matching parser.
//!
//! Connection handling, credentials and retries belong to the runner. A
//! [`CapturedRunner`] replays previously captured output for offline parsing.

mod builder;
mod capture;
mod captured;
mod session;

pub use builder::CollectorBuilder;
pub use capture::Capture;
pub use captured::CapturedRunner;
pub use session::Collector;

use std::future::Future;

use crate::error::TransportError;

/// Transport seam: runs one CLI command and returns its full output.
pub trait CommandRunner: Send {
    /// Run `command` and return everything the device printed for it.
    fn run(
        &mut self,
        command: &str,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}
