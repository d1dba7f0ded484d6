//! Error types for switchscrape.

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Main error type for switchscrape operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The transport collaborator failed or timed out before output was produced.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Output was produced but could not be turned into records.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// True when the command ran and parsed cleanly but the table was empty.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Error::Parse(err) if err.is_no_data())
    }
}

/// Errors raised by (or on behalf of) the command transport.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The command did not complete within the configured deadline.
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    /// The device rejected the command.
    #[error("Command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    /// No captured output is available for the command.
    #[error("No output available for command '{command}'")]
    NoOutput { command: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while turning a captured blob into records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The structural anchor (usually a header line) was not found.
    #[error("{format}: header not found in output")]
    HeaderNotFound { format: &'static str },

    /// The header was found but one or more required column labels are missing.
    #[error("{format}: header is missing columns {missing:?}")]
    IncompleteColumns {
        format: &'static str,
        missing: Vec<&'static str>,
    },

    /// The identity report parsed but lacks mandatory keys.
    #[error("device identity is missing mandatory fields {fields:?}")]
    MandatoryFieldMissing { fields: Vec<&'static str> },

    /// The anchor was found but the table holds no entries.
    #[error("{format}: no entries in output")]
    EmptyResult { format: &'static str },

    /// Output that must never be empty produced no records.
    #[error("{format}: no records could be extracted")]
    NoRecordsExtracted { format: &'static str },
}

impl ParseError {
    /// True for the non-fatal "table is empty" outcome.
    pub fn is_no_data(&self) -> bool {
        matches!(self, ParseError::EmptyResult { .. })
    }
}

/// Result type alias using switchscrape's Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_classification() {
        let empty: Error = ParseError::EmptyResult { format: "vlan" }.into();
        assert!(empty.is_no_data());

        let missing: Error = ParseError::HeaderNotFound { format: "vlan" }.into();
        assert!(!missing.is_no_data());

        let timeout: Error = TransportError::Timeout(Duration::from_secs(30)).into();
        assert!(!timeout.is_no_data());
    }

    #[test]
    fn test_error_messages() {
        let err = ParseError::IncompleteColumns {
            format: "lldp neighbors",
            missing: vec!["Hold-time"],
        };
        assert_eq!(
            err.to_string(),
            "lldp neighbors: header is missing columns [\"Hold-time\"]"
        );

        let err: Error = TransportError::Timeout(Duration::from_secs(5)).into();
        assert_eq!(
            err.to_string(),
            "Transport error: Operation timed out after 5s"
        );
    }
}
