use std::path::PathBuf;

use thiserror::Error;

use crate::sourcemap::RecordError;

/// Coarse classification of a fatal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Read,
    Parse,
    Connection,
    Schema,
    Validation,
    Write,
    Output,
}

/// Every way a single extraction can fail. Each message is one line, prefixed
/// with the resource it concerns.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("[{resource}] Provided JSON path doesn't exist, check and try again")]
    NotFound { resource: String },

    #[error("[{resource}] Unable to read source map: {source}")]
    Read {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("[{resource}] Provided JSON has not been parsed as valid JSON, check and try again")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("[{resource}] Error connecting to remote resource")]
    Connection {
        resource: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("[{resource}] Provided URL is missing a schema, add a schema and try again")]
    MissingSchema { resource: String },

    #[error("[{resource}] Provided URL uses unsupported scheme '{scheme}', use http or https")]
    UnsupportedScheme { resource: String, scheme: String },

    #[error("[{resource}] Provided URL is not valid: {source}")]
    InvalidUrl {
        resource: String,
        #[source]
        source: url::ParseError,
    },

    #[error("[{resource}] Error verifying source map")]
    Validation { resource: String },

    #[error("[{resource}] Error verifying source map: {reason}")]
    Malformed {
        resource: String,
        #[source]
        reason: RecordError,
    },

    #[error("[{resource}] Error extracting file {source_path}")]
    Write {
        resource: String,
        source_path: String,
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `sourcesContent` has no usable string at the index of a declared source.
    #[error("[{resource}] Error extracting file {source_path}")]
    MissingContent {
        resource: String,
        source_path: String,
        index: usize,
    },

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl ExtractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::NotFound { .. } => ErrorKind::NotFound,
            ExtractError::Read { .. } => ErrorKind::Read,
            ExtractError::Parse { .. } => ErrorKind::Parse,
            ExtractError::Connection { .. } => ErrorKind::Connection,
            ExtractError::MissingSchema { .. }
            | ExtractError::UnsupportedScheme { .. }
            | ExtractError::InvalidUrl { .. } => ErrorKind::Schema,
            ExtractError::Validation { .. } | ExtractError::Malformed { .. } => {
                ErrorKind::Validation
            }
            ExtractError::Write { .. } | ExtractError::MissingContent { .. } => ErrorKind::Write,
            ExtractError::Output(_) => ErrorKind::Output,
        }
    }
}
