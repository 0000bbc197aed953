//! Errors that can be thrown when processing configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::fields::{Field, InvalidFields};

/// The errors that can be thrown when parsing a configuration directory.
#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}:{line}:{column}: {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("{file_path}: did not find the expected 'version' tag")]
    DidNotFindExpectedVersionTag { file_path: PathBuf },

    #[error("{file_path}: unsupported configuration version {version}, expected {expected}")]
    UnsupportedVersion {
        file_path: PathBuf,
        version: serde_json::Value,
        expected: u32,
    },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    // This variant exists for the benefit of the error messages, which include the path
    // of the file that could not be read.
    #[error("I/O error: {0}")]
    IoErrorButStringified(String),
}

/// The errors that can be thrown when writing a configuration directory.
#[derive(Debug, Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// The errors that can be thrown when turning a parsed configuration into the
/// runtime configuration.
#[derive(Debug, Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("missing environment variable when processing {field}: {message}")]
    MissingEnvironmentVariable { field: Field, message: String },

    #[error("invalid configuration: {0}")]
    InvalidFields(InvalidFields),
}
