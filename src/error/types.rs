//! Error types
//!
//! Defines domain-specific error types for each layer of the notes server.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Note name validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Note name is empty")]
    Empty,
    #[error("Note name is too long ({0} bytes)")]
    TooLong(usize),
    #[error("Reserved note name: {0}")]
    Reserved(String),
    #[error("Invalid character {0:?} in note name")]
    InvalidCharacter(char),
}

/// Storage module errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid note name: {0}")]
    InvalidName(#[from] NameError),
    #[error("Note not found: {0}")]
    NotFound(String),
    #[error("Note already exists: {0}")]
    AlreadyExists(String),
    #[error("Cannot read storage directory {}: {source}", path.display())]
    DirectoryUnreadable { path: PathBuf, source: io::Error },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Startup errors that end the process
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
