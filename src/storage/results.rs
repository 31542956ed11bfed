//! Storage result types
//!
//! Defines result structures returned by storage operations.

use serde::Serialize;

/// A note as served to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub name: String,
    pub text: String,
}

/// A `.txt` entry that could not be read during a listing
#[derive(Debug, Clone)]
pub struct SkippedEntry {
    pub file_name: String,
    pub reason: String,
}

/// Result of a listing: every readable note plus what was skipped
#[derive(Debug, Clone, Default)]
pub struct ListResult {
    pub notes: Vec<Note>,
    pub skipped: Vec<SkippedEntry>,
}
