//! Note storage
//!
//! One plain-text file per note, named `<name>.txt`, directly inside the
//! storage directory.

pub mod filesystem;
pub mod operations;
pub mod results;
pub mod validation;

pub use operations::{create_note, delete_note, list_notes, read_note, update_note};
pub use results::{ListResult, Note, SkippedEntry};
pub use validation::{note_path, validate_note_name};
