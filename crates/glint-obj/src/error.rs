//! Error types for OBJ import.

use thiserror::Error;

/// Errors that can occur while loading an OBJ file.
///
/// Malformed statements inside the file are not errors: the parser skips
/// them and counts them, so only the surrounding I/O can fail.
#[derive(Error, Debug)]
pub enum ObjError {
    /// I/O error reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
