use std::fmt::{self, Debug, Display};
use std::io;

/// Provides `ContagionError` and maps other errors to
/// convert to a `ContagionError`
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum ContagionError {
    IoError(io::Error),
    JsonError(serde_json::Error),
    CSVError(csv::Error),
    /// A structurally invalid input, surfaced before any work is done.
    InvalidArgument(String),
    ContagionError(String),
}

impl From<io::Error> for ContagionError {
    fn from(error: io::Error) -> Self {
        ContagionError::IoError(error)
    }
}

impl From<serde_json::Error> for ContagionError {
    fn from(error: serde_json::Error) -> Self {
        ContagionError::JsonError(error)
    }
}

impl From<csv::Error> for ContagionError {
    fn from(error: csv::Error) -> Self {
        ContagionError::CSVError(error)
    }
}

impl From<String> for ContagionError {
    fn from(error: String) -> Self {
        ContagionError::ContagionError(error)
    }
}

impl From<&str> for ContagionError {
    fn from(error: &str) -> Self {
        ContagionError::ContagionError(error.to_string())
    }
}

impl std::error::Error for ContagionError {}

impl Display for ContagionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {self:?}")?;
        Ok(())
    }
}
