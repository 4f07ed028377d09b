//! # Error Types
//!
//! Error handling for the refactor registry.
//!
//! Dispatch reports "nothing applies" as an empty or absent result, never as an
//! error. These variants cover the opt-in strict paths (`try_register`,
//! `resolve_edits_for_refactor`) and loading of formatting settings.

use std::fmt;
use std::path::PathBuf;

/// Error types that can occur in the registry, the dispatcher's strict
/// lookups, or while loading configuration.
#[derive(Debug)]
pub enum RefactorError {
    /// A refactor with this name is already registered
    DuplicateRefactor(String),
    /// No refactor is registered under this name
    UnknownRefactor(String),
    /// I/O error reading settings files
    Io(std::io::Error),
    /// Error parsing YAML settings
    SerdeYaml(serde_yaml::Error),
    /// Error parsing JSON settings
    SerdeJson(serde_json::Error),
    /// Requested settings file not found
    FileNotFound(PathBuf),
}

impl fmt::Display for RefactorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefactorError::DuplicateRefactor(name) => {
                write!(f, "Refactor already registered: {name}")
            }
            RefactorError::UnknownRefactor(name) => write!(f, "Unknown refactor: {name}"),
            RefactorError::Io(err) => write!(f, "IO error: {err}"),
            RefactorError::SerdeYaml(err) => write!(f, "YAML parsing error: {err}"),
            RefactorError::SerdeJson(err) => write!(f, "JSON parsing error: {err}"),
            RefactorError::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
        }
    }
}

impl std::error::Error for RefactorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RefactorError::Io(err) => Some(err),
            RefactorError::SerdeYaml(err) => Some(err),
            RefactorError::SerdeJson(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RefactorError {
    fn from(err: std::io::Error) -> Self {
        RefactorError::Io(err)
    }
}

impl From<serde_yaml::Error> for RefactorError {
    fn from(err: serde_yaml::Error) -> Self {
        RefactorError::SerdeYaml(err)
    }
}

impl From<serde_json::Error> for RefactorError {
    fn from(err: serde_json::Error) -> Self {
        RefactorError::SerdeJson(err)
    }
}
