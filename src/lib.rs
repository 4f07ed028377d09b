pub mod config;
pub mod errors;
pub mod logging;
pub mod refactoring;

// Re-export commonly used types
pub use config::{FormatCodeSettings, FormatContext};
pub use errors::RefactorError;
pub use refactoring::*;
