//! Error types for termfolio core.

use thiserror::Error;

/// Errors raised while loading the data model or configuration.
///
/// Command execution never produces these; see
/// [`CommandError`](crate::commands::CommandError) for the in-session taxonomy.
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Profile data that parsed but breaks an invariant
    #[error("Invalid profile data: {0}")]
    InvalidProfile(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for termfolio core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
