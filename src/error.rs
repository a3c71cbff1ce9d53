//! Error types for the DeepGuard application
//!
//! The UI core itself has no failure modes (all transitions are total);
//! errors only arise at the edges: user config and test scenario files.

use thiserror::Error;

/// DeepGuard application errors
#[derive(Error, Debug, Clone)]
pub enum GuardError {
    /// User configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Test scenario file could not be read or parsed
    #[error("Test scenario error in '{path}': {message}")]
    TestConfig { path: String, message: String },

    /// File system I/O error
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for GuardError {
    fn from(e: std::io::Error) -> Self {
        GuardError::Io(e.to_string())
    }
}

impl GuardError {
    /// Get a user-friendly description of the error
    ///
    /// Returns a message suitable for display at startup.
    pub fn user_message(&self) -> String {
        match self {
            GuardError::Config(_) => {
                "Could not load configuration. Check deepguard.toml syntax.".to_string()
            }
            GuardError::TestConfig { path, .. } => {
                format!("Could not load test scenario '{}'.", path)
            }
            GuardError::Io(_) => "File system error occurred.".to_string(),
        }
    }
}

/// Result type alias for DeepGuard operations
pub type Result<T> = std::result::Result<T, GuardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GuardError = io.into();
        assert!(matches!(err, GuardError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_test_config_display_includes_path() {
        let err = GuardError::TestConfig {
            path: "demo.toml".to_string(),
            message: "bad toml".to_string(),
        };
        assert!(err.to_string().contains("demo.toml"));
        assert!(err.user_message().contains("demo.toml"));
    }
}
