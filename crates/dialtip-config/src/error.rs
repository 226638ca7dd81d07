//! Error types for settings operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Settings parsed but hold unusable values
    #[error("validation failed: {0}")]
    Validation(#[from] crate::validation::ValidationError),
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Whether the error is a missing settings file.
    ///
    /// Callers usually treat this as "use the defaults" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::ReadFile { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use std::error::Error;

    fn io_err(kind: std::io::ErrorKind) -> std::io::Error {
        std::io::Error::new(kind, "mock")
    }

    #[test]
    fn factories_produce_matching_variants() {
        let err = ConfigError::read_file("/some/path", io_err(std::io::ErrorKind::NotFound));
        assert!(
            matches!(err, ConfigError::ReadFile { ref path, .. } if path == std::path::Path::new("/some/path"))
        );
        let err = ConfigError::write_file("/out/path", io_err(std::io::ErrorKind::Other));
        assert!(matches!(err, ConfigError::WriteFile { .. }));
        let err = ConfigError::create_dir("/dir/path", io_err(std::io::ErrorKind::Other));
        assert!(matches!(err, ConfigError::CreateDir { .. }));
    }

    #[test]
    fn display_names_the_path() {
        let err = ConfigError::read_file("/a/settings.toml", io_err(std::io::ErrorKind::Other));
        let msg = err.to_string();
        assert!(msg.contains("failed to read file"), "got: {msg}");
        assert!(msg.contains("/a/settings.toml"), "got: {msg}");

        let err = ConfigError::create_dir("/a/b", io_err(std::io::ErrorKind::Other));
        assert!(err.to_string().contains("failed to create directory"));
    }

    #[test]
    fn io_variants_expose_their_source() {
        let err = ConfigError::write_file("/x", io_err(std::io::ErrorKind::Other));
        assert!(err.source().is_some(), "WriteFile must expose I/O source");
    }

    #[test]
    fn not_found_is_detected() {
        let missing = ConfigError::read_file("/x", io_err(std::io::ErrorKind::NotFound));
        assert!(missing.is_not_found());
        let denied = ConfigError::read_file("/x", io_err(std::io::ErrorKind::PermissionDenied));
        assert!(!denied.is_not_found());
    }

    #[test]
    fn validation_converts_with_question_mark() {
        fn check() -> Result<(), ConfigError> {
            Err(ValidationError::NonPositive {
                field: "dial.drag",
                value: 0.0,
            })?;
            Ok(())
        }
        let msg = check().unwrap_err().to_string();
        assert_eq!(msg, "validation failed: dial.drag must be positive (got 0)");
    }
}
