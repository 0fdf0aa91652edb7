//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues reading the build manifest
//! - ConfigError: Issues with the configuration file or CLI options
//!
//! Pattern-matching misses (unknown artifact, snapshot versions, unmapped
//! dependencies, unexpected URL shapes) are not errors. They are reported
//! through [`crate::domain::SkipReason`] instead.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to manifest file access
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read configuration file
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// No artifact identifier given on the command line or in the config
    #[error("no artifact identifier given: pass --artifact or set `artifact` in the config file")]
    MissingArtifact,

    /// Malformed --reference value
    #[error("invalid reference '{value}': expected NAME=URL")]
    InvalidReference { value: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Returns the path of the manifest that could not be read
    pub fn path(&self) -> &std::path::Path {
        match self {
            ManifestError::NotFound { path } | ManifestError::ReadError { path, .. } => {
                path.as_path()
            }
        }
    }
}

impl ConfigError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidReference error
    pub fn invalid_reference(value: impl Into<String>) -> Self {
        ConfigError::InvalidReference {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_not_found() {
        let err = ManifestError::not_found("/path/to/pom.xml");
        let msg = format!("{}", err);
        assert!(msg.contains("manifest file not found"));
        assert!(msg.contains("pom.xml"));
    }

    #[test]
    fn test_manifest_error_read_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ManifestError::read_error("/path/to/pom.xml", io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read manifest file"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_manifest_error_path() {
        let err = ManifestError::not_found("/tmp/pom.xml");
        assert_eq!(err.path(), std::path::Path::new("/tmp/pom.xml"));
    }

    #[test]
    fn test_config_error_toml_parse() {
        let err = ConfigError::toml_parse_error("/path/docversion.toml", "invalid key");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse TOML"));
        assert!(msg.contains("invalid key"));
    }

    #[test]
    fn test_config_error_missing_artifact() {
        let msg = format!("{}", ConfigError::MissingArtifact);
        assert!(msg.contains("--artifact"));
    }

    #[test]
    fn test_config_error_invalid_reference() {
        let err = ConfigError::invalid_reference("guava");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid reference 'guava'"));
        assert!(msg.contains("NAME=URL"));
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let app_err: AppError = ManifestError::not_found("/path").into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("manifest file not found"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::not_found("/missing.toml").into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("config file not found"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ManifestError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
