//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with reading, parsing or writing package.json
//! - ConfigError: Issues with the tables file and CLI configuration
//! - AnalysisError: Conditions that stop an analysis run

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

    /// Analysis related errors
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Errors related to manifest and lockfile operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// JSON serialization error
    #[error("failed to serialize JSON for {path}: {message}")]
    SerializeError { path: PathBuf, message: String },

    /// The document is valid JSON but not an object
    #[error("expected a JSON object at the top level of {path}")]
    NotAnObject { path: PathBuf },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the tables file
    #[error("failed to read tables file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// A table key or value is not a version
    #[error("invalid version '{value}' in {table}")]
    InvalidVersion { table: String, value: String },

    /// The Node.js → npm table ended up without entries
    #[error("the Node.js to npm table must contain at least one entry")]
    EmptyCorrespondence,

    /// Invalid path
    #[error("invalid path '{path}': {message}")]
    InvalidPath { path: PathBuf, message: String },
}

/// Errors that stop an analysis run
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Neither a usable package.json nor a package-lock.json exists
    #[error("No package.json or package-lock.json found!")]
    NoProjectFiles { root: PathBuf },
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

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new SerializeError
    pub fn serialize_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::SerializeError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new NotAnObject error
    pub fn not_an_object(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotAnObject { path: path.into() }
    }
}

impl ConfigError {
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

    /// Creates a new InvalidVersion error
    pub fn invalid_version(table: impl Into<String>, value: impl Into<String>) -> Self {
        ConfigError::InvalidVersion {
            table: table.into(),
            value: value.into(),
        }
    }

    /// Creates a new InvalidPath error
    pub fn invalid_path(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl AnalysisError {
    /// Creates a new NoProjectFiles error
    pub fn no_project_files(root: impl Into<PathBuf>) -> Self {
        AnalysisError::NoProjectFiles { root: root.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_not_found() {
        let err = ManifestError::not_found("/path/to/package.json");
        let msg = format!("{}", err);
        assert_eq!(msg, "file not found: /path/to/package.json");
    }

    #[test]
    fn test_manifest_error_json_parse() {
        let err = ManifestError::json_parse_error("/path/to/package.json", "unexpected token");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse JSON"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_manifest_error_write() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = ManifestError::write_error("/path/to/package.json", source);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to write /path/to/package.json"));
        assert!(msg.contains("read-only"));
    }

    #[test]
    fn test_read_error_names_only_the_file() {
        let source = std::io::Error::new(std::io::ErrorKind::InvalidData, "invalid UTF-8");
        let err = ManifestError::read_error("/app/package-lock.json", source);
        let msg = format!("{}", err);
        assert!(msg.starts_with("failed to read /app/package-lock.json: "));
        assert!(!msg.contains("manifest"));
    }

    #[test]
    fn test_manifest_error_not_an_object() {
        let err = ManifestError::not_an_object("package.json");
        assert!(format!("{}", err).contains("expected a JSON object"));
    }

    #[test]
    fn test_config_error_toml_parse() {
        let err = ConfigError::toml_parse_error("/path/to/tables.toml", "invalid key");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse TOML"));
        assert!(msg.contains("invalid key"));
    }

    #[test]
    fn test_config_error_invalid_version() {
        let err = ConfigError::invalid_version("packages.react", "latest");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid version 'latest'"));
        assert!(msg.contains("packages.react"));
    }

    #[test]
    fn test_analysis_error_message() {
        let err = AnalysisError::no_project_files("/empty");
        assert_eq!(format!("{}", err), "No package.json or package-lock.json found!");
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let app_err: AppError = ManifestError::not_found("/path").into();
        assert!(format!("{}", app_err).contains("file not found: /path"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::EmptyCorrespondence.into();
        assert!(format!("{}", app_err).contains("at least one entry"));
    }

    #[test]
    fn test_app_error_from_analysis_error() {
        let app_err: AppError = AnalysisError::no_project_files("/empty").into();
        assert!(format!("{}", app_err).contains("No package.json"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ManifestError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
