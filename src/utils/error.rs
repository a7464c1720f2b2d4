use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Input is not valid UTF-8 (line {line})")]
    EncodingError { line: u64 },

    #[error("Malformed row at line {line}: expected at least 5 fields, found {fields}")]
    MalformedRow { line: u64, fields: usize },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl GeoError {
    /// Maps an I/O failure on `path` onto the file-level variants.
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => GeoError::FileNotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => GeoError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => GeoError::IoError(err),
        }
    }

    /// Maps a CSV reader failure, pulling UTF-8 and I/O problems out of the csv error kind.
    pub fn from_csv(err: csv::Error, path: &Path) -> Self {
        match err.kind() {
            csv::ErrorKind::Utf8 { pos, .. } => GeoError::EncodingError {
                line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
            },
            csv::ErrorKind::Io(io_err) => GeoError::from_io(
                std::io::Error::new(io_err.kind(), io_err.to_string()),
                path,
            ),
            _ => GeoError::CsvError(err),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GeoError::FileNotFound { .. } | GeoError::PermissionDenied { .. } => {
                ErrorCategory::Input
            }
            GeoError::EncodingError { .. }
            | GeoError::MalformedRow { .. }
            | GeoError::CsvError(_) => ErrorCategory::Data,
            GeoError::IoError(_) => ErrorCategory::Output,
            GeoError::ConfigError { .. }
            | GeoError::ConfigValidationError { .. }
            | GeoError::InvalidConfigValueError { .. }
            | GeoError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GeoError::EncodingError { .. }
            | GeoError::MalformedRow { .. }
            | GeoError::FileNotFound { .. }
            | GeoError::ConfigError { .. }
            | GeoError::ConfigValidationError { .. }
            | GeoError::InvalidConfigValueError { .. }
            | GeoError::MissingConfigError { .. } => ErrorSeverity::High,
            GeoError::CsvError(_) => ErrorSeverity::Medium,
            GeoError::PermissionDenied { .. } | GeoError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GeoError::FileNotFound { path } => {
                format!("Cannot find file '{}'", path.display())
            }
            GeoError::PermissionDenied { path } => {
                format!("No permission to access '{}'", path.display())
            }
            GeoError::EncodingError { line } => {
                format!("The input file is not UTF-8 encoded (problem near line {})", line)
            }
            GeoError::MalformedRow { line, fields } => format!(
                "Row {} has only {} column(s); expected id,x,y,z,name",
                line, fields
            ),
            GeoError::CsvError(e) => format!("Could not read the CSV input: {}", e),
            GeoError::IoError(e) => format!("File system error: {}", e),
            GeoError::ConfigError { message } => format!("Configuration problem: {}", message),
            GeoError::ConfigValidationError { field, message } => {
                format!("Configuration '{}' is invalid: {}", field, message)
            }
            GeoError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
            GeoError::MissingConfigError { field } => {
                format!("Configuration '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GeoError::FileNotFound { .. } => "Check the path and that the parent directory exists",
            GeoError::PermissionDenied { .. } => "Check file permissions or choose another location",
            GeoError::EncodingError { .. } => {
                "Re-save the file as UTF-8 CSV (e.g. 'CSV UTF-8' in a spreadsheet program)"
            }
            GeoError::MalformedRow { .. } => {
                "Make sure every row is ordered id,x,y,z,name and has no missing columns"
            }
            GeoError::CsvError(_) => "Check the CSV quoting and delimiters",
            GeoError::IoError(_) => "Check available disk space and the output location",
            GeoError::ConfigError { .. }
            | GeoError::ConfigValidationError { .. }
            | GeoError::InvalidConfigValueError { .. }
            | GeoError::MissingConfigError { .. } => {
                "Review the command line arguments or the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
