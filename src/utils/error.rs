use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Track '{track}' references unknown album '{album}'")]
    UnknownAlbumError { track: String, album: String },

    #[error("Introspection of {entity} failed: {message}")]
    IntrospectionError { entity: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Data,
    Introspection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::IoError(_) => ErrorCategory::Io,
            CatalogError::SerializationError(_) | CatalogError::UnknownAlbumError { .. } => {
                ErrorCategory::Data
            }
            CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CatalogError::IntrospectionError { .. } => ErrorCategory::Introspection,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 查詢失敗可以重試
            ErrorCategory::Introspection => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CatalogError::IoError(_) => {
                "Check that the catalog file exists and is readable".to_string()
            }
            CatalogError::SerializationError(_) => {
                "The entity data could not be encoded, check metadata values".to_string()
            }
            CatalogError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' section of the catalog file", field)
            }
            CatalogError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            CatalogError::UnknownAlbumError { album, .. } => {
                format!("Declare an [[albums]] entry titled '{}'", album)
            }
            CatalogError::IntrospectionError { .. } => {
                "Retry later or run without --fail-fast to skip failing entities".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read input: {}", self),
            ErrorCategory::Configuration => format!("Catalog configuration is invalid: {}", self),
            ErrorCategory::Data => format!("Catalog data is inconsistent: {}", self),
            ErrorCategory::Introspection => format!("Metadata lookup failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
