//! Error types for the calendar and planner library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all calendar and planner operations.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// Missing or malformed planner input, rejected before any store call
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Transport failure talking to the backend collaborator
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// Backend collaborator answered with a non-success status
    #[error("Backend responded with {status}: {message}")]
    HttpStatus { status: u16, message: String },
    /// Planner entry not found for the given ID
    #[error("Entry with ID {id} not found")]
    EntryNotFound { id: String },
    /// Offline store connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> CalendarError {
        CalendarError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating network errors with optional context.
pub struct NetworkErrorBuilder {
    message: String,
}

impl NetworkErrorBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn with_source(self, source: reqwest::Error) -> CalendarError {
        CalendarError::Network {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CalendarError {
        CalendarError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CalendarError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for network errors.
    pub fn network(message: impl Into<String>) -> NetworkErrorBuilder {
        NetworkErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether this error blocks submission (shown inline) rather than
    /// reporting a failed round trip to the backend.
    pub fn is_validation(&self) -> bool {
        matches!(self, CalendarError::InvalidInput { .. })
    }

    /// User-facing notice for a failed action.
    ///
    /// Validation errors surface their reason. Everything else, including a
    /// missing entry, collapses into the generic "Failed to <action>" notice.
    ///
    /// ```rust
    /// use fasal_core::CalendarError;
    ///
    /// let err = CalendarError::EntryNotFound { id: "abc".to_string() };
    /// assert_eq!(err.notice("update"), "Failed to update");
    /// ```
    pub fn notice(&self, action: &str) -> String {
        match self {
            CalendarError::InvalidInput { reason, .. } => reason.clone(),
            _ => format!("Failed to {action}"),
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to CalendarError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

/// Specialized extension trait for HTTP-related Results.
pub trait NetworkResultExt<T> {
    /// Map transport errors with a message.
    fn net_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| CalendarError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CalendarError::database(message).with_source(e))
    }
}

impl<T> NetworkResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn net_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CalendarError::network(message).with_source(e))
    }
}

/// Result type alias for calendar and planner operations
pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_notice_uses_reason() {
        let err = CalendarError::invalid_input("crop_name")
            .with_reason("Please fill all required fields");
        assert!(err.is_validation());
        assert_eq!(err.notice("add activity"), "Please fill all required fields");
    }

    #[test]
    fn test_not_found_collapses_to_generic_notice() {
        let err = CalendarError::EntryNotFound {
            id: "gone".to_string(),
        };
        assert!(!err.is_validation());
        assert_eq!(err.notice("delete"), "Failed to delete");
    }

    #[test]
    fn test_http_status_display() {
        let err = CalendarError::HttpStatus {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Backend responded with 500: boom");
        assert_eq!(err.notice("update"), "Failed to update");
    }

    #[test]
    fn test_configuration_context() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = io.with_context("Failed to read config").unwrap_err();
        assert!(matches!(err, CalendarError::Configuration { .. }));
        assert!(err.to_string().contains("Failed to read config: missing"));
    }
}
