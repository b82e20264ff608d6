//! Success and failure notices shown after planner actions.

use std::fmt;

use crate::error::CalendarError;

/// A one-line outcome message.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// The user-facing notice for `error` raised while attempting `action`.
    pub fn from_error(error: &CalendarError, action: &str) -> Self {
        Self::failure(error.notice(action))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Activity added");
        assert_eq!(success.to_string(), "Success: Activity added\n");

        let failure = OperationStatus::failure("Failed to delete");
        assert!(failure.to_string().starts_with("Error:"));
    }

    #[test]
    fn test_from_error_uses_notice() {
        let err = CalendarError::EntryNotFound {
            id: "x".to_string(),
        };
        let status = OperationStatus::from_error(&err, "update");
        assert!(!status.success);
        assert_eq!(status.message, "Failed to update");
    }
}
