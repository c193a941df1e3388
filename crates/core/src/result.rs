//! Result alias and extension combinators.
//!
//! Keeps call sites free of unwrap/expect: errors either propagate with `?`,
//! become a [`Notice`] at the reporting boundary, or are dropped on purpose
//! with a trace line.

use crate::error::{Error, Notice};

/// The standard Result type for edgeviz operations.
///
/// # Examples
///
/// ```
/// use edgeviz_core::{Error, Result};
///
/// fn require(label: &str) -> Result<&str> {
///     if label.is_empty() {
///         return Err(Error::SourceNotFound(label.to_string()));
///     }
///     Ok(label)
/// }
///
/// assert!(require("A").is_ok());
/// assert!(require("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing reporting combinators for Results.
pub trait ResultExt<T> {
    /// Drop the error on purpose, leaving a `debug` trace naming what was skipped.
    fn ok_or_trace(self, what: &str) -> Option<T>;

    /// Convert the error into a user-facing [`Notice`].
    fn into_notice(self) -> std::result::Result<T, Notice>;
}

impl<T> ResultExt<T> for Result<T> {
    fn ok_or_trace(self, what: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(error = %e, "{what} skipped");
                None
            }
        }
    }

    fn into_notice(self) -> std::result::Result<T, Notice> {
        self.map_err(Notice::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Severity;

    #[test]
    fn test_ok_or_trace_ok() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.ok_or_trace("answer"), Some(42));
    }

    #[test]
    fn test_ok_or_trace_err() {
        let result: Result<i32> = Err(Error::Unexpected("boom".into()));
        assert_eq!(result.ok_or_trace("answer"), None);
    }

    #[test]
    fn test_into_notice_carries_severity() {
        let result: Result<()> = Err(Error::no_path("A", "B"));
        let notice = result.into_notice().err();
        assert_eq!(notice.map(|n| n.severity), Some(Severity::Info));
    }
}
