//! Core error types for edgeviz runs.
//!
//! Every failure a run can hit is a variant of [`Error`]. Each variant carries
//! a [`Severity`] so the reporting surface (dialog, log line, exit code) can be
//! chosen in one place instead of at the call site.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How loudly a condition should be reported to the user.
///
/// - `Warning`: something was skipped, processing continued or stopped cleanly.
/// - `Info`: a valid outcome worth telling the user about (e.g. no path).
/// - `Error`: the current run was aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}

/// Core error type for edgeviz operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    // Parsing
    #[error("Error parsing line {line}: {reason}")]
    ParseFailed { line: usize, reason: String },

    #[error("Graph is empty. Please enter graph data.")]
    EmptyGraph,

    // Input validation
    #[error("Source node required for {algorithm}.")]
    SourceRequired { algorithm: String },

    #[error("Target node required for {algorithm}.")]
    TargetRequired { algorithm: String },

    #[error("Source node '{0}' not found in graph.")]
    SourceNotFound(String),

    #[error("Target node '{0}' not found in graph.")]
    TargetNotFound(String),

    #[error("Algorithm '{0}' selection not recognized or not yet implemented.")]
    UnrecognizedAlgorithm(String),

    // Algorithm execution
    #[error("No path found between {from} and {target}.")]
    NoPath { from: String, target: String },

    #[error("Node not found during algorithm execution: {0}")]
    NodeNotFound(String),

    #[error("Graph algorithm error: {reason}\nCheck if weights are provided for weighted algorithms.")]
    AlgorithmFailed { reason: String },

    // Rendering
    #[error("render failed: {reason}")]
    RenderFailed { reason: String },

    // Configuration
    #[error("failed to read config '{path}': {reason}")]
    ConfigReadFailed { path: PathBuf, reason: String },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Algorithm execution failed: {0}")]
    Unexpected(String),
}

impl Error {
    /// Create a fatal parse error for a 1-based line number.
    pub fn parse_failed(line: usize, reason: impl Into<String>) -> Self {
        Self::ParseFailed {
            line,
            reason: reason.into(),
        }
    }

    /// Create a library-level algorithm error.
    pub fn algorithm_failed(reason: impl Into<String>) -> Self {
        Self::AlgorithmFailed {
            reason: reason.into(),
        }
    }

    /// Create a no-path outcome between two labels.
    pub fn no_path(from: impl Into<String>, target: impl Into<String>) -> Self {
        Self::NoPath {
            from: from.into(),
            target: target.into(),
        }
    }

    /// Create a render error.
    pub fn render_failed(reason: impl Into<String>) -> Self {
        Self::RenderFailed {
            reason: reason.into(),
        }
    }

    /// Create a config read error.
    pub fn config_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Severity this error is reported with.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::EmptyGraph | Self::UnrecognizedAlgorithm(_) => Severity::Warning,
            Self::NoPath { .. } => Severity::Info,
            Self::ParseFailed { .. }
            | Self::SourceRequired { .. }
            | Self::TargetRequired { .. }
            | Self::SourceNotFound(_)
            | Self::TargetNotFound(_)
            | Self::NodeNotFound(_)
            | Self::AlgorithmFailed { .. }
            | Self::RenderFailed { .. }
            | Self::ConfigReadFailed { .. }
            | Self::InvalidConfig { .. }
            | Self::Unexpected(_) => Severity::Error,
        }
    }

    /// Dialog title for this error.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::ParseFailed { .. } => "Parsing Error",
            Self::EmptyGraph | Self::UnrecognizedAlgorithm(_) => "Warning",
            Self::SourceRequired { .. }
            | Self::TargetRequired { .. }
            | Self::SourceNotFound(_)
            | Self::TargetNotFound(_) => "Input Error",
            Self::NoPath { .. } => "Info",
            Self::NodeNotFound(_) | Self::AlgorithmFailed { .. } => "Algorithm Error",
            Self::RenderFailed { .. } => "Render Error",
            Self::ConfigReadFailed { .. } | Self::InvalidConfig { .. } => "Configuration Error",
            Self::Unexpected(_) => "Error",
        }
    }
}

/// A user-facing message produced by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title, message)
    }

    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Emit this notice through `tracing` at the level matching its severity.
    pub fn log(&self) {
        match self.severity {
            Severity::Info => tracing::info!(title = %self.title, "{}", self.message),
            Severity::Warning => tracing::warn!(title = %self.title, "{}", self.message),
            Severity::Error => tracing::error!(title = %self.title, "{}", self.message),
        }
    }
}

impl From<&Error> for Notice {
    fn from(error: &Error) -> Self {
        Self::new(error.severity(), error.title(), error.to_string())
    }
}

impl From<Error> for Notice {
    fn from(error: Error) -> Self {
        Self::from(&error)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_is_informational() {
        let error = Error::no_path("A", "Z");
        assert_eq!(error.severity(), Severity::Info);
        assert_eq!(error.to_string(), "No path found between A and Z.");
    }

    #[test]
    fn test_empty_graph_and_unknown_algorithm_are_warnings() {
        assert_eq!(Error::EmptyGraph.severity(), Severity::Warning);
        assert_eq!(
            Error::UnrecognizedAlgorithm("Floyd".into()).severity(),
            Severity::Warning
        );
    }

    #[test]
    fn test_input_errors_are_fatal() {
        let errors = [
            Error::SourceRequired {
                algorithm: "BFS".into(),
            },
            Error::TargetRequired {
                algorithm: "Dijkstra".into(),
            },
            Error::SourceNotFound("X".into()),
            Error::TargetNotFound("Y".into()),
        ];
        for error in errors {
            assert_eq!(error.severity(), Severity::Error);
            assert_eq!(error.title(), "Input Error");
        }
    }

    #[test]
    fn test_notice_from_error_keeps_message_and_title() {
        let notice = Notice::from(Error::SourceNotFound("Q".into()));
        assert!(notice.is_fatal());
        assert_eq!(notice.title, "Input Error");
        assert_eq!(notice.message, "Source node 'Q' not found in graph.");
    }

    #[test]
    fn test_parse_failed_names_line() {
        let error = Error::parse_failed(7, "capacity exhausted");
        assert_eq!(error.to_string(), "Error parsing line 7: capacity exhausted");
        assert_eq!(error.title(), "Parsing Error");
    }
}
