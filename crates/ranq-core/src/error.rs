//! Error types and exit codes for ranq
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, out-of-range move indices)
//! - 3: Data error (unreadable or invalid items file)

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unreadable or malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during ranq operations
#[derive(Error, Debug)]
pub enum RanqError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown rule kind: {0} (expected: exact-name, partial-name, tag-match, or text-match)")]
    UnknownRuleKind(String),

    /// Reorder index outside the priority list bounds. The caller is
    /// expected to validate indices before calling; the core does not clamp.
    #[error("index {index} out of range for priority list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("invalid items file {path:?}: {reason}")]
    InvalidItems { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RanqError {
    /// Map this error to a process exit code
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RanqError::UnknownFormat(_)
            | RanqError::UnknownRuleKind(_)
            | RanqError::IndexOutOfRange { .. }
            | RanqError::UsageError(_) => ExitCode::Usage,
            RanqError::InvalidItems { .. } => ExitCode::Data,
            RanqError::Io(_) | RanqError::Json(_) | RanqError::Other(_) => ExitCode::Failure,
        }
    }

    /// Structured error envelope for `--format json`
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "error": self.to_string(),
            "code": self.exit_code() as i32,
        })
        .to_string()
    }
}

/// Convenience result type for ranq operations
pub type Result<T> = std::result::Result<T, RanqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        let err = RanqError::IndexOutOfRange { index: 4, len: 4 };
        assert_eq!(err.exit_code(), ExitCode::Usage);

        let err = RanqError::InvalidItems {
            path: PathBuf::from("items.json"),
            reason: "not an array".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);

        let err = RanqError::Other("boom".to_string());
        assert_eq!(err.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_json_envelope() {
        let err = RanqError::UnknownRuleKind("exact".to_string());
        let value: serde_json::Value = serde_json::from_str(&err.to_json()).unwrap();
        assert_eq!(value["code"], 2);
        assert!(value["error"].as_str().unwrap().contains("exact"));
    }
}
