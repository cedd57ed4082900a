//! Unified error type for the flowtag pipeline.
//!
//! `AppError` is the single error type returned by every fallible operation
//! in the crate. Fatal variants abort the run. Per-line flow-log problems are
//! never represented here; they are logged and skipped by the processor.

/// Application-level error. Each variant maps to a distinct failure domain.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An input exceeded its hard limit (lookup rows or flow log bytes).
    #[error("input too large: {0}")]
    InputTooLarge(String),

    /// The lookup table header lacks a required column.
    #[error("lookup table is missing required column `{0}`")]
    MissingLookupColumn(String),

    /// A lookup data row could not be read or is too short.
    #[error("malformed lookup row: {0}")]
    MalformedLookupRow(String),

    /// Filesystem-level failures (open, metadata, create, write).
    #[error("{0}")]
    Io(String),

    /// Failures surfaced by the CSV reader/writer layer.
    #[error("{0}")]
    Csv(String),
}

impl AppError {
    /// Returns the error kind as a string matching the variant name.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InputTooLarge(_) => "InputTooLarge",
            AppError::MissingLookupColumn(_) => "MissingLookupColumn",
            AppError::MalformedLookupRow(_) => "MalformedLookupRow",
            AppError::Io(_) => "Io",
            AppError::Csv(_) => "Csv",
        }
    }

    /// True for errors caused by an input exceeding a hard limit.
    pub fn is_too_large(&self) -> bool {
        matches!(self, AppError::InputTooLarge(_))
    }
}

// ---- From implementations for ergonomic error conversion ----

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_returns_correct_variant_name() {
        assert_eq!(
            AppError::InputTooLarge("10001 rows".into()).kind(),
            "InputTooLarge"
        );
        assert_eq!(
            AppError::MissingLookupColumn("tag".into()).kind(),
            "MissingLookupColumn"
        );
        assert_eq!(
            AppError::MalformedLookupRow("row 3".into()).kind(),
            "MalformedLookupRow"
        );
        assert_eq!(AppError::Io("disk gone".into()).kind(), "Io");
        assert_eq!(AppError::Csv("bad quote".into()).kind(), "Csv");
    }

    #[test]
    fn test_missing_column_display_names_the_column() {
        let err = AppError::MissingLookupColumn("dstport".into());
        assert_eq!(
            err.to_string(),
            "lookup table is missing required column `dstport`"
        );
    }

    #[test]
    fn test_from_io_error_produces_io_variant() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let app_err: AppError = io_err.into();
        assert_eq!(app_err.kind(), "Io");
        assert!(app_err.to_string().contains("file missing"));
    }

    #[test]
    fn test_is_too_large_only_for_limit_errors() {
        assert!(AppError::InputTooLarge("x".into()).is_too_large());
        assert!(!AppError::Io("x".into()).is_too_large());
    }
}
