use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the launch-trends crates.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// A period granularity string is not one of `month`, `quarter`, `year`.
    #[error("Invalid period granularity: {0} (expected month, quarter, or year)")]
    InvalidGranularity(String),

    /// A timezone name is not a recognised IANA identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// A catalog file could not be opened or read from disk.
    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog document is structurally malformed (e.g. no header line).
    #[error("Malformed catalog: {0}")]
    CatalogFormat(String),

    /// A required catalog column is absent from the header.
    #[error("Catalog is missing required column: {0}")]
    MissingColumn(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the launch-trends crates.
pub type Result<T> = std::result::Result<T, LaunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_granularity() {
        let err = LaunchError::InvalidGranularity("week".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Invalid period granularity: week"));
        assert!(msg.contains("month, quarter, or year"));
    }

    #[test]
    fn test_error_display_unknown_timezone() {
        let err = LaunchError::UnknownTimezone("Mars/Olympus".to_string());
        assert_eq!(err.to_string(), "Unknown timezone: Mars/Olympus");
    }

    #[test]
    fn test_error_display_catalog_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = LaunchError::CatalogRead {
            path: PathBuf::from("/data/Electron.tsv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read catalog"));
        assert!(msg.contains("/data/Electron.tsv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_catalog_format() {
        let err = LaunchError::CatalogFormat("empty file".to_string());
        assert_eq!(err.to_string(), "Malformed catalog: empty file");
    }

    #[test]
    fn test_error_display_missing_column() {
        let err = LaunchError::MissingColumn("Launch_Date".to_string());
        assert_eq!(
            err.to_string(),
            "Catalog is missing required column: Launch_Date"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LaunchError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }
}
