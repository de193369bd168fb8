//! Error types for CSV loading operations.
//!
//! This module provides:
//! - `LoadError`: Errors raised while reading and parsing input files

use thiserror::Error;

/// CSV loading errors.
///
/// I/O and CSV stream failures are fatal and wrap their sources. Rows
/// that fail to parse in the price or option loaders are skipped with a
/// warning instead of raising `InvalidRecord`; that variant is reserved
/// for files where a single record carries the whole payload, such as
/// the market snapshot.
///
/// # Variants
/// - `Io`: Underlying file could not be read
/// - `Csv`: CSV stream could not be decoded
/// - `Empty`: File yielded no usable records
/// - `InvalidRecord`: A required record could not be parsed
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV stream could not be decoded.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File yielded no usable records.
    #[error("No usable records in {path}")]
    Empty {
        /// Path of the offending file
        path: String,
    },

    /// A required record could not be parsed.
    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord {
        /// 1-based line number within the file
        line: u64,
        /// What made the record unusable
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_display() {
        let err = LoadError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing file",
        ));
        assert_eq!(format!("{}", err), "I/O error: missing file");
    }

    #[test]
    fn test_empty_display() {
        let err = LoadError::Empty {
            path: "data/prices.csv".to_string(),
        };
        assert_eq!(format!("{}", err), "No usable records in data/prices.csv");
    }

    #[test]
    fn test_invalid_record_display() {
        let err = LoadError::InvalidRecord {
            line: 2,
            reason: "invalid spot_price 'abc'".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid record at line 2: invalid spot_price 'abc'"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = LoadError::Empty {
            path: "m.csv".to_string(),
        };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_io_source_preserved() {
        let err = LoadError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "locked",
        ));
        assert!(std::error::Error::source(&err).is_some());
    }
}
