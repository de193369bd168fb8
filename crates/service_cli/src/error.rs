//! Error types for CLI operations.
//!
//! Wraps the error types of the layers below so every command can use
//! `?` and report one coherent failure to the terminal.

use thiserror::Error;

/// CLI operation errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file named on the command line does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A command-line argument carried an unsupported value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration file could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// A market or contract value failed validation.
    #[error("Data error: {0}")]
    Data(#[from] vol_core::types::DataError),

    /// An input file could not be loaded.
    #[error("Load error: {0}")]
    Load(#[from] adapter_csv::LoadError),

    /// A model component could not be constructed.
    #[error("Model error: {0}")]
    Model(#[from] vol_models::ModelError),

    /// A strategy component could not be constructed.
    #[error("Strategy error: {0}")]
    Strategy(#[from] vol_strategy::StrategyError),

    /// Analysis results could not be serialised.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = CliError::FileNotFound("data/market.csv".to_string());
        assert_eq!(format!("{}", err), "File not found: data/market.csv");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("Unknown format: yaml".to_string());
        assert_eq!(format!("{}", err), "Invalid argument: Unknown format: yaml");
    }

    #[test]
    fn test_from_load_error() {
        let err = CliError::from(adapter_csv::LoadError::Empty {
            path: "prices.csv".to_string(),
        });
        assert!(matches!(err, CliError::Load(_)));
        assert!(format!("{}", err).contains("prices.csv"));
    }

    #[test]
    fn test_from_model_error() {
        let err = CliError::from(vol_models::ModelError::InvalidTolerance { tolerance: 0.0 });
        assert!(matches!(err, CliError::Model(_)));
    }

    #[test]
    fn test_from_strategy_error() {
        let err = CliError::from(vol_strategy::StrategyError::InvalidCapital {
            total_capital: 0.0,
        });
        assert!(matches!(err, CliError::Strategy(_)));
    }

    #[test]
    fn test_result_alias() {
        fn produces() -> Result<u32> {
            Ok(7)
        }
        assert_eq!(produces().unwrap(), 7);
    }
}
