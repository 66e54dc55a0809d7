use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON configuration. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML configuration. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("No configuration file found in '{config_dir}'. Tried: {config_files}.")]
    ConfigNotFound { config_dir: String, config_files: String },

    /// The configuration parsed but holds values the helpers cannot use.
    #[error("Configuration validation error: {0}.")]
    ConfigValidation(String),

    /// An argument is outside the domain of the operation (zero step, ragged matrix, ...).
    #[error("Invalid argument: {0}.")]
    InvalidArgument(String),

    #[error("Division by zero: {0}.")]
    DivisionByZero(String),

    #[error("Arithmetic overflow: {0}.")]
    Overflow(String),

    /// Calendar arithmetic produced an instant chrono cannot represent.
    #[error("Date out of range: {0}.")]
    DateOutOfRange(String),
}

/// Convenience type alias for Results with garnish's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;
