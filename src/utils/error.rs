use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input file '{path}' not found")]
    InputNotFoundError { path: String },

    #[error("Could not decode JSON from '{path}': {reason}")]
    InputParseError { path: String, reason: String },

    #[error("Expected a JSON list at the root of '{path}', but got {found}")]
    UnexpectedShapeError { path: String, found: String },

    #[error("Could not write to output file '{path}': {reason}")]
    OutputWriteError { path: String, reason: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;
