use thiserror::Error;

use crate::schema::DataType;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid sort specification: {0}")]
    Spec(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field '{field}' of type {data_type:?} does not support ordering")]
    NotOrderable { field: String, data_type: DataType },
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Spec(e.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Spec(e.to_string())
    }
}
