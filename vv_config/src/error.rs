use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing {format} vendor configuration: {message}")]
    Parse { format: &'static str, message: String },

    #[error("Unsupported vendor configuration format: {0:?}")]
    UnsupportedFormat(String),

    #[error("Vendor variable {namespace}.{key} must be a string, number or bool")]
    InvalidValue { namespace: String, key: String },

    #[error("{0} must be an object")]
    NotAnObject(String),
}
