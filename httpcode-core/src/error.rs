use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("Invalid HTTP code '{0}'. Please provide a numeric code between 100 and 599.")]
    InvalidCode(String),

    #[error("HTTP code '{0}' not found.")]
    CodeNotFound(String),

    #[error("Failed to save {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse HTML or extract HTTP status codes: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StatusError>;
