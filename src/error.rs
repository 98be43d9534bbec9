// Error types shared by the catalog, the builder and the booking store
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotelError {
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Category unavailable: {0}")]
    CategoryUnavailable(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HotelError>;
