use std::io;
use thiserror::Error;

use domain::error::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Missing dependency: {message}")]
    DependencyMissing { message: String },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Decode error: {message}")]
    DecodeError { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type AppResult<T> = Result<T, AppError>;
