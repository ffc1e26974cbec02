use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid grid geometry: {0}")]
    InvalidGridGeometry(String),

    #[error("Invalid target size: {0} (must be a positive integer)")]
    InvalidTargetSize(i64),

    #[error("Channel mismatch: {0}")]
    ChannelMismatch(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
