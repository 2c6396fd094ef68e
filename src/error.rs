use thiserror::Error;

pub type BloomResult<T> = std::result::Result<T, BloomError>;

#[derive(Error, Debug)]
pub enum BloomError {
    #[error("Capacity must be greater than 0")]
    InvalidCapacity,

    #[error("False positive rate must be between 0 and 1 (exclusive), got {rate}")]
    InvalidErrorRate { rate: f64 },

    #[error("Failed to hash item: {0}")]
    HashFailure(#[from] std::io::Error),

    #[error("Index out of range: {index} >= {size}")]
    IndexOutOfRange { index: usize, size: usize },
}
