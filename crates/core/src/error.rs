use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid booking: start {start} is after end {end}")]
    InvalidBooking { start: i64, end: i64 },
}
