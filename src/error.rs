use crate::driver::{DriverId, DriverStatus};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Driver {driver} is already {status}")]
    InvalidState { driver: DriverId, status: DriverStatus },
}

impl BookingError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        BookingError::InvalidInput(msg.into())
    }
}
