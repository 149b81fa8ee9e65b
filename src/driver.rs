use crate::error::BookingError;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;
use tabled::Tabled;

pub type DriverId = Arc<str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStatus {
    Available,
    Occupied,
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DriverStatus::Available => write!(f, "available"),
            DriverStatus::Occupied => write!(f, "occupied"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct Driver {
    pub name: DriverId,
    status: DriverStatus,
}

impl Driver {
    pub fn new(name: &str) -> Result<Driver, BookingError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BookingError::invalid_input("driver name must not be blank"));
        }
        Ok(Driver {
            name: Arc::from(name),
            status: DriverStatus::Available,
        })
    }

    pub fn status(&self) -> DriverStatus {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == DriverStatus::Available
    }

    pub fn mark_occupied(&mut self) -> Result<(), BookingError> {
        self.transition(DriverStatus::Available, DriverStatus::Occupied)
    }

    pub fn mark_available(&mut self) -> Result<(), BookingError> {
        self.transition(DriverStatus::Occupied, DriverStatus::Available)
    }

    fn transition(&mut self, from: DriverStatus, to: DriverStatus) -> Result<(), BookingError> {
        if self.status != from {
            return Err(BookingError::InvalidState {
                driver: self.name.clone(),
                status: self.status,
            });
        }
        self.status = to;
        Ok(())
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
