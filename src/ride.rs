use crate::customer::CustomerId;
use crate::driver::DriverId;
use crate::fare::{RideType, format_fare};
use std::fmt;
use std::fmt::Formatter;

/// A confirmed ride. Built only once a driver has been assigned, never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    pub customer: CustomerId,
    pub driver: DriverId,
    pub pickup: String,
    pub dropoff: String,
    pub distance: f64,
    pub ride_type: RideType,
    pub fare: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingResult {
    Confirmed(Ride),
    Unavailable,
}

impl BookingResult {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingResult::Confirmed(_))
    }
}

impl fmt::Display for BookingResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BookingResult::Confirmed(ride) => {
                write!(f, "Ride Fare: {}, Driver: {}", format_fare(ride.fare), ride.driver)
            }
            BookingResult::Unavailable => write!(f, "No drivers available."),
        }
    }
}
