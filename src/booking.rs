use crate::customer::Customer;
use crate::dispatch::Dispatcher;
use crate::error::BookingError;
use crate::fare::{RideType, estimate_fare};
use crate::ride::{BookingResult, Ride};
use log::{debug, info};


pub struct BookingService {
    dispatcher: Dispatcher,
}

impl BookingService {
    pub fn new(dispatcher: Dispatcher) -> BookingService {
        BookingService { dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    pub fn estimate_fare(&self, ride_type: RideType, distance: f64) -> Result<f64, BookingError> {
        estimate_fare(ride_type, distance)
    }

    /// Prices the ride, then hands it to the first available driver.
    ///
    /// Invalid input fails before the roster is touched. A confirmed booking flips exactly one
    /// driver to occupied; `Unavailable` leaves the roster as it was.
    pub fn request_ride(
        &mut self,
        customer: &Customer,
        pickup: &str,
        dropoff: &str,
        distance: f64,
        ride_type: RideType,
    ) -> Result<BookingResult, BookingError> {
        let fare = estimate_fare(ride_type, distance)?;
        debug!(
            "{} requested {} ride {} -> {} ({} units), fare {}",
            customer, ride_type, pickup, dropoff, distance, fare
        );

        let Some(driver) = self.dispatcher.assign_driver() else {
            info!("No driver available for {} ({} -> {})", customer, pickup, dropoff);
            return Ok(BookingResult::Unavailable);
        };
        driver.mark_occupied()?;

        let ride = Ride {
            customer: customer.name.clone(),
            driver: driver.name.clone(),
            pickup: pickup.to_string(),
            dropoff: dropoff.to_string(),
            distance,
            ride_type,
            fare,
        };
        info!(
            "Driver {} assigned to {}: {} -> {}, {} units {}",
            ride.driver, ride.customer, ride.pickup, ride.dropoff, ride.distance, ride.ride_type
        );
        Ok(BookingResult::Confirmed(ride))
    }
}
