use crate::booking::BookingService;
use crate::customer::{Customer, CustomerId};
use crate::dispatch::Dispatcher;
use crate::driver::Driver;
use crate::error::BookingError;
use crate::fare::RideType;
use crate::ride::BookingResult;
use crate::scenario::{RideRequest, Scenario};
use std::collections::HashMap;

/// The booking service together with the customers known to it.
pub struct Session {
    pub service: BookingService,
    customers: HashMap<CustomerId, Customer>,
}

impl Session {
    pub fn new(dispatcher: Dispatcher) -> Session {
        Session {
            service: BookingService::new(dispatcher),
            customers: HashMap::new(),
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Result<Session, BookingError> {
        let drivers = scenario
            .drivers
            .iter()
            .map(|name| Driver::new(name))
            .collect::<Result<Vec<_>, _>>()?;
        let mut session = Session::new(Dispatcher::with_drivers(drivers)?);
        for name in &scenario.customers {
            session.add_customer(name)?;
        }
        Ok(session)
    }

    pub fn add_driver(&mut self, name: &str) -> Result<&Driver, BookingError> {
        let driver = Driver::new(name)?;
        let id = driver.name.clone();
        let dispatcher = self.service.dispatcher_mut();
        dispatcher.register(driver)?;
        dispatcher
            .get(&id)
            .ok_or_else(|| BookingError::invalid_input(format!("unknown driver: {}", id)))
    }

    /// Registering the same customer twice hands back the existing record.
    pub fn add_customer(&mut self, name: &str) -> Result<&Customer, BookingError> {
        let customer = Customer::new(name)?;
        Ok(self
            .customers
            .entry(customer.name.clone())
            .or_insert(customer))
    }

    pub fn book(&mut self, request: &RideRequest) -> Result<BookingResult, BookingError> {
        let ride_type: RideType = request.ride_type.parse()?;
        let customer = self
            .customers
            .get(request.customer.trim())
            .ok_or_else(|| {
                BookingError::invalid_input(format!("unknown customer: {}", request.customer))
            })?;
        self.service.request_ride(
            customer,
            &request.pickup,
            &request.dropoff,
            request.distance,
            ride_type,
        )
    }

    pub fn replay(&mut self, requests: &[RideRequest]) -> Vec<Result<BookingResult, BookingError>> {
        requests.iter().map(|r| self.book(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::DriverStatus;

    #[test]
    fn test_demo_scenario_replay() {
        let scenario = Scenario::demo();
        let mut session = Session::from_scenario(&scenario).unwrap();

        let reports = session
            .replay(&scenario.requests)
            .into_iter()
            .map(|r| r.unwrap().to_string())
            .collect::<Vec<_>>();

        assert_eq!(
            vec![
                "Ride Fare: $75, Driver: Alice",
                "Ride Fare: $100, Driver: Bob",
                "No drivers available.",
            ],
            reports
        );
        assert_eq!(0, session.service.dispatcher().available_count());
    }

    #[test]
    fn test_scenario_from_json() {
        let scenario = Scenario::from_json(
            r#"{
                "drivers": ["Alice"],
                "customers": ["John"],
                "requests": [
                    {"customer": "John", "pickup": "Airport", "dropoff": "Downtown", "distance": 15, "ride_type": "economy"}
                ]
            }"#,
        )
        .unwrap();
        let mut session = Session::from_scenario(&scenario).unwrap();

        let result = session.book(&scenario.requests[0]).unwrap();

        assert_eq!("Ride Fare: $75, Driver: Alice", result.to_string());
    }

    #[test]
    fn test_requests_default_to_empty() {
        let scenario = Scenario::from_json(r#"{"drivers": [], "customers": []}"#).unwrap();
        assert!(scenario.requests.is_empty());
    }

    #[test]
    fn test_duplicate_driver_rejected() {
        let scenario = Scenario {
            drivers: vec!["Alice".to_string(), "Alice".to_string()],
            customers: vec![],
            requests: vec![],
        };
        assert!(matches!(
            Session::from_scenario(&scenario),
            Err(BookingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unknown_customer_leaves_roster_untouched() {
        let mut session = Session::new(Dispatcher::new());
        session.add_driver("Alice").unwrap();

        let result = session.book(&RideRequest::new("Nobody", "A", "B", 3.0, "Pool"));

        assert!(matches!(result, Err(BookingError::InvalidInput(_))));
        assert_eq!(
            DriverStatus::Available,
            session.service.dispatcher().get("Alice").unwrap().status()
        );
    }

    #[test]
    fn test_unknown_ride_type_fails_fast() {
        let mut session = Session::new(Dispatcher::new());
        session.add_driver("Alice").unwrap();
        session.add_customer("John").unwrap();

        let result = session.book(&RideRequest::new("John", "A", "B", 3.0, "Helicopter"));

        assert!(matches!(result, Err(BookingError::InvalidInput(_))));
        assert_eq!(1, session.service.dispatcher().available_count());
    }

    #[test]
    fn test_add_customer_twice_keeps_one_record() {
        let mut session = Session::new(Dispatcher::new());
        session.add_customer("John").unwrap();
        session.add_customer(" John ").unwrap();
        assert_eq!(1, session.customers.len());
        assert!(session.customers.contains_key("John"));
    }
}
