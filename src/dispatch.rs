use crate::driver::{Driver, DriverId};
use crate::error::BookingError;
use log::debug;
use std::collections::HashMap;

/// Owns the roster. Drivers are kept in registration order, which decides who gets picked first.
#[derive(Debug, Default)]
pub struct Dispatcher {
    drivers: Vec<Driver>,
    drivers_index: HashMap<DriverId, usize>,
}

impl Dispatcher {
    pub fn new() -> Dispatcher {
        Dispatcher::default()
    }

    pub fn with_drivers(drivers: Vec<Driver>) -> Result<Dispatcher, BookingError> {
        let mut dispatcher = Dispatcher::new();
        for driver in drivers {
            dispatcher.register(driver)?;
        }
        Ok(dispatcher)
    }

    pub fn register(&mut self, driver: Driver) -> Result<(), BookingError> {
        if self.drivers_index.contains_key(&driver.name) {
            return Err(BookingError::invalid_input(format!(
                "driver {} is already registered",
                driver.name
            )));
        }
        debug!("Registered driver {} at position {}", driver.name, self.drivers.len());
        self.drivers_index.insert(driver.name.clone(), self.drivers.len());
        self.drivers.push(driver);
        Ok(())
    }

    /// First available driver in registration order. The caller is responsible for marking it
    /// occupied; nothing changes here.
    pub fn assign_driver(&mut self) -> Option<&mut Driver> {
        self.drivers.iter_mut().find(|d| d.is_available())
    }

    pub fn release(&mut self, name: &str) -> Result<(), BookingError> {
        let driver = self
            .get_mut(name)
            .ok_or_else(|| BookingError::invalid_input(format!("unknown driver: {}", name)))?;
        driver.mark_available()?;
        debug!("Driver {} is available again", name);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Driver> {
        self.drivers_index.get(name).map(|&i| &self.drivers[i])
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Driver> {
        self.drivers_index
            .get(name)
            .copied()
            .map(move |i| &mut self.drivers[i])
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn available_count(&self) -> usize {
        self.drivers.iter().filter(|d| d.is_available()).count()
    }
}
