use crate::booking::BookingService;
use crate::customer::Customer;
use crate::dispatch::Dispatcher;
use crate::driver::Driver;
use crate::fare::RideType;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;

pub fn driver(name: &str) -> Driver {
    Driver::new(name).unwrap()
}

pub fn customer(name: &str) -> Customer {
    Customer::new(name).unwrap()
}

pub fn dispatcher(names: &[&str]) -> Dispatcher {
    Dispatcher::with_drivers(names.iter().map(|n| driver(n)).collect()).unwrap()
}

pub fn service(names: &[&str]) -> BookingService {
    BookingService::new(dispatcher(names))
}

pub fn occupied(service: &BookingService) -> Vec<&str> {
    service
        .dispatcher()
        .drivers()
        .iter()
        .filter(|d| !d.is_available())
        .map(|d| d.name.as_ref())
        .collect()
}

pub fn arb_ride_type() -> impl Strategy<Value = RideType> {
    prop_oneof![
        Just(RideType::Economy),
        Just(RideType::Luxury),
        Just(RideType::Pool),
    ]
}
