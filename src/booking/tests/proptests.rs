use crate::booking::tests::utils::{arb_ride_type, customer, service};
use crate::error::BookingError;
use crate::fare::estimate_fare;
use crate::ride::BookingResult;
use proptest::prelude::*;
use proptest::proptest;

proptest! {
    #[test]
    fn test_fare_is_distance_times_multiplier(
        ride_type in arb_ride_type(),
        distance in 0.001..10_000.0f64,
    ) {
        let fare = estimate_fare(ride_type, distance).unwrap();
        prop_assert_eq!(distance * f64::from(ride_type.multiplier()), fare);
        prop_assert_eq!(Ok(fare), estimate_fare(ride_type, distance));
    }

    #[test]
    fn test_non_positive_distance_rejected(
        ride_type in arb_ride_type(),
        distance in -10_000.0..=0.0f64,
    ) {
        prop_assert!(matches!(
            estimate_fare(ride_type, distance),
            Err(BookingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_drivers_fill_up_in_registration_order(
        roster_size in 0..8usize,
        requests in prop::collection::vec((arb_ride_type(), 1..100u32), 0..12),
    ) {
        let names = (0..roster_size).map(|i| format!("DRIVER_{}", i)).collect::<Vec<_>>();
        let mut service = service(&names.iter().map(String::as_str).collect::<Vec<_>>());
        let john = customer("John");

        for (i, (ride_type, distance)) in requests.iter().enumerate() {
            let result = service
                .request_ride(&john, "A", "B", f64::from(*distance), *ride_type)
                .unwrap();
            match result {
                BookingResult::Confirmed(ride) => {
                    prop_assert!(i < roster_size);
                    prop_assert_eq!(names[i].as_str(), ride.driver.as_ref());
                    prop_assert_eq!(f64::from(*distance * ride_type.multiplier()), ride.fare);
                }
                BookingResult::Unavailable => {
                    prop_assert!(i >= roster_size);
                }
            }
        }

        let booked = requests.len().min(roster_size);
        prop_assert_eq!(roster_size - booked, service.dispatcher().available_count());
    }
}
