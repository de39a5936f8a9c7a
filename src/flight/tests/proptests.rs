use crate::flight::flight::Flight;
use crate::flight::tests::utils::{a319, arb_flight_number, arb_seats, flight};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_valid_numbers_always_construct(number in arb_flight_number()) {
        prop_assert!(Flight::new(number.as_str(), a319()).is_ok());
    }

    #[test]
    fn test_allocation_bookkeeping(seats in arb_seats()) {
        let mut flight = flight();
        for (i, seat) in seats.iter().enumerate() {
            flight.allocate_seat(seat, format!("PAX_{i}").as_str()).unwrap();
        }

        prop_assert_eq!(flight.num_available_seats(), 84 - seats.len());
        prop_assert_eq!(flight.passenger_seats().count(), seats.len());
    }

    #[test]
    fn test_relocation_preserves_occupancy(seats in arb_seats()) {
        let mut flight = flight();
        for (i, seat) in seats.iter().enumerate() {
            flight.allocate_seat(seat, format!("PAX_{i}").as_str()).unwrap();
        }

        // seats are drawn from rows 1-13, so 14A is always free
        flight.relocate_passenger(&seats[0], "14A").unwrap();

        prop_assert_eq!(flight.num_available_seats(), 84 - seats.len());

        let boarded: Vec<(_, String)> = flight.passenger_seats().collect();
        prop_assert!(boarded.iter().all(|(_, seat)| *seat != seats[0]));
        prop_assert!(boarded.iter().any(
            |(passenger, seat)| seat == "14A" && passenger.as_ref() == "PAX_0"
        ));
    }
}
