use crate::aircraft::{Aircraft, AirbusA319, Boeing777};
use crate::flight::flight::{Flight, Passenger};
use proptest::prelude::*;

pub fn a319() -> Box<dyn Aircraft> {
    Box::new(AirbusA319::new("G-EUPT"))
}

pub fn b777() -> Box<dyn Aircraft> {
    Box::new(Boeing777::new("F-GSPS"))
}

pub fn flight() -> Flight {
    Flight::new("AI900", a319()).expect("valid flight number")
}

pub fn pax(name: &str) -> Passenger {
    Passenger::from(name)
}

pub fn boarded(flight: &Flight) -> Vec<(Passenger, String)> {
    flight.passenger_seats().collect()
}

pub fn arb_flight_number() -> impl Strategy<Value = String> {
    ("[A-Z]{2}", 0..=9999u32).prop_map(|(code, route)| format!("{code}{route}"))
}

/// Distinct seats in rows 1-13 of an A319, leaving row 14 free as a
/// relocation target.
pub fn arb_seats() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(
        (1..=13u32, prop::sample::select(vec!['A', 'B', 'C', 'D', 'E', 'F'])),
        1..20,
    )
    .prop_map(|set| {
        set.into_iter()
            .map(|(row, letter)| format!("{row}{letter}"))
            .collect()
    })
}
