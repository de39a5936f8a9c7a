use crate::aircraft::Aircraft;
use crate::error::FlightError;
use std::collections::HashMap;
use std::sync::Arc;

pub type Passenger = Arc<str>;

/// One flight's seat-occupancy state. The table is keyed by the rows and
/// letters of the aircraft's seating plan, built once at construction and
/// never resized; every mutation goes through allocate/relocate, which
/// validate fully before touching anything.
pub struct Flight {
    number: String,
    aircraft: Box<dyn Aircraft>,
    seating: HashMap<u32, HashMap<char, Option<Passenger>>>,
}

impl Flight {
    pub fn new(number: impl Into<String>, aircraft: Box<dyn Aircraft>) -> Result<Flight, FlightError> {
        let number = number.into();

        let code: Vec<char> = number.chars().take(2).collect();
        if code.len() < 2 || !code.iter().all(|c| c.is_alphabetic()) {
            return Err(FlightError::MissingAirlineCode(number));
        }
        if !code.iter().all(|c| c.is_uppercase()) {
            return Err(FlightError::InvalidAirlineCode(number));
        }

        let route: String = number.chars().skip(2).collect();
        let in_range = route.chars().all(|c| c.is_ascii_digit())
            && route.parse::<u32>().is_ok_and(|n| n <= 9999);
        if !in_range {
            return Err(FlightError::InvalidRouteNumber(number));
        }

        let plan = aircraft.seating_plan();
        let seating = plan
            .rows
            .clone()
            .map(|row| (row, plan.letters.chars().map(|letter| (letter, None)).collect()))
            .collect();

        Ok(Flight {
            number,
            aircraft,
            seating,
        })
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Two-letter code at the front of the flight number.
    pub fn airline(&self) -> &str {
        let end = self
            .number
            .char_indices()
            .nth(2)
            .map_or(self.number.len(), |(i, _)| i);
        &self.number[..end]
    }

    pub fn aircraft_model(&self) -> &str {
        self.aircraft.model()
    }

    pub fn registration(&self) -> &str {
        self.aircraft.registration()
    }

    pub fn num_seats(&self) -> usize {
        self.aircraft.num_seats()
    }

    /// Splits "12A" into (12, 'A') and validates both halves against the
    /// aircraft's plan, so an out-of-range row surfaces as InvalidRowNumber
    /// instead of a lookup panic downstream.
    fn parse_seat(&self, seat: &str) -> Result<(u32, char), FlightError> {
        let plan = self.aircraft.seating_plan();

        let mut chars = seat.chars();
        let letter = chars
            .next_back()
            .ok_or_else(|| FlightError::InvalidSeatLetter(seat.to_string()))?;
        if !plan.letters.contains(letter) {
            return Err(FlightError::InvalidSeatLetter(letter.to_string()));
        }

        let row_text = chars.as_str();
        let row = row_text
            .parse::<u32>()
            .map_err(|_| FlightError::InvalidRowNumber(row_text.to_string()))?;
        if !plan.rows.contains(&row) {
            return Err(FlightError::InvalidRowNumber(row_text.to_string()));
        }

        Ok((row, letter))
    }

    fn occupant(&self, row: u32, letter: char) -> &Option<Passenger> {
        &self.seating[&row][&letter]
    }

    fn occupant_mut(&mut self, row: u32, letter: char) -> &mut Option<Passenger> {
        self.seating
            .get_mut(&row)
            .and_then(|r| r.get_mut(&letter))
            .expect("seat was validated against the seating plan")
    }

    pub fn allocate_seat(
        &mut self,
        seat: &str,
        passenger: impl Into<Passenger>,
    ) -> Result<(), FlightError> {
        let (row, letter) = self.parse_seat(seat)?;
        if self.occupant(row, letter).is_some() {
            return Err(FlightError::SeatOccupied(seat.to_string()));
        }
        *self.occupant_mut(row, letter) = Some(passenger.into());
        Ok(())
    }

    /// Moves the occupant of `from_seat` into `to_seat`. Relocating a
    /// passenger onto their own seat fails with SeatOccupied, same as any
    /// other taken destination.
    pub fn relocate_passenger(&mut self, from_seat: &str, to_seat: &str) -> Result<(), FlightError> {
        let (from_row, from_letter) = self.parse_seat(from_seat)?;
        if self.occupant(from_row, from_letter).is_none() {
            return Err(FlightError::SeatEmpty(from_seat.to_string()));
        }

        let (to_row, to_letter) = self.parse_seat(to_seat)?;
        if self.occupant(to_row, to_letter).is_some() {
            return Err(FlightError::SeatOccupied(to_seat.to_string()));
        }

        let passenger = self.occupant_mut(from_row, from_letter).take();
        *self.occupant_mut(to_row, to_letter) = passenger;
        Ok(())
    }

    pub fn num_available_seats(&self) -> usize {
        self.seating
            .values()
            .flat_map(|row| row.values())
            .filter(|occupant| occupant.is_none())
            .count()
    }

    /// Occupied seats in ascending row order, plan-letter order within a row.
    pub fn passenger_seats(&self) -> impl Iterator<Item = (Passenger, String)> + '_ {
        let plan = self.aircraft.seating_plan();
        let letters = plan.letters;
        plan.rows.clone().flat_map(move |row| {
            letters.chars().filter_map(move |letter| {
                self.occupant(row, letter)
                    .as_ref()
                    .map(|passenger| (passenger.clone(), format!("{row}{letter}")))
            })
        })
    }

    /// Hands every occupied seat to `card_printer`, sorted by the
    /// (passenger, seat) pair under byte-wise str ordering, so names group
    /// case-sensitively (uppercase before lowercase) with seat as tiebreak.
    pub fn make_boarding_cards<F>(&self, mut card_printer: F)
    where
        F: FnMut(&str, &str, &str, &str),
    {
        let mut boarded: Vec<(Passenger, String)> = self.passenger_seats().collect();
        boarded.sort();
        for (passenger, seat) in &boarded {
            card_printer(passenger, seat, &self.number, self.aircraft.model());
        }
    }
}
