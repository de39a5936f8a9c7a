use thiserror::Error;

/// Validation failures surfaced by `Flight`. Each carries the offending
/// value; none of them is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlightError {
    #[error("no airline code in '{0}'")]
    MissingAirlineCode(String),

    #[error("invalid airline code '{0}'")]
    InvalidAirlineCode(String),

    #[error("invalid route number '{0}'")]
    InvalidRouteNumber(String),

    #[error("invalid seat letter '{0}'")]
    InvalidSeatLetter(String),

    #[error("invalid row number '{0}'")]
    InvalidRowNumber(String),

    #[error("seat {0} already occupied")]
    SeatOccupied(String),

    #[error("no passenger to relocate in seat {0}")]
    SeatEmpty(String),
}
