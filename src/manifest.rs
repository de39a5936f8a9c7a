use crate::aircraft::{Aircraft, AirbusA319, Boeing777};
use crate::error::FlightError;
use crate::flight::flight::{Flight, Passenger};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Flight(#[from] FlightError),
}

#[derive(Deserialize)]
#[serde(tag = "model")]
pub enum AircraftSpec {
    #[serde(rename = "A319")]
    AirbusA319 { registration: String },
    #[serde(rename = "B777")]
    Boeing777 { registration: String },
}

impl AircraftSpec {
    pub fn build(self) -> Box<dyn Aircraft> {
        match self {
            AircraftSpec::AirbusA319 { registration } => Box::new(AirbusA319::new(registration)),
            AircraftSpec::Boeing777 { registration } => Box::new(Boeing777::new(registration)),
        }
    }
}

#[derive(Deserialize)]
struct Boarding {
    seat: String,
    name: Passenger,
}

#[derive(Deserialize)]
struct RawManifest {
    number: String,
    aircraft: AircraftSpec,
    #[serde(default)]
    passengers: Vec<Boarding>,
}

/// Boots a Flight from a JSON boarding manifest: flight number, aircraft
/// variant, and any passengers already checked in.
pub fn load_from_file(path: &str) -> Result<Flight, ManifestError> {
    let data = std::fs::read_to_string(path)?;
    let raw: RawManifest = serde_json::from_str(&data)?;

    let mut flight = Flight::new(raw.number, raw.aircraft.build())?;
    for Boarding { seat, name } in raw.passengers {
        flight.allocate_seat(&seat, name)?;
    }
    Ok(flight)
}
