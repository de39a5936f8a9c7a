use std::ops::RangeInclusive;

/// Seat grid of one aircraft type: 1-indexed rows and the letters
/// present in every row.
#[derive(Clone, Debug, PartialEq)]
pub struct SeatingPlan {
    pub rows: RangeInclusive<u32>,
    pub letters: &'static str,
}

impl SeatingPlan {
    pub fn num_seats(&self) -> usize {
        self.rows.clone().count() * self.letters.chars().count()
    }
}

pub trait Aircraft {
    fn registration(&self) -> &str;
    fn model(&self) -> &str;
    fn seating_plan(&self) -> SeatingPlan;

    fn num_seats(&self) -> usize {
        self.seating_plan().num_seats()
    }
}

pub struct AirbusA319 {
    registration: String,
}

impl AirbusA319 {
    pub fn new(registration: impl Into<String>) -> AirbusA319 {
        AirbusA319 {
            registration: registration.into(),
        }
    }
}

impl Aircraft for AirbusA319 {
    fn registration(&self) -> &str {
        &self.registration
    }

    fn model(&self) -> &str {
        "Airbus A319"
    }

    fn seating_plan(&self) -> SeatingPlan {
        SeatingPlan {
            rows: 1..=14,
            letters: "ABCDEF",
        }
    }
}

pub struct Boeing777 {
    registration: String,
}

impl Boeing777 {
    pub fn new(registration: impl Into<String>) -> Boeing777 {
        Boeing777 {
            registration: registration.into(),
        }
    }
}

impl Aircraft for Boeing777 {
    fn registration(&self) -> &str {
        &self.registration
    }

    fn model(&self) -> &str {
        "Boeing 777"
    }

    fn seating_plan(&self) -> SeatingPlan {
        SeatingPlan {
            rows: 1..=9,
            letters: "ABCDE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a319_plan() {
        let ac = AirbusA319::new("G-EUPT");
        assert_eq!(
            ac.seating_plan(),
            SeatingPlan {
                rows: 1..=14,
                letters: "ABCDEF"
            }
        );
        assert_eq!(ac.num_seats(), 84);
        assert_eq!(ac.model(), "Airbus A319");
        assert_eq!(ac.registration(), "G-EUPT");
    }

    #[test]
    fn test_b777_plan() {
        let ac = Boeing777::new("F-GSPS");
        assert_eq!(
            ac.seating_plan(),
            SeatingPlan {
                rows: 1..=9,
                letters: "ABCDE"
            }
        );
        assert_eq!(ac.num_seats(), 45);
        assert_eq!(ac.model(), "Boeing 777");
    }
}
