use crate::error::BookingError;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RideType {
    Economy,
    Luxury,
    Pool,
}

impl RideType {
    pub const ALL: [RideType; 3] = [RideType::Economy, RideType::Luxury, RideType::Pool];

    /// Fare per distance unit.
    pub const fn multiplier(self) -> u32 {
        match self {
            RideType::Economy => 5,
            RideType::Luxury => 10,
            RideType::Pool => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RideType::Economy => "Economy",
            RideType::Luxury => "Luxury",
            RideType::Pool => "Pool",
        }
    }
}

impl fmt::Display for RideType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RideType {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RideType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BookingError::invalid_input(format!("unknown ride type: {}", s)))
    }
}

/// Computes `distance * multiplier`. Distance has to be a finite, strictly positive number and
/// the fare itself has to stay finite.
pub fn estimate_fare(ride_type: RideType, distance: f64) -> Result<f64, BookingError> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(BookingError::invalid_input(format!(
            "distance must be positive, got {}",
            distance
        )));
    }
    let fare = distance * f64::from(ride_type.multiplier());
    if !fare.is_finite() {
        return Err(BookingError::invalid_input(format!(
            "distance {} is too large to price",
            distance
        )));
    }
    Ok(fare)
}

/// Whole amounts print without decimals (`$75`), anything else rounded to cents (`$7.50`).
pub fn format_fare(fare: f64) -> String {
    if fare.fract() == 0.0 {
        format!("${:.0}", fare)
    } else {
        format!("${:.2}", fare)
    }
}
