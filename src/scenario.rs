use serde::Deserialize;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Cannot read scenario: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed scenario: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RideRequest {
    pub customer: String,
    pub pickup: String,
    pub dropoff: String,
    pub distance: f64,
    /// Ride type name, matched case-insensitively.
    pub ride_type: String,
}

impl RideRequest {
    pub fn new(customer: &str, pickup: &str, dropoff: &str, distance: f64, ride_type: &str) -> Self {
        RideRequest {
            customer: customer.to_string(),
            pickup: pickup.to_string(),
            dropoff: dropoff.to_string(),
            distance,
            ride_type: ride_type.to_string(),
        }
    }
}

/// Roster, customers and the requests to replay on start-up.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    pub drivers: Vec<String>,
    pub customers: Vec<String>,
    #[serde(default)]
    pub requests: Vec<RideRequest>,
}

impl Scenario {
    pub fn load_from_file(path: &str) -> Result<Self, ScenarioError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn demo() -> Scenario {
        Scenario {
            drivers: vec!["Alice".to_string(), "Bob".to_string()],
            customers: vec!["John".to_string(), "Rebecca".to_string(), "Mike".to_string()],
            requests: vec![
                RideRequest::new("John", "Airport", "Downtown", 15.0, "Economy"),
                RideRequest::new("Rebecca", "College", "Downtown", 10.0, "Luxury"),
                RideRequest::new("Mike", "Downtown", "Shopping Mall", 5.0, "Pool"),
            ],
        }
    }
}
