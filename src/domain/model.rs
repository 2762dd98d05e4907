use crate::utils::error::ContractError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RSVP status for one invited party, as returned by the backend lookup.
/// Read-only on the client side; submitting an RSVP is a separate concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRsvpResponse {
    pub first_name: String,
    pub last_name: String,
    pub plus_one_enabled: bool,
}

/// Places listing. Order is presentation order as curated by the site
/// owner, not sorted by any field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetAllPlacesResponse {
    pub places: Vec<PlaceData>,
}

/// One point of interest for guests. The optional fields serialize as
/// explicit `null`; deserialization also tolerates a missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceData {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub distance_from_venue: Option<f64>,
    #[serde(default)]
    pub distance_from_airport: Option<f64>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub category: PlaceCategory,
}

/// Closed category set. Wire representation is the literal tag name;
/// unknown tags are rejected rather than coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaceCategory {
    Lodging,
    Restaurant,
    Entertainment,
    Nightlife,
    CarRental,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 5] = [
        PlaceCategory::Lodging,
        PlaceCategory::Restaurant,
        PlaceCategory::Entertainment,
        PlaceCategory::Nightlife,
        PlaceCategory::CarRental,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceCategory::Lodging => "LODGING",
            PlaceCategory::Restaurant => "RESTAURANT",
            PlaceCategory::Entertainment => "ENTERTAINMENT",
            PlaceCategory::Nightlife => "NIGHTLIFE",
            PlaceCategory::CarRental => "CAR_RENTAL",
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaceCategory {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LODGING" => Ok(PlaceCategory::Lodging),
            "RESTAURANT" => Ok(PlaceCategory::Restaurant),
            "ENTERTAINMENT" => Ok(PlaceCategory::Entertainment),
            "NIGHTLIFE" => Ok(PlaceCategory::Nightlife),
            "CAR_RENTAL" => Ok(PlaceCategory::CarRental),
            other => Err(ContractError::SchemaViolation {
                field: "category".to_string(),
                reason: format!(
                    "unknown category '{}', expected one of: {}",
                    other,
                    PlaceCategory::ALL.map(|c| c.as_str()).join(", ")
                ),
            }),
        }
    }
}
