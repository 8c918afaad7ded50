use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FacilityType {
    #[serde(rename = "PHC")]
    Phc,
    #[serde(rename = "CHC")]
    Chc,
    Hospital,
    #[serde(rename = "Jan Aushadhi")]
    JanAushadhi,
}

impl FacilityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityType::Phc => "PHC",
            FacilityType::Chc => "CHC",
            FacilityType::Hospital => "Hospital",
            FacilityType::JanAushadhi => "Jan Aushadhi",
        }
    }
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacilityType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PHC" => Ok(FacilityType::Phc),
            "CHC" => Ok(FacilityType::Chc),
            "Hospital" => Ok(FacilityType::Hospital),
            "Jan Aushadhi" => Ok(FacilityType::JanAushadhi),
            other => Err(CoreError::InvalidFacilityType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Facility {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: FacilityType,
    pub address: String,
    pub village: String,
    pub district: String,
    pub state: String,
    pub coordinates: Coordinates,
    pub phone: String,
    pub operating_hours: String,
    pub services: Vec<String>,
    /// Kilometres from the query origin. Only set on search results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Fetched from the live geodata source rather than the static directory.
    #[serde(default)]
    pub is_live: bool,
}
