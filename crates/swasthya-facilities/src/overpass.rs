//! Live facility lookup against the OpenStreetMap Overpass API.
//!
//! Raw elements are validated one at a time against [`OverpassElement`];
//! anything that does not describe a named, located node is rejected
//! rather than patched up with placeholder values.

use std::collections::HashMap;

use serde::Deserialize;
use swasthya_core::models::facility::{Coordinates, Facility, FacilityType};
use thiserror::Error;
use tracing::{debug, info};

use crate::error::FacilityError;
use crate::geo::haversine_km;

pub const DEFAULT_URL: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_RADIUS_M: u32 = 5000;

/// Tag selectors for the healthcare points of interest we look for.
const SELECTORS: &[(&str, &str)] = &[
    ("amenity", "hospital"),
    ("amenity", "clinic"),
    ("amenity", "doctors"),
    ("amenity", "pharmacy"),
    ("healthcare", "hospital"),
    ("healthcare", "clinic"),
];

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<serde_json::Value>,
}

/// Schema for one Overpass element. `type` and `id` are required; the
/// rest are required only for conversion into a [`Facility`].
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: u64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
}

/// Why an element was left out of the live results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("element {0} is not a node")]
    NotANode(u64),

    #[error("element {0} has no coordinates")]
    MissingCoordinates(u64),

    #[error("element {0} has no tags")]
    MissingTags(u64),

    #[error("element {0} has no usable name")]
    Unnamed(u64),
}

pub struct OverpassClient {
    http: reqwest::Client,
    url: String,
}

impl OverpassClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Fetch named healthcare nodes within `radius_m` metres of `origin`,
    /// each with its distance from `origin` rounded to 0.1 km.
    pub async fn fetch_nearby(
        &self,
        origin: Coordinates,
        radius_m: u32,
    ) -> Result<Vec<Facility>, FacilityError> {
        let query = build_query(origin, radius_m);

        let response = self
            .http
            .post(&self.url)
            .form(&[("data", query.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FacilityError::Status {
                status: status.as_u16(),
            });
        }

        let body: OverpassResponse = response.json().await?;
        let total = body.elements.len();
        let facilities = parse_elements(body.elements, origin);

        info!(
            elements = total,
            facilities = facilities.len(),
            radius_m,
            "fetched live facilities"
        );

        Ok(facilities)
    }
}

/// Overpass QL selecting nodes and ways for every healthcare selector.
pub fn build_query(origin: Coordinates, radius_m: u32) -> String {
    let around = format!("(around:{radius_m},{},{})", origin.lat, origin.lng);
    let mut query = String::from("[out:json][timeout:25];\n(\n");
    for (key, value) in SELECTORS {
        for element in ["node", "way"] {
            query.push_str(&format!("  {element}[\"{key}\"=\"{value}\"]{around};\n"));
        }
    }
    query.push_str(");\nout body;\n>;\nout skel qt;\n");
    query
}

/// Validate raw elements and convert the acceptable ones.
pub fn parse_elements(elements: Vec<serde_json::Value>, origin: Coordinates) -> Vec<Facility> {
    elements
        .into_iter()
        .filter_map(|raw| match serde_json::from_value::<OverpassElement>(raw) {
            Ok(element) => Some(element),
            Err(e) => {
                debug!(error = %e, "rejecting malformed overpass element");
                None
            }
        })
        .filter_map(|element| match to_facility(&element, origin) {
            Ok(facility) => Some(facility),
            Err(rejection) => {
                debug!(%rejection, "rejecting overpass element");
                None
            }
        })
        .collect()
}

pub fn to_facility(element: &OverpassElement, origin: Coordinates) -> Result<Facility, Rejection> {
    if element.kind != "node" {
        return Err(Rejection::NotANode(element.id));
    }
    let (Some(lat), Some(lng)) = (element.lat, element.lon) else {
        return Err(Rejection::MissingCoordinates(element.id));
    };
    let tags = element
        .tags
        .as_ref()
        .ok_or(Rejection::MissingTags(element.id))?;
    let name = first_tag(tags, &["name", "name:en"]).ok_or(Rejection::Unnamed(element.id))?;

    let coordinates = Coordinates { lat, lng };
    let distance = (haversine_km(origin, coordinates) * 10.0).round() / 10.0;

    Ok(Facility {
        id: format!("osm-{}", element.id),
        name: name.to_string(),
        facility_type: infer_type(tags),
        address: address(tags),
        village: first_tag(tags, &["addr:city", "addr:suburb", "addr:village"])
            .unwrap_or_default()
            .to_string(),
        district: first_tag(tags, &["addr:district"]).unwrap_or_default().to_string(),
        state: first_tag(tags, &["addr:state"]).unwrap_or_default().to_string(),
        coordinates,
        phone: first_tag(tags, &["phone", "contact:phone"])
            .unwrap_or("Not available")
            .to_string(),
        operating_hours: first_tag(tags, &["opening_hours", "opening_hours:covid19"])
            .unwrap_or("24 Hours")
            .to_string(),
        services: services(tags),
        distance: Some(distance),
        is_live: true,
    })
}

/// Clinics and doctors map to PHC, pharmacies to Jan Aushadhi, the rest to
/// Hospital.
pub fn infer_type(tags: &HashMap<String, String>) -> FacilityType {
    let amenity = tag(tags, "amenity");
    if matches!(amenity, Some("clinic" | "doctors")) || tag(tags, "healthcare") == Some("clinic") {
        FacilityType::Phc
    } else if amenity == Some("pharmacy") {
        FacilityType::JanAushadhi
    } else {
        FacilityType::Hospital
    }
}

fn services(tags: &HashMap<String, String>) -> Vec<String> {
    let amenity = tag(tags, "amenity");
    let is_hospital = amenity == Some("hospital");
    let mut services = Vec::new();

    if tag(tags, "emergency") == Some("yes") || is_hospital {
        services.push("Emergency".to_string());
    }
    if tags.contains_key("healthcare") || matches!(amenity, Some("clinic" | "doctors")) {
        services.push("OPD".to_string());
    }
    if amenity == Some("pharmacy") {
        services.push("Medicines".to_string());
    }
    if let Some(specialities) = tag(tags, "healthcare:speciality") {
        services.extend(
            specialities
                .split(';')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
    }
    if is_hospital {
        services.push("Lab Tests".to_string());
        services.push("Surgery".to_string());
    }

    if services.is_empty() {
        services.push("General Healthcare".to_string());
    }
    services
}

fn address(tags: &HashMap<String, String>) -> String {
    if let Some(full) = tag(tags, "addr:full") {
        return full.to_string();
    }
    let street = format!(
        "{} {}",
        tag(tags, "addr:street").unwrap_or_default(),
        tag(tags, "addr:housenumber").unwrap_or_default()
    );
    let street = street.trim();
    if !street.is_empty() {
        return street.to_string();
    }
    tag(tags, "address")
        .unwrap_or("Address not available")
        .to_string()
}

/// A tag value, treating blank values as absent.
fn tag<'a>(tags: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    tags.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn first_tag<'a>(tags: &'a HashMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| tag(tags, key))
}
