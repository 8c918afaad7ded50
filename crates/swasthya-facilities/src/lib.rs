//! swasthya-facilities
//!
//! Health facility locator: the static facility directory, great-circle
//! distance, nearest-first search, and the optional live lookup against
//! the OpenStreetMap Overpass service.

pub mod directory;
pub mod error;
pub mod geo;
pub mod overpass;
pub mod search;

pub use directory::directory;
pub use geo::haversine_km;
pub use search::{nearest, nearest_with_live, parse_type_filter};
