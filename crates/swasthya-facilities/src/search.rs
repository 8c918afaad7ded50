use swasthya_core::error::CoreError;
use swasthya_core::models::facility::{Coordinates, Facility, FacilityType};
use tracing::warn;

use crate::directory::directory;
use crate::geo::haversine_km;
use crate::overpass::OverpassClient;

/// Parse a facility type filter. Missing, blank or `all` means no filter.
pub fn parse_type_filter(raw: Option<&str>) -> Result<Option<FacilityType>, CoreError> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(other) => other.parse().map(Some),
    }
}

/// Facilities nearest `origin` first.
///
/// `live` results come first in the input order, followed by the static
/// directory; the sort is stable, so equal distances keep that order. The
/// two sources are not deduplicated. Live entries keep the distance they
/// arrived with.
pub fn nearest(
    origin: Coordinates,
    filter: Option<FacilityType>,
    live: Vec<Facility>,
) -> Vec<Facility> {
    let mut results: Vec<Facility> = live
        .into_iter()
        .chain(directory().iter().cloned())
        .filter(|f| filter.is_none_or(|t| f.facility_type == t))
        .map(|mut f| {
            if f.distance.is_none() {
                f.distance = Some(haversine_km(origin, f.coordinates));
            }
            f
        })
        .collect();

    results.sort_by(|a, b| {
        let a = a.distance.unwrap_or(f64::MAX);
        let b = b.distance.unwrap_or(f64::MAX);
        a.total_cmp(&b)
    });

    results
}

/// [`nearest`] merged with a live lookup. A failed or unconfigured live
/// lookup degrades to the static directory alone.
pub async fn nearest_with_live(
    client: Option<&OverpassClient>,
    origin: Coordinates,
    filter: Option<FacilityType>,
    radius_m: u32,
) -> Vec<Facility> {
    let live = match client {
        Some(client) => match client.fetch_nearby(origin, radius_m).await {
            Ok(live) => live,
            Err(e) => {
                warn!(error = %e, "live facility lookup failed, using static directory");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    nearest(origin, filter, live)
}
