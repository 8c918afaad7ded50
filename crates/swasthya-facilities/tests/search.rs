use swasthya_core::models::facility::{Coordinates, Facility, FacilityType};
use swasthya_facilities::{directory, haversine_km, nearest, parse_type_filter};

const BARASAT: Coordinates = Coordinates {
    lat: 22.7205,
    lng: 88.4813,
};

fn live_facility(id: &str, kind: FacilityType, distance: f64) -> Facility {
    Facility {
        id: id.to_string(),
        name: format!("Live {id}"),
        facility_type: kind,
        address: "Address not available".to_string(),
        village: String::new(),
        district: String::new(),
        state: String::new(),
        coordinates: BARASAT,
        phone: "Not available".to_string(),
        operating_hours: "24 Hours".to_string(),
        services: vec!["OPD".to_string()],
        distance: Some(distance),
        is_live: true,
    }
}

fn assert_non_decreasing(results: &[Facility]) {
    for pair in results.windows(2) {
        assert!(pair[0].distance.unwrap() <= pair[1].distance.unwrap());
    }
}

#[test]
fn haversine_of_one_degree_latitude() {
    let a = Coordinates { lat: 0.0, lng: 0.0 };
    let b = Coordinates { lat: 1.0, lng: 0.0 };
    assert!((haversine_km(a, b) - 111.195).abs() < 0.01);
    assert_eq!(haversine_km(a, a), 0.0);
}

#[test]
fn haversine_is_symmetric() {
    let varanasi = Coordinates {
        lat: 25.3356,
        lng: 82.9875,
    };
    let there = haversine_km(BARASAT, varanasi);
    let back = haversine_km(varanasi, BARASAT);
    assert!((there - back).abs() < 1e-9);
    assert!(there > 500.0 && there < 700.0);
}

#[test]
fn phc_filter_returns_only_phcs_nearest_first() {
    let results = nearest(BARASAT, Some(FacilityType::Phc), Vec::new());
    assert!(!results.is_empty());
    assert!(results.iter().all(|f| f.facility_type == FacilityType::Phc));
    assert_non_decreasing(&results);
    assert_eq!(results[0].id, "phc-wb-001");
    assert_eq!(results[0].distance, Some(0.0));
}

#[test]
fn no_filter_returns_whole_directory() {
    let results = nearest(BARASAT, None, Vec::new());
    assert_eq!(results.len(), directory().len());
    assert!(results.iter().all(|f| f.distance.is_some()));
    assert_non_decreasing(&results);
}

#[test]
fn live_results_are_merged_and_filtered() {
    let live = vec![
        live_facility("osm-1", FacilityType::Phc, 0.4),
        live_facility("osm-2", FacilityType::JanAushadhi, 0.1),
    ];
    let results = nearest(BARASAT, Some(FacilityType::Phc), live);

    assert!(results.iter().any(|f| f.id == "osm-1"));
    assert!(results.iter().all(|f| f.id != "osm-2"));
    assert_non_decreasing(&results);
    // The Barasat PHC sits exactly at the origin.
    assert_eq!(results[0].id, "phc-wb-001");
    assert_eq!(results[1].id, "osm-1");
}

#[test]
fn equal_distances_keep_live_before_static() {
    let live = vec![live_facility("osm-9", FacilityType::Phc, 0.0)];
    let results = nearest(BARASAT, Some(FacilityType::Phc), live);
    assert_eq!(results[0].id, "osm-9");
    assert_eq!(results[1].id, "phc-wb-001");
}

#[test]
fn type_filter_parsing() {
    assert_eq!(parse_type_filter(None).unwrap(), None);
    assert_eq!(parse_type_filter(Some("all")).unwrap(), None);
    assert_eq!(
        parse_type_filter(Some("Jan Aushadhi")).unwrap(),
        Some(FacilityType::JanAushadhi)
    );
    assert!(parse_type_filter(Some("Dispensary")).is_err());
}
