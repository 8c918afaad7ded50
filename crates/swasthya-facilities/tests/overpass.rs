use std::collections::HashMap;

use serde_json::json;
use swasthya_core::models::facility::{Coordinates, FacilityType};
use swasthya_facilities::overpass::{
    OverpassClient, OverpassElement, Rejection, build_query, infer_type, to_facility,
};
use swasthya_facilities::search::nearest_with_live;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORIGIN: Coordinates = Coordinates {
    lat: 25.3176,
    lng: 82.9739,
};

fn tags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn node(id: u64, pairs: &[(&str, &str)]) -> OverpassElement {
    OverpassElement {
        kind: "node".to_string(),
        id,
        lat: Some(25.32),
        lon: Some(82.98),
        tags: Some(tags(pairs)),
    }
}

#[test]
fn query_covers_every_selector() {
    let query = build_query(ORIGIN, 5000);
    assert!(query.starts_with("[out:json][timeout:25];"));
    assert!(query.contains("node[\"amenity\"=\"pharmacy\"](around:5000,25.3176,82.9739);"));
    assert!(query.contains("way[\"healthcare\"=\"clinic\"](around:5000,25.3176,82.9739);"));
    assert!(query.trim_end().ends_with("out skel qt;"));
}

#[test]
fn type_is_inferred_from_tags() {
    assert_eq!(infer_type(&tags(&[("amenity", "clinic")])), FacilityType::Phc);
    assert_eq!(infer_type(&tags(&[("amenity", "doctors")])), FacilityType::Phc);
    assert_eq!(infer_type(&tags(&[("healthcare", "clinic")])), FacilityType::Phc);
    assert_eq!(
        infer_type(&tags(&[("amenity", "pharmacy")])),
        FacilityType::JanAushadhi
    );
    assert_eq!(
        infer_type(&tags(&[("amenity", "hospital")])),
        FacilityType::Hospital
    );
}

#[test]
fn hospital_node_maps_every_field() {
    let element = node(
        42,
        &[
            ("amenity", "hospital"),
            ("name", "City Hospital"),
            ("addr:street", "Station Road"),
            ("addr:housenumber", "12"),
            ("addr:city", "Varanasi"),
            ("phone", "+91-542-000000"),
            ("healthcare:speciality", "cardiology;paediatrics"),
        ],
    );
    let facility = to_facility(&element, ORIGIN).unwrap();

    assert_eq!(facility.id, "osm-42");
    assert_eq!(facility.facility_type, FacilityType::Hospital);
    assert_eq!(facility.address, "Station Road 12");
    assert_eq!(facility.village, "Varanasi");
    assert_eq!(facility.phone, "+91-542-000000");
    assert_eq!(facility.operating_hours, "24 Hours");
    assert_eq!(
        facility.services,
        vec!["Emergency", "cardiology", "paediatrics", "Lab Tests", "Surgery"]
    );
    assert!(facility.is_live);

    let distance = facility.distance.unwrap();
    assert_eq!(distance, (distance * 10.0).round() / 10.0);
}

#[test]
fn untyped_healthcare_defaults() {
    let facility = to_facility(&node(7, &[("name:en", "Wellness Point")]), ORIGIN).unwrap();
    assert_eq!(facility.name, "Wellness Point");
    assert_eq!(facility.address, "Address not available");
    assert_eq!(facility.phone, "Not available");
    assert_eq!(facility.services, vec!["General Healthcare"]);
}

#[test]
fn invalid_elements_are_rejected() {
    assert_eq!(
        to_facility(&node(1, &[("amenity", "clinic")]), ORIGIN).unwrap_err(),
        Rejection::Unnamed(1)
    );
    assert_eq!(
        to_facility(&node(2, &[("amenity", "clinic"), ("name", "  ")]), ORIGIN).unwrap_err(),
        Rejection::Unnamed(2)
    );

    let mut way = node(3, &[("name", "Big Hospital")]);
    way.kind = "way".to_string();
    assert_eq!(to_facility(&way, ORIGIN).unwrap_err(), Rejection::NotANode(3));

    let mut floating = node(4, &[("name", "Somewhere")]);
    floating.lat = None;
    assert_eq!(
        to_facility(&floating, ORIGIN).unwrap_err(),
        Rejection::MissingCoordinates(4)
    );

    let mut bare = node(5, &[]);
    bare.tags = None;
    assert_eq!(to_facility(&bare, ORIGIN).unwrap_err(), Rejection::MissingTags(5));
}

#[tokio::test]
async fn fetch_nearby_keeps_only_valid_nodes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .and(body_string_contains("data="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [
                {"type": "node", "id": 1, "lat": 25.318, "lon": 82.974,
                 "tags": {"amenity": "pharmacy", "name": "Sharma Medical"}},
                {"type": "node", "id": 2, "lat": 25.319, "lon": 82.975,
                 "tags": {"amenity": "clinic"}},
                {"type": "way", "id": 3, "tags": {"amenity": "hospital", "name": "Campus"}},
                {"type": "node", "lat": 25.0, "lon": 82.0},
                {"type": "node", "id": 5, "lat": 25.33, "lon": 82.99}
            ]
        })))
        .mount(&server)
        .await;

    let client = OverpassClient::new(
        reqwest::Client::new(),
        format!("{}/api/interpreter", server.uri()),
    );
    let facilities = client.fetch_nearby(ORIGIN, 5000).await.unwrap();

    assert_eq!(facilities.len(), 1);
    assert_eq!(facilities[0].id, "osm-1");
    assert_eq!(facilities[0].facility_type, FacilityType::JanAushadhi);
    assert_eq!(facilities[0].services, vec!["Medicines"]);
}

#[tokio::test]
async fn upstream_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(504))
        .mount(&server)
        .await;

    let client = OverpassClient::new(reqwest::Client::new(), server.uri());
    assert!(client.fetch_nearby(ORIGIN, 5000).await.is_err());
}

#[tokio::test]
async fn failed_live_lookup_falls_back_to_static() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = OverpassClient::new(reqwest::Client::new(), server.uri());
    let results =
        nearest_with_live(Some(&client), ORIGIN, Some(FacilityType::Phc), 5000).await;

    assert!(!results.is_empty());
    assert!(results.iter().all(|f| !f.is_live));
    assert_eq!(results[0].id, "phc-001");
}
