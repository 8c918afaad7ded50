//! swasthya-api
//!
//! HTTP surface for the rural-health service: chat, facilities, symptom
//! triage, schemes, medicines, saved chat sessions and emergency info.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};

pub use config::Config;
pub use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Assistant
        .route("/api/chat", post(routes::chat::chat))
        .route("/api/sessions", get(routes::sessions::list_sessions))
        .route("/api/sessions", post(routes::sessions::save_session))
        .route("/api/sessions", delete(routes::sessions::clear_sessions))
        .route("/api/sessions/{id}", get(routes::sessions::get_session))
        .route("/api/sessions/{id}", delete(routes::sessions::delete_session))
        // Facilities
        .route("/api/facilities", get(routes::facilities::nearby))
        .route("/api/facilities/nearest", get(routes::facilities::nearest))
        // Reference data
        .route("/api/symptoms", get(routes::symptoms::list_symptoms))
        .route("/api/symptoms/assess", post(routes::symptoms::assess_symptoms))
        .route("/api/schemes", get(routes::schemes::list_schemes))
        .route("/api/schemes/questions", get(routes::schemes::list_questions))
        .route("/api/schemes/eligible", post(routes::schemes::list_eligible))
        .route("/api/schemes/{id}", get(routes::schemes::get_scheme))
        .route(
            "/api/schemes/{id}/eligibility",
            post(routes::schemes::check_scheme),
        )
        .route("/api/medicines", get(routes::medicines::list_medicines))
        .route("/api/medicines/{id}", get(routes::medicines::get_medicine))
        .route("/api/emergency", get(routes::emergency::emergency_info))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
