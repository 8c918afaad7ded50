use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use swasthya_core::models::assessment::Assessment;
use swasthya_core::models::symptom::SymptomCategory;
use swasthya_triage::{assess, catalog};

use crate::error::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessRequest {
    symptoms: Vec<String>,
    #[serde(default = "default_duration")]
    duration_days: u32,
}

fn default_duration() -> u32 {
    1
}

pub async fn list_symptoms() -> Json<&'static [SymptomCategory]> {
    Json(catalog())
}

pub async fn assess_symptoms(
    payload: Result<Json<AssessRequest>, JsonRejection>,
) -> Result<Json<Assessment>, ApiError> {
    let Json(request) = payload?;
    let assessment = assess(request.symptoms.as_slice(), request.duration_days);

    tracing::info!(
        symptoms = request.symptoms.len(),
        duration_days = request.duration_days,
        severity = ?assessment.severity,
        "symptoms assessed"
    );

    Ok(Json(assessment))
}
