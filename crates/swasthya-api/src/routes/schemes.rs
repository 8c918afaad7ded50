use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use swasthya_core::models::scheme::{Answers, EligibilityQuestion, Scheme};
use swasthya_schemes::{check_eligibility, eligible_schemes, find_scheme, questions, schemes};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct AnswersRequest {
    #[serde(default)]
    answers: Answers,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    scheme_id: String,
    eligible: bool,
}

pub async fn list_schemes() -> Json<&'static [Scheme]> {
    Json(schemes())
}

pub async fn get_scheme(Path(id): Path<String>) -> Result<Json<&'static Scheme>, ApiError> {
    find_scheme(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("scheme not found: {id}")))
}

pub async fn list_questions() -> Json<&'static [EligibilityQuestion]> {
    Json(questions())
}

pub async fn check_scheme(
    Path(id): Path<String>,
    payload: Result<Json<AnswersRequest>, JsonRejection>,
) -> Result<Json<EligibilityResult>, ApiError> {
    let Json(request) = payload?;
    let eligible = check_eligibility(&id, &request.answers);
    Ok(Json(EligibilityResult {
        scheme_id: id,
        eligible,
    }))
}

pub async fn list_eligible(
    payload: Result<Json<AnswersRequest>, JsonRejection>,
) -> Result<Json<Vec<&'static Scheme>>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(eligible_schemes(&request.answers)))
}
