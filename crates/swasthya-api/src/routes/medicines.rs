use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query};
use serde::{Deserialize, Serialize};
use swasthya_core::models::medicine::{Medicine, Savings};
use swasthya_medicines::{find_medicine, generic_alternative, medicines, savings, search};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineDetail {
    medicine: &'static Medicine,
    generic_alternative: Option<&'static Medicine>,
    savings: Option<Savings>,
}

/// Search results, or the whole directory for a blank query.
pub async fn list_medicines(
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<&'static Medicine>>, ApiError> {
    let Query(query) = query?;
    let results = match query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => search(q),
        None => medicines().iter().collect(),
    };
    Ok(Json(results))
}

pub async fn get_medicine(Path(id): Path<String>) -> Result<Json<MedicineDetail>, ApiError> {
    let medicine =
        find_medicine(&id).ok_or_else(|| ApiError::NotFound(format!("medicine not found: {id}")))?;

    Ok(Json(MedicineDetail {
        medicine,
        generic_alternative: generic_alternative(medicine),
        savings: medicine.is_branded.then(|| savings(medicine)),
    }))
}
