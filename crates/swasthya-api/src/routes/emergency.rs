use axum::Json;
use serde::Serialize;
use swasthya_triage::emergency::{EmergencyContact, FirstAidGuide, contacts, first_aid_guides};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyInfo {
    contacts: &'static [EmergencyContact],
    first_aid_guides: &'static [FirstAidGuide],
}

pub async fn emergency_info() -> Json<EmergencyInfo> {
    Json(EmergencyInfo {
        contacts: contacts(),
        first_aid_guides: first_aid_guides(),
    })
}
