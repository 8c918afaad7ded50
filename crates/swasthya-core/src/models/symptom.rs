use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lang::Localized;

/// A selectable symptom with its severity weight (1–5).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub id: String,
    pub name: Localized<String>,
    pub severity: u8,
}

/// A body-area grouping of symptoms, shown as one step of the triage flow.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomCategory {
    pub id: String,
    pub name: Localized<String>,
    pub icon: String,
    pub symptoms: Vec<Symptom>,
}
