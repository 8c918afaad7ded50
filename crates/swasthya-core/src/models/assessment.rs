use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lang::Localized;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SeverityBand {
    Mild,
    Moderate,
    Severe,
}

/// Where the patient should seek care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum CareLevel {
    SelfCare,
    Phc,
    Hospital,
}

/// Triage verdict. Derived per call, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Assessment {
    pub severity: SeverityBand,
    pub care_level: CareLevel,
    pub care_level_text: Localized<String>,
    pub reasoning: Localized<String>,
    pub recommendations: Localized<Vec<String>>,
    /// Summed symptom weights plus the duration bonus.
    pub total_severity: u32,
    pub max_severity: u8,
}
