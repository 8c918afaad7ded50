use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lang::Localized;

/// Answers to the eligibility questionnaire, keyed by question id.
pub type Answers = HashMap<String, String>;

/// A government health scheme.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Scheme {
    pub id: String,
    pub name: Localized<String>,
    pub description: Localized<String>,
    pub benefits: Localized<Vec<String>>,
    pub eligibility_criteria: EligibilityCriteria,
    pub enrollment_steps: Localized<Vec<String>>,
    pub helpline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abha_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_link: Option<String>,
}

/// Declarative eligibility description. An unset field imposes no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EligibilityCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ration_card_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_income: Option<IncomeLimit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_size: Option<Bounds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Bounds>,
}

/// Maximum annual family income in rupees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IncomeLimit {
    pub max: u64,
}

/// Inclusive bounds; either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Bounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl Bounds {
    pub fn contains(&self, value: u32) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    /// True if the inclusive range `[lo, hi]` shares at least one value with
    /// these bounds. `hi = None` means unbounded above.
    pub fn overlaps(&self, lo: u32, hi: Option<u32>) -> bool {
        let below_max = self.max.is_none_or(|max| lo <= max);
        let above_min = match (self.min, hi) {
            (Some(min), Some(hi)) => hi >= min,
            _ => true,
        };
        below_max && above_min
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EligibilityQuestion {
    pub id: String,
    pub question: Localized<String>,
    pub options: Vec<QuestionOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionOption {
    pub value: String,
    pub label: Localized<String>,
}
