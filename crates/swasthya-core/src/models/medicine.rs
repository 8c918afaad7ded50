use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A medicine directory entry. Prices are in whole rupees.
///
/// Branded and generic entries are related only through an identical
/// `generic_name`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub generic_name: String,
    pub is_branded: bool,
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_price: Option<u32>,
    pub dosage: String,
    pub usage: Vec<String>,
    pub side_effects: Vec<String>,
    pub interactions: Vec<String>,
    pub storage: String,
    pub prescription_required: bool,
}

/// What switching from a branded medicine to its generic saves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Savings {
    pub amount: i64,
    pub percentage: i64,
}
