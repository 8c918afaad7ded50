//! swasthya-core
//!
//! Pure domain types shared by every Swasthya crate: languages and
//! localized text, the symptom/assessment/facility/medicine/scheme models,
//! and persisted chat history. No I/O lives here.

pub mod error;
pub mod lang;
pub mod models;
