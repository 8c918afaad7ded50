//! swasthya-triage
//!
//! Rule-based symptom triage. Pure data and arithmetic, no I/O.
//! Holds the static symptom catalog, the severity scorer, and the
//! emergency reference shown alongside a hospital-level verdict.

pub mod catalog;
pub mod emergency;
pub mod scoring;

pub use catalog::{catalog, find_symptom};
pub use scoring::assess;
