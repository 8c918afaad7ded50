//! swasthya-schemes
//!
//! Government health scheme directory and the eligibility questionnaire.
//! Eligibility is a pure function of a scheme's declared criteria and the
//! user's answers.

pub mod directory;
pub mod eligibility;
pub mod error;
pub mod rules;

pub use directory::{find_scheme, questions, schemes};
pub use eligibility::{check_eligibility, eligible_schemes};
