use swasthya_core::models::scheme::{Answers, Scheme};

use crate::directory::{find_scheme, schemes};
use crate::rules::{first_failure, rules_for};

/// Whether the answers satisfy a scheme's criteria. Unknown schemes are
/// never eligible.
pub fn check_eligibility(scheme_id: &str, answers: &Answers) -> bool {
    match find_scheme(scheme_id) {
        Some(scheme) => is_eligible(scheme, answers),
        None => {
            tracing::debug!(scheme_id, "eligibility check for unknown scheme");
            false
        }
    }
}

pub fn is_eligible(scheme: &Scheme, answers: &Answers) -> bool {
    let rules = rules_for(&scheme.eligibility_criteria);
    match first_failure(&rules, answers) {
        Some(rule) => {
            tracing::debug!(scheme_id = %scheme.id, rule = %rule, "not eligible");
            false
        }
        None => true,
    }
}

/// Every scheme the answers qualify for, in directory order.
pub fn eligible_schemes(answers: &Answers) -> Vec<&'static Scheme> {
    schemes()
        .iter()
        .filter(|scheme| is_eligible(scheme, answers))
        .collect()
}
