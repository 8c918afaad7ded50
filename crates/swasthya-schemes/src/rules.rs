//! Declarative eligibility rules.
//!
//! A scheme's [`EligibilityCriteria`] is lowered into a list of
//! `(question id, predicate)` rules. A set of answers satisfies the scheme
//! when every rule accepts the answer given to its question.

use std::fmt;
use std::str::FromStr;

use swasthya_core::models::scheme::{Answers, Bounds, EligibilityCriteria};

use crate::error::SchemeError;

pub const RATION_CARD: &str = "ration-card";
pub const ANNUAL_INCOME: &str = "annual-income";
pub const FAMILY_SIZE: &str = "family-size";
pub const AGE: &str = "age";

/// Annual family income buckets offered by the questionnaire, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IncomeBand {
    BelowOneLakh,
    OneToThreeLakh,
    ThreeToFiveLakh,
    AboveFiveLakh,
}

impl IncomeBand {
    /// Highest income (rupees) the band can contain; `None` if unbounded.
    pub fn upper_bound(&self) -> Option<u64> {
        match self {
            IncomeBand::BelowOneLakh => Some(100_000),
            IncomeBand::OneToThreeLakh => Some(300_000),
            IncomeBand::ThreeToFiveLakh => Some(500_000),
            IncomeBand::AboveFiveLakh => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeBand::BelowOneLakh => "below-1lakh",
            IncomeBand::OneToThreeLakh => "1-3lakh",
            IncomeBand::ThreeToFiveLakh => "3-5lakh",
            IncomeBand::AboveFiveLakh => "above-5lakh",
        }
    }
}

impl FromStr for IncomeBand {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "below-1lakh" => Ok(IncomeBand::BelowOneLakh),
            "1-3lakh" => Ok(IncomeBand::OneToThreeLakh),
            "3-5lakh" => Ok(IncomeBand::ThreeToFiveLakh),
            "above-5lakh" => Ok(IncomeBand::AboveFiveLakh),
            other => Err(SchemeError::UnknownIncomeBand(other.to_string())),
        }
    }
}

/// Family size buckets offered by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FamilySizeBand {
    OneToThree,
    FourToSix,
    SevenPlus,
}

impl FamilySizeBand {
    /// Inclusive member-count range; the upper end is open for `7+`.
    pub fn range(&self) -> (u32, Option<u32>) {
        match self {
            FamilySizeBand::OneToThree => (1, Some(3)),
            FamilySizeBand::FourToSix => (4, Some(6)),
            FamilySizeBand::SevenPlus => (7, None),
        }
    }
}

impl FromStr for FamilySizeBand {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-3" => Ok(FamilySizeBand::OneToThree),
            "4-6" => Ok(FamilySizeBand::FourToSix),
            "7+" => Ok(FamilySizeBand::SevenPlus),
            other => Err(SchemeError::UnknownFamilySize(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// The answer must be one of the listed values. Unanswered fails.
    OneOf(Vec<String>),
    /// The income band's upper bound must not exceed the limit.
    /// Only a recognised band above the limit fails. Unanswered or
    /// unrecognised answers pass.
    IncomeAtMost(u64),
    /// The family size band must overlap the bounds. Unanswered passes.
    FamilySizeWithin(Bounds),
    /// Age in whole years must fall within the bounds. Unanswered passes.
    AgeWithin(Bounds),
}

impl Predicate {
    pub fn accepts(&self, answer: Option<&str>) -> bool {
        match (self, answer) {
            (Predicate::OneOf(allowed), answer) => {
                answer.is_some_and(|a| allowed.iter().any(|v| v == a))
            }
            (_, None) => true,
            (Predicate::IncomeAtMost(max), Some(a)) => a
                .parse::<IncomeBand>()
                .ok()
                .is_none_or(|band| band.upper_bound().is_some_and(|upper| upper <= *max)),
            (Predicate::FamilySizeWithin(bounds), Some(a)) => {
                a.parse::<FamilySizeBand>().is_ok_and(|band| {
                    let (lo, hi) = band.range();
                    bounds.overlaps(lo, hi)
                })
            }
            (Predicate::AgeWithin(bounds), Some(a)) => {
                a.trim().parse::<u32>().is_ok_and(|age| bounds.contains(age))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub question_id: &'static str,
    pub predicate: Predicate,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.question_id, self.predicate)
    }
}

/// Lower criteria into rules. Unset criteria produce no rule.
pub fn rules_for(criteria: &EligibilityCriteria) -> Vec<Rule> {
    let mut rules = Vec::new();

    if let Some(types) = &criteria.ration_card_types {
        rules.push(Rule {
            question_id: RATION_CARD,
            predicate: Predicate::OneOf(types.clone()),
        });
    }
    if let Some(limit) = criteria.annual_income {
        rules.push(Rule {
            question_id: ANNUAL_INCOME,
            predicate: Predicate::IncomeAtMost(limit.max),
        });
    }
    if let Some(bounds) = criteria.family_size {
        rules.push(Rule {
            question_id: FAMILY_SIZE,
            predicate: Predicate::FamilySizeWithin(bounds),
        });
    }
    if let Some(bounds) = criteria.age {
        rules.push(Rule {
            question_id: AGE,
            predicate: Predicate::AgeWithin(bounds),
        });
    }

    rules
}

/// The first rule the answers fail, if any.
pub fn first_failure<'r>(rules: &'r [Rule], answers: &Answers) -> Option<&'r Rule> {
    rules.iter().find(|rule| {
        !rule
            .predicate
            .accepts(answers.get(rule.question_id).map(String::as_str))
    })
}

/// Logical AND of every rule.
pub fn evaluate(rules: &[Rule], answers: &Answers) -> bool {
    first_failure(rules, answers).is_none()
}
