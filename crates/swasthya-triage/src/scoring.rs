//! Severity scoring.
//!
//! The thresholds below are unvalidated clinical heuristics carried over
//! from the deployed rule set. They are a behavioural contract: change them
//! only with product sign-off.

use std::collections::BTreeSet;

use swasthya_core::lang::Localized;
use swasthya_core::models::assessment::{Assessment, CareLevel, SeverityBand};

use crate::catalog::find_symptom;

/// Symptoms that force a hospital referral whatever else was selected.
/// `severe-bleeding` has no catalog entry; it is accepted from callers that
/// collect it outside the category flow.
pub const CRITICAL_SYMPTOMS: &[&str] = &["chest-pain", "shortness-breath", "severe-bleeding"];

/// Duration (days) at or above which the long-duration bonus applies.
pub const LONG_DURATION_DAYS: u32 = 7;
pub const LONG_DURATION_BONUS: u32 = 2;
/// Duration (days) at or above which the medium-duration bonus applies.
/// Also sufficient on its own for a PHC referral.
pub const MEDIUM_DURATION_DAYS: u32 = 4;
pub const MEDIUM_DURATION_BONUS: u32 = 1;

/// Any single symptom at or above this weight is treated as severe.
pub const SEVERE_SINGLE_WEIGHT: u8 = 4;
pub const SEVERE_TOTAL: u32 = 12;
pub const MODERATE_TOTAL: u32 = 6;

/// Score a set of selected symptoms and how long they have lasted.
///
/// Repeated ids count once. Unknown symptom ids are ignored. An empty
/// selection falls through to [`SeverityBand::Mild`].
pub fn assess<S: AsRef<str>>(selected: &[S], duration_days: u32) -> Assessment {
    let selected: BTreeSet<&str> = selected.iter().map(AsRef::as_ref).collect();

    let mut total_severity: u32 = 0;
    let mut max_severity: u8 = 0;

    for &id in &selected {
        match find_symptom(id) {
            Some(symptom) => {
                total_severity += u32::from(symptom.severity);
                max_severity = max_severity.max(symptom.severity);
            }
            None => tracing::debug!(symptom_id = id, "ignoring unknown symptom"),
        }
    }

    total_severity += duration_bonus(duration_days);

    let has_critical = selected.iter().any(|id| CRITICAL_SYMPTOMS.contains(id));

    let severity = if has_critical
        || max_severity >= SEVERE_SINGLE_WEIGHT
        || total_severity >= SEVERE_TOTAL
    {
        SeverityBand::Severe
    } else if total_severity >= MODERATE_TOTAL || duration_days >= MEDIUM_DURATION_DAYS {
        SeverityBand::Moderate
    } else {
        SeverityBand::Mild
    };

    verdict(severity, total_severity, max_severity)
}

/// Step function: the boundary day takes the larger bonus.
pub fn duration_bonus(duration_days: u32) -> u32 {
    if duration_days >= LONG_DURATION_DAYS {
        LONG_DURATION_BONUS
    } else if duration_days >= MEDIUM_DURATION_DAYS {
        MEDIUM_DURATION_BONUS
    } else {
        0
    }
}

fn verdict(severity: SeverityBand, total_severity: u32, max_severity: u8) -> Assessment {
    let (care_level, care_level_text, reasoning, recommendations) = match severity {
        SeverityBand::Severe => (
            CareLevel::Hospital,
            Localized::text("Visit Hospital Immediately", "तुरंत अस्पताल जाएं"),
            Localized::text(
                "Your symptoms indicate a potentially serious condition that requires immediate medical attention.",
                "आपके लक्षण एक गंभीर स्थिति का संकेत दे सकते हैं जिसके लिए तत्काल चिकित्सा ध्यान की आवश्यकता है।",
            ),
            Localized::list(
                &[
                    "Go to the nearest hospital or CHC immediately",
                    "Call 108 ambulance if needed",
                    "Do not delay seeking medical care",
                    "Bring any previous medical records",
                ],
                &[
                    "तुरंत निकटतम अस्पताल या CHC जाएं",
                    "यदि आवश्यक हो तो 108 एम्बुलेंस कॉल करें",
                    "चिकित्सा देखभाल लेने में देरी न करें",
                    "कोई भी पिछला मेडिकल रिकॉर्ड साथ लाएं",
                ],
            ),
        ),
        SeverityBand::Moderate => (
            CareLevel::Phc,
            Localized::text("Visit Primary Health Center", "प्राथमिक स्वास्थ्य केंद्र जाएं"),
            Localized::text(
                "Your symptoms suggest you should consult a doctor at a PHC for proper diagnosis and treatment.",
                "आपके लक्षण बताते हैं कि आपको उचित निदान और उपचार के लिए PHC में डॉक्टर से परामर्श लेना चाहिए।",
            ),
            Localized::list(
                &[
                    "Visit your nearest PHC within 24 hours",
                    "Bring your Ayushman Bharat card if you have one",
                    "Monitor your symptoms",
                    "Stay hydrated and take rest",
                ],
                &[
                    "24 घंटे के भीतर अपने निकटतम PHC में जाएं",
                    "यदि आपके पास आयुष्मान भारत कार्ड है तो लाएं",
                    "अपने लक्षणों की निगरानी करें",
                    "हाइड्रेटेड रहें और आराम करें",
                ],
            ),
        ),
        SeverityBand::Mild => (
            CareLevel::SelfCare,
            Localized::text("Self-Care at Home", "घर पर देखभाल करें"),
            Localized::text(
                "Your symptoms are mild and can likely be managed at home with self-care.",
                "आपके लक्षण हल्के हैं और संभवतः घर पर देखभाल से प्रबंधित किए जा सकते हैं।",
            ),
            Localized::list(
                &[
                    "Rest at home",
                    "Drink plenty of fluids (ORS if needed)",
                    "Take paracetamol if you have fever",
                    "If symptoms worsen or persist beyond 3 days, visit PHC",
                ],
                &[
                    "घर पर आराम करें",
                    "पर्याप्त मात्रा में तरल पदार्थ पिएं (आवश्यकता हो तो ORS)",
                    "यदि बुखार है तो पैरासिटामोल लें",
                    "यदि लक्षण बिगड़ते हैं या 3 दिनों से अधिक रहते हैं, तो PHC जाएं",
                ],
            ),
        ),
    };

    Assessment {
        severity,
        care_level,
        care_level_text,
        reasoning,
        recommendations,
        total_severity,
        max_severity,
    }
}
