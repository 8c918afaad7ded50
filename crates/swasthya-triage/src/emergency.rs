use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use swasthya_core::lang::Localized;
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmergencyContact {
    pub name: Localized<String>,
    pub number: String,
    pub icon: String,
}

/// Step-by-step first aid for one situation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FirstAidGuide {
    pub id: String,
    pub title: Localized<String>,
    pub steps: Localized<Vec<String>>,
}

static CONTACTS: LazyLock<Vec<EmergencyContact>> = LazyLock::new(|| {
    [
        ("Ambulance", "एम्बुलेंस", "108", "🚑"),
        ("Police", "पुलिस", "100", "🚓"),
        ("Fire", "अग्निशमन", "101", "🚒"),
        ("Women Helpline", "महिला हेल्पलाइन", "1091", "👩"),
        ("Child Helpline", "बाल हेल्पलाइन", "1098", "👶"),
    ]
    .iter()
    .map(|(name, name_hi, number, icon)| EmergencyContact {
        name: Localized::text(name, name_hi),
        number: number.to_string(),
        icon: icon.to_string(),
    })
    .collect()
});

static FIRST_AID: LazyLock<Vec<FirstAidGuide>> = LazyLock::new(|| {
    vec![
        FirstAidGuide {
            id: "cpr".to_string(),
            title: Localized::text(
                "CPR (Cardiopulmonary Resuscitation)",
                "CPR (हृदय फेफड़े पुनर्जीवन)",
            ),
            steps: Localized::list(
                &[
                    "Place hands on center of chest",
                    "30 compressions (100-120 per min)",
                    "2 rescue breaths",
                    "Repeat until help arrives",
                ],
                &[
                    "छाती के बीच में हाथ रखें",
                    "30 बार दबाएं (100-120 प्रति मिनट)",
                    "2 बार सांस दें",
                    "मदद आने तक दोहराएं",
                ],
            ),
        },
        FirstAidGuide {
            id: "choking".to_string(),
            title: Localized::text("Choking", "गला घुटना"),
            steps: Localized::list(
                &[
                    "Stand behind person",
                    "5 back blows between shoulder blades",
                    "5 abdominal thrusts (Heimlich)",
                    "Repeat until object is expelled",
                ],
                &[
                    "व्यक्ति के पीछे खड़े हों",
                    "कंधे की हड्डियों के बीच 5 बार पीठ पर थपथपाएं",
                    "5 बार पेट पर दबाव डालें",
                    "वस्तु निकलने तक दोहराएं",
                ],
            ),
        },
        FirstAidGuide {
            id: "severe-bleeding".to_string(),
            title: Localized::text("Severe Bleeding", "गंभीर रक्तस्राव"),
            steps: Localized::list(
                &[
                    "Apply direct pressure with clean cloth",
                    "Elevate injured area above heart",
                    "Don't remove cloth if soaked",
                    "Call 108 immediately",
                ],
                &[
                    "साफ कपड़े से सीधे दबाव डालें",
                    "घायल क्षेत्र को हृदय से ऊपर उठाएं",
                    "कपड़ा भीग जाए तो न हटाएं",
                    "तुरंत 108 कॉल करें",
                ],
            ),
        },
    ]
});

/// National emergency numbers, ambulance first.
pub fn contacts() -> &'static [EmergencyContact] {
    &CONTACTS
}

pub fn first_aid_guides() -> &'static [FirstAidGuide] {
    &FIRST_AID
}
