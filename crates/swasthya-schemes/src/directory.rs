use std::sync::LazyLock;

use swasthya_core::lang::Localized;
use swasthya_core::models::scheme::{
    EligibilityCriteria, EligibilityQuestion, IncomeLimit, QuestionOption, Scheme,
};

use crate::rules::{ANNUAL_INCOME, FAMILY_SIZE, IncomeBand, RATION_CARD};

const ABHA_REGISTER: &str = "https://healthid.ndhm.gov.in/register";

static SCHEMES: LazyLock<Vec<Scheme>> = LazyLock::new(|| {
    vec![
        Scheme {
            id: "ayushman-bharat".to_string(),
            name: Localized::text("Ayushman Bharat - PM-JAY", "आयुष्मान भारत - PM-JAY"),
            description: Localized::text(
                "World's largest health insurance scheme providing coverage of ₹5 lakh per family per year",
                "विश्व की सबसे बड़ी स्वास्थ्य बीमा योजना जो प्रति परिवार प्रति वर्ष ₹5 लाख का कवरेज प्रदान करती है",
            ),
            benefits: Localized::list(
                &[
                    "₹5 lakh coverage per family per year",
                    "Covers 1,500+ medical procedures",
                    "Cashless treatment at 25,000+ empanelled hospitals",
                    "Pre and post-hospitalization coverage",
                    "No cap on family size or age",
                ],
                &[
                    "प्रति परिवार प्रति वर्ष ₹5 लाख का कवरेज",
                    "1,500+ चिकित्सा प्रक्रियाओं को कवर करता है",
                    "25,000+ सूचीबद्ध अस्पतालों में कैशलेस उपचार",
                    "अस्पताल में भर्ती से पहले और बाद का कवरेज",
                    "परिवार के आकार या उम्र पर कोई सीमा नहीं",
                ],
            ),
            eligibility_criteria: EligibilityCriteria {
                ration_card_types: Some(vec!["BPL".to_string(), "Antyodaya".to_string()]),
                annual_income: Some(IncomeLimit { max: 500_000 }),
                ..Default::default()
            },
            enrollment_steps: Localized::list(
                &[
                    "Visit nearest Jan Seva Kendra or PHC",
                    "Carry ration card and Aadhaar card",
                    "Fill the enrollment form",
                    "Get your Ayushman Bharat card",
                    "Create ABHA ID for digital health records",
                ],
                &[
                    "निकटतम जन सेवा केंद्र या PHC जाएं",
                    "राशन कार्ड और आधार कार्ड लाएं",
                    "नामांकन फॉर्म भरें",
                    "अपना आयुष्मान भारत कार्ड प्राप्त करें",
                    "डिजिटल स्वास्थ्य रिकॉर्ड के लिए ABHA ID बनाएं",
                ],
            ),
            helpline: "14555".to_string(),
            abha_link: Some(ABHA_REGISTER.to_string()),
            download_link: Some("https://nha.gov.in/PM-JAY".to_string()),
        },
        Scheme {
            id: "jssk".to_string(),
            name: Localized::text(
                "Janani Shishu Suraksha Karyakaram (JSSK)",
                "जननी शिशु सुरक्षा कार्यक्रम (JSSK)",
            ),
            description: Localized::text(
                "Free delivery and healthcare for pregnant women and sick newborns",
                "गर्भवती महिलाओं और बीमार नवजात शिशुओं के लिए मुफ्त प्रसव और स्वास्थ्य सेवा",
            ),
            benefits: Localized::list(
                &[
                    "Free delivery in government hospitals",
                    "Free medicines and diagnostics",
                    "Free diet during hospital stay",
                    "Free transport from home to facility",
                    "Free treatment for sick newborns up to 30 days",
                ],
                &[
                    "सरकारी अस्पतालों में मुफ्त प्रसव",
                    "मुफ्त दवाएं और निदान",
                    "अस्पताल में रहने के दौरान मुफ्त आहार",
                    "घर से सुविधा तक मुफ्त परिवहन",
                    "30 दिनों तक बीमार नवजात शिशुओं का मुफ्त उपचार",
                ],
            ),
            eligibility_criteria: EligibilityCriteria::default(),
            enrollment_steps: Localized::list(
                &[
                    "Register at nearest Anganwadi or PHC during pregnancy",
                    "Carry MCP card for all checkups",
                    "Avail all services at government facilities",
                ],
                &[
                    "गर्भावस्था के दौरान निकटतम आंगनवाड़ी या PHC में पंजीकरण करें",
                    "सभी जांच के लिए MCP कार्ड साथ लाएं",
                    "सरकारी सुविधाओं में सभी सेवाओं का लाभ उठाएं",
                ],
            ),
            helpline: "104".to_string(),
            abha_link: Some(ABHA_REGISTER.to_string()),
            download_link: Some(
                "https://nhm.gov.in/index1.php?lang=1&level=2&sublinkid=822&lid=118".to_string(),
            ),
        },
    ]
});

static QUESTIONS: LazyLock<Vec<EligibilityQuestion>> = LazyLock::new(|| {
    vec![
        question(
            RATION_CARD,
            (
                "What type of ration card do you have?",
                "आपके पास किस प्रकार का राशन कार्ड है?",
            ),
            &[
                ("BPL", "BPL (Below Poverty Line)", "BPL (गरीबी रेखा से नीचे)"),
                ("APL", "APL (Above Poverty Line)", "APL (गरीबी रेखा से ऊपर)"),
                ("Antyodaya", "Antyodaya", "अंत्योदय"),
                ("None", "Don't have a ration card", "राशन कार्ड नहीं है"),
            ],
        ),
        question(
            ANNUAL_INCOME,
            (
                "What is your annual family income?",
                "आपकी वार्षिक पारिवारिक आय क्या है?",
            ),
            &[
                (IncomeBand::BelowOneLakh.as_str(), "Below ₹1 lakh", "₹1 लाख से कम"),
                (IncomeBand::OneToThreeLakh.as_str(), "₹1-3 lakh", "₹1-3 लाख"),
                (IncomeBand::ThreeToFiveLakh.as_str(), "₹3-5 lakh", "₹3-5 लाख"),
                (IncomeBand::AboveFiveLakh.as_str(), "Above ₹5 lakh", "₹5 लाख से अधिक"),
            ],
        ),
        question(
            FAMILY_SIZE,
            (
                "How many members are in your family?",
                "आपके परिवार में कितने सदस्य हैं?",
            ),
            &[
                ("1-3", "1-3 members", "1-3 सदस्य"),
                ("4-6", "4-6 members", "4-6 सदस्य"),
                ("7+", "7+ members", "7+ सदस्य"),
            ],
        ),
    ]
});

pub fn schemes() -> &'static [Scheme] {
    &SCHEMES
}

pub fn find_scheme(id: &str) -> Option<&'static Scheme> {
    schemes().iter().find(|s| s.id == id)
}

/// The eligibility questionnaire in the order it is asked.
pub fn questions() -> &'static [EligibilityQuestion] {
    &QUESTIONS
}

fn question(
    id: &str,
    (text, text_hi): (&str, &str),
    options: &[(&str, &str, &str)],
) -> EligibilityQuestion {
    EligibilityQuestion {
        id: id.to_string(),
        question: Localized::text(text, text_hi),
        options: options
            .iter()
            .map(|(value, label, label_hi)| QuestionOption {
                value: value.to_string(),
                label: Localized::text(label, label_hi),
            })
            .collect(),
    }
}
