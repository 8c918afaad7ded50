use std::sync::LazyLock;

use swasthya_core::lang::Localized;
use swasthya_core::models::symptom::{Symptom, SymptomCategory};

static CATEGORIES: LazyLock<Vec<SymptomCategory>> = LazyLock::new(|| {
    vec![
        category(
            "head-face",
            ("Head/Face", "सिर/चेहरा"),
            "🧠",
            &[
                ("headache", "Headache", "सिरदर्द", 2),
                ("dizziness", "Dizziness", "चक्कर आना", 3),
                ("eye-pain", "Eye Pain", "आँख में दर्द", 2),
                ("ear-pain", "Ear Pain", "कान में दर्द", 2),
                ("sore-throat", "Sore Throat", "गले में खराश", 2),
            ],
        ),
        category(
            "chest-respiratory",
            ("Chest/Respiratory", "छाती/श्वसन"),
            "🫁",
            &[
                ("cough", "Cough", "खांसी", 2),
                ("chest-pain", "Chest Pain", "छाती में दर्द", 4),
                ("shortness-breath", "Shortness of Breath", "सांस फूलना", 4),
                ("wheezing", "Wheezing", "घरघराहट", 3),
            ],
        ),
        category(
            "stomach-digestive",
            ("Stomach/Digestive", "पेट/पाचन"),
            "🍽️",
            &[
                ("stomach-pain", "Stomach Pain", "पेट दर्द", 3),
                ("nausea", "Nausea", "जी मिचलाना", 2),
                ("vomiting", "Vomiting", "उल्टी", 3),
                ("diarrhea", "Diarrhea", "दस्त", 3),
                ("constipation", "Constipation", "कब्ज", 1),
            ],
        ),
        category(
            "general",
            ("General Symptoms", "सामान्य लक्षण"),
            "🌡️",
            &[
                ("fever", "Fever", "बुखार", 3),
                ("fatigue", "Fatigue", "थकान", 2),
                ("body-ache", "Body Ache", "शरीर में दर्द", 2),
                ("weakness", "Weakness", "कमजोरी", 2),
                ("chills", "Chills", "ठंड लगना", 2),
            ],
        ),
        category(
            "skin",
            ("Skin", "त्वचा"),
            "🤚",
            &[
                ("rash", "Rash", "चकत्ते", 2),
                ("itching", "Itching", "खुजली", 2),
                ("swelling", "Swelling", "सूजन", 3),
                ("skin-discoloration", "Skin Discoloration", "रंग बदलना", 2),
            ],
        ),
    ]
});

/// All symptom categories in display order.
pub fn catalog() -> &'static [SymptomCategory] {
    &CATEGORIES
}

/// Look up a symptom by id across every category.
pub fn find_symptom(id: &str) -> Option<&'static Symptom> {
    catalog()
        .iter()
        .flat_map(|c| &c.symptoms)
        .find(|s| s.id == id)
}

fn category(
    id: &str,
    (name, name_hi): (&str, &str),
    icon: &str,
    symptoms: &[(&str, &str, &str, u8)],
) -> SymptomCategory {
    SymptomCategory {
        id: id.to_string(),
        name: Localized::text(name, name_hi),
        icon: icon.to_string(),
        symptoms: symptoms
            .iter()
            .map(|(id, name, name_hi, severity)| Symptom {
                id: id.to_string(),
                name: Localized::text(name, name_hi),
                severity: *severity,
            })
            .collect(),
    }
}
