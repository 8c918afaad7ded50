use std::sync::LazyLock;

use swasthya_core::models::medicine::Medicine;
use tracing::debug;

struct Row {
    id: &'static str,
    name: &'static str,
    generic_name: &'static str,
    branded: bool,
    price: u32,
    generic_price: Option<u32>,
    dosage: &'static str,
    usage: &'static [&'static str],
    side_effects: &'static [&'static str],
    interactions: &'static [&'static str],
    storage: &'static str,
    prescription: bool,
}

const ROWS: &[Row] = &[
    Row {
        id: "med-001",
        name: "Crocin 500mg",
        generic_name: "Paracetamol",
        branded: true,
        price: 30,
        generic_price: Some(5),
        dosage: "500mg every 6 hours",
        usage: &["Fever", "Headache", "Body pain"],
        side_effects: &["Nausea (rare)", "Skin rash (rare)"],
        interactions: &["Warfarin", "Alcohol"],
        storage: "Store at room temperature, away from moisture",
        prescription: false,
    },
    Row {
        id: "med-002",
        name: "Paracetamol 500mg",
        generic_name: "Paracetamol",
        branded: false,
        price: 5,
        generic_price: None,
        dosage: "500mg every 6 hours",
        usage: &["Fever", "Headache", "Body pain"],
        side_effects: &["Nausea (rare)", "Skin rash (rare)"],
        interactions: &["Warfarin", "Alcohol"],
        storage: "Store at room temperature, away from moisture",
        prescription: false,
    },
    Row {
        id: "med-003",
        name: "Azithral 500mg",
        generic_name: "Azithromycin",
        branded: true,
        price: 150,
        generic_price: Some(45),
        dosage: "500mg once daily for 3 days",
        usage: &["Bacterial infections", "Respiratory infections", "Throat infections"],
        side_effects: &["Diarrhea", "Nausea", "Stomach pain"],
        interactions: &["Antacids", "Warfarin"],
        storage: "Store at room temperature",
        prescription: true,
    },
    Row {
        id: "med-004",
        name: "Azithromycin 500mg",
        generic_name: "Azithromycin",
        branded: false,
        price: 45,
        generic_price: None,
        dosage: "500mg once daily for 3 days",
        usage: &["Bacterial infections", "Respiratory infections", "Throat infections"],
        side_effects: &["Diarrhea", "Nausea", "Stomach pain"],
        interactions: &["Antacids", "Warfarin"],
        storage: "Store at room temperature",
        prescription: true,
    },
    Row {
        id: "med-005",
        name: "Allegra 120mg",
        generic_name: "Fexofenadine",
        branded: true,
        price: 200,
        generic_price: Some(60),
        dosage: "120mg once daily",
        usage: &["Allergic rhinitis", "Hay fever", "Skin allergies"],
        side_effects: &["Drowsiness", "Headache", "Nausea"],
        interactions: &["Antacids", "Fruit juices"],
        storage: "Store in a cool, dry place",
        prescription: false,
    },
    Row {
        id: "med-006",
        name: "ORS Solution",
        generic_name: "Oral Rehydration Salts",
        branded: false,
        price: 8,
        generic_price: None,
        dosage: "1 packet in 1 liter of clean water",
        usage: &["Dehydration", "Diarrhea", "Vomiting"],
        side_effects: &["None (when used as directed)"],
        interactions: &["None"],
        storage: "Store in a cool, dry place",
        prescription: false,
    },
    Row {
        id: "med-007",
        name: "Disprin 325mg",
        generic_name: "Aspirin",
        branded: true,
        price: 25,
        generic_price: Some(8),
        dosage: "325mg when needed, max 4 times daily",
        usage: &["Pain relief", "Fever", "Inflammation"],
        side_effects: &["Stomach upset", "Heartburn", "Bleeding (with long-term use)"],
        interactions: &["Warfarin", "NSAIDs", "Alcohol"],
        storage: "Store at room temperature",
        prescription: false,
    },
    Row {
        id: "med-008",
        name: "Metformin 500mg",
        generic_name: "Metformin",
        branded: false,
        price: 15,
        generic_price: None,
        dosage: "500mg twice daily with meals",
        usage: &["Type 2 Diabetes"],
        side_effects: &["Diarrhea", "Nausea", "Stomach pain"],
        interactions: &["Alcohol", "Contrast dye"],
        storage: "Store at room temperature",
        prescription: true,
    },
    Row {
        id: "med-009",
        name: "Pantoprazole 40mg",
        generic_name: "Pantoprazole",
        branded: false,
        price: 20,
        generic_price: None,
        dosage: "40mg once daily before meals",
        usage: &["Acidity", "GERD", "Stomach ulcers"],
        side_effects: &["Headache", "Diarrhea", "Nausea"],
        interactions: &["Warfarin", "Antifungals"],
        storage: "Store in a cool, dry place",
        prescription: true,
    },
    Row {
        id: "med-010",
        name: "Cetirizine 10mg",
        generic_name: "Cetirizine",
        branded: false,
        price: 12,
        generic_price: None,
        dosage: "10mg once daily",
        usage: &["Allergies", "Hay fever", "Itching", "Hives"],
        side_effects: &["Drowsiness", "Dry mouth", "Fatigue"],
        interactions: &["Alcohol", "Sedatives"],
        storage: "Store at room temperature",
        prescription: false,
    },
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static MEDICINES: LazyLock<Vec<Medicine>> = LazyLock::new(|| {
    ROWS.iter()
        .map(|row| Medicine {
            id: row.id.to_string(),
            name: row.name.to_string(),
            generic_name: row.generic_name.to_string(),
            is_branded: row.branded,
            price: row.price,
            generic_price: row.generic_price,
            dosage: row.dosage.to_string(),
            usage: strings(row.usage),
            side_effects: strings(row.side_effects),
            interactions: strings(row.interactions),
            storage: row.storage.to_string(),
            prescription_required: row.prescription,
        })
        .collect()
});

/// Every medicine, in directory order.
pub fn medicines() -> &'static [Medicine] {
    &MEDICINES
}

pub fn find_medicine(id: &str) -> Option<&'static Medicine> {
    MEDICINES.iter().find(|m| m.id == id)
}

/// Medicines whose name, generic name or any usage contains `query`,
/// ignoring case. A blank query matches nothing.
pub fn search(query: &str) -> Vec<&'static Medicine> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let hits: Vec<&'static Medicine> = MEDICINES
        .iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&needle)
                || m.generic_name.to_lowercase().contains(&needle)
                || m.usage.iter().any(|u| u.to_lowercase().contains(&needle))
        })
        .collect();

    debug!(query = %needle, hits = hits.len(), "medicine search");
    hits
}
