use std::sync::LazyLock;

use swasthya_core::models::facility::{Coordinates, Facility, FacilityType};

use FacilityType::{Chc, Hospital, JanAushadhi, Phc};

const OFFICE_HOURS: &str = "9:00 AM - 5:00 PM";
const ROUND_THE_CLOCK: &str = "24 Hours";
const KENDRA_HOURS: &str = "8:00 AM - 8:00 PM";

/// One row of the directory before it is expanded into a [`Facility`].
struct Row {
    id: &'static str,
    name: &'static str,
    kind: FacilityType,
    address: &'static str,
    village: &'static str,
    district: &'static str,
    state: &'static str,
    at: (f64, f64),
    phone: &'static str,
    hours: &'static str,
    services: &'static [&'static str],
}

const WEST_BENGAL: &str = "West Bengal";
const UTTAR_PRADESH: &str = "Uttar Pradesh";

static ROWS: &[Row] = &[
    Row {
        id: "phc-wb-001",
        name: "PHC Barasat",
        kind: Phc,
        address: "Barasat Municipality Road",
        village: "Barasat",
        district: "North 24 Parganas",
        state: WEST_BENGAL,
        at: (22.7205, 88.4813),
        phone: "+91-33-2532-1234",
        hours: OFFICE_HOURS,
        services: &["OPD", "Emergency", "Medicines", "Vaccination"],
    },
    Row {
        id: "phc-wb-002",
        name: "PHC Dum Dum",
        kind: Phc,
        address: "Dum Dum Station Road",
        village: "Dum Dum",
        district: "North 24 Parganas",
        state: WEST_BENGAL,
        at: (22.6548, 88.4267),
        phone: "+91-33-2567-2345",
        hours: OFFICE_HOURS,
        services: &["OPD", "Vaccination", "Medicines", "Lab Tests"],
    },
    Row {
        id: "chc-wb-001",
        name: "CHC Barrackpore",
        kind: Chc,
        address: "BT Road, Barrackpore",
        village: "Barrackpore",
        district: "North 24 Parganas",
        state: WEST_BENGAL,
        at: (22.7644, 88.3779),
        phone: "+91-33-2592-3456",
        hours: ROUND_THE_CLOCK,
        services: &["OPD", "Emergency", "Surgery", "Lab Tests", "Maternity Ward", "X-Ray"],
    },
    Row {
        id: "hosp-wb-001",
        name: "R.G. Kar Medical College & Hospital",
        kind: Hospital,
        address: "1, Khudiram Bose Sarani, Kolkata",
        village: "Kolkata",
        district: "Kolkata",
        state: WEST_BENGAL,
        at: (22.6101, 88.3869),
        phone: "+91-33-2555-5000",
        hours: ROUND_THE_CLOCK,
        services: &[
            "OPD", "Emergency", "Surgery", "ICU", "Lab Tests", "X-Ray", "CT Scan", "MRI",
        ],
    },
    Row {
        id: "hosp-wb-002",
        name: "SSKM Hospital (PG Hospital)",
        kind: Hospital,
        address: "244, AJC Bose Road, Kolkata",
        village: "Kolkata",
        district: "Kolkata",
        state: WEST_BENGAL,
        at: (22.5448, 88.3549),
        phone: "+91-33-2223-5000",
        hours: ROUND_THE_CLOCK,
        services: &[
            "OPD", "Emergency", "Surgery", "ICU", "Lab Tests", "X-Ray", "CT Scan", "MRI",
            "Cardiology",
        ],
    },
    Row {
        id: "jan-wb-001",
        name: "Jan Aushadhi Kendra Salt Lake",
        kind: JanAushadhi,
        address: "Sector V, Salt Lake, Kolkata",
        village: "Salt Lake",
        district: "North 24 Parganas",
        state: WEST_BENGAL,
        at: (22.5726, 88.4322),
        phone: "+91-33-2357-4567",
        hours: KENDRA_HOURS,
        services: &["Generic Medicines", "Medical Supplies"],
    },
    Row {
        id: "phc-wb-003",
        name: "PHC Belgharia",
        kind: Phc,
        address: "Belgharia Expressway",
        village: "Belgharia",
        district: "North 24 Parganas",
        state: WEST_BENGAL,
        at: (22.6647, 88.3882),
        phone: "+91-33-2567-5678",
        hours: OFFICE_HOURS,
        services: &["OPD", "Maternal Health", "Child Health", "Medicines"],
    },
    Row {
        id: "hosp-wb-003",
        name: "Howrah District Hospital",
        kind: Hospital,
        address: "College Street, Howrah",
        village: "Howrah",
        district: "Howrah",
        state: WEST_BENGAL,
        at: (22.5958, 88.2636),
        phone: "+91-33-2638-1000",
        hours: ROUND_THE_CLOCK,
        services: &["OPD", "Emergency", "Surgery", "ICU", "Lab Tests", "X-Ray", "Maternity"],
    },
    Row {
        id: "chc-wb-002",
        name: "CHC Madhyamgram",
        kind: Chc,
        address: "Station Road, Madhyamgram",
        village: "Madhyamgram",
        district: "North 24 Parganas",
        state: WEST_BENGAL,
        at: (22.7001, 88.4492),
        phone: "+91-33-2506-7890",
        hours: ROUND_THE_CLOCK,
        services: &["OPD", "Emergency", "Surgery", "Lab Tests", "Maternity Ward"],
    },
    Row {
        id: "jan-wb-002",
        name: "Jan Aushadhi Kendra Howrah",
        kind: JanAushadhi,
        address: "Station Bazaar, Howrah",
        village: "Howrah",
        district: "Howrah",
        state: WEST_BENGAL,
        at: (22.5833, 88.3426),
        phone: "+91-33-2668-5678",
        hours: KENDRA_HOURS,
        services: &["Generic Medicines", "Medical Supplies"],
    },
    Row {
        id: "phc-001",
        name: "PHC Rampur",
        kind: Phc,
        address: "Main Road, Rampur",
        village: "Rampur",
        district: "Varanasi",
        state: UTTAR_PRADESH,
        at: (25.3176, 82.9739),
        phone: "+91-542-2501234",
        hours: OFFICE_HOURS,
        services: &["OPD", "Emergency", "Medicines", "Lab Tests"],
    },
    Row {
        id: "phc-002",
        name: "PHC Kandwa",
        kind: Phc,
        address: "Block Road, Kandwa",
        village: "Kandwa",
        district: "Varanasi",
        state: UTTAR_PRADESH,
        at: (25.2867, 83.0123),
        phone: "+91-542-2502345",
        hours: OFFICE_HOURS,
        services: &["OPD", "Vaccination", "Medicines"],
    },
    Row {
        id: "chc-001",
        name: "CHC Arajiline",
        kind: Chc,
        address: "NH-29, Arajiline",
        village: "Arajiline",
        district: "Varanasi",
        state: UTTAR_PRADESH,
        at: (25.3345, 82.9456),
        phone: "+91-542-2503456",
        hours: ROUND_THE_CLOCK,
        services: &["OPD", "Emergency", "Surgery", "ICU", "Lab Tests", "X-Ray"],
    },
    Row {
        id: "hosp-001",
        name: "District Hospital Varanasi",
        kind: Hospital,
        address: "Civil Lines, Varanasi",
        village: "Varanasi",
        district: "Varanasi",
        state: UTTAR_PRADESH,
        at: (25.3356, 82.9875),
        phone: "+91-542-2501000",
        hours: ROUND_THE_CLOCK,
        services: &[
            "OPD", "Emergency", "Surgery", "ICU", "Lab Tests", "X-Ray", "CT Scan", "MRI",
        ],
    },
    Row {
        id: "jan-001",
        name: "Jan Aushadhi Kendra Rampur",
        kind: JanAushadhi,
        address: "Market Road, Rampur",
        village: "Rampur",
        district: "Varanasi",
        state: UTTAR_PRADESH,
        at: (25.3189, 82.9756),
        phone: "+91-542-2504567",
        hours: KENDRA_HOURS,
        services: &["Generic Medicines", "Medical Supplies"],
    },
    Row {
        id: "phc-003",
        name: "PHC Sarnath",
        kind: Phc,
        address: "Sarnath Road",
        village: "Sarnath",
        district: "Varanasi",
        state: UTTAR_PRADESH,
        at: (25.3816, 83.0227),
        phone: "+91-542-2595678",
        hours: OFFICE_HOURS,
        services: &["OPD", "Maternal Health", "Child Health", "Medicines"],
    },
    Row {
        id: "phc-004",
        name: "PHC Cholapur",
        kind: Phc,
        address: "Village Road, Cholapur",
        village: "Cholapur",
        district: "Varanasi",
        state: UTTAR_PRADESH,
        at: (25.2578, 82.9234),
        phone: "+91-542-2506789",
        hours: OFFICE_HOURS,
        services: &["OPD", "Emergency", "Medicines"],
    },
    Row {
        id: "chc-002",
        name: "CHC Pindra",
        kind: Chc,
        address: "Pindra Market",
        village: "Pindra",
        district: "Varanasi",
        state: UTTAR_PRADESH,
        at: (25.4123, 83.1234),
        phone: "+91-542-2507890",
        hours: ROUND_THE_CLOCK,
        services: &["OPD", "Emergency", "Surgery", "Lab Tests", "Maternity Ward"],
    },
];

static FACILITIES: LazyLock<Vec<Facility>> = LazyLock::new(|| {
    ROWS.iter()
        .map(|row| Facility {
            id: row.id.to_string(),
            name: row.name.to_string(),
            facility_type: row.kind,
            address: row.address.to_string(),
            village: row.village.to_string(),
            district: row.district.to_string(),
            state: row.state.to_string(),
            coordinates: Coordinates {
                lat: row.at.0,
                lng: row.at.1,
            },
            phone: row.phone.to_string(),
            operating_hours: row.hours.to_string(),
            services: row.services.iter().map(|s| s.to_string()).collect(),
            distance: None,
            is_live: false,
        })
        .collect()
});

/// The static facility directory, without distances.
pub fn directory() -> &'static [Facility] {
    &FACILITIES
}
