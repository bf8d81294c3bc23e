//! Demo health record shown on the profile screen.
//!
//! Static reference data standing in for a records backend.

use crate::family::Gender;

#[derive(Clone, Copy, Debug)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub age: u8,
    pub gender: Gender,
    pub blood_group: &'static str,
    pub aadhaar: &'static str,
    pub mobile: &'static str,
    pub address: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Prescription {
    pub date: &'static str,
    pub doctor: &'static str,
    pub hospital: &'static str,
    pub medicines: &'static [&'static str],
    pub diagnosis: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportStatus {
    Normal,
    NeedsAttention,
}

#[derive(Clone, Copy, Debug)]
pub struct HealthReport {
    pub date: &'static str,
    pub kind: &'static str,
    pub hospital: &'static str,
    pub status: ReportStatus,
    pub notes: &'static str,
}

pub static PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Ravi Kumar",
    age: 32,
    gender: Gender::Male,
    blood_group: "B+",
    aadhaar: "1234-5678-9012",
    mobile: "+91 98765 43210",
    address: "Construction Site, Kochi, Kerala",
};

pub static PRESCRIPTIONS: [Prescription; 2] = [
    Prescription {
        date: "2024-01-15",
        doctor: "Dr. Sreekumar",
        hospital: "Kochi General Hospital",
        medicines: &["Paracetamol 500mg", "Cough Syrup"],
        diagnosis: "Common Cold",
    },
    Prescription {
        date: "2024-01-08",
        doctor: "Dr. Priya Nair",
        hospital: "Primary Health Center",
        medicines: &["Antibiotic Course", "Vitamin D3"],
        diagnosis: "Minor Infection",
    },
];

pub static HEALTH_REPORTS: [HealthReport; 2] = [
    HealthReport {
        date: "2024-01-10",
        kind: "Blood Test",
        hospital: "Kochi Lab Center",
        status: ReportStatus::Normal,
        notes: "All parameters within normal range",
    },
    HealthReport {
        date: "2023-12-20",
        kind: "Chest X-Ray",
        hospital: "Government Hospital",
        status: ReportStatus::Normal,
        notes: "No abnormalities detected",
    },
];
