//! Demo medical history unlocked by a granted consent request.

#[derive(Clone, Copy, Debug)]
pub struct Vitals {
    pub bp: &'static str,
    pub temperature: &'static str,
    pub pulse: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Visit {
    pub date: &'static str,
    pub diagnosis: &'static str,
    pub treatment: &'static str,
    pub prescriptions: &'static [&'static str],
    pub vitals: Vitals,
    pub follow_up: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct PatientRecord {
    pub name: &'static str,
    pub age: u8,
    pub worker_id: &'static str,
    pub blood_group: &'static str,
    pub allergies: &'static [&'static str],
    pub visits: &'static [Visit],
}

pub static PATIENT_RECORD: PatientRecord = PatientRecord {
    name: "രാജു കുമാർ (Raju Kumar)",
    age: 32,
    worker_id: "KL-MW-2024-1234",
    blood_group: "B+",
    allergies: &["Penicillin", "Dust"],
    visits: &[
        Visit {
            date: "2024-01-10",
            diagnosis: "Upper Respiratory Infection",
            treatment: "Prescribed antibiotics and rest",
            prescriptions: &["Amoxicillin 500mg", "Paracetamol 650mg"],
            vitals: Vitals {
                bp: "120/80",
                temperature: "99.2°F",
                pulse: "78 bpm",
            },
            follow_up: "7 days",
        },
        Visit {
            date: "2023-12-15",
            diagnosis: "Back Pain (Work-related)",
            treatment: "Muscle relaxants and physiotherapy",
            prescriptions: &["Diclofenac 50mg", "Muscle relaxant"],
            vitals: Vitals {
                bp: "115/75",
                temperature: "98.6°F",
                pulse: "72 bpm",
            },
            follow_up: "14 days",
        },
        Visit {
            date: "2023-11-22",
            diagnosis: "Routine Health Checkup",
            treatment: "Preventive care counseling",
            prescriptions: &["Multivitamin", "Calcium supplement"],
            vitals: Vitals {
                bp: "118/78",
                temperature: "98.4°F",
                pulse: "75 bpm",
            },
            follow_up: "6 months",
        },
    ],
};
