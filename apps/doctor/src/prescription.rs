//! Prescription and diagnosis form.
//!
//! Free-text fields backed by auto-suggestion catalogs, a medicine list
//! built entry by entry, and a one-way submit once the mandatory fields
//! are present.

use arogya_shared::notify::NotificationLog;

/// Which catalog a field draws suggestions from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuggestionKind {
    Medicine,
    Symptom,
    Diagnosis,
    Frequency,
    Duration,
}

pub static MEDICINES: &[&str] = &[
    "Paracetamol 500mg", "Paracetamol 650mg", "Amoxicillin 250mg", "Amoxicillin 500mg",
    "Ibuprofen 200mg", "Ibuprofen 400mg", "Aspirin 75mg", "Aspirin 300mg",
    "Diclofenac 50mg", "Diclofenac Gel", "Cetirizine 10mg", "Cetirizine Syrup",
    "Omeprazole 20mg", "Omeprazole 40mg", "Metformin 500mg", "Metformin 850mg",
    "Amlodipine 5mg", "Amlodipine 10mg", "Atorvastatin 10mg", "Atorvastatin 20mg",
    "Azithromycin 250mg", "Azithromycin 500mg", "Cough Syrup", "Antacid Syrup",
    "ORS Powder", "Iron Tablets", "Calcium Tablets", "Multivitamin",
];

pub static SYMPTOMS: &[&str] = &[
    "Fever with chills", "Fever without chills", "High grade fever", "Low grade fever",
    "Headache - frontal", "Headache - temporal", "Migraine headache", "Tension headache",
    "Dry cough", "Wet cough", "Productive cough", "Persistent cough",
    "Common cold symptoms", "Runny nose", "Blocked nose", "Sneezing",
    "Sore throat", "Throat pain", "Difficulty swallowing", "Hoarse voice",
    "Body ache", "Joint pain", "Muscle pain", "Back pain", "Chest pain",
    "Stomach pain", "Abdominal pain", "Gastric pain", "Burning sensation",
    "Nausea", "Vomiting", "Loose stools", "Diarrhea", "Constipation",
    "Fatigue", "Weakness", "Dizziness", "Loss of appetite",
];

pub static DIAGNOSES: &[&str] = &[
    "Upper Respiratory Tract Infection", "Lower Respiratory Tract Infection",
    "Viral Fever", "Bacterial Infection", "Common Cold", "Influenza",
    "Acute Gastroenteritis", "Gastritis", "Acid Peptic Disease",
    "Hypertension", "Diabetes Mellitus", "Hypertension with Diabetes",
    "Migraine", "Tension Headache", "Cervical Spondylosis",
    "Musculoskeletal Pain", "Lower Back Pain", "Arthritis",
    "Allergic Rhinitis", "Allergic Reaction", "Skin Allergy",
    "Nutritional Deficiency", "Dehydration", "Work-related Stress",
];

pub static FREQUENCIES: &[&str] = &[
    "Once daily", "Twice daily", "Three times daily", "Four times daily",
    "Every 4 hours", "Every 6 hours", "Every 8 hours", "Every 12 hours",
    "Before meals", "After meals", "With meals", "At bedtime", "As needed",
];

pub static DURATIONS: &[&str] = &[
    "3 days", "5 days", "7 days", "10 days", "14 days", "21 days", "30 days",
    "1 week", "2 weeks", "3 weeks", "1 month", "As needed", "Until symptoms resolve",
];

static DOSAGES: &[(&str, &[&str])] = &[
    ("Paracetamol", &["500mg", "650mg", "1g"]),
    ("Amoxicillin", &["250mg", "500mg", "875mg"]),
    ("Ibuprofen", &["200mg", "400mg", "600mg"]),
    ("Cetirizine", &["5mg", "10mg"]),
    ("Omeprazole", &["20mg", "40mg"]),
];

fn catalog(kind: SuggestionKind) -> &'static [&'static str] {
    match kind {
        SuggestionKind::Medicine => MEDICINES,
        SuggestionKind::Symptom => SYMPTOMS,
        SuggestionKind::Diagnosis => DIAGNOSES,
        SuggestionKind::Frequency => FREQUENCIES,
        SuggestionKind::Duration => DURATIONS,
    }
}

/// Case-insensitive substring match against a catalog, capped at five
/// suggestions. Empty input suggests nothing.
pub fn suggest(kind: SuggestionKind, input: &str) -> Vec<&'static str> {
    if input.is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    catalog(kind)
        .iter()
        .filter(|item| item.to_lowercase().contains(&needle))
        .take(5)
        .copied()
        .collect()
}

/// Dosage strengths known for a medicine family, matched by name prefix.
pub fn dosage_suggestions(medicine: &str) -> &'static [&'static str] {
    DOSAGES
        .iter()
        .find(|(family, _)| medicine.starts_with(family))
        .map_or(&[], |(_, dosages)| *dosages)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MedicineEntry {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
}

#[derive(Clone, Debug, Default)]
pub struct PrescriptionForm {
    pub patient_name: String,
    pub age: String,
    pub symptoms: String,
    pub diagnosis: String,
    pub instructions: String,
    pub current_medicine: MedicineEntry,
    medicines: Vec<MedicineEntry>,
    submitted: bool,
}

impl PrescriptionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn medicines(&self) -> &[MedicineEntry] {
        &self.medicines
    }

    /// An entry needs at least a name and dosage.
    pub fn can_add_medicine(&self) -> bool {
        !self.current_medicine.name.is_empty() && !self.current_medicine.dosage.is_empty()
    }

    pub fn add_medicine(&mut self) -> bool {
        if !self.can_add_medicine() {
            return false;
        }
        self.medicines.push(std::mem::take(&mut self.current_medicine));
        true
    }

    pub fn remove_medicine(&mut self, index: usize) {
        if index < self.medicines.len() {
            self.medicines.remove(index);
        }
    }

    /// Name, symptoms and diagnosis are mandatory; age, medicines and
    /// instructions are not.
    pub fn can_submit(&self) -> bool {
        !self.patient_name.is_empty() && !self.symptoms.is_empty() && !self.diagnosis.is_empty()
    }

    pub fn submit(&mut self, notices: &mut NotificationLog) -> bool {
        if self.can_submit() && !self.submitted {
            self.submitted = true;
            notices.success("Prescription submitted successfully!");
        }
        self.submitted
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Pre-fill the form with the walkthrough example.
    pub fn fill_demo(&mut self) {
        self.patient_name = "রাজু কুমার (Raju Kumar)".into();
        self.age = "32".into();
        self.symptoms = "Fever with chills, headache, body ache".into();
        self.diagnosis = "Viral Fever".into();
        self.medicines = vec![
            MedicineEntry {
                name: "Paracetamol 650mg".into(),
                dosage: "650mg".into(),
                frequency: "Three times daily".into(),
                duration: "5 days".into(),
            },
            MedicineEntry {
                name: "Cetirizine 10mg".into(),
                dosage: "10mg".into(),
                frequency: "Once daily".into(),
                duration: "3 days".into(),
            },
        ];
        self.instructions = "Take adequate rest, drink plenty of fluids, avoid cold foods. \
                             Return if fever persists beyond 3 days."
            .into();
    }
}
