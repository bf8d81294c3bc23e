//! Per-screen label tables.
//!
//! Each screen owns a typed table with one static per language, so a
//! missing label is a compile error rather than a runtime fallback.

use arogya_shared::i18n::Language;

/// Pick the table for the active language.
fn pick<T>(language: Language, en: &'static T, hi: &'static T, ml: &'static T) -> &'static T {
    match language {
        Language::En => en,
        Language::Hi => hi,
        Language::Ml => ml,
    }
}

pub struct LoginText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub enter_credentials: &'static str,
    pub aadhaar_number: &'static str,
    pub aadhaar_placeholder: &'static str,
    pub mobile_number: &'static str,
    pub mobile_placeholder: &'static str,
    pub send_otp: &'static str,
    pub face_scan: &'static str,
    pub face_scan_btn: &'static str,
    pub face_scan_complete: &'static str,
    pub login: &'static str,
    pub secure_login: &'static str,
    pub otp_face: &'static str,
}

pub fn login_text(language: Language) -> &'static LoginText {
    static EN: LoginText = LoginText {
        title: "Healthcare App",
        subtitle: "Kerala Migrant Workers Health Portal",
        enter_credentials: "Enter Credentials",
        aadhaar_number: "Aadhaar Number",
        aadhaar_placeholder: "XXXX XXXX XXXX",
        mobile_number: "Mobile Number",
        mobile_placeholder: "+91 XXXXX XXXXX",
        send_otp: "Send OTP",
        face_scan: "Face Scan Authentication",
        face_scan_btn: "Start Face Scan",
        face_scan_complete: "Face scan completed ✓",
        login: "Login",
        secure_login: "Secure login with Two-Factor Authentication",
        otp_face: "OTP + Face Scan",
    };
    static HI: LoginText = LoginText {
        title: "स्वास्थ्य सेवा ऐप",
        subtitle: "केरल प्रवासी श्रमिक स्वास्थ्य पोर्टल",
        enter_credentials: "प्रमाण पत्र दर्ज करें",
        aadhaar_number: "आधार संख्या",
        aadhaar_placeholder: "XXXX XXXX XXXX",
        mobile_number: "मोबाइल नंबर",
        mobile_placeholder: "+91 XXXXX XXXXX",
        send_otp: "OTP भेजें",
        face_scan: "चेहरा स्कैन प्रमाणीकरण",
        face_scan_btn: "चेहरा स्कैन शुरू करें",
        face_scan_complete: "चेहरा स्कैन पूरा ✓",
        login: "लॉगिन",
        secure_login: "दो-कारक प्रमाणीकरण के साथ सुरक्षित लॉगिन",
        otp_face: "OTP + चेहरा स्कैन",
    };
    static ML: LoginText = LoginText {
        title: "ആരോഗ്യ സേവന ആപ്പ്",
        subtitle: "കേരള കുടിയേറ്റ തൊഴിലാളികളുടെ ആരോഗ്യ പോർട്ടൽ",
        enter_credentials: "ക്രെഡൻഷ്യലുകൾ നൽകുക",
        aadhaar_number: "ആധാർ നമ്പർ",
        aadhaar_placeholder: "XXXX XXXX XXXX",
        mobile_number: "മൊബൈൽ നമ്പർ",
        mobile_placeholder: "+91 XXXXX XXXXX",
        send_otp: "OTP അയയ്ക്കുക",
        face_scan: "മുഖം സ്കാൻ പ്രാമാണീകരണം",
        face_scan_btn: "മുഖം സ്കാൻ ആരംഭിക്കുക",
        face_scan_complete: "മുഖം സ്കാൻ പൂർത്തിയായി ✓",
        login: "ലോഗിൻ",
        secure_login: "രണ്ട്-ഘടക പ്രാമാണീകരണത്തോടെ സുരക്ഷിത ലോഗിൻ",
        otp_face: "OTP + മുഖം സ്കാൻ",
    };
    pick(language, &EN, &HI, &ML)
}

pub struct HomeText {
    pub welcome: &'static str,
    pub doctor_name: &'static str,
    pub subtitle: &'static str,
    pub today_stats: &'static str,
    pub patients_consulted: &'static str,
    pub prescriptions_issued: &'static str,
    pub quick_actions: &'static str,
    pub access_patient_history: &'static str,
    pub access_patient_desc: &'static str,
    pub fill_prescription: &'static str,
    pub fill_prescription_desc: &'static str,
    pub logout: &'static str,
}

pub fn home_text(language: Language) -> &'static HomeText {
    static EN: HomeText = HomeText {
        welcome: "Welcome, Dr. ",
        doctor_name: "Priya Nair",
        subtitle: "Kerala Migrant Workers Health Portal",
        today_stats: "Today's Statistics",
        patients_consulted: "Patients Consulted",
        prescriptions_issued: "Prescriptions Issued",
        quick_actions: "Quick Actions",
        access_patient_history: "Access Patient History",
        access_patient_desc: "View patient medical records with consent",
        fill_prescription: "Fill Prescription & Diagnosis",
        fill_prescription_desc: "Create new medical prescriptions",
        logout: "Logout",
    };
    static HI: HomeText = HomeText {
        welcome: "स्वागत है, डॉ. ",
        doctor_name: "प्रिया नायर",
        subtitle: "केरल प्रवासी श्रमिक स्वास्थ्य पोर्टल",
        today_stats: "आज के आंकड़े",
        patients_consulted: "परामर्श लिए गए मरीज़",
        prescriptions_issued: "जारी की गई दवाएं",
        quick_actions: "त्वरित कार्य",
        access_patient_history: "रोगी का इतिहास देखें",
        access_patient_desc: "सहमति के साथ रोगी के चिकित्सा रिकॉर्ड देखें",
        fill_prescription: "नुस्खा और निदान भरें",
        fill_prescription_desc: "नए चिकित्सा नुस्खे बनाएं",
        logout: "लॉगआउट",
    };
    static ML: HomeText = HomeText {
        welcome: "സ്വാഗതം, ഡോ. ",
        doctor_name: "പ്രിയ നായർ",
        subtitle: "കേരള കുടിയേറ്റ തൊഴിലാളികളുടെ ആരോഗ്യ പോർട്ടൽ",
        today_stats: "ഇന്നത്തെ സ്ഥിതിവിവരക്കണക്കുകൾ",
        patients_consulted: "കൺസൾട്ട് ചെയ്ത രോഗികൾ",
        prescriptions_issued: "നൽകിയ കുറിപ്പടികൾ",
        quick_actions: "പെട്ടെന്നുള്ള പ്രവർത്തനങ്ങൾ",
        access_patient_history: "രോഗിയുടെ ചരിത്രം കാണുക",
        access_patient_desc: "സമ്മതത്തോടെ രോഗിയുടെ മെഡിക്കൽ റെക്കോർഡുകൾ കാണുക",
        fill_prescription: "കുറിപ്പടിയും രോഗനിർണയും പൂരിപ്പിക്കുക",
        fill_prescription_desc: "പുതിയ മെഡിക്കൽ കുറിപ്പടികൾ സൃഷ്ടിക്കുക",
        logout: "ലോഗൗട്ട്",
    };
    pick(language, &EN, &HI, &ML)
}

pub struct AccessText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub phone_number: &'static str,
    pub phone_placeholder: &'static str,
    pub send_otp: &'static str,
    pub otp_sent: &'static str,
    pub enter_otp: &'static str,
    pub otp_placeholder: &'static str,
    pub access_history: &'static str,
    pub consent_note: &'static str,
    pub invalid_otp: &'static str,
    pub back: &'static str,
}

pub fn access_text(language: Language) -> &'static AccessText {
    static EN: AccessText = AccessText {
        title: "Request Patient Access",
        subtitle: "Get patient consent to view medical records",
        phone_number: "Patient's Phone Number",
        phone_placeholder: "+91 XXXXX XXXXX",
        send_otp: "Send OTP Request",
        otp_sent: "OTP sent to patient",
        enter_otp: "Enter OTP received from patient",
        otp_placeholder: "XXXXXX",
        access_history: "Access Patient History",
        consent_note: "Patient consent is required to access medical records",
        invalid_otp: "Invalid OTP. Please try again.",
        back: "Back",
    };
    static HI: AccessText = AccessText {
        title: "रोगी की पहुंच का अनुरोध",
        subtitle: "चिकित्सा रिकॉर्ड देखने के लिए रोगी की सहमति प्राप्त करें",
        phone_number: "रोगी का फोन नंबर",
        phone_placeholder: "+91 XXXXX XXXXX",
        send_otp: "OTP अनुरोध भेजें",
        otp_sent: "रोगी को OTP भेजा गया",
        enter_otp: "रोगी से प्राप्त OTP दर्ज करें",
        otp_placeholder: "XXXXXX",
        access_history: "रोगी का इतिहास देखें",
        consent_note: "चिकित्सा रिकॉर्ड तक पहुंचने के लिए रोगी की सहमति आवश्यक है",
        invalid_otp: "अमान्य OTP। कृपया पुनः प्रयास करें।",
        back: "वापस",
    };
    static ML: AccessText = AccessText {
        title: "രോഗിയുടെ ആക്സസ് അഭ്യർത്ഥന",
        subtitle: "മെഡിക്കൽ റെക്കോർഡുകൾ കാണാൻ രോഗിയുടെ സമ്മതം നേടുക",
        phone_number: "രോഗിയുടെ ഫോൺ നമ്പർ",
        phone_placeholder: "+91 XXXXX XXXXX",
        send_otp: "OTP അഭ്യർത്ഥന അയയ്ക്കുക",
        otp_sent: "രോഗിക്ക് OTP അയച്ചു",
        enter_otp: "രോഗിയിൽ നിന്ന് ലഭിച്ച OTP നൽകുക",
        otp_placeholder: "XXXXXX",
        access_history: "രോഗിയുടെ ചരിത്രം കാണുക",
        consent_note: "മെഡിക്കൽ റെക്കോർഡുകൾ ആക്സസ് ചെയ്യാൻ രോഗിയുടെ സമ്മതം ആവശ്യമാണ്",
        invalid_otp: "അസാധുവായ OTP. ദയവായി വീണ്ടും ശ്രമിക്കുക.",
        back: "തിരികെ",
    };
    pick(language, &EN, &HI, &ML)
}

pub struct HistoryText {
    pub title: &'static str,
    pub patient_info: &'static str,
    pub name: &'static str,
    pub age: &'static str,
    pub gender: &'static str,
    pub worker_id: &'static str,
    pub blood_group: &'static str,
    pub allergies: &'static str,
    pub no_allergies: &'static str,
    pub recent_visits: &'static str,
    pub prescriptions: &'static str,
    pub vitals: &'static str,
    pub diagnosis: &'static str,
    pub treatment: &'static str,
    pub follow_up: &'static str,
    pub back: &'static str,
    pub male: &'static str,
    pub female: &'static str,
}

pub fn history_text(language: Language) -> &'static HistoryText {
    static EN: HistoryText = HistoryText {
        title: "Patient Medical History",
        patient_info: "Patient Information",
        name: "Name",
        age: "Age",
        gender: "Gender",
        worker_id: "Worker ID",
        blood_group: "Blood Group",
        allergies: "Allergies",
        no_allergies: "No known allergies",
        recent_visits: "Recent Medical Visits",
        prescriptions: "Prescriptions",
        vitals: "Vital Signs",
        diagnosis: "Diagnosis",
        treatment: "Treatment",
        follow_up: "Follow-up",
        back: "Back to Home",
        male: "Male",
        female: "Female",
    };
    static HI: HistoryText = HistoryText {
        title: "रोगी का चिकित्सा इतिहास",
        patient_info: "रोगी की जानकारी",
        name: "नाम",
        age: "आयु",
        gender: "लिंग",
        worker_id: "श्रमिक आईडी",
        blood_group: "रक्त समूह",
        allergies: "एलर्जी",
        no_allergies: "कोई ज्ञात एलर्जी नहीं",
        recent_visits: "हाल की चिकित्सा यात्राएं",
        prescriptions: "नुस्खे",
        vitals: "महत्वपूर्ण संकेत",
        diagnosis: "निदान",
        treatment: "उपचार",
        follow_up: "अनुवर्ती",
        back: "होम पर वापस",
        male: "पुरुष",
        female: "महिला",
    };
    static ML: HistoryText = HistoryText {
        title: "രോഗിയുടെ മെഡിക്കൽ ചരിത്രം",
        patient_info: "രോഗിയുടെ വിവരങ്ങൾ",
        name: "പേര്",
        age: "പ്രായം",
        gender: "ലിംഗം",
        worker_id: "തൊഴിലാളി ഐഡി",
        blood_group: "രക്തഗ്രൂപ്പ്",
        allergies: "അലർജികൾ",
        no_allergies: "അറിയാവുന്ന അലർജികളൊന്നുമില്ല",
        recent_visits: "സമീപകാല മെഡിക്കൽ സന്ദർശനങ്ങൾ",
        prescriptions: "കുറിപ്പടികൾ",
        vitals: "ജീവനാഡി അടയാളങ്ങൾ",
        diagnosis: "രോഗനിർണയം",
        treatment: "ചികിത്സ",
        follow_up: "ഫോളോ-അപ്പ്",
        back: "ഹോമിലേക്ക് മടങ്ങുക",
        male: "പുരുഷൻ",
        female: "സ്ത്രീ",
    };
    pick(language, &EN, &HI, &ML)
}

pub struct PrescriptionText {
    pub title: &'static str,
    pub patient_details: &'static str,
    pub patient_name: &'static str,
    pub age: &'static str,
    pub symptoms: &'static str,
    pub diagnosis: &'static str,
    pub prescriptions: &'static str,
    pub medicine_name: &'static str,
    pub dosage: &'static str,
    pub frequency: &'static str,
    pub duration: &'static str,
    pub add_medicine: &'static str,
    pub instructions: &'static str,
    pub submit: &'static str,
    pub submitted: &'static str,
    pub back: &'static str,
    pub fill_demo: &'static str,
}

pub fn prescription_text(language: Language) -> &'static PrescriptionText {
    static EN: PrescriptionText = PrescriptionText {
        title: "Prescription & Diagnosis Form",
        patient_details: "Patient Details",
        patient_name: "Patient Name",
        age: "Age",
        symptoms: "Symptoms",
        diagnosis: "Diagnosis",
        prescriptions: "Prescriptions",
        medicine_name: "Medicine Name",
        dosage: "Dosage",
        frequency: "Frequency",
        duration: "Duration",
        add_medicine: "Add Medicine",
        instructions: "Special Instructions",
        submit: "Submit Prescription",
        submitted: "Prescription submitted successfully!",
        back: "Back",
        fill_demo: "Fill Demo Data",
    };
    static HI: PrescriptionText = PrescriptionText {
        title: "नुस्खा और निदान फॉर्म",
        patient_details: "रोगी विवरण",
        patient_name: "रोगी का नाम",
        age: "आयु",
        symptoms: "लक्षण",
        diagnosis: "निदान",
        prescriptions: "नुस्खे",
        medicine_name: "दवा का नाम",
        dosage: "खुराक",
        frequency: "आवृत्ति",
        duration: "अवधि",
        add_medicine: "दवा जोड़ें",
        instructions: "विशेष निर्देश",
        submit: "नुस्खा जमा करें",
        submitted: "नुस्खा सफलतापूर्वक जमा किया गया!",
        back: "वापस",
        fill_demo: "डेमो डेटा भरें",
    };
    static ML: PrescriptionText = PrescriptionText {
        title: "കുറിപ്പടിയും രോഗനിർണയ ഫോമും",
        patient_details: "രോഗിയുടെ വിവരങ്ങൾ",
        patient_name: "രോഗിയുടെ പേര്",
        age: "പ്രായം",
        symptoms: "ലക്ഷണങ്ങൾ",
        diagnosis: "രോഗനിർണയം",
        prescriptions: "കുറിപ്പടികൾ",
        medicine_name: "മരുന്നിന്റെ പേര്",
        dosage: "ഡോസേജ്",
        frequency: "ആവൃത്തി",
        duration: "കാലാവധി",
        add_medicine: "മരുന്ന് ചേർക്കുക",
        instructions: "പ്രത്യേക നിർദേശങ്ങൾ",
        submit: "കുറിപ്പടി സമർപ്പിക്കുക",
        submitted: "കുറിപ്പടി വിജയകരമായി സമർപ്പിച്ചു!",
        back: "തിരികെ",
        fill_demo: "ഡെമോ ഡാറ്റ പൂരിപ്പിക്കുക",
    };
    pick(language, &EN, &HI, &ML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_language_gets_its_own_table() {
        assert_eq!(login_text(Language::En).login, "Login");
        assert_eq!(login_text(Language::Hi).login, "लॉगिन");
        assert_eq!(login_text(Language::Ml).login, "ലോഗിൻ");
        assert_eq!(home_text(Language::En).doctor_name, "Priya Nair");
        assert_eq!(access_text(Language::Hi).back, "वापस");
        assert_eq!(history_text(Language::Ml).back, "ഹോമിലേക്ക് മടങ്ങുക");
        assert_eq!(
            prescription_text(Language::En).submitted,
            "Prescription submitted successfully!"
        );
    }
}
