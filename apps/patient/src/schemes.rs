//! Government health scheme catalog and the guided application flow.
//!
//! The catalog is static reference data shipped with the app. The
//! application flow walks the scheme's published steps one at a time;
//! submission is simulated and one-way.

use arogya_shared::i18n::{Language, LocalizedList, LocalizedText};
use arogya_shared::notify::NotificationLog;

#[derive(Clone, Copy, Debug)]
pub struct HealthScheme {
    pub id: u32,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub coverage: &'static str,
    pub processing_time: &'static str,
    pub eligibility: LocalizedList,
    pub documents: LocalizedList,
    pub steps: LocalizedList,
}

pub const HELPLINE: &str = "1800-111-565";

/// Look a scheme up by id.
pub fn scheme(id: u32) -> Option<&'static HealthScheme> {
    SCHEMES.iter().find(|s| s.id == id)
}

pub static SCHEMES: [HealthScheme; 4] = [
    HealthScheme {
        id: 1,
        title: LocalizedText {
            en: "Ayushman Bharat Pradhan Mantri Jan Arogya Yojana",
            hi: "आयुष्मान भारत प्रधानमंत्री जन आरोग्य योजना",
            ml: "ആയുഷ്മാൻ ഭാരത് പ്രധാനമന്ത്രി ജൻ ആരോഗ്യ യോജന",
        },
        description: LocalizedText {
            en: "Free healthcare coverage up to ₹5 lakh per family per year",
            hi: "प्रति परिवार प्रति वर्ष ₹5 लाख तक का मुफ्त स्वास्थ्य कवरेज",
            ml: "പ്രതി കുടുംബത്തിന് പ്രതിവർഷം ₹5 ലക്ഷം വരെ സൗജന്യ ആരോഗ്യ കവറേജ്",
        },
        coverage: "₹5,00,000",
        processing_time: "15-30 days",
        eligibility: LocalizedList {
            en: &[
                "Annual family income below ₹2.5 lakh",
                "BPL card holder",
                "Listed in SECC 2011 database",
            ],
            hi: &[
                "वार्षिक पारिवारिक आय ₹2.5 लाख से कम",
                "BPL कार्ड धारक",
                "SECC 2011 डेटाबेस में सूचीबद्ध",
            ],
            ml: &[
                "വാർഷിക കുടുംബ വരുമാനം ₹2.5 ലക്ഷത്തിൽ താഴെ",
                "BPL കാർഡ് ഉടമ",
                "SECC 2011 ഡാറ്റാബേസിൽ ലിസ്റ്റ് ചെയ്തിട്ടുള്ളത്",
            ],
        },
        documents: LocalizedList {
            en: &[
                "Aadhaar Card",
                "Ration Card",
                "Income Certificate",
                "Bank Account Details",
                "Mobile Number",
            ],
            hi: &[
                "आधार कार्ड",
                "राशन कार्ड",
                "आय प्रमाण पत्र",
                "बैंक खाते की जानकारी",
                "मोबाइल नंबर",
            ],
            ml: &[
                "ആധാർ കാർഡ്",
                "റേഷൻ കാർഡ്",
                "വരുമാന സർട്ടിഫിക്കറ്റ്",
                "ബാങ്ക് അക്കൗണ്ട് വിശദാംശങ്ങൾ",
                "മൊബൈൽ നമ്പർ",
            ],
        },
        steps: LocalizedList {
            en: &[
                "Visit nearest Common Service Center (CSC)",
                "Fill application form with required details",
                "Submit documents for verification",
                "Biometric authentication",
                "Pay application fee (if applicable)",
                "Receive acknowledgment receipt",
                "Wait for verification process",
                "Collect Ayushman card from CSC",
            ],
            hi: &[
                "निकटतम कॉमन सर्विस सेंटर (CSC) पर जाएं",
                "आवश्यक विवरण के साथ आवेदन पत्र भरें",
                "सत्यापन के लिए दस्तावेज जमा करें",
                "बायोमेट्रिक प्रमाणीकरण",
                "आवेदन शुल्क का भुगतान करें (यदि लागू हो)",
                "पावती रसीद प्राप्त करें",
                "सत्यापन प्रक्रिया की प्रतीक्षा करें",
                "CSC से आयुष्मान कार्ड एकत्र करें",
            ],
            ml: &[
                "അടുത്തുള്ള കോമൺ സർവീസ് സെന്റർ (CSC) സന്ദർശിക്കുക",
                "ആവശ്യമായ വിവരങ്ങൾ സഹിതം അപേക്ഷാ ഫോം പൂരിപ്പിക്കുക",
                "സാക്ഷ്യപത്രീകരണത്തിനായി രേഖകൾ സമർപ്പിക്കുക",
                "ബയോമെട്രിക് ആധികാരികത",
                "അപേക്ഷാ ഫീസ് അടയ്ക്കുക (ബാധകമെങ്കിൽ)",
                "സ്വീകാര്യത രസീത് സ്വീകരിക്കുക",
                "സാക്ഷ്യപത്രീകരണ പ്രക്രിയയ്ക്കായി കാത്തിരിക്കുക",
                "CSC-യിൽ നിന്ന് ആയുഷ്മാൻ കാർഡ് ശേഖരിക്കുക",
            ],
        },
    },
    HealthScheme {
        id: 2,
        title: LocalizedText {
            en: "Kerala State Health Insurance Scheme",
            hi: "केरल राज्य स्वास्थ्य बीमा योजना",
            ml: "കേരള സംസ്ഥാന ആരോഗ്യ ഇൻഷുറൻസ് പദ്ധതി",
        },
        description: LocalizedText {
            en: "Comprehensive health insurance for Kerala residents",
            hi: "केरल निवासियों के लिए व्यापक स्वास्थ्य बीमा",
            ml: "കേരള നിവാസികൾക്ക് സമഗ്ര ആരോഗ്യ ഇൻഷുറൻസ്",
        },
        coverage: "₹2,00,000",
        processing_time: "7-15 days",
        eligibility: LocalizedList {
            en: &[
                "Kerala resident",
                "Income below specified limit",
                "Age between 18-65 years",
            ],
            hi: &[
                "केरल निवासी",
                "निर्दिष्ट सीमा से कम आय",
                "18-65 वर्ष की आयु",
            ],
            ml: &[
                "കേരള നിവാസി",
                "നിർദ്ദിഷ്ട പരിധിയിൽ താഴെയുള്ള വരുമാനം",
                "18-65 വയസ് പ്രായം",
            ],
        },
        documents: LocalizedList {
            en: &[
                "Aadhaar Card",
                "Kerala Residence Certificate",
                "Income Certificate",
                "Passport Size Photos",
            ],
            hi: &[
                "आधार कार्ड",
                "केरल निवास प्रमाण पत्र",
                "आय प्रमाण पत्र",
                "पासपोर्ट साइज फोटो",
            ],
            ml: &[
                "ആധാർ കാർഡ്",
                "കേരള റെസിഡൻസ് സർട്ടിഫിക്കറ്റ്",
                "വരുമാന സർട്ടിഫിക്കറ്റ്",
                "പാസ്പോർട്ട് സൈസ് ഫോട്ടോകൾ",
            ],
        },
        steps: LocalizedList {
            en: &[
                "Visit Kerala Health Insurance portal online",
                "Create account with mobile number",
                "Fill online application form",
                "Upload required documents",
                "Pay premium amount",
                "Submit application for review",
                "Get policy confirmation via SMS",
                "Download policy document",
            ],
            hi: &[
                "केरल स्वास्थ्य बीमा पोर्टल पर ऑनलाइन जाएं",
                "मोबाइल नंबर से खाता बनाएं",
                "ऑनलाइन आवेदन पत्र भरें",
                "आवश्यक दस्तावेज अपलोड करें",
                "प्रीमियम राशि का भुगतान करें",
                "समीक्षा के लिए आवेदन जमा करें",
                "SMS के द्वारा पॉलिसी की पुष्टि प्राप्त करें",
                "पॉलिसी दस्तावेज डाउनलोड करें",
            ],
            ml: &[
                "കേരള ഹെൽത്ത് ഇൻഷുറൻസ് പോർട്ടൽ ഓൺലൈനായി സന്ദർശിക്കുക",
                "മൊബൈൽ നമ്പർ ഉപയോഗിച്ച് അക്കൗണ്ട് സൃഷ്ടിക്കുക",
                "ഓൺലൈൻ അപേക്ഷാ ഫോം പൂരിപ്പിക്കുക",
                "ആവശ്യമായ രേഖകൾ അപ്ലോഡ് ചെയ്യുക",
                "പ്രീമിയം തുക അടയ്ക്കുക",
                "അവലോകനത്തിനായി അപേക്ഷ സമർപ്പിക്കുക",
                "SMS വഴി പോളിസി സ്ഥിരീകരണം നേടുക",
                "പോളിസി രേഖ ഡൗൺലോഡ് ചെയ്യുക",
            ],
        },
    },
    HealthScheme {
        id: 3,
        title: LocalizedText {
            en: "Migrant Worker Health Scheme",
            hi: "प्रवासी श्रमिक स्वास्थ्य योजना",
            ml: "കുടിയേറ്റ തൊഴിലാളി ആരോഗ്യ പദ്ധതി",
        },
        description: LocalizedText {
            en: "Special health coverage for migrant workers in Kerala",
            hi: "केरल में प्रवासी श्रमिकों के लिए विशेष स्वास्थ्य कवरेज",
            ml: "കേരളത്തിലെ കുടിയേറ്റ തൊഴിലാളികൾക്ക് പ്രത്യേക ആരോഗ്യ കവറേജ്",
        },
        coverage: "₹1,00,000",
        processing_time: "3-7 days",
        eligibility: LocalizedList {
            en: &[
                "Migrant worker in Kerala",
                "Valid employment certificate",
                "Age between 18-60 years",
            ],
            hi: &[
                "केरल में प्रवासी श्रमिक",
                "वैध रोजगार प्रमाण पत्र",
                "18-60 वर्ष की आयु",
            ],
            ml: &[
                "കേരളത്തിലെ കുടിയേറ്റ തൊഴിലാളി",
                "സാധുവായ തൊഴിൽ സർട്ടിഫിക്കറ്റ്",
                "18-60 വയസ് പ്രായം",
            ],
        },
        documents: LocalizedList {
            en: &[
                "Aadhaar Card",
                "Employment Certificate",
                "Labour Card",
                "Address Proof in Kerala",
            ],
            hi: &[
                "आधार कार्ड",
                "रोजगार प्रमाण पत्र",
                "श्रमिक कार्ड",
                "केरल में पता प्रमाण",
            ],
            ml: &[
                "ആധാർ കാർഡ്",
                "തൊഴിൽ സർട്ടിഫിക്കറ്റ്",
                "ലേബർ കാർഡ്",
                "കേരളത്തിലെ വിലാസ പ്രൂഫ്",
            ],
        },
        steps: LocalizedList {
            en: &[
                "Visit nearest Primary Health Center (PHC)",
                "Meet with health worker or ANM",
                "Fill registration form",
                "Submit employment and identity documents",
                "Get health card issued immediately",
                "Receive SMS confirmation",
                "Start using benefits at registered hospitals",
            ],
            hi: &[
                "निकटतम प्राथमिक स्वास्थ्य केंद्र (PHC) पर जाएं",
                "स्वास्थ्य कार्यकर्ता या ANM से मिलें",
                "पंजीकरण फॉर्म भरें",
                "रोजगार और पहचान दस्तावेज जमा करें",
                "तुरंत स्वास्थ्य कार्ड जारी करवाएं",
                "SMS पुष्टि प्राप्त करें",
                "पंजीकृत अस्पतालों में लाभ का उपयोग शुरू करें",
            ],
            ml: &[
                "അടുത്തുള്ള പ്രൈമറി ഹെൽത്ത് സെന്റർ (PHC) സന്ദർശിക്കുക",
                "ഹെൽത്ത് വർക്കർ അല്ലെങ്കിൽ ANM-നെ കാണുക",
                "രജിസ്ട്രേഷൻ ഫോം പൂരിപ്പിക്കുക",
                "തൊഴിൽ, ഐഡന്റിറ്റി രേഖകൾ സമർപ്പിക്കുക",
                "ഉടനടി ഹെൽത്ത് കാർഡ് നേടുക",
                "SMS സ്ഥിരീകരണം സ്വീകരിക്കുക",
                "രജിസ്റ്റർ ചെയ്ത ആശുപത്രികളിൽ ആനുകൂല്യങ്ങൾ ഉപയോഗിക്കാൻ തുടങ്ങുക",
            ],
        },
    },
    HealthScheme {
        id: 4,
        title: LocalizedText {
            en: "Janani Suraksha Yojana",
            hi: "जननी सुरक्षा योजना",
            ml: "ജനനി സുരക്ഷാ യോജന",
        },
        description: LocalizedText {
            en: "Maternity benefit scheme for safe delivery",
            hi: "सुरक्षित प्रसव के लिए मातृत्व लाभ योजना",
            ml: "സുരക്ഷിത പ്രസവത്തിനായുള്ള മാതൃത്വ ആനുകൂല്യ പദ്ധതി",
        },
        coverage: "₹1,400 - ₹6,000",
        processing_time: "Immediate",
        eligibility: LocalizedList {
            en: &["Pregnant woman", "BPL family", "Age 19 years or above"],
            hi: &["गर्भवती महिला", "BPL परिवार", "19 वर्ष या उससे अधिक आयु"],
            ml: &[
                "ഗർഭിണി",
                "BPL കുടുംബം",
                "19 വയസ് അല്ലെങ്കിൽ അതിനു മുകളിൽ പ്രായം",
            ],
        },
        documents: LocalizedList {
            en: &[
                "Aadhaar Card",
                "BPL Card",
                "Pregnancy Certificate",
                "Bank Account Details",
            ],
            hi: &[
                "आधार कार्ड",
                "BPL कार्ड",
                "गर्भावस्था प्रमाण पत्र",
                "बैंक खाते की जानकारी",
            ],
            ml: &[
                "ആധാർ കാർഡ്",
                "BPL കാർഡ്",
                "ഗർഭാവസ്ഥാ സർട്ടിഫിക്കറ്റ്",
                "ബാങ്ക് അക്കൗണ്ട് വിശദാംശങ്ങൾ",
            ],
        },
        steps: LocalizedList {
            en: &[
                "Visit ASHA worker during pregnancy",
                "Register for ante-natal care",
                "Fill JSY registration form",
                "Submit required documents",
                "Attend regular check-ups",
                "Deliver at government facility",
                "Receive cash incentive after delivery",
                "Continue post-natal care",
            ],
            hi: &[
                "गर्भावस्था के दौरान ASHA कार्यकर्ता से मिलें",
                "प्रसवपूर्व देखभाल के लिए पंजीकरण करें",
                "JSY पंजीकरण फॉर्म भरें",
                "आवश्यक दस्तावेज जमा करें",
                "नियमित जांच में भाग लें",
                "सरकारी सुविधा में प्रसव करें",
                "प्रसव के बाद नकद प्रोत्साहन प्राप्त करें",
                "प्रसवोत्तर देखभाल जारी रखें",
            ],
            ml: &[
                "ഗർഭകാലത്ത് ASHA വർക്കറെ കാണുക",
                "പ്രസവത്തിനു മുമ്പുള്ള പരിചരണത്തിനായി രജിസ്റ്റർ ചെയ്യുക",
                "JSY രജിസ്ട്രേഷൻ ഫോം പൂരിപ്പിക്കുക",
                "ആവശ്യമായ രേഖകൾ സമർപ്പിക്കുക",
                "പതിവ് പരിശോധനകളിൽ പങ്കെടുക്കുക",
                "സർക്കാർ സൗകര്യത്തിൽ പ്രസവിക്കുക",
                "പ്രസവത്തിനു ശേഷം പണ പ്രോത്സാഹനം സ്വീകരിക്കുക",
                "പ്രസവാനന്തര പരിചരണം തുടരുക",
            ],
        },
    },
];

/// What the scheme screen is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplicationView {
    /// The id matched no catalog entry; only "go back" is offered.
    NotFound,
    /// The informational detail view.
    Details,
    /// Walking the published steps, 1-based.
    Step { number: usize, total: usize },
    /// Application submitted. Terminal.
    Submitted,
}

/// Guided walk through one scheme's application steps.
#[derive(Clone, Copy, Debug)]
pub struct SchemeApplication {
    scheme: Option<&'static HealthScheme>,
    step: usize,
    submitted: bool,
}

impl SchemeApplication {
    pub fn open(id: u32) -> Self {
        Self {
            scheme: scheme(id),
            step: 0,
            submitted: false,
        }
    }

    pub fn scheme(&self) -> Option<&'static HealthScheme> {
        self.scheme
    }

    pub fn view(&self) -> ApplicationView {
        let Some(scheme) = self.scheme else {
            return ApplicationView::NotFound;
        };
        if self.submitted {
            ApplicationView::Submitted
        } else if self.step == 0 {
            ApplicationView::Details
        } else {
            ApplicationView::Step {
                number: self.step,
                total: scheme.steps.en.len(),
            }
        }
    }

    /// Move from the details view onto step 1.
    pub fn start(&mut self) {
        if self.scheme.is_some() && !self.submitted && self.step == 0 {
            self.step = 1;
        }
    }

    /// Mark the current step complete. The final step submits and
    /// leaves the confirmation notice.
    pub fn next(&mut self, notices: &mut NotificationLog) {
        let Some(scheme) = self.scheme else {
            return;
        };
        if self.submitted || self.step == 0 {
            return;
        }
        if self.step < scheme.steps.en.len() {
            self.step += 1;
        } else {
            self.submitted = true;
            notices.success("Application submitted successfully!");
        }
    }

    /// Abandon the walk and return to the details view. Submission is
    /// not undone.
    pub fn back_to_details(&mut self) {
        if !self.submitted {
            self.step = 0;
        }
    }

    /// Progress through the steps as a percentage.
    pub fn progress_percent(&self) -> u8 {
        match self.view() {
            ApplicationView::Step { number, total } => ((number * 100) / total) as u8,
            ApplicationView::Submitted => 100,
            _ => 0,
        }
    }

    pub fn current_step_text(&self, language: Language) -> Option<&'static str> {
        let scheme = self.scheme?;
        if self.step == 0 || self.submitted {
            return None;
        }
        scheme.steps.get(language).get(self.step - 1).copied()
    }
}
