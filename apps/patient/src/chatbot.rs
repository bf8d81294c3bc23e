//! Keyword-matching health assistant.
//!
//! Replies come from a fixed table keyed on the first matching topic,
//! checked in a fixed priority order so a message naming several topics
//! gets the highest-priority reply. A randomized thinking pause delays
//! delivery but never changes which reply is chosen.

use std::collections::VecDeque;

use arogya_shared::i18n::{Language, LocalizedText};
use arogya_shared::notify::NotificationLog;
use arogya_shared::sim::{Delay, Millis};
use arogya_shared::speech::{SpeechError, SpeechInput, SpeechOutput};
use chrono::{DateTime, Utc};
use rand::Rng;

/// Topics the assistant can answer, in matching priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    Schemes,
    Medicines,
    Emergency,
    Doctor,
    General,
}

/// Keyword sets cover all three input languages at once, so a Hindi
/// question is understood even while the interface is in English.
fn keywords(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Schemes => &["scheme", "योजना", "പദ്ധതി"],
        Topic::Medicines => &["medicine", "दवा", "മരുന്ന്"],
        Topic::Emergency => &["emergency", "आपातकाल", "അടിയന്തിരം"],
        Topic::Doctor => &["doctor", "डॉक्टर", "ഡോക്ടർ"],
        Topic::General => &[],
    }
}

/// Pick the reply topic for a message.
pub fn classify(message: &str) -> Topic {
    let message = message.to_lowercase();
    for topic in [
        Topic::Schemes,
        Topic::Medicines,
        Topic::Emergency,
        Topic::Doctor,
    ] {
        if keywords(topic).iter().any(|k| message.contains(k)) {
            return topic;
        }
    }
    Topic::General
}

/// Canned reply for a topic in the active interface language.
pub fn reply(topic: Topic, language: Language) -> &'static str {
    let text = match topic {
        Topic::Schemes => LocalizedText {
            en: "Kerala's main health schemes include: Ardram, Amrutam, Janani Suraksha Yojana. For detailed information about these schemes, check \"Healthcare Policies\" in the main menu.",
            hi: "केरल में मुख्य स्वास्थ्य योजनाएं हैं: आर्द्रम्, अमृतम्, जनानी सुरक्षा योजना। इन सभी योजनाओं के बारे में अधिक जानकारी के लिए मुख्य मेनू में \"स्वास्थ्य योजनाएं\" देखें।",
            ml: "കേരളത്തിലെ പ്രധാന ആരോഗ്യ പദ്ധതികൾ: ആർദ്രം, അമൃതം, ജനനി സുരക്ഷാ യോജന. ഈ പദ്ധതികളെക്കുറിച്ച് കൂടുതൽ അറിയാൻ മെയിൻ മെനുവിലെ \"ആരോഗ്യ പദ്ധതികൾ\" കാണുക.",
        },
        Topic::Medicines => LocalizedText {
            en: "For medicines: 1) Visit Jan Aushadhi centers for affordable medicines 2) Free medicines available at government hospitals 3) Call 108 for emergency. Always carry your prescription.",
            hi: "दवाओं के लिए: 1) जन औषधि केंद्र में जाएं 2) सरकारी अस्पतालों में मुफ्त दवाएं मिलती हैं 3) आपातकाल में 108 पर कॉल करें। प्रिस्क्रिप्शन हमेशा साथ रखें।",
            ml: "മരുന്നുകൾക്കായി: 1) ജൻ ഔഷധി കേന്ദ്രത്തിൽ പോകുക 2) സർക്കാർ ആശുപത്രികളിൽ സൗജന്യ മരുന്നുകൾ 3) അടിയന്തിരാവസ്ഥയിൽ 108 ൽ വിളിക്കുക. കുറിപ്പ് എപ്പോഴും കൈവശം വയ്ക്കുക.",
        },
        Topic::Emergency => LocalizedText {
            en: "For emergency, immediately call 108. This is a free ambulance service. In serious condition, go to the nearest government hospital.",
            hi: "आपातकाल के लिए तुरंत 108 पर कॉल करें। यह निःशुल्क एम्बुलेंस सेवा है। गंभीर स्थिति में निकटतम सरकारी अस्पताल जाएं।",
            ml: "അടിയന്തിരാവസ്ഥയ്ക്ക് ഉടൻ 108 ൽ വിളിക്കുക. ഇത് സൗജന്യ ആംബുലൻസ് സേവനമാണ്. ഗുരുതരാവസ്ഥയിൽ അടുത്തുള്ള സർക്കാർ ആശുപത്രിയിൽ പോകുക.",
        },
        Topic::Doctor => LocalizedText {
            en: "To see a doctor: 1) First visit PHC (Primary Health Center) 2) Book online appointments 3) Specialist doctors available at government hospitals.",
            hi: "डॉक्टर से मिलने के लिए: 1) सबसे पहले PHC जाएं 2) ऑनलाइन अपॉइंटमेंट बुक करें 3) सरकारी अस्पतालों में विशेषज्ञ डॉक्टर मिलते हैं।",
            ml: "ഡോക്ടറെ കാണാൻ: 1) ആദ്യം PHC യിൽ പോകുക 2) ഓൺലൈൻ അപ്പോയിന്റ്മെന്റ് ബുക്ക് ചെയ്യുക 3) സർക്കാർ ആശുപത്രികളിൽ സ്പെഷ്യലിസ്റ്റ് ഡോക്ടർമാർ ലഭ്യമാണ്.",
        },
        Topic::General => LocalizedText {
            en: "I'd like to help you. Please ask about health schemes, medicines, doctor appointments, or emergency services.",
            hi: "मैं आपकी सहायता करना चाहता हूं। कृपया स्वास्थ्य योजनाओं, दवाओं, डॉक्टर की अपॉइंटमेंट या आपातकालीन सेवाओं के बारे में पूछें।",
            ml: "എനിക്ക് നിങ്ങളെ സഹായിക്കാൻ താൽപ്പര്യമുണ്ട്. ആരോഗ്യ പദ്ധതികൾ, മരുന്നുകൾ, ഡോക്ടർ അപ്പോയിന്റ്മെന്റ് അല്ലെങ്കിൽ അടിയന്തിര സേവനങ്ങളെക്കുറിച്ച് ചോദിക്കുക.",
        },
    };
    text.get(language)
}

/// Greeting seeded as the first message of every chat.
pub fn welcome(language: Language) -> &'static str {
    let text = LocalizedText {
        en: "Hello! I'm your healthcare assistant. I can help you with health schemes, medicines, and general health questions. You can talk to me or type your questions.",
        hi: "नमस्ते! मैं आपका स्वास्थ्य सहायक हूँ। मैं स्वास्थ्य योजनाओं, दवाओं, और सामान्य स्वास्थ्य प्रश्नों में आपकी सहायता कर सकता हूँ। आप मुझसे बात कर सकते हैं या टाइप कर सकते हैं।",
        ml: "നമസ്കാരം! ഞാൻ നിങ്ങളുടെ ആരോഗ്യ സഹായിയാണ്. ആരോഗ്യ പദ്ധതികൾ, മരുന്നുകൾ, പൊതു ആരോഗ്യ ചോദ്യങ്ങൾ എന്നിവയിൽ സഹായിക്കാൻ എനിക്ക് കഴിയും. നിങ്ങൾക്ക് എന്നോട് സംസാരിക്കാം അല്ലെങ്കിൽ ടൈപ് ചെയ്യാം.",
    };
    text.get(language)
}

/// One-tap starter questions offered while the chat is empty.
pub struct QuickQuestion {
    pub label: LocalizedText,
    pub query: LocalizedText,
}

pub static QUICK_QUESTIONS: [QuickQuestion; 3] = [
    QuickQuestion {
        label: LocalizedText {
            en: "Health Schemes",
            hi: "स्वास्थ्य योजनाएं",
            ml: "ആരോഗ്യ പദ്ധതികൾ",
        },
        query: LocalizedText {
            en: "Tell me about health schemes",
            hi: "स्वास्थ्य योजनाओं के बारे में बताएं",
            ml: "ആരോഗ്യ പദ്ധതികളെക്കുറിച്ച് പറയുക",
        },
    },
    QuickQuestion {
        label: LocalizedText {
            en: "Where to get medicines",
            hi: "दवा कहां मिलेगी",
            ml: "മരുന്ന് എവിടെ കിട്ടും",
        },
        query: LocalizedText {
            en: "Where to buy medicines",
            hi: "दवा कहां से खरीदूं",
            ml: "മരുന്ന് എവിടെ നിന്ന് വാങ്ങാം",
        },
    },
    QuickQuestion {
        label: LocalizedText {
            en: "Emergency",
            hi: "आपातकाल",
            ml: "അടിയന്തിരം",
        },
        query: LocalizedText {
            en: "What to do in emergency",
            hi: "आपातकाल में क्या करें",
            ml: "അടിയന്തിരാവസ്ഥയിൽ എന്ത് ചെയ്യണം",
        },
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub at: DateTime<Utc>,
    pub via_voice: bool,
}

/// One running conversation.
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    input: String,
    pending: VecDeque<(Delay, &'static str)>,
    voice_enabled: bool,
    mic_available: bool,
    input_via_voice: bool,
}

impl ChatSession {
    pub fn new(language: Language) -> Self {
        let mut session = Self {
            messages: Vec::new(),
            input: String::new(),
            pending: VecDeque::new(),
            voice_enabled: true,
            mic_available: true,
            input_via_voice: false,
        };
        session.push(Sender::Bot, welcome(language).to_owned(), false);
        session
    }

    fn push(&mut self, sender: Sender, text: String, via_voice: bool) {
        self.messages.push(ChatMessage {
            id: self.messages.len() as u64 + 1,
            sender,
            text,
            at: Utc::now(),
            via_voice,
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Quick questions only show before the first user message.
    pub fn show_quick_questions(&self) -> bool {
        self.messages.len() == 1
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_owned();
        self.input_via_voice = false;
    }

    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }

    pub fn toggle_voice(&mut self) {
        self.voice_enabled = !self.voice_enabled;
    }

    /// A reply is still in its thinking pause.
    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// The microphone control stays hidden once recognition turned out
    /// to be unsupported.
    pub fn mic_available(&self) -> bool {
        self.mic_available
    }

    /// Fill the input field from speech instead of the keyboard. A
    /// failure is noticed; an unsupported recognizer additionally
    /// disables the control, so it is noticed only once.
    pub fn voice_input(
        &mut self,
        recognizer: &mut dyn SpeechInput,
        language: Language,
        notices: &mut NotificationLog,
    ) -> Result<(), SpeechError> {
        if !self.mic_available {
            return Err(SpeechError::Unsupported);
        }
        match recognizer.transcribe(language.locale_tag()) {
            Ok(text) => {
                self.input = text;
                self.input_via_voice = true;
                Ok(())
            }
            Err(err) => {
                if err == SpeechError::Unsupported {
                    self.mic_available = false;
                }
                notices.error(err.to_string());
                Err(err)
            }
        }
    }

    /// Send the input field. Blank input is ignored. The reply language
    /// is fixed at send time.
    pub fn send<R: Rng + ?Sized>(&mut self, language: Language, rng: &mut R) -> bool {
        let text = self.input.trim().to_owned();
        if text.is_empty() {
            return false;
        }
        let answer = reply(classify(&text), language);
        let via_voice = std::mem::take(&mut self.input_via_voice);
        self.push(Sender::User, text, via_voice);
        self.input.clear();
        self.pending.push_back((Delay::thinking(rng), answer));
        true
    }

    /// Consume virtual time; delivers at most the oldest pending reply.
    /// Returns the delivered text so the embedder can voice it.
    pub fn elapse(&mut self, ms: Millis) -> Option<&'static str> {
        let (delay, _) = self.pending.front_mut()?;
        if !delay.elapse(ms) {
            return None;
        }
        let (_, answer) = self.pending.pop_front()?;
        self.push(Sender::Bot, answer.to_owned(), false);
        Some(answer)
    }

    /// [`elapse`](Self::elapse) plus text-to-speech when voice replies
    /// are enabled.
    pub fn elapse_spoken(
        &mut self,
        ms: Millis,
        speaker: &mut dyn SpeechOutput,
        language: Language,
    ) -> Option<&'static str> {
        let delivered = self.elapse(ms)?;
        if self.voice_enabled {
            speaker.speak(delivered, language.locale_tag());
        }
        Some(delivered)
    }
}
