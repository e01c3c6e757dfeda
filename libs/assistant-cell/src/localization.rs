//! Every user-facing sentence the assistant produces on its own, keyed by
//! message kind and output language.
//!
//! Engines that write their own replies (the hosted model) bypass this
//! catalog; everything the resolver falls back to comes from here.

use shared_models::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<'a> {
    NoDoctorsAvailable,
    BookingConfirmed { doctor_name: &'a str },
    DoctorNotFound,
    Ambiguous { specialty: Option<&'a str> },
    Clarification,
    DoctorNotInRecords { doctor_id: &'a str },
    ProcessingFailed,
    SuggestionsHeader,
    GeneralConsultation,
}

pub fn localize(message: Message<'_>, language: Language) -> String {
    use Language::{English, Hindi, Kannada};

    match (message, language) {
        (Message::NoDoctorsAvailable, English) => {
            "No doctors are available to book at the moment.".to_string()
        }
        (Message::NoDoctorsAvailable, Kannada) => {
            "ಕ್ಷಮಿಸಿ, ಸದ್ಯಕ್ಕೆ ಯಾವುದೇ ವೈದ್ಯರು ಲಭ್ಯವಿಲ್ಲ.".to_string()
        }
        (Message::NoDoctorsAvailable, Hindi) => {
            "क्षमा करें, इस समय कोई डॉक्टर बुक करने के लिए उपलब्ध नहीं हैं।".to_string()
        }

        (Message::BookingConfirmed { doctor_name }, English) => format!(
            "Your appointment request with {} has been received. We will contact you shortly to confirm the details.",
            doctor_name
        ),
        (Message::BookingConfirmed { doctor_name }, Kannada) => format!(
            "{} ಅವರೊಂದಿಗೆ ನಿಮ್ಮ ಅಪಾಯಿಂಟ್‌ಮೆಂಟ್ ವಿನಂತಿಯನ್ನು ಸ್ವೀಕರಿಸಲಾಗಿದೆ. ವಿವರಗಳನ್ನು ಖಚಿತಪಡಿಸಲು ನಾವು ಶೀಘ್ರದಲ್ಲೇ ನಿಮ್ಮನ್ನು ಸಂಪರ್ಕಿಸುತ್ತೇವೆ.",
            doctor_name
        ),
        (Message::BookingConfirmed { doctor_name }, Hindi) => format!(
            "{} के साथ आपका अपॉइंटमेंट अनुरोध प्राप्त हो गया है। हम विवरण की पुष्टि के लिए जल्द ही आपसे संपर्क करेंगे।",
            doctor_name
        ),

        (Message::DoctorNotFound, English) => {
            "Sorry, we could not find that doctor or specialty. Please say the name or specialty of one of our listed doctors.".to_string()
        }
        (Message::DoctorNotFound, Kannada) => {
            "ಕ್ಷಮಿಸಿ, ಆ ವೈದ್ಯರು ಅಥವಾ ವಿಶೇಷತೆ ನಮಗೆ ಸಿಗಲಿಲ್ಲ. ದಯವಿಟ್ಟು ನಮ್ಮ ಪಟ್ಟಿಯಲ್ಲಿರುವ ವೈದ್ಯರ ಹೆಸರು ಅಥವಾ ವಿಶೇಷತೆಯನ್ನು ತಿಳಿಸಿ.".to_string()
        }
        (Message::DoctorNotFound, Hindi) => {
            "क्षमा करें, हमें वह डॉक्टर या विशेषज्ञता नहीं मिली। कृपया हमारे सूचीबद्ध डॉक्टरों में से किसी का नाम या विशेषज्ञता बताएं।".to_string()
        }

        (Message::Ambiguous { specialty: Some(specialty) }, English) => format!(
            "We have more than one doctor in {}. Please tell us the name of the doctor you would like to see.",
            specialty
        ),
        (Message::Ambiguous { specialty: Some(specialty) }, Kannada) => format!(
            "{} ವಿಭಾಗದಲ್ಲಿ ನಮ್ಮಲ್ಲಿ ಒಂದಕ್ಕಿಂತ ಹೆಚ್ಚು ವೈದ್ಯರಿದ್ದಾರೆ. ದಯವಿಟ್ಟು ನೀವು ಭೇಟಿಯಾಗಲು ಬಯಸುವ ವೈದ್ಯರ ಹೆಸರನ್ನು ತಿಳಿಸಿ.",
            specialty
        ),
        (Message::Ambiguous { specialty: Some(specialty) }, Hindi) => format!(
            "{} में हमारे पास एक से अधिक डॉक्टर हैं। कृपया उस डॉक्टर का नाम बताएं जिनसे आप मिलना चाहते हैं।",
            specialty
        ),
        (Message::Ambiguous { specialty: None }, English) => {
            "More than one of our doctors matches your request. Please tell us the name of the doctor you would like to see.".to_string()
        }
        (Message::Ambiguous { specialty: None }, Kannada) => {
            "ನಿಮ್ಮ ವಿನಂತಿಗೆ ನಮ್ಮ ಒಂದಕ್ಕಿಂತ ಹೆಚ್ಚು ವೈದ್ಯರು ಹೊಂದಿಕೆಯಾಗುತ್ತಾರೆ. ದಯವಿಟ್ಟು ನೀವು ಭೇಟಿಯಾಗಲು ಬಯಸುವ ವೈದ್ಯರ ಹೆಸರನ್ನು ತಿಳಿಸಿ.".to_string()
        }
        (Message::Ambiguous { specialty: None }, Hindi) => {
            "हमारे एक से अधिक डॉक्टर आपके अनुरोध से मेल खाते हैं। कृपया उस डॉक्टर का नाम बताएं जिनसे आप मिलना चाहते हैं।".to_string()
        }

        (Message::Clarification, English) => {
            "Sorry, I didn't understand your request. Please say which doctor or specialty you would like to book an appointment with.".to_string()
        }
        (Message::Clarification, Kannada) => {
            "ಕ್ಷಮಿಸಿ, ನಿಮ್ಮ ವಿನಂತಿ ನನಗೆ ಅರ್ಥವಾಗಲಿಲ್ಲ. ದಯವಿಟ್ಟು ಯಾವ ವೈದ್ಯರು ಅಥವಾ ವಿಶೇಷತೆಯೊಂದಿಗೆ ಅಪಾಯಿಂಟ್‌ಮೆಂಟ್ ಬುಕ್ ಮಾಡಲು ಬಯಸುತ್ತೀರಿ ಎಂದು ತಿಳಿಸಿ.".to_string()
        }
        (Message::Clarification, Hindi) => {
            "क्षमा करें, मैं आपका अनुरोध समझ नहीं पाया। कृपया बताएं कि आप किस डॉक्टर या विशेषज्ञता के साथ अपॉइंटमेंट बुक करना चाहते हैं।".to_string()
        }

        (Message::DoctorNotInRecords { doctor_id }, English) => format!(
            "Sorry, the doctor with ID {} was not found in our records. Please try again.",
            doctor_id
        ),
        (Message::DoctorNotInRecords { doctor_id }, Kannada) => format!(
            "ಕ್ಷಮಿಸಿ, ಐಡಿ {} ಹೊಂದಿರುವ ವೈದ್ಯರು ನಮ್ಮ ದಾಖಲೆಗಳಲ್ಲಿ ಕಂಡುಬಂದಿಲ್ಲ. ದಯವಿಟ್ಟು ಮತ್ತೆ ಪ್ರಯತ್ನಿಸಿ.",
            doctor_id
        ),
        (Message::DoctorNotInRecords { doctor_id }, Hindi) => format!(
            "क्षमा करें, आईडी {} वाले डॉक्टर हमारे रिकॉर्ड में नहीं मिले। कृपया पुनः प्रयास करें।",
            doctor_id
        ),

        (Message::ProcessingFailed, English) => {
            "Sorry, there was an error processing your voice request. Please try again.".to_string()
        }
        (Message::ProcessingFailed, Kannada) => {
            "ಕ್ಷಮಿಸಿ, ನಿಮ್ಮ ಧ್ವನಿ ವಿನಂತಿಯನ್ನು ಪ್ರಕ್ರಿಯೆಗೊಳಿಸುವಲ್ಲಿ ದೋಷ ಉಂಟಾಗಿದೆ. ದಯವಿಟ್ಟು ಮತ್ತೆ ಪ್ರಯತ್ನಿಸಿ.".to_string()
        }
        (Message::ProcessingFailed, Hindi) => {
            "क्षमा करें, आपके वॉयस अनुरोध को संसाधित करने में त्रुटि हुई। कृपया पुनः प्रयास करें।".to_string()
        }

        (Message::SuggestionsHeader, English) => {
            "Based on the details you shared, these services may help:".to_string()
        }
        (Message::SuggestionsHeader, Kannada) => {
            "ನೀವು ನೀಡಿದ ವಿವರಗಳ ಆಧಾರದ ಮೇಲೆ, ಈ ಸೇವೆಗಳು ನಿಮಗೆ ಸಹಾಯಕವಾಗಬಹುದು:".to_string()
        }
        (Message::SuggestionsHeader, Hindi) => {
            "आपके द्वारा दी गई जानकारी के आधार पर, ये सेवाएं आपके लिए उपयोगी हो सकती हैं:".to_string()
        }

        (Message::GeneralConsultation, English) => {
            "A general consultation at our front desk, where staff can direct you to the right department.".to_string()
        }
        (Message::GeneralConsultation, Kannada) => {
            "ನಮ್ಮ ಮುಂಭಾಗದ ಮೇಜಿನಲ್ಲಿ ಸಾಮಾನ್ಯ ಸಮಾಲೋಚನೆ, ಅಲ್ಲಿ ಸಿಬ್ಬಂದಿ ನಿಮ್ಮನ್ನು ಸರಿಯಾದ ವಿಭಾಗಕ್ಕೆ ಮಾರ್ಗದರ್ಶನ ಮಾಡುತ್ತಾರೆ.".to_string()
        }
        (Message::GeneralConsultation, Hindi) => {
            "हमारे फ्रंट डेस्क पर सामान्य परामर्श, जहां कर्मचारी आपको सही विभाग तक पहुंचा सकते हैं।".to_string()
        }
    }
}
