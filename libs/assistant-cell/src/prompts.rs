use crate::services::engine::{EngineBookingRequest, EngineSuggestionRequest};

pub const BOOKING_SYSTEM_PROMPT: &str = "You are a helpful hospital appointment booking assistant. \
You always answer with a single JSON object and nothing else.";

pub const SUGGESTION_SYSTEM_PROMPT: &str = "You are a helpful hospital front desk assistant. \
You always answer with a single JSON object and nothing else.";

/// Output-language instructions for the field named `field`.
///
/// The raw tag goes to the model verbatim; it is told which tags mean
/// Kannada and Hindi and that anything else means English.
fn language_rule(language_tag: Option<&str>, field: &str) -> String {
    match language_tag.filter(|t| !t.is_empty()) {
        Some(tag) => format!(
            "The 'language' code provided is '{tag}'.\n\
             - If '{tag}' is 'kn-IN', your ENTIRE '{field}' MUST be in Kannada.\n\
             - If '{tag}' is 'hi-IN', your ENTIRE '{field}' MUST be in Hindi.\n\
             - If '{tag}' is 'en-US', or if the code is not recognized, your ENTIRE '{field}' MUST be in English.",
            tag = tag,
            field = field
        ),
        None => format!(
            "No 'language' code was provided. Therefore, your ENTIRE '{}' MUST be in English.",
            field
        ),
    }
}

pub fn booking_prompt(request: &EngineBookingRequest) -> String {
    let doctors = request
        .candidates
        .iter()
        .map(|d| format!("- Name: {}, Specialty: {}, ID: {}", d.name, d.specialty, d.id))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Your CRITICAL task is to generate your 'bookingConfirmationMessage' in the language specified by the 'language' input field.\n\
         \n\
         {language_rule}\n\
         \n\
         User's voice transcript: \"{transcript}\"\n\
         \n\
         Available doctors:\n\
         {doctors}\n\
         \n\
         Instructions:\n\
         1. Analyze the voice transcript to identify the doctor the user wants to book an appointment with. The user might mention the doctor's name or specialty.\n\
         2. Match the identified doctor with the list of \"Available doctors\".\n\
         3. If a unique doctor is clearly identified:\n\
         \x20   - Set 'bookedDoctorId' to the ID of that doctor.\n\
         \x20   - Craft a 'bookingConfirmationMessage' confirming the appointment request with that doctor. This message MUST be in the specified language.\n\
         \x20   - Set 'isError' to false and 'outcome' to \"matched\".\n\
         4. If the requested doctor cannot be found in the \"Available doctors\" list, or if the request is ambiguous (e.g., multiple doctors match a general specialty and no name is given):\n\
         \x20   - Do NOT set 'bookedDoctorId'.\n\
         \x20   - Craft a 'bookingConfirmationMessage' explaining the issue. This message MUST be in the specified language.\n\
         \x20   - Set 'isError' to true and 'outcome' to \"not_found\" or \"ambiguous\".\n\
         5. If the transcript is too vague or doesn't seem like an appointment request:\n\
         \x20   - Do NOT set 'bookedDoctorId'.\n\
         \x20   - Craft a 'bookingConfirmationMessage' asking for clarification. This message MUST be in the specified language.\n\
         \x20   - Set 'isError' to true and 'outcome' to \"unintelligible\".\n\
         \n\
         Respond with a JSON object with the fields 'bookingConfirmationMessage' (string), 'bookedDoctorId' (string, omit when not set), 'isError' (boolean) and 'outcome' (string).\n\
         Ensure your 'bookingConfirmationMessage' is helpful and adheres STRICTLY to the language requirement determined above.",
        language_rule = language_rule(request.language_tag.as_deref(), "bookingConfirmationMessage"),
        transcript = request.transcript,
        doctors = doctors,
    )
}

pub fn suggestion_prompt(request: &EngineSuggestionRequest) -> String {
    let doctors = request
        .doctors
        .iter()
        .map(|d| {
            if d.availability.is_empty() {
                format!("- {} ({})", d.name, d.specialty)
            } else {
                format!("- {} ({}), available {}", d.name, d.specialty, d.availability.join(", "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Your primary instruction is to generate your response text in the language specified by the 'language' input field.\n\
         \n\
         {language_rule}\n\
         \n\
         Based on the patient's provided details, suggest relevant services and information.\n\
         \n\
         Patient Name: {name}\n\
         Contact Details: {contact}\n\
         Appointment Details: {details}\n\
         \n\
         Doctors at this hospital:\n\
         {doctors}\n\
         \n\
         Respond with a JSON object with a single string field 'suggestedServices'.\n\
         Ensure your 'suggestedServices' output is entirely in the correctly determined language.",
        language_rule = language_rule(request.language_tag.as_deref(), "suggestedServices"),
        name = request.name,
        contact = request.contact_details,
        details = request.appointment_details,
        doctors = doctors,
    )
}
