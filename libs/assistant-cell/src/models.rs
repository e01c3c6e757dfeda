use serde::{Deserialize, Serialize};

use appointment_cell::models::Appointment;
use shared_utils::text::char_len;

/// Body of `POST /assistant/resolve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionRequest {
    pub transcript: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// What the caller shows and speaks back after a voice request.
///
/// `matched_doctor_id` is present exactly when `is_error` is false, and then
/// always names one of the candidates the resolver was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_doctor_id: Option<String>,
    pub is_error: bool,
}

impl ResolutionResult {
    pub fn matched(message: String, doctor_id: String) -> Self {
        Self {
            message,
            matched_doctor_id: Some(doctor_id),
            is_error: false,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            message,
            matched_doctor_id: None,
            is_error: true,
        }
    }
}

/// Why a resolution ended the way it did. Kept for logs and tests; never
/// shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionOutcome {
    Matched,
    EmptyCandidateSet,
    NoMatch,
    AmbiguousMatch,
    Unintelligible,
    StaleMatch,
    EngineFailure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub result: ResolutionResult,
    pub outcome: ResolutionOutcome,
}

impl Resolution {
    pub fn new(result: ResolutionResult, outcome: ResolutionOutcome) -> Self {
        Self { result, outcome }
    }
}

/// Body of `POST /assistant/voice-booking`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceBookingRequest {
    pub transcript: String,
    #[serde(default)]
    pub language: Option<String>,
    /// Capture session the transcript came from. One resolution per session
    /// may be in flight at a time.
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceBookingResponse {
    #[serde(flatten)]
    pub result: ResolutionResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment: Option<Appointment>,
}

/// Patient details submitted from the front-desk form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact_details: String,
    #[serde(default)]
    pub appointment_details: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl PatientInfo {
    /// Field rules of the intake form. Returns every violated rule.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        if self.name.trim().is_empty()
            || self.contact_details.trim().is_empty()
            || self.appointment_details.trim().is_empty()
        {
            return Err(vec![
                "All patient information fields are required for AI suggestions.".to_string(),
            ]);
        }

        let mut problems = Vec::new();

        match char_len(&self.name) {
            n if n < 2 => problems.push("Name must be at least 2 characters.".to_string()),
            n if n > 100 => problems.push("Name must be 100 characters or less.".to_string()),
            _ => {}
        }
        match char_len(&self.contact_details) {
            n if n < 5 => problems.push(
                "Please enter valid contact details (e.g., phone or email).".to_string(),
            ),
            n if n > 100 => {
                problems.push("Contact details must be 100 characters or less.".to_string())
            }
            _ => {}
        }
        match char_len(&self.appointment_details) {
            n if n < 10 => {
                problems.push("Appointment details must be at least 10 characters.".to_string())
            }
            n if n > 500 => {
                problems.push("Appointment details must be 500 characters or less.".to_string())
            }
            _ => {}
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub suggested_services: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, contact: &str, details: &str) -> PatientInfo {
        PatientInfo {
            name: name.to_string(),
            contact_details: contact.to_string(),
            appointment_details: details.to_string(),
            language: None,
        }
    }

    #[test]
    fn valid_info_passes() {
        assert!(info("Asha", "asha@example.com", "Recurring chest pain when climbing stairs")
            .validate()
            .is_ok());
    }

    #[test]
    fn missing_field_fails_fast_with_single_message() {
        let problems = info("Asha", "  ", "Recurring chest pain").validate().unwrap_err();
        assert_eq!(problems, vec!["All patient information fields are required for AI suggestions."]);
    }

    #[test]
    fn length_rules_are_reported_together() {
        let problems = info("A", "1234", "short").validate().unwrap_err();
        assert_eq!(problems.len(), 3);
        assert!(problems[0].starts_with("Name must be at least"));
        assert!(problems[2].starts_with("Appointment details must be at least"));
    }

    #[test]
    fn upper_bounds_apply() {
        let long_details = "x".repeat(501);
        let problems = info("Asha", "asha@example.com", &long_details).validate().unwrap_err();
        assert_eq!(problems, vec!["Appointment details must be 500 characters or less."]);
    }

    #[test]
    fn result_serializes_without_absent_id() {
        let json = serde_json::to_value(ResolutionResult::error("nope".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "nope", "isError": true }));
    }
}
