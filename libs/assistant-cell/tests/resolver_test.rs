use std::sync::Arc;

use assistant_cell::api::{IntentResolver, RuleBasedEngine};
use assistant_cell::localization::{localize, Message};
use assistant_cell::ResolutionOutcome;
use doctor_cell::models::Doctor;
use doctor_cell::services::DoctorDirectory;
use shared_models::Language;

fn resolver() -> IntentResolver {
    IntentResolver::new(Arc::new(RuleBasedEngine::new()))
}

fn directory_with_two_pediatricians() -> Vec<Doctor> {
    let mut doctors = DoctorDirectory::seeded().list().to_vec();
    doctors.push(Doctor::new("5", "Dr. Priya Nair", "Pediatrics"));
    doctors
}

#[tokio::test]
async fn test_empty_candidates_default_to_english() {
    let resolution = resolver().resolve("I want to see Dr. Evelyn Reed", None, &[]).await;

    assert!(resolution.result.is_error);
    assert_eq!(resolution.result.matched_doctor_id, None);
    assert_eq!(resolution.result.message, "No doctors are available to book at the moment.");
}

#[tokio::test]
async fn test_empty_candidates_per_language() {
    for (tag, language) in [
        ("en-US", Language::English),
        ("kn-IN", Language::Kannada),
        ("hi-IN", Language::Hindi),
        ("fr-FR", Language::English),
        ("hi", Language::English),
    ] {
        let resolution = resolver().resolve("anything", Some(tag), &[]).await;
        assert_eq!(resolution.outcome, ResolutionOutcome::EmptyCandidateSet);
        assert_eq!(
            resolution.result.message,
            localize(Message::NoDoctorsAvailable, language),
            "tag {}",
            tag
        );
    }
}

#[tokio::test]
async fn test_named_doctor_is_matched() {
    let candidates = DoctorDirectory::seeded().list().to_vec();

    let resolution = resolver()
        .resolve("I want to see Dr. Evelyn Reed", Some("en-US"), &candidates)
        .await;

    assert_eq!(resolution.outcome, ResolutionOutcome::Matched);
    assert!(!resolution.result.is_error);
    assert_eq!(resolution.result.matched_doctor_id.as_deref(), Some("1"));
    assert!(resolution.result.message.contains("Dr. Evelyn Reed"));
}

#[tokio::test]
async fn test_shared_specialty_asks_for_a_name() {
    let candidates = directory_with_two_pediatricians();

    let resolution = resolver().resolve("I need a pediatrician", None, &candidates).await;

    assert_eq!(resolution.outcome, ResolutionOutcome::AmbiguousMatch);
    assert!(resolution.result.is_error);
    assert_eq!(resolution.result.matched_doctor_id, None);
    assert_eq!(
        resolution.result.message,
        localize(Message::Ambiguous { specialty: Some("Pediatrics") }, Language::English)
    );
}

#[tokio::test]
async fn test_off_topic_asks_for_clarification() {
    let candidates = DoctorDirectory::seeded().list().to_vec();

    let resolution = resolver().resolve("hello there", Some("kn-IN"), &candidates).await;

    assert_eq!(resolution.outcome, ResolutionOutcome::Unintelligible);
    assert!(resolution.result.is_error);
    assert_eq!(
        resolution.result.message,
        localize(Message::Clarification, Language::Kannada)
    );
}

#[tokio::test]
async fn test_unknown_doctor_is_not_found() {
    let candidates = DoctorDirectory::seeded().list().to_vec();

    let resolution = resolver()
        .resolve("Book me with a neurologist", Some("hi-IN"), &candidates)
        .await;

    assert_eq!(resolution.outcome, ResolutionOutcome::NoMatch);
    assert_eq!(
        resolution.result.message,
        localize(Message::DoctorNotFound, Language::Hindi)
    );
}

#[tokio::test]
async fn test_success_always_names_a_candidate() {
    let candidates = directory_with_two_pediatricians();
    let transcripts = [
        "I want to see Dr. Evelyn Reed",
        "my skin needs a dermatologist",
        "orthopedic appointment please",
        "Dr. Nair for my daughter",
        "I need a pediatrician",
        "hello there",
        "Dr. Strange",
        "",
    ];

    for transcript in transcripts {
        let result = resolver().resolve(transcript, None, &candidates).await.result;
        match &result.matched_doctor_id {
            Some(id) => {
                assert!(!result.is_error, "{}", transcript);
                assert!(candidates.iter().any(|d| &d.id == id), "{}", transcript);
            }
            None => assert!(result.is_error, "{}", transcript),
        }
        assert!(!result.message.is_empty());
    }
}

fn directory_with(extra: Doctor) -> Vec<Doctor> {
    let mut doctors = DoctorDirectory::seeded().list().to_vec();
    doctors.push(extra);
    doctors
}

#[tokio::test]
async fn test_ent_is_not_found_inside_other_words() {
    let candidates = directory_with(Doctor::new("5", "Dr. Ravi Iyer", "ENT"));

    for (transcript, outcome) in [
        ("I want to book an appointment with Dr. Strange", ResolutionOutcome::NoMatch),
        ("hello there, any treatment?", ResolutionOutcome::Unintelligible),
        ("book a dentist", ResolutionOutcome::NoMatch),
    ] {
        let resolution = resolver().resolve(transcript, None, &candidates).await;
        assert_eq!(resolution.outcome, outcome, "{}", transcript);
        assert!(resolution.result.is_error, "{}", transcript);
        assert_eq!(resolution.result.matched_doctor_id, None, "{}", transcript);
    }

    let resolution = resolver().resolve("I need an ENT doctor", None, &candidates).await;
    assert_eq!(resolution.result.matched_doctor_id.as_deref(), Some("5"));
}

#[tokio::test]
async fn test_urology_does_not_match_neurologist() {
    let candidates = directory_with(Doctor::new("6", "Dr. Hana Mori", "Urology"));

    let resolution = resolver().resolve("I need a neurologist", None, &candidates).await;
    assert_eq!(resolution.outcome, ResolutionOutcome::NoMatch);
    assert_eq!(resolution.result.matched_doctor_id, None);

    let resolution = resolver().resolve("I need a urologist", None, &candidates).await;
    assert_eq!(resolution.result.matched_doctor_id.as_deref(), Some("6"));
}

#[tokio::test]
async fn test_unknown_doctor_with_known_specialty_is_not_found() {
    let candidates = DoctorDirectory::seeded().list().to_vec();

    let resolution = resolver()
        .resolve("Dr. Strange the cardiologist", None, &candidates)
        .await;

    assert_eq!(resolution.outcome, ResolutionOutcome::NoMatch);
    assert_eq!(resolution.result.message, localize(Message::DoctorNotFound, Language::English));
}
