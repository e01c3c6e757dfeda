use std::collections::{BTreeSet, HashSet};

use anyhow::{Context, Result};
use tracing::{debug, info};

use shared_config::AppConfig;

use crate::models::{Doctor, DoctorError, DoctorSearchFilters};

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x400.png";

/// The doctors patients can book with. Also the candidate set handed to the
/// voice resolver.
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<Doctor>) -> Result<Self, DoctorError> {
        let mut seen = HashSet::new();
        for doctor in &doctors {
            if doctor.id.trim().is_empty() {
                return Err(DoctorError::ValidationError("doctor id must not be empty".to_string()));
            }
            if doctor.name.trim().is_empty() || doctor.specialty.trim().is_empty() {
                return Err(DoctorError::ValidationError(format!(
                    "doctor {} needs a name and a specialty",
                    doctor.id
                )));
            }
            if !seen.insert(doctor.id.as_str()) {
                return Err(DoctorError::DuplicateId(doctor.id.clone()));
            }
        }

        Ok(Self { doctors })
    }

    /// Loads the directory from `doctors_file` when configured, otherwise the
    /// built-in listing.
    pub async fn load(config: &AppConfig) -> Result<Self> {
        let Some(path) = &config.doctors_file else {
            info!("No doctors file configured, using built-in directory");
            return Ok(Self::seeded());
        };

        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading doctors file {}", path.display()))?;
        let doctors: Vec<Doctor> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing doctors file {}", path.display()))?;

        let directory = Self::new(doctors)?;
        info!("Loaded {} doctors from {}", directory.len(), path.display());
        Ok(directory)
    }

    pub fn seeded() -> Self {
        let doctors = vec![
            seed(
                "1",
                "Dr. Evelyn Reed",
                "Cardiology",
                "doctor portrait",
                "Dr. Reed is a board-certified cardiologist with over 15 years of experience in treating complex heart conditions. She is passionate about preventive care and patient education.",
                &["Mon: 9 AM - 1 PM", "Wed: 2 PM - 5 PM", "Fri: 9 AM - 12 PM"],
            ),
            seed(
                "2",
                "Dr. Samuel Green",
                "Pediatrics",
                "friendly doctor",
                "Dr. Green provides compassionate and comprehensive care for children from infancy through adolescence. He believes in a holistic approach to child health.",
                &["Tue: 10 AM - 4 PM", "Thu: 1 PM - 6 PM"],
            ),
            seed(
                "3",
                "Dr. Olivia Chen",
                "Dermatology",
                "professional doctor",
                "Dr. Chen specializes in medical, surgical, and cosmetic dermatology. She is dedicated to helping patients achieve healthy, beautiful skin.",
                &["Mon: 10 AM - 5 PM", "Wed: 9 AM - 1 PM", "Fri: 1 PM - 4 PM"],
            ),
            seed(
                "4",
                "Dr. Marcus Kane",
                "Orthopedics",
                "surgeon doctor",
                "Dr. Kane is an orthopedic surgeon focusing on sports injuries and joint replacement. He employs the latest techniques for optimal patient outcomes.",
                &["Tue: 8 AM - 12 PM", "Thu: 2 PM - 6 PM", "Fri: 10 AM - 2PM"],
            ),
        ];

        Self { doctors }
    }

    pub fn list(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    pub fn get(&self, doctor_id: &str) -> Result<&Doctor, DoctorError> {
        self.doctors
            .iter()
            .find(|d| d.id == doctor_id)
            .ok_or_else(|| DoctorError::NotFound(doctor_id.to_string()))
    }

    pub fn search(&self, filters: &DoctorSearchFilters) -> Vec<Doctor> {
        let specialty = filters
            .specialty
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let results: Vec<Doctor> = self
            .doctors
            .iter()
            .filter(|d| match &specialty {
                Some(wanted) => d.specialty.to_lowercase().contains(wanted),
                None => true,
            })
            .cloned()
            .collect();

        debug!("Doctor search {:?} matched {} doctors", filters, results.len());
        results
    }

    /// Distinct specialties, sorted.
    pub fn specialties(&self) -> Vec<String> {
        self.doctors
            .iter()
            .map(|d| d.specialty.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn seed(id: &str, name: &str, specialty: &str, ai_hint: &str, bio: &str, availability: &[&str]) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        image_url: Some(PLACEHOLDER_IMAGE.to_string()),
        ai_hint: Some(ai_hint.to_string()),
        bio: Some(bio.to_string()),
        availability: availability.iter().map(|s| s.to_string()).collect(),
    }
}
