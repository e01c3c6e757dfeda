use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use doctor_cell::models::Doctor;
use shared_database::{load_json, save_json, KeyValueStore};

use crate::models::{Appointment, AppointmentError, AppointmentStatus};
use crate::services::lifecycle::AppointmentLifecycleService;

pub const APPOINTMENTS_STORAGE_KEY: &str = "healthdesk.appointments";

/// Records appointment requests and their status changes.
///
/// The whole list lives under one storage key and every mutation is a full
/// read-modify-write. Writers inside this process are serialised by
/// `write_lock`; another process sharing the same store is not, and can
/// overwrite a concurrent update.
#[derive(Clone)]
pub struct AppointmentBookingService {
    store: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
    lifecycle: AppointmentLifecycleService,
}

impl AppointmentBookingService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
            lifecycle: AppointmentLifecycleService::new(),
        }
    }

    /// Reads the full stored list, in stored order.
    pub async fn load_appointments(&self) -> Result<Vec<Appointment>, AppointmentError> {
        let appointments: Option<Vec<Appointment>> =
            load_json(self.store.as_ref(), APPOINTMENTS_STORAGE_KEY)
                .await
                .map_err(|e| {
                    error!("Failed to load appointments: {:#}", e);
                    AppointmentError::Storage(e.to_string())
                })?;

        Ok(appointments.unwrap_or_default())
    }

    /// Replaces the full stored list.
    pub async fn save_appointments(&self, appointments: &[Appointment]) -> Result<(), AppointmentError> {
        save_json(self.store.as_ref(), APPOINTMENTS_STORAGE_KEY, appointments)
            .await
            .map_err(|e| {
                error!("Failed to save appointments: {:#}", e);
                AppointmentError::Storage(e.to_string())
            })
    }

    /// All appointments, most recently requested first.
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, AppointmentError> {
        let mut appointments = self.load_appointments().await?;
        appointments.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));
        Ok(appointments)
    }

    pub async fn request_appointment(&self, doctor: &Doctor) -> Result<Appointment, AppointmentError> {
        let _guard = self.write_lock.lock().await;

        let mut appointments = self.load_appointments().await?;
        let appointment = Appointment::pending_for(doctor, Utc::now());
        appointments.push(appointment.clone());
        self.save_appointments(&appointments).await?;

        info!(
            "Appointment {} requested with {} ({})",
            appointment.id, appointment.doctor_name, appointment.doctor_specialty
        );
        Ok(appointment)
    }

    pub async fn update_status(
        &self,
        appointment_id: &str,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, AppointmentError> {
        let _guard = self.write_lock.lock().await;

        let mut appointments = self.load_appointments().await?;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == appointment_id)
            .ok_or_else(|| AppointmentError::NotFound(appointment_id.to_string()))?;

        self.lifecycle
            .validate_status_transition(appointment.status, new_status)?;

        appointment.status = new_status;
        let updated = appointment.clone();
        self.save_appointments(&appointments).await?;

        debug!("Appointment {} is now {}", updated.id, updated.status);
        Ok(updated)
    }
}
