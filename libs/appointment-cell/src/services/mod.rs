pub mod booking;
pub mod lifecycle;

pub use booking::{AppointmentBookingService, APPOINTMENTS_STORAGE_KEY};
pub use lifecycle::AppointmentLifecycleService;
