pub mod booking;
pub mod dashboard;
pub mod lifecycle;

pub use booking::BookingService;
pub use dashboard::{DoctorDashboard, PatientDashboard, FEEDBACK_SUMMARY_UNAVAILABLE};
pub use lifecycle::AppointmentService;
