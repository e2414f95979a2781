pub mod directory;
pub mod doctor;
pub mod refinement;

pub use directory::{
    recommendation_failure_message, DoctorDirectory, DoctorSource, RECOMMENDATION_FAILED,
};
pub use doctor::DoctorService;
pub use refinement::refine;
