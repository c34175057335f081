pub mod appointment;
pub mod doctor;
pub mod enums;
pub mod profile;
pub mod record;

pub use appointment::Appointment;
pub use doctor::Doctor;
pub use profile::ProfileForm;
pub use record::{Consultation, Prescription, Report};
