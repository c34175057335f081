use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Gender;

/// A doctor record as supplied by the directory and consumed by the
/// profile, booking, and consultation screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub experience_years: u8,
    pub rating: f32,
    pub review_count: u32,
    /// Consultation fee in rupees.
    pub consultation_fee: u32,
    pub image_url: String,
    pub verified: bool,
    pub languages: Vec<String>,
    pub gender: Gender,
    pub about: String,
    pub qualifications: Vec<String>,
    pub services: Vec<String>,
    /// Free-form availability text, e.g. "Mon-Sat, 9 AM - 6 PM".
    pub availability: String,
}

impl Doctor {
    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l.eq_ignore_ascii_case(language))
    }
}
