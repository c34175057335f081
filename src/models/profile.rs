use serde::{Deserialize, Serialize};

use super::enums::Gender;

/// Total number of fields on the profile-completion form, for the
/// progress indicator.
const FORM_FIELD_COUNT: u32 = 7;

/// The patient onboarding form. Name, age, gender, email, and location
/// are required; blood group and health history are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileForm {
    pub full_name: String,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub email: String,
    pub location: String,
    pub blood_group: String,
    pub health_history: String,
}

impl ProfileForm {
    /// Names of required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push("full_name");
        }
        if self.age.is_none() {
            missing.push("age");
        }
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            missing.push("email");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        missing
    }

    /// Whether the form can be submitted (all required fields present).
    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    fn filled_count(&self) -> u32 {
        [
            !self.full_name.trim().is_empty(),
            self.age.is_some(),
            self.gender.is_some(),
            !self.email.trim().is_empty(),
            !self.location.trim().is_empty(),
            !self.blood_group.trim().is_empty(),
            !self.health_history.trim().is_empty(),
        ]
        .iter()
        .filter(|&&v| v)
        .count() as u32
    }

    /// Filled-fields percentage for the form progress bar.
    pub fn completion_percent(&self) -> u32 {
        (self.filled_count() * 100 + FORM_FIELD_COUNT / 2) / FORM_FIELD_COUNT
    }
}
