//! Doctor directory — the search screen's data source.
//!
//! `DoctorDirectory` is the seam a real deployment would back with a
//! provider service; `StaticDirectory` is the hardcoded catalogue the
//! mock client ships with. Filtering covers free-text over
//! name/specialty plus gender, language, fee, experience, and rating
//! facets.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::enums::Gender;
use crate::models::Doctor;

/// Specialty categories shown on the patient home screen.
pub const SPECIALTIES: [&str; 6] = [
    "Cardiology",
    "Dermatology",
    "Pediatrics",
    "Orthopedics",
    "Neurology",
    "General",
];

/// Default fee slider bounds, in rupees.
pub const FEE_RANGE_MAX: u32 = 2000;

/// Search facets for the find-doctors screen. An empty facet matches
/// everything, so `Default` is the unfiltered catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Case-insensitive substring of the doctor's name or specialty.
    pub query: String,
    pub genders: Vec<Gender>,
    pub languages: Vec<String>,
    pub min_fee: u32,
    pub max_fee: u32,
    pub min_experience_years: u8,
    pub min_rating: f32,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            query: String::new(),
            genders: Vec::new(),
            languages: Vec::new(),
            min_fee: 0,
            max_fee: FEE_RANGE_MAX,
            min_experience_years: 0,
            min_rating: 0.0,
        }
    }
}

impl SearchFilters {
    /// The "Clear All" control.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Toggle a gender facet on or off.
    pub fn toggle_gender(&mut self, gender: Gender) {
        if let Some(pos) = self.genders.iter().position(|g| *g == gender) {
            self.genders.remove(pos);
        } else {
            self.genders.push(gender);
        }
    }

    /// Toggle a language facet on or off.
    pub fn toggle_language(&mut self, language: &str) {
        if let Some(pos) = self.languages.iter().position(|l| l == language) {
            self.languages.remove(pos);
        } else {
            self.languages.push(language.to_string());
        }
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        let query = self.query.to_lowercase();
        let matches_query = query.is_empty()
            || doctor.name.to_lowercase().contains(&query)
            || doctor.specialty.to_lowercase().contains(&query);
        let matches_gender = self.genders.is_empty() || self.genders.contains(&doctor.gender);
        let matches_fee = doctor.consultation_fee >= self.min_fee
            && doctor.consultation_fee <= self.max_fee;
        let matches_experience = doctor.experience_years >= self.min_experience_years;
        let matches_rating = doctor.rating >= self.min_rating;
        let matches_language = self.languages.is_empty()
            || self.languages.iter().any(|lang| doctor.speaks(lang));

        matches_query
            && matches_gender
            && matches_fee
            && matches_experience
            && matches_rating
            && matches_language
    }
}

/// Supplies doctor records to the search and home screens.
pub trait DoctorDirectory {
    fn list(&self) -> &[Doctor];

    fn get(&self, id: Uuid) -> Option<&Doctor> {
        self.list().iter().find(|d| d.id == id)
    }

    fn search(&self, filters: &SearchFilters) -> Vec<Doctor> {
        self.list()
            .iter()
            .filter(|d| filters.matches(d))
            .cloned()
            .collect()
    }

    /// Highest-rated doctors for the home screen carousel.
    fn top_doctors(&self, limit: usize) -> Vec<Doctor> {
        let mut doctors: Vec<Doctor> = self.list().to_vec();
        doctors.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        doctors.truncate(limit);
        doctors
    }
}

/// The hardcoded catalogue. Ids are generated fresh per process; the
/// session only ever holds records obtained from this instance, so
/// nothing depends on stable ids across runs.
pub struct StaticDirectory {
    doctors: Vec<Doctor>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self {
            doctors: seed_doctors(),
        }
    }
}

impl Default for StaticDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorDirectory for StaticDirectory {
    fn list(&self) -> &[Doctor] {
        &self.doctors
    }
}

fn seed_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: Uuid::new_v4(),
            name: "Dr. Sarah Anderson".into(),
            specialty: "Cardiologist".into(),
            experience_years: 15,
            rating: 4.8,
            review_count: 234,
            consultation_fee: 800,
            image_url: "https://images.unsplash.com/photo-1659353888906-adb3e0041693?w=1080".into(),
            verified: true,
            languages: vec!["English".into(), "Hindi".into()],
            gender: Gender::Female,
            about: "Experienced cardiologist specializing in preventive cardiology and heart disease management.".into(),
            qualifications: vec![
                "MBBS".into(),
                "MD Cardiology".into(),
                "Fellowship in Interventional Cardiology".into(),
            ],
            services: vec![
                "ECG".into(),
                "Echo".into(),
                "Stress Test".into(),
                "Heart Disease Consultation".into(),
            ],
            availability: "Mon-Sat, 9 AM - 6 PM".into(),
        },
        Doctor {
            id: Uuid::new_v4(),
            name: "Dr. Michael Chen".into(),
            specialty: "Dermatologist".into(),
            experience_years: 12,
            rating: 4.9,
            review_count: 189,
            consultation_fee: 600,
            image_url: "https://images.unsplash.com/photo-1685022036245-380a447e03bf?w=1080".into(),
            verified: true,
            languages: vec!["English".into()],
            gender: Gender::Male,
            about: "Skin specialist with expertise in cosmetic dermatology and skin disorder treatment.".into(),
            qualifications: vec!["MBBS".into(), "MD Dermatology".into()],
            services: vec![
                "Acne Treatment".into(),
                "Skin Allergy".into(),
                "Cosmetic Procedures".into(),
                "Hair Treatment".into(),
            ],
            availability: "Mon-Fri, 10 AM - 8 PM".into(),
        },
        Doctor {
            id: Uuid::new_v4(),
            name: "Dr. Priya Sharma".into(),
            specialty: "Pediatrician".into(),
            experience_years: 10,
            rating: 4.7,
            review_count: 156,
            consultation_fee: 500,
            image_url: "https://images.unsplash.com/photo-1758691463626-0ab959babe00?w=1080".into(),
            verified: true,
            languages: vec!["English".into(), "Hindi".into(), "Tamil".into()],
            gender: Gender::Female,
            about: "Child healthcare specialist focused on preventive care and childhood development.".into(),
            qualifications: vec!["MBBS".into(), "MD Pediatrics".into()],
            services: vec![
                "Vaccination".into(),
                "Growth Monitoring".into(),
                "Child Development".into(),
                "Nutrition Counseling".into(),
            ],
            availability: "Mon-Sat, 8 AM - 2 PM".into(),
        },
        Doctor {
            id: Uuid::new_v4(),
            name: "Dr. Rajesh Kumar".into(),
            specialty: "Orthopedic".into(),
            experience_years: 18,
            rating: 4.6,
            review_count: 201,
            consultation_fee: 900,
            image_url: "https://images.unsplash.com/photo-1758691461513-88a0aef72160?w=1080".into(),
            verified: true,
            languages: vec!["English".into(), "Hindi".into()],
            gender: Gender::Male,
            about: "Expert in joint replacement and sports injury management.".into(),
            qualifications: vec![
                "MBBS".into(),
                "MS Orthopedics".into(),
                "Fellowship in Sports Medicine".into(),
            ],
            services: vec![
                "Joint Replacement".into(),
                "Fracture Care".into(),
                "Sports Injury".into(),
                "Arthroscopy".into(),
            ],
            availability: "Tue-Sun, 11 AM - 5 PM".into(),
        },
    ]
}
