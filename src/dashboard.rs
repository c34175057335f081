//! Home and dashboard payloads — single fetch per screen.
//!
//! The patient home shows specialty categories and top-rated doctors;
//! the doctor dashboard shows quick stats and today's appointment
//! list. Both are assembled from the mock collaborators.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::directory::{DoctorDirectory, SPECIALTIES};
use crate::models::enums::{ConsultationStatus, VisitType};
use crate::models::Doctor;

/// How many doctors the home carousel shows.
const TOP_DOCTOR_COUNT: usize = 3;

/// Patient home screen data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeData {
    pub specialties: Vec<String>,
    pub top_doctors: Vec<Doctor>,
}

pub fn home_data(directory: &impl DoctorDirectory) -> HomeData {
    HomeData {
        specialties: SPECIALTIES.iter().map(|s| s.to_string()).collect(),
        top_doctors: directory.top_doctors(TOP_DOCTOR_COUNT),
    }
}

/// Header stats on the doctor dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickStats {
    pub appointments_today: u32,
    pub total_patients: u32,
    /// Rupees earned this month.
    pub earnings: u32,
    pub rating: f32,
}

/// One row of the doctor's today-appointments list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardAppointment {
    pub patient_name: String,
    pub time: NaiveTime,
    pub visit_type: VisitType,
    pub status: ConsultationStatus,
}

/// Doctor dashboard data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub stats: QuickStats,
    pub today: Vec<DashboardAppointment>,
}

/// Mock dashboard content for the logged-in doctor.
pub fn doctor_dashboard() -> DashboardData {
    let at = |hour, minute| NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();

    DashboardData {
        stats: QuickStats {
            appointments_today: 12,
            total_patients: 234,
            earnings: 45_000,
            rating: 4.8,
        },
        today: vec![
            DashboardAppointment {
                patient_name: "Amit Patel".into(),
                time: at(10, 0),
                visit_type: VisitType::VideoConsultation,
                status: ConsultationStatus::Upcoming,
            },
            DashboardAppointment {
                patient_name: "Priya Sharma".into(),
                time: at(11, 30),
                visit_type: VisitType::ClinicVisit,
                status: ConsultationStatus::Upcoming,
            },
            DashboardAppointment {
                patient_name: "Rahul Verma".into(),
                time: at(14, 0),
                visit_type: VisitType::VideoConsultation,
                status: ConsultationStatus::Upcoming,
            },
        ],
    }
}
