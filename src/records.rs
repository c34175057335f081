//! Medical records — types and mock store for the records screen.
//!
//! Three tabs: prescriptions, report files, and past-consultation
//! history. Seeded with the demo rows; a real deployment would back
//! this with the patient's health-record service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::enums::{ConsultationStatus, ReportKind, VisitType};
use crate::models::{Consultation, Prescription, Report};

/// Everything the records screen shows, fetched in one call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsData {
    pub prescriptions: Vec<Prescription>,
    pub reports: Vec<Report>,
    pub history: Vec<Consultation>,
}

/// In-memory record store seeded with mock content.
pub struct RecordStore {
    data: RecordsData,
}

impl RecordStore {
    pub fn new() -> Self {
        Self { data: seed_records() }
    }

    pub fn records(&self) -> &RecordsData {
        &self.data
    }

    /// Attach a newly uploaded report file.
    pub fn add_report(&mut self, report: Report) {
        tracing::debug!(name = %report.name, "Report uploaded");
        self.data.reports.insert(0, report);
    }

    /// Record a finished consultation in the history tab.
    pub fn add_consultation(&mut self, consultation: Consultation) {
        self.data.history.insert(0, consultation);
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn seed_records() -> RecordsData {
    let mb = |n: f64| (n * 1024.0 * 1024.0) as u64;

    RecordsData {
        prescriptions: vec![
            Prescription {
                id: Uuid::new_v4(),
                doctor_name: "Dr. Sarah Anderson".into(),
                date: date(2024, 11, 15),
                diagnosis: "Hypertension".into(),
                medications: vec!["Amlodipine 5mg".into(), "Atenolol 50mg".into()],
            },
            Prescription {
                id: Uuid::new_v4(),
                doctor_name: "Dr. Priya Sharma".into(),
                date: date(2024, 10, 28),
                diagnosis: "Common Cold".into(),
                medications: vec!["Paracetamol 500mg".into(), "Cetirizine 10mg".into()],
            },
        ],
        reports: vec![
            Report {
                id: Uuid::new_v4(),
                name: "Blood Test Report".into(),
                date: date(2024, 11, 10),
                kind: ReportKind::LabReport,
                size_bytes: mb(2.5),
            },
            Report {
                id: Uuid::new_v4(),
                name: "ECG Report".into(),
                date: date(2024, 11, 5),
                kind: ReportKind::Diagnostic,
                size_bytes: mb(1.8),
            },
            Report {
                id: Uuid::new_v4(),
                name: "X-Ray Chest".into(),
                date: date(2024, 10, 20),
                kind: ReportKind::Imaging,
                size_bytes: mb(3.2),
            },
        ],
        history: vec![
            Consultation {
                id: Uuid::new_v4(),
                doctor_name: "Dr. Sarah Anderson".into(),
                specialty: "Cardiologist".into(),
                date: date(2024, 11, 15),
                visit_type: VisitType::VideoConsultation,
                status: ConsultationStatus::Completed,
            },
            Consultation {
                id: Uuid::new_v4(),
                doctor_name: "Dr. Michael Chen".into(),
                specialty: "Dermatologist".into(),
                date: date(2024, 11, 8),
                visit_type: VisitType::ClinicVisit,
                status: ConsultationStatus::Completed,
            },
            Consultation {
                id: Uuid::new_v4(),
                doctor_name: "Dr. Priya Sharma".into(),
                specialty: "Pediatrician".into(),
                date: date(2024, 10, 28),
                visit_type: VisitType::VideoConsultation,
                status: ConsultationStatus::Completed,
            },
        ],
    }
}
