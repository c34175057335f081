use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{ConsultationStatus, ReportKind, VisitType};

/// A past prescription shown on the records screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub doctor_name: String,
    pub date: NaiveDate,
    pub diagnosis: String,
    pub medications: Vec<String>,
}

/// An uploaded report file (lab, diagnostic, or imaging).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub kind: ReportKind,
    pub size_bytes: u64,
}

impl Report {
    /// Human-readable size, e.g. "2.5 MB".
    pub fn display_size(&self) -> String {
        let mb = self.size_bytes as f64 / (1024.0 * 1024.0);
        format!("{mb:.1} MB")
    }
}

/// One entry of the past-consultation history tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultation {
    pub id: Uuid,
    pub doctor_name: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub visit_type: VisitType,
    pub status: ConsultationStatus,
}
