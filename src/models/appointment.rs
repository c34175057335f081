use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{ConsultationStatus, PaymentMethod, VisitType};

/// A confirmed appointment, produced when a booking draft is paid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub visit_type: VisitType,
    /// Amount charged in rupees (the doctor's consultation fee).
    pub fee: u32,
    pub payment_method: PaymentMethod,
    pub status: ConsultationStatus,
}
