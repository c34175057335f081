//! Appointment booking flow.
//!
//! Two steps: pick a date and a half-hour slot, then pay. Confirming
//! produces an [`Appointment`] and the session returns home. Slot
//! availability is hardcoded like the rest of the mock data.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::enums::{ConsultationStatus, PaymentMethod, VisitType};
use crate::models::{Appointment, Doctor};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Appointment date cannot be in the past")]
    PastDate,
    #[error("That time slot is not available")]
    SlotUnavailable,
    #[error("Pick a date and time before continuing")]
    IncompleteSelection,
    #[error("Payment step not reached yet")]
    NotAtPayment,
}

/// A bookable half-hour slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: NaiveTime,
    pub available: bool,
}

/// The day's slot grid: 9:00–11:30 in the morning, 2:00–4:30 in the
/// afternoon, with 10:00 AM and 2:30 PM already taken.
pub fn day_slots() -> Vec<TimeSlot> {
    const TAKEN: [(u32, u32); 2] = [(10, 0), (14, 30)];

    let mut slots = Vec::with_capacity(12);
    for hour_range in [9..12, 14..17] {
        for hour in hour_range {
            for minute in [0, 30] {
                if let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) {
                    slots.push(TimeSlot {
                        time,
                        available: !TAKEN.contains(&(hour, minute)),
                    });
                }
            }
        }
    }
    slots
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStep {
    DateTime,
    Payment,
}

/// In-progress booking for one doctor. Owned by the booking screen and
/// dropped when the patient navigates away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub doctor: Doctor,
    pub step: BookingStep,
    pub date: Option<NaiveDate>,
    pub slot: Option<NaiveTime>,
    pub payment_method: PaymentMethod,
}

impl BookingDraft {
    pub fn new(doctor: Doctor) -> Self {
        Self {
            doctor,
            step: BookingStep::DateTime,
            date: None,
            slot: None,
            payment_method: PaymentMethod::Upi,
        }
    }

    /// Pick an appointment date. `today` comes from the caller so the
    /// past-date rule is testable.
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), BookingError> {
        if date < today {
            return Err(BookingError::PastDate);
        }
        self.date = Some(date);
        Ok(())
    }

    /// Pick a time slot from the day grid.
    pub fn select_slot(&mut self, time: NaiveTime) -> Result<(), BookingError> {
        let slot = day_slots()
            .into_iter()
            .find(|s| s.time == time)
            .ok_or(BookingError::SlotUnavailable)?;
        if !slot.available {
            return Err(BookingError::SlotUnavailable);
        }
        self.slot = Some(time);
        Ok(())
    }

    /// Advance from date/time selection to payment.
    pub fn proceed_to_payment(&mut self) -> Result<(), BookingError> {
        if self.date.is_none() || self.slot.is_none() {
            return Err(BookingError::IncompleteSelection);
        }
        self.step = BookingStep::Payment;
        Ok(())
    }

    /// Step back from payment to date/time selection, keeping choices.
    pub fn back_to_datetime(&mut self) {
        self.step = BookingStep::DateTime;
    }

    /// Simulated payment: always succeeds once the draft is complete.
    pub fn confirm(self) -> Result<Appointment, BookingError> {
        if self.step != BookingStep::Payment {
            return Err(BookingError::NotAtPayment);
        }
        // proceed_to_payment guarantees both are set.
        let (date, time) = match (self.date, self.slot) {
            (Some(date), Some(time)) => (date, time),
            _ => return Err(BookingError::IncompleteSelection),
        };

        let appointment = Appointment {
            id: Uuid::new_v4(),
            doctor_id: self.doctor.id,
            date,
            time,
            visit_type: VisitType::VideoConsultation,
            fee: self.doctor.consultation_fee,
            payment_method: self.payment_method,
            status: ConsultationStatus::Upcoming,
        };
        tracing::info!(
            doctor = %self.doctor.name,
            date = %date,
            time = %time,
            "Appointment booked"
        );
        Ok(appointment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{DoctorDirectory, StaticDirectory};

    fn draft() -> BookingDraft {
        let directory = StaticDirectory::new();
        BookingDraft::new(directory.list()[0].clone())
    }

    fn t(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn grid_has_twelve_slots_with_two_taken() {
        let slots = day_slots();
        assert_eq!(slots.len(), 12);
        assert_eq!(slots.iter().filter(|s| !s.available).count(), 2);
        assert!(!slots.iter().find(|s| s.time == t(10, 0)).unwrap().available);
        assert!(!slots.iter().find(|s| s.time == t(14, 30)).unwrap().available);
        assert_eq!(slots.first().unwrap().time, t(9, 0));
        assert_eq!(slots.last().unwrap().time, t(16, 30));
    }

    #[test]
    fn past_dates_are_rejected() {
        let mut draft = draft();
        let today = d(2024, 11, 20);
        assert_eq!(
            draft.select_date(d(2024, 11, 19), today).unwrap_err(),
            BookingError::PastDate
        );
        assert!(draft.select_date(today, today).is_ok());
        assert!(draft.select_date(d(2024, 11, 25), today).is_ok());
    }

    #[test]
    fn taken_and_unknown_slots_are_rejected() {
        let mut draft = draft();
        assert_eq!(draft.select_slot(t(10, 0)).unwrap_err(), BookingError::SlotUnavailable);
        assert_eq!(draft.select_slot(t(12, 0)).unwrap_err(), BookingError::SlotUnavailable);
        assert!(draft.select_slot(t(9, 30)).is_ok());
    }

    #[test]
    fn cannot_reach_payment_without_a_full_selection() {
        let mut draft = draft();
        assert_eq!(draft.proceed_to_payment().unwrap_err(), BookingError::IncompleteSelection);

        draft.select_date(d(2024, 11, 25), d(2024, 11, 20)).unwrap();
        assert_eq!(draft.proceed_to_payment().unwrap_err(), BookingError::IncompleteSelection);

        draft.select_slot(t(15, 0)).unwrap();
        assert!(draft.proceed_to_payment().is_ok());
        assert_eq!(draft.step, BookingStep::Payment);
    }

    #[test]
    fn confirm_requires_the_payment_step() {
        let mut draft = draft();
        draft.select_date(d(2024, 11, 25), d(2024, 11, 20)).unwrap();
        draft.select_slot(t(15, 0)).unwrap();
        assert_eq!(draft.clone().confirm().unwrap_err(), BookingError::NotAtPayment);

        draft.proceed_to_payment().unwrap();
        let doctor_id = draft.doctor.id;
        let fee = draft.doctor.consultation_fee;
        let appointment = draft.confirm().unwrap();
        assert_eq!(appointment.doctor_id, doctor_id);
        assert_eq!(appointment.fee, fee);
        assert_eq!(appointment.date, d(2024, 11, 25));
        assert_eq!(appointment.time, t(15, 0));
        assert_eq!(appointment.status, ConsultationStatus::Upcoming);
        assert_eq!(appointment.payment_method, PaymentMethod::Upi);
    }

    #[test]
    fn back_to_datetime_keeps_choices() {
        let mut draft = draft();
        draft.select_date(d(2024, 11, 25), d(2024, 11, 20)).unwrap();
        draft.select_slot(t(9, 0)).unwrap();
        draft.proceed_to_payment().unwrap();
        draft.back_to_datetime();
        assert_eq!(draft.step, BookingStep::DateTime);
        assert_eq!(draft.date, Some(d(2024, 11, 25)));
        assert_eq!(draft.slot, Some(t(9, 0)));
    }
}
