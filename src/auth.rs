//! Authentication seam.
//!
//! In a real deployment the login screens would call an external
//! credential service; here `SimulatedAuth` always grants access but
//! still enforces the input shapes the forms promise (10-digit phone,
//! 6-digit OTP, non-empty password), so the renderer's required-field
//! behavior has one authoritative home.

use serde::{Deserialize, Serialize};

use crate::models::enums::LoginMethod;

/// Seconds before the OTP resend control unlocks.
pub const OTP_RESEND_SECS: u64 = 30;

/// OTP code length issued to phones.
pub const OTP_LENGTH: usize = 6;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Phone number must be exactly 10 digits")]
    InvalidPhone,
    #[error("Email address is not valid")]
    InvalidEmail,
    #[error("OTP must be 6 digits")]
    InvalidOtp,
    #[error("Password must not be empty")]
    EmptyPassword,
}

/// An OTP sent to a phone, awaiting entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpChallenge {
    pub phone: String,
    /// Countdown the resend control starts from.
    pub resend_after_secs: u64,
}

/// Credentials for the doctor login form, which accepts either an
/// email or a phone as identifier and either a password or an OTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorCredentials {
    pub method: LoginMethod,
    pub identifier: String,
    pub password: Option<String>,
    pub otp: Option<String>,
}

/// External credential check. `Ok(())` means the session controller
/// may fire the corresponding login event.
pub trait AuthProvider {
    fn send_otp(&self, phone: &str) -> Result<OtpChallenge, AuthError>;
    fn verify_otp(&self, challenge: &OtpChallenge, code: &str) -> Result<(), AuthError>;
    fn login_doctor(&self, credentials: &DoctorCredentials) -> Result<(), AuthError>;
}

/// Mock provider: every well-formed credential succeeds.
#[derive(Debug, Default)]
pub struct SimulatedAuth;

impl SimulatedAuth {
    fn check_phone(phone: &str) -> Result<(), AuthError> {
        if phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err(AuthError::InvalidPhone)
        }
    }

    fn check_email(email: &str) -> Result<(), AuthError> {
        // Shape check only; real validation belongs to the provider.
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
            _ => Err(AuthError::InvalidEmail),
        }
    }

    fn check_otp(code: &str) -> Result<(), AuthError> {
        if code.len() == OTP_LENGTH && code.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err(AuthError::InvalidOtp)
        }
    }
}

impl AuthProvider for SimulatedAuth {
    fn send_otp(&self, phone: &str) -> Result<OtpChallenge, AuthError> {
        Self::check_phone(phone)?;
        tracing::debug!(phone_suffix = &phone[phone.len() - 4..], "OTP issued");
        Ok(OtpChallenge {
            phone: phone.to_string(),
            resend_after_secs: OTP_RESEND_SECS,
        })
    }

    fn verify_otp(&self, _challenge: &OtpChallenge, code: &str) -> Result<(), AuthError> {
        Self::check_otp(code)
    }

    fn login_doctor(&self, credentials: &DoctorCredentials) -> Result<(), AuthError> {
        match credentials.method {
            LoginMethod::Email => Self::check_email(&credentials.identifier)?,
            LoginMethod::Phone => Self::check_phone(&credentials.identifier)?,
        }
        match (&credentials.password, &credentials.otp) {
            (Some(password), _) if !password.is_empty() => Ok(()),
            (Some(_), _) => Err(AuthError::EmptyPassword),
            (None, Some(otp)) => Self::check_otp(otp),
            (None, None) => Err(AuthError::EmptyPassword),
        }
    }
}
