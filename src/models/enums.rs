use serde::{Deserialize, Serialize};

/// Raised when a string from the renderer does not name a known variant.
#[derive(Debug, thiserror::Error)]
#[error("Invalid {field}: '{value}'")]
pub struct EnumParseError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = EnumParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(EnumParseError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Screen {
    Onboarding => "onboarding",
    RoleSelection => "role-selection",
    Login => "login",
    DoctorLogin => "doctor-login",
    ProfileCompletion => "profile-completion",
    VerificationPending => "verification-pending",
    VerificationSuccess => "verification-success",
    Home => "home",
    DoctorDashboard => "doctor-dashboard",
    Search => "search",
    DoctorProfile => "doctor-profile",
    Booking => "booking",
    VideoCall => "video-call",
    Records => "records",
    Profile => "profile",
});

impl Screen {
    /// Screens that render a specific doctor and therefore require one
    /// to be selected in the session.
    pub fn is_doctor_scoped(&self) -> bool {
        matches!(self, Self::DoctorProfile | Self::Booking | Self::VideoCall)
    }

    /// Screens belonging to the authenticated patient area.
    pub fn is_patient_area(&self) -> bool {
        matches!(
            self,
            Self::Home
                | Self::Search
                | Self::Records
                | Self::Profile
                | Self::DoctorProfile
                | Self::Booking
                | Self::VideoCall
        )
    }
}

str_enum!(Role {
    Patient => "patient",
    Doctor => "doctor",
});

str_enum!(Gender {
    Female => "female",
    Male => "male",
    Other => "other",
});

str_enum!(LoginMethod {
    Email => "email",
    Phone => "phone",
});

str_enum!(PaymentMethod {
    Upi => "upi",
    Card => "card",
    Wallet => "wallet",
});

str_enum!(VisitType {
    VideoConsultation => "video-consultation",
    ClinicVisit => "clinic-visit",
});

str_enum!(ConsultationStatus {
    Upcoming => "upcoming",
    Completed => "completed",
    Cancelled => "cancelled",
});

str_enum!(ReportKind {
    LabReport => "lab-report",
    Diagnostic => "diagnostic",
    Imaging => "imaging",
});

str_enum!(DocumentStatus {
    Verified => "verified",
    Pending => "pending",
    Rejected => "rejected",
});
