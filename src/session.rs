//! Session/Navigation Controller.
//!
//! Owns the current screen, the authenticated role, and the
//! onboarding/verification progress flags, and computes the next screen
//! for every user action. The transition logic is a pure function over
//! `SessionState` so it is testable without a rendering environment;
//! `SessionController` wraps it in a lock for sharing with whatever
//! transport drives the screens.

use std::sync::{RwLock, RwLockReadGuard};

use serde::{Deserialize, Serialize};

use crate::models::enums::{Role, Screen};
use crate::models::Doctor;

// ═══════════════════════════════════════════════════════════
// State
// ═══════════════════════════════════════════════════════════

/// The whole navigation state of a running client.
///
/// Created once at process start, mutated only through [`SessionState::apply`],
/// and reset to its default by logout. Nothing here survives a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub screen: Screen,
    pub role: Option<Role>,
    pub authenticated: bool,
    pub profile_complete: bool,
    pub doctor_verified: bool,
    /// The one-time "verification complete" screen has already been shown.
    pub seen_verification_success: bool,
    /// The doctor currently being viewed or booked. Must be `Some` on
    /// every doctor-scoped screen.
    pub selected_doctor: Option<Doctor>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            screen: Screen::Onboarding,
            role: None,
            authenticated: false,
            profile_complete: false,
            doctor_verified: false,
            seen_verification_success: false,
            selected_doctor: None,
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Events
// ═══════════════════════════════════════════════════════════

/// A user action (or simulated external event) the controller reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum SessionEvent {
    /// Onboarding finished, move on to role selection.
    Continue,
    SelectRole { role: Role },
    /// The (simulated) patient credential check succeeded.
    PatientLoggedIn,
    /// The (simulated) doctor credential check succeeded.
    DoctorLoggedIn,
    /// The credentialing collaborator approved this doctor's documents.
    VerificationApproved,
    /// The doctor dismissed the one-time verification-success screen.
    VerificationAcknowledged,
    /// The patient submitted a valid profile-completion form.
    ProfileCompleted,
    SelectDoctor { doctor: Doctor },
    NavigateTo { screen: Screen },
    /// The back control of the current screen.
    Back,
    /// Payment succeeded on the booking screen.
    BookingConfirmed,
    Logout,
}

/// Outcome of applying an event.
///
/// A refused transition is not an error: the caller stays on the
/// current screen. Guards degrade to no-ops, never to failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transition {
    Changed { to: Screen },
    Refused,
}

impl Transition {
    pub fn changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

// ═══════════════════════════════════════════════════════════
// Transition function
// ═══════════════════════════════════════════════════════════

impl SessionState {
    /// Apply one event, mutating the state and reporting whether the
    /// screen changed.
    ///
    /// Every arm either performs the enumerated field mutations and
    /// moves to the computed screen, or refuses and leaves the state
    /// untouched. There are no other side effects.
    pub fn apply(&mut self, event: SessionEvent) -> Transition {
        match event {
            SessionEvent::Continue => {
                if self.screen == Screen::Onboarding {
                    self.goto(Screen::RoleSelection)
                } else {
                    Transition::Refused
                }
            }

            SessionEvent::SelectRole { role } => {
                self.role = Some(role);
                match role {
                    Role::Patient => self.goto(Screen::Login),
                    Role::Doctor => self.goto(Screen::DoctorLogin),
                }
            }

            SessionEvent::PatientLoggedIn => {
                if self.role != Some(Role::Patient) {
                    return Transition::Refused;
                }
                self.authenticated = true;
                if self.profile_complete {
                    self.goto(Screen::Home)
                } else {
                    self.goto(Screen::ProfileCompletion)
                }
            }

            SessionEvent::DoctorLoggedIn => {
                if self.role != Some(Role::Doctor) {
                    return Transition::Refused;
                }
                self.authenticated = true;
                // Guards evaluated in order: unverified doctors wait,
                // freshly verified ones see the success screen once.
                if !self.doctor_verified {
                    self.goto(Screen::VerificationPending)
                } else if !self.seen_verification_success {
                    self.goto(Screen::VerificationSuccess)
                } else {
                    self.goto(Screen::DoctorDashboard)
                }
            }

            SessionEvent::VerificationApproved => {
                if self.role != Some(Role::Doctor) {
                    return Transition::Refused;
                }
                self.doctor_verified = true;
                self.goto(Screen::VerificationSuccess)
            }

            SessionEvent::VerificationAcknowledged => {
                if self.role != Some(Role::Doctor) || !self.doctor_verified {
                    return Transition::Refused;
                }
                self.seen_verification_success = true;
                self.goto(Screen::DoctorDashboard)
            }

            SessionEvent::ProfileCompleted => {
                if self.role != Some(Role::Patient) || !self.authenticated {
                    return Transition::Refused;
                }
                self.profile_complete = true;
                self.goto(Screen::Home)
            }

            SessionEvent::SelectDoctor { doctor } => {
                if self.role != Some(Role::Patient) || !self.authenticated {
                    return Transition::Refused;
                }
                self.selected_doctor = Some(doctor);
                self.goto(Screen::DoctorProfile)
            }

            SessionEvent::NavigateTo { screen } => self.navigate_to(screen),

            SessionEvent::Back => self.back(),

            SessionEvent::BookingConfirmed => {
                if self.screen != Screen::Booking {
                    return Transition::Refused;
                }
                self.goto(Screen::Home)
            }

            SessionEvent::Logout => {
                *self = Self::default();
                Transition::Changed { to: Screen::Onboarding }
            }
        }
    }

    /// Direct navigation between authenticated screens.
    ///
    /// Doctor-scoped screens are refused when no doctor is selected;
    /// the patient and doctor areas are refused for the wrong role.
    /// The guard is explicit so the app can never land on a screen
    /// whose data is missing.
    fn navigate_to(&mut self, screen: Screen) -> Transition {
        if !self.authenticated {
            return Transition::Refused;
        }
        if screen.is_doctor_scoped() && self.selected_doctor.is_none() {
            return Transition::Refused;
        }
        if screen.is_patient_area() && self.role != Some(Role::Patient) {
            return Transition::Refused;
        }
        if screen == Screen::DoctorDashboard
            && (self.role != Some(Role::Doctor) || !self.seen_verification_success)
        {
            return Transition::Refused;
        }
        if screen.is_patient_area() || screen == Screen::DoctorDashboard {
            self.goto(screen)
        } else {
            // Pre-auth screens are only reached through their own events.
            Transition::Refused
        }
    }

    /// Back-control wiring, one hop per screen. Back from profile
    /// completion abandons the login entirely.
    fn back(&mut self) -> Transition {
        match self.screen {
            Screen::Login | Screen::DoctorLogin => self.goto(Screen::RoleSelection),
            Screen::ProfileCompletion => self.apply(SessionEvent::Logout),
            Screen::Search | Screen::Records | Screen::Profile => self.goto(Screen::Home),
            Screen::DoctorProfile => self.goto(Screen::Search),
            Screen::Booking => self.goto(Screen::DoctorProfile),
            Screen::VideoCall => self.goto(Screen::Home),
            _ => Transition::Refused,
        }
    }

    fn goto(&mut self, screen: Screen) -> Transition {
        self.screen = screen;
        Transition::Changed { to: screen }
    }
}

// ═══════════════════════════════════════════════════════════
// SessionController — shared by whatever transport drives the UI
// ═══════════════════════════════════════════════════════════

/// Errors from controller plumbing. Transitions themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Internal lock error")]
    LockPoisoned,
}

/// Shared wrapper around [`SessionState`].
///
/// Wrapped in `Arc` at startup so every command handler sees the same
/// session. Uses `RwLock` to allow concurrent reads (screen queries)
/// while blocking only on writes (event dispatch).
pub struct SessionController {
    state: RwLock<SessionState>,
}

impl SessionController {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Acquire a read lock on the session state.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, SessionState>, SessionError> {
        self.state.read().map_err(|_| SessionError::LockPoisoned)
    }

    /// Owned copy of the current state, for serializing to the renderer.
    pub fn snapshot(&self) -> Result<SessionState, SessionError> {
        Ok(self.read()?.clone())
    }

    /// The currently displayed screen.
    pub fn screen(&self) -> Result<Screen, SessionError> {
        Ok(self.read()?.screen)
    }

    /// The doctor being viewed/booked, if any.
    pub fn selected_doctor(&self) -> Result<Option<Doctor>, SessionError> {
        Ok(self.read()?.selected_doctor.clone())
    }

    /// Apply one event to the shared state.
    pub fn dispatch(&self, event: SessionEvent) -> Result<Transition, SessionError> {
        let mut state = self.state.write().map_err(|_| SessionError::LockPoisoned)?;
        let from = state.screen;
        let transition = state.apply(event.clone());
        match transition {
            Transition::Changed { to } => {
                tracing::debug!(from = from.as_str(), to = to.as_str(), "Screen transition");
                if matches!(event, SessionEvent::Logout) {
                    tracing::info!("Session reset, back to onboarding");
                }
            }
            Transition::Refused => {
                tracing::debug!(at = from.as_str(), ?event, "Transition refused, staying put");
            }
        }
        Ok(transition)
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Gender;
    use uuid::Uuid;

    fn doctor() -> Doctor {
        Doctor {
            id: Uuid::new_v4(),
            name: "Dr. Sarah Anderson".into(),
            specialty: "Cardiologist".into(),
            experience_years: 15,
            rating: 4.8,
            review_count: 234,
            consultation_fee: 800,
            image_url: String::new(),
            verified: true,
            languages: vec!["English".into(), "Hindi".into()],
            gender: Gender::Female,
            about: String::new(),
            qualifications: vec![],
            services: vec![],
            availability: "Mon-Sat, 9 AM - 6 PM".into(),
        }
    }

    fn patient_at_home() -> SessionState {
        let mut state = SessionState::default();
        state.apply(SessionEvent::Continue);
        state.apply(SessionEvent::SelectRole { role: Role::Patient });
        state.apply(SessionEvent::PatientLoggedIn);
        state.apply(SessionEvent::ProfileCompleted);
        assert_eq!(state.screen, Screen::Home);
        state
    }

    #[test]
    fn initial_state_is_onboarding_with_everything_unset() {
        let state = SessionState::default();
        assert_eq!(state.screen, Screen::Onboarding);
        assert_eq!(state.role, None);
        assert!(!state.authenticated);
        assert!(!state.profile_complete);
        assert!(!state.doctor_verified);
        assert!(!state.seen_verification_success);
        assert!(state.selected_doctor.is_none());
    }

    #[test]
    fn onboarding_continue_reaches_role_selection() {
        let mut state = SessionState::default();
        let t = state.apply(SessionEvent::Continue);
        assert_eq!(t, Transition::Changed { to: Screen::RoleSelection });
    }

    #[test]
    fn continue_outside_onboarding_is_refused() {
        let mut state = patient_at_home();
        assert_eq!(state.apply(SessionEvent::Continue), Transition::Refused);
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn role_selection_routes_to_the_matching_login() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::Continue);
        state.apply(SessionEvent::SelectRole { role: Role::Patient });
        assert_eq!(state.screen, Screen::Login);

        let mut state = SessionState::default();
        state.apply(SessionEvent::Continue);
        state.apply(SessionEvent::SelectRole { role: Role::Doctor });
        assert_eq!(state.screen, Screen::DoctorLogin);
    }

    #[test]
    fn first_patient_login_lands_on_profile_completion() {
        // Scenario A
        let mut state = SessionState::default();
        state.apply(SessionEvent::Continue);
        state.apply(SessionEvent::SelectRole { role: Role::Patient });
        state.apply(SessionEvent::PatientLoggedIn);
        assert!(state.authenticated);
        assert_eq!(state.screen, Screen::ProfileCompletion);
    }

    #[test]
    fn returning_patient_login_lands_on_home() {
        // Scenario B
        let mut state = SessionState::default();
        state.apply(SessionEvent::Continue);
        state.apply(SessionEvent::SelectRole { role: Role::Patient });
        state.profile_complete = true;
        state.apply(SessionEvent::PatientLoggedIn);
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn doctor_verification_flow() {
        // Scenario C
        let mut state = SessionState::default();
        state.apply(SessionEvent::Continue);
        state.apply(SessionEvent::SelectRole { role: Role::Doctor });
        state.apply(SessionEvent::DoctorLoggedIn);
        assert_eq!(state.screen, Screen::VerificationPending);

        state.apply(SessionEvent::VerificationApproved);
        assert!(state.doctor_verified);
        assert_eq!(state.screen, Screen::VerificationSuccess);

        state.apply(SessionEvent::VerificationAcknowledged);
        assert!(state.seen_verification_success);
        assert_eq!(state.screen, Screen::DoctorDashboard);
    }

    #[test]
    fn verified_doctor_relogin_skips_success_screen() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::Continue);
        state.apply(SessionEvent::SelectRole { role: Role::Doctor });
        state.apply(SessionEvent::DoctorLoggedIn);
        state.apply(SessionEvent::VerificationApproved);
        state.apply(SessionEvent::VerificationAcknowledged);

        // Log in again without logging out: verified + seen → dashboard.
        state.apply(SessionEvent::DoctorLoggedIn);
        assert_eq!(state.screen, Screen::DoctorDashboard);
    }

    #[test]
    fn verified_but_unseen_doctor_sees_success_screen_on_login() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::Continue);
        state.apply(SessionEvent::SelectRole { role: Role::Doctor });
        state.doctor_verified = true;
        state.apply(SessionEvent::DoctorLoggedIn);
        assert_eq!(state.screen, Screen::VerificationSuccess);
    }

    #[test]
    fn logout_after_full_doctor_flow_clears_verification() {
        // Scenario D
        let mut state = SessionState::default();
        state.apply(SessionEvent::Continue);
        state.apply(SessionEvent::SelectRole { role: Role::Doctor });
        state.apply(SessionEvent::DoctorLoggedIn);
        state.apply(SessionEvent::VerificationApproved);
        state.apply(SessionEvent::VerificationAcknowledged);

        let t = state.apply(SessionEvent::Logout);
        assert_eq!(t, Transition::Changed { to: Screen::Onboarding });
        assert_eq!(state, SessionState::default());

        state.apply(SessionEvent::Continue);
        state.apply(SessionEvent::SelectRole { role: Role::Doctor });
        state.apply(SessionEvent::DoctorLoggedIn);
        assert_eq!(state.screen, Screen::VerificationPending);
    }

    #[test]
    fn logout_resets_from_any_reachable_state() {
        let mut state = patient_at_home();
        state.apply(SessionEvent::SelectDoctor { doctor: doctor() });
        state.apply(SessionEvent::NavigateTo { screen: Screen::Booking });

        state.apply(SessionEvent::Logout);
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn acknowledgement_is_permanent_until_logout() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::Continue);
        state.apply(SessionEvent::SelectRole { role: Role::Doctor });
        state.apply(SessionEvent::DoctorLoggedIn);
        state.apply(SessionEvent::VerificationApproved);
        state.apply(SessionEvent::VerificationAcknowledged);
        assert!(state.seen_verification_success);

        // Nothing short of logout clears the flag.
        state.apply(SessionEvent::DoctorLoggedIn);
        state.apply(SessionEvent::NavigateTo { screen: Screen::DoctorDashboard });
        assert!(state.seen_verification_success);

        state.apply(SessionEvent::Logout);
        assert!(!state.seen_verification_success);
    }

    #[test]
    fn selecting_a_doctor_opens_their_profile() {
        let mut state = patient_at_home();
        let doc = doctor();
        let id = doc.id;
        state.apply(SessionEvent::SelectDoctor { doctor: doc });
        assert_eq!(state.screen, Screen::DoctorProfile);
        assert_eq!(state.selected_doctor.as_ref().map(|d| d.id), Some(id));
    }

    #[test]
    fn doctor_scoped_navigation_without_selection_is_refused() {
        // Scenario E
        let mut state = patient_at_home();
        for screen in [Screen::VideoCall, Screen::Booking, Screen::DoctorProfile] {
            let t = state.apply(SessionEvent::NavigateTo { screen });
            assert_eq!(t, Transition::Refused);
            assert_eq!(state.screen, Screen::Home);
        }
    }

    #[test]
    fn doctor_scoped_navigation_with_selection_succeeds() {
        let mut state = patient_at_home();
        state.apply(SessionEvent::SelectDoctor { doctor: doctor() });
        assert!(state.apply(SessionEvent::NavigateTo { screen: Screen::Booking }).changed());
        assert!(state.apply(SessionEvent::NavigateTo { screen: Screen::VideoCall }).changed());
    }

    #[test]
    fn patient_cannot_navigate_to_doctor_dashboard() {
        let mut state = patient_at_home();
        let t = state.apply(SessionEvent::NavigateTo { screen: Screen::DoctorDashboard });
        assert_eq!(t, Transition::Refused);
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn doctor_cannot_navigate_to_patient_screens() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::Continue);
        state.apply(SessionEvent::SelectRole { role: Role::Doctor });
        state.apply(SessionEvent::DoctorLoggedIn);
        state.apply(SessionEvent::VerificationApproved);
        state.apply(SessionEvent::VerificationAcknowledged);

        for screen in [Screen::Home, Screen::Search, Screen::Records, Screen::Profile] {
            let t = state.apply(SessionEvent::NavigateTo { screen });
            assert_eq!(t, Transition::Refused);
        }
        assert_eq!(state.screen, Screen::DoctorDashboard);
    }

    #[test]
    fn unauthenticated_navigation_is_refused() {
        let mut state = SessionState::default();
        let t = state.apply(SessionEvent::NavigateTo { screen: Screen::Home });
        assert_eq!(t, Transition::Refused);
        assert_eq!(state.screen, Screen::Onboarding);
    }

    #[test]
    fn login_events_require_the_matching_role() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::Continue);
        assert_eq!(state.apply(SessionEvent::PatientLoggedIn), Transition::Refused);
        assert_eq!(state.apply(SessionEvent::DoctorLoggedIn), Transition::Refused);

        state.apply(SessionEvent::SelectRole { role: Role::Patient });
        assert_eq!(state.apply(SessionEvent::DoctorLoggedIn), Transition::Refused);
        assert!(state.apply(SessionEvent::PatientLoggedIn).changed());
    }

    #[test]
    fn booking_flow_returns_home_and_keeps_selection() {
        let mut state = patient_at_home();
        state.apply(SessionEvent::SelectDoctor { doctor: doctor() });
        state.apply(SessionEvent::NavigateTo { screen: Screen::Booking });
        let t = state.apply(SessionEvent::BookingConfirmed);
        assert_eq!(t, Transition::Changed { to: Screen::Home });
        // The selection survives so the patient can jump straight into a call.
        assert!(state.selected_doctor.is_some());
    }

    #[test]
    fn booking_confirmed_outside_booking_is_refused() {
        let mut state = patient_at_home();
        assert_eq!(state.apply(SessionEvent::BookingConfirmed), Transition::Refused);
    }

    #[test]
    fn back_walks_the_renderer_wiring() {
        let mut state = patient_at_home();
        state.apply(SessionEvent::SelectDoctor { doctor: doctor() });
        state.apply(SessionEvent::NavigateTo { screen: Screen::Booking });

        state.apply(SessionEvent::Back);
        assert_eq!(state.screen, Screen::DoctorProfile);
        state.apply(SessionEvent::Back);
        assert_eq!(state.screen, Screen::Search);
        state.apply(SessionEvent::Back);
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn back_from_profile_completion_abandons_the_login() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::Continue);
        state.apply(SessionEvent::SelectRole { role: Role::Patient });
        state.apply(SessionEvent::PatientLoggedIn);
        assert_eq!(state.screen, Screen::ProfileCompletion);

        state.apply(SessionEvent::Back);
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn back_from_login_returns_to_role_selection() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::Continue);
        state.apply(SessionEvent::SelectRole { role: Role::Doctor });
        state.apply(SessionEvent::Back);
        assert_eq!(state.screen, Screen::RoleSelection);
    }

    /// Invariants from the data model, checked over a long pseudo-random
    /// event walk: doctor-scoped screens always have a selected doctor,
    /// and the dashboard/home screens are only reached by the right role.
    #[test]
    fn invariants_hold_over_arbitrary_event_sequences() {
        let pool: Vec<SessionEvent> = vec![
            SessionEvent::Continue,
            SessionEvent::SelectRole { role: Role::Patient },
            SessionEvent::SelectRole { role: Role::Doctor },
            SessionEvent::PatientLoggedIn,
            SessionEvent::DoctorLoggedIn,
            SessionEvent::VerificationApproved,
            SessionEvent::VerificationAcknowledged,
            SessionEvent::ProfileCompleted,
            SessionEvent::SelectDoctor { doctor: doctor() },
            SessionEvent::NavigateTo { screen: Screen::Home },
            SessionEvent::NavigateTo { screen: Screen::Search },
            SessionEvent::NavigateTo { screen: Screen::Records },
            SessionEvent::NavigateTo { screen: Screen::Profile },
            SessionEvent::NavigateTo { screen: Screen::Booking },
            SessionEvent::NavigateTo { screen: Screen::VideoCall },
            SessionEvent::NavigateTo { screen: Screen::DoctorProfile },
            SessionEvent::NavigateTo { screen: Screen::DoctorDashboard },
            SessionEvent::Back,
            SessionEvent::BookingConfirmed,
            SessionEvent::Logout,
        ];

        let mut state = SessionState::default();
        let mut seed: u64 = 0x9E3779B97F4A7C15;
        for _ in 0..10_000 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let event = pool[(seed >> 33) as usize % pool.len()].clone();
            state.apply(event);

            if state.screen.is_doctor_scoped() {
                assert!(state.selected_doctor.is_some(), "blank screen at {:?}", state.screen);
            }
            if state.screen == Screen::DoctorDashboard {
                assert_eq!(state.role, Some(Role::Doctor));
            }
            if state.screen == Screen::Home {
                assert_eq!(state.role, Some(Role::Patient));
            }
        }
    }

    // --- SessionController wrapper ---

    #[test]
    fn controller_starts_at_onboarding() {
        let controller = SessionController::new();
        assert_eq!(controller.screen().unwrap(), Screen::Onboarding);
        assert!(controller.selected_doctor().unwrap().is_none());
    }

    #[test]
    fn controller_dispatch_mirrors_the_pure_function() {
        let controller = SessionController::new();
        controller.dispatch(SessionEvent::Continue).unwrap();
        controller
            .dispatch(SessionEvent::SelectRole { role: Role::Patient })
            .unwrap();
        controller.dispatch(SessionEvent::PatientLoggedIn).unwrap();
        assert_eq!(controller.screen().unwrap(), Screen::ProfileCompletion);

        let snapshot = controller.snapshot().unwrap();
        assert!(snapshot.authenticated);
        assert!(!snapshot.profile_complete);
    }

    #[test]
    fn controller_concurrent_reads_do_not_block() {
        use std::sync::Arc;
        use std::thread;

        let controller = Arc::new(SessionController::new());
        let mut handles = vec![];
        for _ in 0..10 {
            let controller = Arc::clone(&controller);
            handles.push(thread::spawn(move || {
                assert_eq!(controller.screen().unwrap(), Screen::Onboarding);
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn session_state_serializes_for_the_renderer() {
        let state = SessionState::default();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"screen\":\"onboarding\""));
        assert!(json.contains("\"role\":null"));
        assert!(json.contains("\"selected_doctor\":null"));
    }

    #[test]
    fn session_event_deserializes_from_tagged_json() {
        let event: SessionEvent =
            serde_json::from_str(r#"{"event":"navigate-to","screen":"records"}"#).unwrap();
        assert_eq!(event, SessionEvent::NavigateTo { screen: Screen::Records });

        let event: SessionEvent =
            serde_json::from_str(r#"{"event":"select-role","role":"doctor"}"#).unwrap();
        assert_eq!(event, SessionEvent::SelectRole { role: Role::Doctor });
    }
}
