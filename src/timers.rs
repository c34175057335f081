//! Display timers for the login and consultation screens.
//!
//! Both are owned by the screen that shows them and simply dropped on
//! navigation away; they never touch the session controller. The
//! renderer polls them once a second for the value to display. Built on
//! `tokio::time::Instant` so tests run on the paused clock.

use tokio::time::{Duration, Instant};

use crate::auth::OTP_RESEND_SECS;

/// Countdown until the OTP "Resend" control unlocks.
#[derive(Debug)]
pub struct OtpCountdown {
    started: Instant,
    window: Duration,
}

impl OtpCountdown {
    /// Start the standard 30-second resend window.
    pub fn start() -> Self {
        Self::with_window(Duration::from_secs(OTP_RESEND_SECS))
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            started: Instant::now(),
            window,
        }
    }

    /// Whole seconds left before resend unlocks.
    pub fn remaining_secs(&self) -> u64 {
        self.window
            .saturating_sub(self.started.elapsed())
            .as_secs()
    }

    pub fn is_expired(&self) -> bool {
        self.started.elapsed() >= self.window
    }

    /// The user tapped resend: restart the window.
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }
}

/// Elapsed-time clock for the in-call header.
#[derive(Debug)]
pub struct CallClock {
    connected_at: Instant,
}

impl CallClock {
    pub fn start() -> Self {
        Self {
            connected_at: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.connected_at.elapsed().as_secs()
    }

    /// `mm:ss` as shown in the call header.
    pub fn display(&self) -> String {
        let secs = self.elapsed_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}
