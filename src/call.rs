//! Simulated video consultation state.
//!
//! No media transport exists; mute, camera, and chat are decorative
//! toggles plus a transcript, owned by the call screen for exactly as
//! long as it is shown. The duration clock lives in [`crate::timers`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::enums::Role;
use crate::models::Doctor;
use crate::timers::CallClock;

/// One line of the in-call chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Role,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// State of one ongoing consultation.
pub struct CallSession {
    pub doctor: Doctor,
    pub muted: bool,
    pub camera_off: bool,
    pub chat_open: bool,
    messages: Vec<ChatMessage>,
    clock: CallClock,
}

impl CallSession {
    /// Connect to a doctor. The transcript opens with their greeting,
    /// as the mock call always did.
    pub fn connect(doctor: Doctor) -> Self {
        tracing::info!(doctor = %doctor.name, "Consultation started");
        let greeting = ChatMessage {
            sender: Role::Doctor,
            text: "Hello! How can I help you today?".into(),
            sent_at: Utc::now(),
        };
        Self {
            doctor,
            muted: false,
            camera_off: false,
            chat_open: false,
            messages: vec![greeting],
            clock: CallClock::start(),
        }
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn toggle_camera(&mut self) -> bool {
        self.camera_off = !self.camera_off;
        self.camera_off
    }

    pub fn toggle_chat(&mut self) -> bool {
        self.chat_open = !self.chat_open;
        self.chat_open
    }

    /// Append a patient message. Blank input is dropped, matching the
    /// send button's disabled state.
    pub fn send_message(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            sender: Role::Patient,
            text: text.to_string(),
            sent_at: Utc::now(),
        });
        true
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Call duration as `mm:ss` for the header.
    pub fn duration_display(&self) -> String {
        self.clock.display()
    }
}
