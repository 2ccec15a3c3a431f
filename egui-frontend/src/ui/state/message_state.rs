//! # Message State Module
//!
//! This module contains the user-facing status message state.
//!
//! ## Responsibilities:
//! - Hold the current success/error message
//! - Expire stale messages so they fade without user interaction
//!
//! ## Purpose:
//! Dialogs report their outcome here and the header renders it. A posted
//! message carries its post time; the update loop expires anything older
//! than `MESSAGE_TTL`, and the ✖ button clears immediately.

use std::time::{Duration, Instant};

/// How long a status message stays visible without being dismissed
pub const MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Success/error message state with timed expiry
#[derive(Debug, Clone, Default)]
pub struct MessageState {
    /// Success message currently shown, if any
    pub success: Option<String>,
    /// Error message currently shown, if any
    pub error: Option<String>,
    /// When the current message was posted
    posted_at: Option<Instant>,
}

impl MessageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a success message, replacing any error
    pub fn show_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
        self.posted_at = Some(Instant::now());
    }

    /// Post an error message, replacing any success
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
        self.posted_at = Some(Instant::now());
    }

    /// Clear both messages immediately
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
        self.posted_at = None;
    }

    /// Whether any message is currently shown
    pub fn any(&self) -> bool {
        self.success.is_some() || self.error.is_some()
    }

    /// Clear the current message once it has been visible for at least
    /// `max_age`. Returns true when something was cleared.
    pub fn expire_older_than(&mut self, max_age: Duration) -> bool {
        match self.posted_at {
            Some(posted_at) if posted_at.elapsed() >= max_age => {
                self.clear();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_replaces_error() {
        let mut messages = MessageState::new();
        messages.show_error("brokerage save failed");
        messages.show_success("Saved brokerage 'Paper broker'");

        assert_eq!(
            messages.success.as_deref(),
            Some("Saved brokerage 'Paper broker'")
        );
        assert_eq!(messages.error, None);
        assert!(messages.any());
    }

    #[test]
    fn test_clear_drops_message_and_post_time() {
        let mut messages = MessageState::new();
        messages.show_success("Created trader 'Scalper'");
        messages.clear();

        assert!(!messages.any());
        // Nothing left to expire once cleared
        assert!(!messages.expire_older_than(Duration::ZERO));
    }

    #[test]
    fn test_expiry_clears_message_past_its_ttl() {
        let mut messages = MessageState::new();
        messages.show_error("Could not save model");

        // A zero TTL makes any posted message stale
        assert!(messages.expire_older_than(Duration::ZERO));
        assert!(!messages.any());
        assert_eq!(messages.error, None);
    }

    #[test]
    fn test_expiry_keeps_fresh_message() {
        let mut messages = MessageState::new();
        messages.show_success("Saved model 'Momentum v2'");

        assert!(!messages.expire_older_than(MESSAGE_TTL));
        assert!(messages.any());
    }

    #[test]
    fn test_expiry_on_empty_state_is_a_noop() {
        let mut messages = MessageState::new();
        assert!(!messages.expire_older_than(Duration::ZERO));
        assert!(!messages.any());
    }
}
