//! Validator configuration.

use std::time::Duration;

/// Default simulated submission latency.
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(900);

/// User-facing message strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub full_name_required: String,
    pub email_required: String,
    pub email_invalid: String,
    pub phone_required: String,
    pub phone_invalid: String,
    pub password_required: String,
    pub password_too_short: String,
    pub password_restricted: String,
    pub confirm_required: String,
    pub confirm_mismatch: String,

    /// Aggregate message after a rejected submit.
    pub form_invalid: String,
    /// Submit control label while sending.
    pub pending_label: String,
    /// Aggregate message while sending.
    pub pending: String,
    /// Aggregate message after a completed submission.
    pub sent: String,
    /// Aggregate message after the submitter reported a failure.
    pub send_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            full_name_required: "Full name is required.".into(),
            email_required: "Email address is required.".into(),
            email_invalid: "Please enter a valid email (example: you@example.com).".into(),
            phone_required: "Phone number is required.".into(),
            phone_invalid: "Enter a valid 10-digit phone number (not 1234567890).".into(),
            password_required: "Password is required.".into(),
            password_too_short: "Password must be at least 8 characters.".into(),
            password_restricted:
                "Password cannot contain \"password\", your name, or email username.".into(),
            confirm_required: "Please confirm your password.".into(),
            confirm_mismatch: "Passwords do not match.".into(),
            form_invalid: "Please fill the highlighted fields and try again.".into(),
            pending_label: "Sending…".into(),
            pending: "Sending message...".into(),
            sent: "Message sent — thank you! We will get back to you soon.".into(),
            send_failed: "Message could not be sent. Please try again.".into(),
        }
    }
}

/// Thresholds for the password restrictions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum length, counted in characters.
    pub min_length: usize,
    /// Word that may not appear anywhere in the password (case-insensitive).
    pub forbidden_word: String,
    /// Name tokens and email local parts shorter than this are ignored.
    pub min_identity_len: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            forbidden_word: "password".into(),
            min_identity_len: 3,
        }
    }
}

/// Configuration for a [`FormValidator`](crate::FormValidator).
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub messages: Messages,
    pub password: PasswordPolicy,
    /// Ten-digit phone number rejected as an obvious placeholder.
    pub phone_sentinel: String,
    /// Latency of the simulated submitter.
    pub submit_latency: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            messages: Messages::default(),
            password: PasswordPolicy::default(),
            phone_sentinel: "1234567890".into(),
            submit_latency: DEFAULT_SUBMIT_LATENCY,
        }
    }
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the message strings.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Replace the password policy.
    pub fn password_policy(mut self, policy: PasswordPolicy) -> Self {
        self.password = policy;
        self
    }

    /// Set the rejected placeholder phone number.
    pub fn phone_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.phone_sentinel = sentinel.into();
        self
    }

    /// Set the simulated submission latency.
    pub fn submit_latency(mut self, latency: Duration) -> Self {
        self.submit_latency = latency;
        self
    }
}
