//! Login form state.
//!
//! The form moves between three phases:
//!
//! ```text
//! Idle --begin_submit--> Submitting --complete(Ok)--> Idle
//!                                   --complete(Err)-> Failed --begin_submit--> Submitting
//! ```
//!
//! Fields stay editable in every phase. Whether the submit control is
//! enabled is derived from the current state on demand, never stored.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::auth::{AuthError, AuthErrorKind, Credentials};

/// Phase of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// No request outstanding
    #[default]
    Idle,
    /// A sign-in request is in flight
    Submitting,
    /// The last request failed; `LoginForm::error` holds the message
    Failed,
}

/// What a finished sign-in did to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginCompletion {
    /// Carries the username that was sent, which may differ from the field
    /// if it was edited while the request was in flight
    SignedIn { username: String },
    Failed {
        kind: AuthErrorKind,
        message: String,
    },
}

#[derive(Debug)]
pub struct LoginForm {
    username: String,
    password: SecretString,
    phase: FormPhase,
    error: Option<String>,
    /// Username of the request in flight
    submitted_username: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: SecretString::new(String::new()),
            phase: FormPhase::Idle,
            error: None,
            submitted_username: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    // =========================================================================
    // Editing
    // =========================================================================

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = SecretString::new(password.into());
    }

    pub fn push_username_char(&mut self, c: char) {
        self.username.push(c);
    }

    pub fn push_password_char(&mut self, c: char) {
        let mut password = self.password.expose_secret().clone();
        password.push(c);
        self.password = SecretString::new(password);
    }

    pub fn pop_username_char(&mut self) {
        self.username.pop();
    }

    pub fn pop_password_char(&mut self) {
        let mut password = self.password.expose_secret().clone();
        password.pop();
        self.password = SecretString::new(password);
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.username.is_empty() && !self.password().is_empty()
    }

    /// Enter `Submitting` and hand back the credentials to send.
    ///
    /// Returns `None` and leaves the form untouched when submission is
    /// disabled, including while another request is in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if !self.can_submit() {
            debug!(phase = ?self.phase, "Submit ignored");
            return None;
        }

        self.error = None;
        self.phase = FormPhase::Submitting;
        self.submitted_username = Some(self.username.clone());
        Some(Credentials::new(
            self.username.clone(),
            self.password.expose_secret().clone(),
        ))
    }

    /// Apply the outcome of the in-flight request.
    ///
    /// Ignored (returns `None`) unless the form is `Submitting`.
    pub fn complete(&mut self, outcome: Result<(), AuthError>) -> Option<LoginCompletion> {
        if !self.is_submitting() {
            debug!(phase = ?self.phase, "Completion without a request in flight");
            return None;
        }

        let username = self.submitted_username.take().unwrap_or_default();
        match outcome {
            Ok(()) => {
                self.phase = FormPhase::Idle;
                self.error = None;
                Some(LoginCompletion::SignedIn { username })
            }
            Err(e) => {
                let message = e.user_message();
                self.phase = FormPhase::Failed;
                self.error = Some(message.clone());
                Some(LoginCompletion::Failed {
                    kind: e.kind(),
                    message,
                })
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
