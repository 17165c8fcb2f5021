use std::error::Error as _;

use thiserror::Error;

/// Closed classification of sign-in failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    InvalidUrl,
    LoginFailed,
    Other,
}

/// Errors from a sign-in attempt.
///
/// The `Display` text of each variant is the message shown on the login form.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid server URL")]
    InvalidUrl { url: String },

    #[error("Login failed. Please check your credentials.")]
    LoginFailed { status: reqwest::StatusCode },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            AuthError::InvalidUrl { .. } => AuthErrorKind::InvalidUrl,
            AuthError::LoginFailed { .. } => AuthErrorKind::LoginFailed,
            AuthError::Transport(_) => AuthErrorKind::Other,
        }
    }

    /// Text to display on the form for this failure.
    ///
    /// Transport failures append their cause chain, since reqwest's own
    /// message only names the request that failed.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Transport(e) => {
                let mut message = e.to_string();
                let mut source = e.source();
                while let Some(cause) = source {
                    let cause_text = cause.to_string();
                    if !message.contains(&cause_text) {
                        message.push_str(": ");
                        message.push_str(&cause_text);
                    }
                    source = cause.source();
                }
                message
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_message() {
        let err = AuthError::InvalidUrl {
            url: "not a url".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid server URL");
        assert_eq!(err.kind(), AuthErrorKind::InvalidUrl);
    }

    #[test]
    fn test_login_failed_message_ignores_status() {
        for status in [401u16, 403, 404, 500, 302] {
            let err = AuthError::LoginFailed {
                status: reqwest::StatusCode::from_u16(status).expect("valid status code"),
            };
            assert_eq!(
                err.user_message(),
                "Login failed. Please check your credentials."
            );
            assert_eq!(err.kind(), AuthErrorKind::LoginFailed);
        }
    }
}
