//! Application state for the Clientele terminal client.
//!
//! The `App` wraps the core `LoginController` with the bits of state that
//! only matter to a terminal: which field has focus, an animation tick for
//! the spinner, and whether the user asked to quit.

use anyhow::Result;

use clientele_core::{AuthConfig, LoginCompletion, LoginController, LoginForm};

// ============================================================================
// UI State Types
// ============================================================================

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    LoggingIn,
    Quitting,
}

/// Login form focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Username,
    Password,
    Button,
}

impl LoginFocus {
    pub fn next(self) -> Self {
        match self {
            LoginFocus::Username => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Button,
            LoginFocus::Button => LoginFocus::Username,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LoginFocus::Username => LoginFocus::Button,
            LoginFocus::Password => LoginFocus::Username,
            LoginFocus::Button => LoginFocus::Password,
        }
    }
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    pub state: AppState,
    pub login_focus: LoginFocus,
    /// Advances once per event-loop pass; drives the spinner
    pub tick: usize,
    /// Shown under the form after a successful sign-in
    pub status_message: Option<String>,
    controller: LoginController,
}

impl App {
    pub fn new(config: &AuthConfig) -> Result<Self> {
        Ok(Self::with_controller(LoginController::new(config)?))
    }

    pub fn with_controller(controller: LoginController) -> Self {
        Self {
            state: AppState::LoggingIn,
            login_focus: LoginFocus::Username,
            tick: 0,
            status_message: None,
            controller,
        }
    }

    pub fn form(&self) -> &LoginForm {
        self.controller.form()
    }

    pub fn form_mut(&mut self) -> &mut LoginForm {
        self.controller.form_mut()
    }

    /// Submit the form. Does nothing while submission is disabled.
    pub fn submit(&mut self) {
        if self.controller.submit() {
            self.status_message = None;
        }
    }

    /// Pick up a finished sign-in and advance the spinner
    pub fn check_background_tasks(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        if let Some(completion) = self.controller.poll_completion() {
            self.status_message = match completion {
                LoginCompletion::SignedIn { username } => {
                    Some(format!("Signed in as {}", username))
                }
                LoginCompletion::Failed { .. } => None,
            };
        }
    }
}

// ============================================================================
// Input validation helpers (exported for use in input.rs)
// ============================================================================

/// Check if a typed character should be added to a field (no control characters)
pub fn can_add_char(c: char) -> bool {
    !c.is_control()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_focus_next() {
        assert_eq!(LoginFocus::Username.next(), LoginFocus::Password);
        assert_eq!(LoginFocus::Password.next(), LoginFocus::Button);
        assert_eq!(LoginFocus::Button.next(), LoginFocus::Username); // Wraps around
    }

    #[test]
    fn test_login_focus_prev() {
        assert_eq!(LoginFocus::Username.prev(), LoginFocus::Button); // Wraps around
        assert_eq!(LoginFocus::Button.prev(), LoginFocus::Password);
        assert_eq!(LoginFocus::Password.prev(), LoginFocus::Username);
    }

    #[test]
    fn test_can_add_char() {
        assert!(can_add_char('a'));
        assert!(can_add_char('!'));
        assert!(can_add_char(' '));
        assert!(can_add_char('é'));
        // Control characters rejected
        assert!(!can_add_char('\x00'));
        assert!(!can_add_char('\n'));
        assert!(!can_add_char('\t'));
        assert!(!can_add_char('\r'));
    }

    async fn wait_until_settled(app: &mut App) {
        for _ in 0..100 {
            app.check_background_tasks();
            if !app.form().is_submitting() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
    }

    #[tokio::test]
    async fn test_status_names_username_that_was_sent() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_delay(std::time::Duration::from_millis(100)),
            )
            .mount(&mock_server)
            .await;

        let url = format!("{}/api/login", mock_server.uri());
        let mut app = App::new(&AuthConfig::with_login_url(url)).expect("app builds");
        app.form_mut().set_username("ada");
        app.form_mut().set_password("hunter2");

        app.submit();
        app.form_mut().set_username("grace");
        wait_until_settled(&mut app).await;

        assert_eq!(app.status_message.as_deref(), Some("Signed in as ada"));
        assert_eq!(app.form().username(), "grace");
    }

    #[tokio::test]
    async fn test_invalid_url_failure_shown_on_form() {
        let mut app = App::new(&AuthConfig::with_login_url("not a url")).expect("app builds");
        app.form_mut().set_username("ada");
        app.form_mut().set_password("hunter2");

        app.submit();
        assert!(app.form().is_submitting());

        wait_until_settled(&mut app).await;

        assert_eq!(app.form().error(), Some("Invalid server URL"));
        assert_eq!(app.status_message, None);
    }
}
