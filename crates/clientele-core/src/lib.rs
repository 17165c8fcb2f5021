//! Core library for Clientele.
//!
//! This crate holds everything the sign-in screen needs that is independent
//! of any rendering technology:
//!
//! - `config`: Where the login endpoint lives
//! - `auth`: The HTTP authentication client and its error taxonomy
//! - `form`: The login form state machine
//! - `login`: The controller that runs at most one sign-in request at a time

pub mod auth;
pub mod config;
pub mod form;
pub mod login;

pub use auth::{AuthClient, AuthError, AuthErrorKind, Credentials};
pub use config::AuthConfig;
pub use form::{FormPhase, LoginCompletion, LoginForm};
pub use login::LoginController;
