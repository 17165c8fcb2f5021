//! Authentication against the Clientbook login endpoint.
//!
//! This module provides the `AuthClient` for sending a single sign-in
//! request, and `AuthError`, whose display text doubles as the message
//! shown to the user when sign-in fails.

pub mod client;
pub mod error;

pub use client::{AuthClient, Credentials};
pub use error::{AuthError, AuthErrorKind};
