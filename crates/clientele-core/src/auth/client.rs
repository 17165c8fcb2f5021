//! HTTP client for the Clientbook login endpoint.
//!
//! A sign-in is exactly one JSON `POST`. Any 2xx status is success and the
//! response body is ignored; every other outcome becomes an `AuthError`.

use anyhow::{Context, Result};
use reqwest::{header, Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::AuthConfig;

use super::AuthError;

/// Username and password as typed into the login form.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into()),
        }
    }

    fn login_request(&self) -> LoginRequest<'_> {
        LoginRequest {
            username: &self.username,
            password: self.password.expose_secret(),
        }
    }
}

/// JSON body of a sign-in request
#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Client for the login endpoint.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    login_url: String,
}

impl AuthClient {
    /// Create a new client for the configured login URL.
    ///
    /// The URL is not checked here; a malformed value is reported by
    /// `sign_in` as `AuthError::InvalidUrl`.
    pub fn new(config: &AuthConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            login_url: config.login_url.clone(),
        })
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Send one sign-in request.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let url = Url::parse(&self.login_url).map_err(|e| {
            warn!(url = %self.login_url, error = %e, "Login URL does not parse");
            AuthError::InvalidUrl {
                url: self.login_url.clone(),
            }
        })?;

        debug!(%url, username = %credentials.username, "Sending sign-in request");

        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&credentials.login_request())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Sign-in request failed to send");
                AuthError::Transport(e)
            })?;

        let status = response.status();
        if status.is_success() {
            info!(%status, "Sign-in accepted");
            Ok(())
        } else {
            warn!(%status, "Sign-in rejected");
            Err(AuthError::LoginFailed { status })
        }
    }
}
