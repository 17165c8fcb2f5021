//! Sign-in controller.
//!
//! `LoginController` pairs a `LoginForm` with an `AuthClient`. Submitting
//! spawns one background task whose result comes back over an MPSC channel;
//! the form's `Submitting` phase is the guard that keeps a second request
//! from starting while one is outstanding.

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::auth::{AuthClient, AuthError};
use crate::config::AuthConfig;
use crate::form::{LoginCompletion, LoginForm};

/// Buffer size for the completion channel.
/// Only one request is ever in flight, so one slot is enough.
const CHANNEL_BUFFER_SIZE: usize = 1;

pub struct LoginController {
    form: LoginForm,
    auth: AuthClient,
    result_tx: mpsc::Sender<Result<(), AuthError>>,
    result_rx: mpsc::Receiver<Result<(), AuthError>>,
    signed_in: bool,
}

impl LoginController {
    pub fn new(config: &AuthConfig) -> Result<Self> {
        Ok(Self::with_client(AuthClient::new(config)?))
    }

    pub fn with_client(auth: AuthClient) -> Self {
        info!(login_url = %auth.login_url(), "Login endpoint configured");
        let (result_tx, result_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        Self {
            form: LoginForm::new(),
            auth,
            result_tx,
            result_rx,
            signed_in: false,
        }
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Mutable access for field edits
    pub fn form_mut(&mut self) -> &mut LoginForm {
        &mut self.form
    }

    /// Whether the most recent completed attempt succeeded
    pub fn signed_in(&self) -> bool {
        self.signed_in
    }

    /// Start a sign-in request if the form allows it.
    ///
    /// Must be called from within a tokio runtime. Returns `true` when a
    /// request was started.
    pub fn submit(&mut self) -> bool {
        let Some(credentials) = self.form.begin_submit() else {
            return false;
        };

        info!(username = %credentials.username, "Starting sign-in");
        self.signed_in = false;

        let auth = self.auth.clone();
        let tx = self.result_tx.clone();
        tokio::spawn(async move {
            let result = auth.sign_in(&credentials).await;
            if tx.send(result).await.is_err() {
                debug!("Login controller dropped before sign-in completed");
            }
        });

        true
    }

    /// Apply a finished sign-in, if there is one, without blocking.
    pub fn poll_completion(&mut self) -> Option<LoginCompletion> {
        match self.result_rx.try_recv() {
            Ok(result) => self.apply(result),
            Err(_) => None,
        }
    }

    /// Wait for the in-flight sign-in to finish and apply it.
    ///
    /// Returns `None` immediately when nothing is in flight.
    pub async fn wait_for_completion(&mut self) -> Option<LoginCompletion> {
        if !self.form.is_submitting() {
            return None;
        }
        let result = self.result_rx.recv().await?;
        self.apply(result)
    }

    fn apply(&mut self, result: Result<(), AuthError>) -> Option<LoginCompletion> {
        let completion = self.form.complete(result)?;
        match &completion {
            LoginCompletion::SignedIn { username } => {
                info!(%username, "Login successful");
                self.signed_in = true;
            }
            LoginCompletion::Failed { kind, message } => {
                error!(?kind, error = %message, "Login failed");
            }
        }
        Some(completion)
    }
}
