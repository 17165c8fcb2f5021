//! Shared helpers for integration tests.

#![allow(dead_code)]

use clientele_core::{AuthClient, AuthConfig};
use wiremock::MockServer;

pub const LOGIN_PATH: &str = "/api/login";

/// Login URL served by the given mock server.
pub fn login_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), LOGIN_PATH)
}

pub fn client_for(url: &str) -> AuthClient {
    AuthClient::new(&AuthConfig::with_login_url(url)).expect("client builds")
}

/// A localhost URL with nothing listening on it.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let port = listener.local_addr().expect("probe address").port();
    drop(listener);
    format!("http://127.0.0.1:{}{}", port, LOGIN_PATH)
}
