//! Login gate. Not a security boundary: passwords are plain-text exact
//! matches and no session or token is issued. The gate exists so the shell
//! can show a busy state and report why a sign-in was refused.

use std::time::Duration;

use thiserror::Error;

use crate::models::User;
use crate::store::Catalog;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Validation failure, surfaced before any lookup happens.
    #[error("username and password are required")]
    MissingCredentials,
    #[error("user not found")]
    UserNotFound,
    #[error("wrong password")]
    WrongPassword,
}

/// Synchronous credential check: case-insensitive exact username match, then
/// exact password string match. The two miss cases stay distinct so the
/// shell can display them differently.
pub fn verify(catalog: &Catalog, username: &str, password: &str) -> Result<User, AuthError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    let user = catalog
        .find_by_username(username)
        .ok_or(AuthError::UserNotFound)?;
    if user.password != password {
        tracing::debug!(username, "login refused: wrong password");
        return Err(AuthError::WrongPassword);
    }
    Ok(user.clone())
}

/// Asynchronous confirmation wrapper around [`verify`] with a simulated
/// latency. The delay has no correctness implication; dropping the returned
/// future cancels the pending resolution, so navigating away before it
/// resolves never applies stale state.
#[derive(Debug, Clone)]
pub struct LoginGate {
    delay: Duration,
}

impl Default for LoginGate {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(800),
        }
    }
}

impl LoginGate {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn login(
        &self,
        catalog: &Catalog,
        username: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        verify(catalog, username, password)
    }
}
