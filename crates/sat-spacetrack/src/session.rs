//! Authenticated provider session.
//!
//! ```text
//! unauthenticated → authenticated → closed
//! ```
//!
//! Requests are only sent while authenticated. Closing is best-effort and
//! idempotent: a failed logout is logged and otherwise ignored.

use sat_core::Credentials;

use crate::error::{AuthError, FetchError};
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
    Closed,
}

/// A provider session owned by a single extraction run.
#[derive(Debug)]
pub struct RemoteSession<T> {
    transport: T,
    state: SessionState,
}

impl<T: Transport> RemoteSession<T> {
    const fn new(transport: T) -> Self {
        Self {
            transport,
            state: SessionState::Unauthenticated,
        }
    }

    /// Log in and return an authenticated session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] on a transport failure or non-success login status.
    pub async fn open(transport: T, credentials: &Credentials) -> Result<Self, AuthError> {
        let mut session = Self::new(transport);
        session.login(credentials).await?;
        Ok(session)
    }

    /// A rejected login leaves the session unauthenticated.
    async fn login(&mut self, credentials: &Credentials) -> Result<(), AuthError> {
        tracing::debug!(identity = credentials.identifier(), "logging in to Space-Track");
        self.transport.login(credentials).await?;
        self.state = SessionState::Authenticated;
        tracing::info!("Space-Track session authenticated");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Authenticated GET, returning the raw body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotAuthenticated`] outside the authenticated
    /// state, otherwise whatever the transport reports.
    pub async fn get(&self, path_and_query: &str) -> Result<Vec<u8>, FetchError> {
        if self.state != SessionState::Authenticated {
            return Err(FetchError::NotAuthenticated);
        }
        self.transport.get(path_and_query).await
    }

    /// Log out if authenticated and move to [`SessionState::Closed`].
    pub async fn close(&mut self) {
        if self.state == SessionState::Authenticated {
            if let Err(e) = self.transport.logout().await {
                tracing::warn!(%e, "Space-Track logout failed");
            }
        }
        self.state = SessionState::Closed;
    }
}
