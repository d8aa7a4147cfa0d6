//! The request seam between a [`RemoteSession`](crate::RemoteSession) and the network.

use std::future::Future;
use std::time::Duration;

use sat_core::Credentials;

use crate::error::{AuthError, FetchError};
use crate::http::read_body;
use crate::query::{LOGIN_PATH, LOGOUT_PATH};

/// Requests a session needs from the provider.
///
/// Implementations hold whatever session state login produces (cookies) and
/// reuse it for every later request. None of the methods retry.
pub trait Transport {
    /// Authenticate with the provider.
    fn login(&self, credentials: &Credentials)
    -> impl Future<Output = Result<(), AuthError>> + Send;

    /// Authenticated GET of `path_and_query`, returning the raw body.
    fn get(&self, path_and_query: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;

    /// End the provider session.
    fn logout(&self) -> impl Future<Output = Result<(), FetchError>> + Send;
}

/// [`Transport`] backed by a cookie-keeping `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport for `base_url` whose requests time out after `timeout`.
    ///
    /// Every transport has its own cookie jar, so each one is a separate
    /// provider session.
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the TLS backend cannot be initialised.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("satwatch/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .cookie_store(true)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.base_url)
    }
}

impl Transport for HttpTransport {
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let resp = self
            .http
            .post(self.url(LOGIN_PATH))
            .form(&[
                ("identity", credentials.identifier()),
                ("password", credentials.secret()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(AuthError::Rejected {
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }

    async fn get(&self, path_and_query: &str) -> Result<Vec<u8>, FetchError> {
        read_body(self.http.get(self.url(path_and_query)).send().await?).await
    }

    async fn logout(&self) -> Result<(), FetchError> {
        read_body(self.http.get(self.url(LOGOUT_PATH)).send().await?).await?;
        Ok(())
    }
}
