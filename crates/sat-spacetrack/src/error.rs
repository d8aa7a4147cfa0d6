//! Space-Track error types.

use sat_core::Category;
use thiserror::Error;

/// Errors from the login request.
#[derive(Debug, Error)]
pub enum AuthError {
    /// HTTP transport error (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered the login with a non-success status.
    #[error("login rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code of the login response.
        status: u16,
        /// Response body.
        message: String,
    },
}

/// Errors from a single query against an open session.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport error (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The provider returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the provider asked us to wait.
        retry_after_secs: u64,
    },

    /// The body was not a JSON array of objects.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The session was never opened or has already been closed.
    #[error("session is not authenticated")]
    NotAuthenticated,
}

/// Failure of a whole extraction run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Identity or password is blank; nothing was sent to the provider.
    #[error("Space-Track credentials are missing")]
    MissingCredentials,

    /// Login failed; no session was opened.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(#[source] AuthError),

    /// A category query failed; the remaining categories were not fetched.
    #[error("extraction of {category} failed: {source}")]
    ExtractionFailed {
        category: Category,
        #[source]
        source: FetchError,
    },
}

impl PipelineError {
    /// The category whose fetch failed, if the run got that far.
    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        match self {
            Self::ExtractionFailed { category, .. } => Some(*category),
            Self::MissingCredentials | Self::AuthenticationFailed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_failure_names_category() {
        let err = PipelineError::ExtractionFailed {
            category: Category::Debris,
            source: FetchError::Api {
                status: 500,
                message: "boom".into(),
            },
        };
        assert_eq!(err.category(), Some(Category::Debris));
        assert_eq!(
            err.to_string(),
            "extraction of debris failed: API error (500): boom"
        );
    }

    #[test]
    fn early_failures_have_no_category() {
        assert_eq!(PipelineError::MissingCredentials.category(), None);
        let err = PipelineError::AuthenticationFailed(AuthError::Rejected {
            status: 401,
            message: String::new(),
        });
        assert_eq!(err.category(), None);
    }
}
