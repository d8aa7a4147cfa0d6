//! Space-Track account credentials.

use std::fmt;

/// Identity and password for a Space-Track account.
///
/// Resolved by the caller (configuration, environment) and consumed as-is.
/// The secret is never printed: `Debug` redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    identifier: String,
    secret: String,
}

impl Credentials {
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Account identity (the login e-mail on Space-Track).
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Both identity and secret contain something other than whitespace.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.identifier.trim().is_empty() && !self.secret.trim().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}
