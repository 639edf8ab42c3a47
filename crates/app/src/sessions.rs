//! Session identity.
//!
//! Sessions are opaque, client-generated strings. They partition carts and
//! wishlists and carry no server-side state, expiry or authentication.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

/// Opaque session token supplied by the client on every call.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_are_inert() {
        let session = SessionId::from("  anything goes ");

        assert_eq!(session.as_str(), "  anything goes ");
        assert_eq!(session.to_string(), "  anything goes ");
    }

    #[test]
    fn equal_strings_are_the_same_session() {
        assert_eq!(SessionId::from("abc"), SessionId::new(String::from("abc")));
        assert_ne!(SessionId::from("abc"), SessionId::from("ABC"));
    }
}
