//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sha2::{Digest, Sha256};

use crate::auth::AuthServiceError;

type TokenDigest = [u8; 32];

fn digest(token: &str) -> TokenDigest {
    Sha256::digest(token.as_bytes()).into()
}

/// Authenticates admin callers against a single configured token.
///
/// Only the SHA-256 digest of the token is kept. Configured and presented
/// tokens are both trimmed, then hashed and the digests compared without
/// short-circuiting.
#[derive(Clone)]
pub struct StaticTokenAuthService {
    digest: Option<TokenDigest>,
}

impl StaticTokenAuthService {
    /// An empty `admin_token` disables admin access entirely.
    #[must_use]
    pub fn new(admin_token: &str) -> Self {
        let admin_token = admin_token.trim();

        Self {
            digest: (!admin_token.is_empty()).then(|| digest(admin_token)),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.digest.is_some()
    }
}

impl std::fmt::Debug for StaticTokenAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenAuthService")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[async_trait]
impl AuthService for StaticTokenAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<(), AuthServiceError> {
        let expected = self.digest.ok_or(AuthServiceError::Disabled)?;
        let presented = digest(bearer_token.trim());

        let difference = expected
            .iter()
            .zip(presented.iter())
            .fold(0_u8, |acc, (a, b)| acc | (a ^ b));

        if difference != 0 {
            return Err(AuthServiceError::InvalidToken);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Accept or reject a bearer token presented on an admin request.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<(), AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn matching_token_is_accepted() {
        let auth = StaticTokenAuthService::new("s3cret-admin");

        assert_eq!(auth.authenticate_bearer("s3cret-admin").await, Ok(()));
    }

    #[tokio::test]
    async fn surrounding_whitespace_is_ignored_on_both_sides() {
        let auth = StaticTokenAuthService::new("  s3cret-admin\n");

        for token in ["s3cret-admin", " s3cret-admin ", "s3cret-admin\t"] {
            assert_eq!(
                auth.authenticate_bearer(token).await,
                Ok(()),
                "token {token:?} should be accepted"
            );
        }
    }

    #[tokio::test]
    async fn other_tokens_are_rejected() {
        let auth = StaticTokenAuthService::new("s3cret-admin");

        for token in ["", "s3cret-admi", "s3cret-admin2", "S3CRET-ADMIN"] {
            assert_eq!(
                auth.authenticate_bearer(token).await,
                Err(AuthServiceError::InvalidToken),
                "token {token:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn empty_configured_token_disables_admin_access() {
        let auth = StaticTokenAuthService::new("   ");

        assert!(!auth.is_enabled());
        assert_eq!(
            auth.authenticate_bearer("").await,
            Err(AuthServiceError::Disabled)
        );
    }

    #[test]
    fn debug_output_hides_the_digest() {
        let auth = StaticTokenAuthService::new("s3cret-admin");

        assert_eq!(
            format!("{auth:?}"),
            "StaticTokenAuthService { enabled: true }"
        );
    }
}
