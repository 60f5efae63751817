//! Credential verification seam.
//!
//! Login in this application is a placeholder. [`MockCredentialVerifier`]
//! accepts any non-empty email/password pair and fabricates a profile; it
//! performs no real check. A production deployment swaps in a verifier backed
//! by an actual credential store behind the same trait.

use anyhow::Result;
use async_trait::async_trait;
use shared::User;

#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Returns the user's profile when the credentials are accepted
    async fn verify(&self, email: &str, password: &str) -> Result<Option<User>>;
}

/// Accepts every non-empty pair. Not a security boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCredentialVerifier;

#[async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn verify(&self, email: &str, password: &str) -> Result<Option<User>> {
        if email.is_empty() || password.is_empty() {
            return Ok(None);
        }

        Ok(Some(User {
            name: "Test User".to_string(),
            email: email.to_string(),
            skin_type: "Combination".to_string(),
            concerns: vec!["Acne".to_string(), "Hyperpigmentation".to_string()],
            avatar: None,
        }))
    }
}
