//! Credential validation against the remote auth service.
//! Used by: state, handlers::show.

pub mod http;

use async_trait::async_trait;

#[async_trait]
pub trait CredentialValidator: Send + Sync {
    /// True only when the collaborator positively accepts the pair.
    async fn validate(&self, username: &str, password: &str) -> bool;
}
