//! Port interface for token persistence

use async_trait::async_trait;
use hireflow_domain::{AccessToken, NewAccessToken, Result};

/// Trait for storing and querying OAuth tokens
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Most recently created active token for the user, if any
    async fn find_active(&self, user_id: &str) -> Result<Option<AccessToken>>;

    /// Mark a token row inactive
    async fn deactivate(&self, id: i64) -> Result<()>;

    /// Remove every existing token for the user and insert the replacement
    /// as a single atomic operation
    async fn replace(&self, token: NewAccessToken) -> Result<AccessToken>;
}
