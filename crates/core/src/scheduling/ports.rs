//! Port interfaces for interview persistence
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use hireflow_domain::{Interview, InterviewStatus, NewInterview, Result};

/// Trait for persisting and querying interview records
#[async_trait]
pub trait InterviewRepository: Send + Sync {
    /// Insert a new interview and return the stored row with its assigned id
    async fn insert(&self, interview: NewInterview) -> Result<Interview>;

    /// Fetch a single interview by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Interview>>;

    /// List all interviews, newest first by creation time
    async fn list_all(&self) -> Result<Vec<Interview>>;

    /// Set the status of an existing interview; returns false when no row
    /// matches the id
    async fn update_status(&self, id: i64, status: InterviewStatus) -> Result<bool>;

    /// Remove an interview; returns false when no row matches the id
    async fn delete(&self, id: i64) -> Result<bool>;
}
