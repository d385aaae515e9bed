//! Calendar integration port interface
//!
//! The workflow only ever talks to this trait; the shipped implementation
//! is a stub that fabricates meeting links, and a network-backed provider
//! can be substituted without touching the workflow.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hireflow_domain::Result;

/// Fields the provider needs to create a calendar event.
#[derive(Debug, Clone)]
pub struct MeetingDetails {
    pub job_title: String,
    pub candidate_email: String,
    pub interviewer_email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Result of creating a calendar event.
#[derive(Debug, Clone)]
pub struct CreatedEvent {
    /// Meeting link handed back to participants.
    pub meet_link: String,
    /// Provider-side event identifier, when the provider issues one.
    pub event_id: Option<String>,
}

/// Trait for calendar provider operations
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Create a calendar event and return its meeting link
    async fn create_event(
        &self,
        access_token: &str,
        details: &MeetingDetails,
    ) -> Result<CreatedEvent>;

    /// Delete a previously created event
    async fn delete_event(&self, access_token: &str, event_id: &str) -> Result<()>;

    /// Exchange a refresh token for a new access token
    async fn refresh_token(&self, refresh_token: &str) -> Result<String>;
}
