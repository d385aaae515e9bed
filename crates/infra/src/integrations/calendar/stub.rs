//! Stub calendar provider.
//!
//! Fabricates meeting links locally instead of calling the Google Calendar
//! API. Event deletion is accepted and dropped; token refresh always fails,
//! matching the behaviour of the locally issued stand-in credentials.

use async_trait::async_trait;
use hireflow_core::utils::random_hex;
use hireflow_core::{CalendarProvider, CreatedEvent, MeetingDetails};
use hireflow_domain::{HireflowError, Result};
use tracing::{debug, instrument};

const MEET_LINK_SUFFIX_LEN: usize = 10;

/// Calendar provider that never leaves the process.
#[derive(Default)]
pub struct StubCalendarProvider;

impl StubCalendarProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CalendarProvider for StubCalendarProvider {
    #[instrument(skip(self, _access_token, details))]
    async fn create_event(
        &self,
        _access_token: &str,
        details: &MeetingDetails,
    ) -> Result<CreatedEvent> {
        let meet_link =
            format!("https://meet.google.com/placeholder-{}", random_hex(MEET_LINK_SUFFIX_LEN));

        debug!(
            job_title = %details.job_title,
            start_time = %details.start_time,
            meet_link = %meet_link,
            "fabricated calendar event"
        );

        Ok(CreatedEvent { meet_link, event_id: None })
    }

    #[instrument(skip(self, _access_token))]
    async fn delete_event(&self, _access_token: &str, event_id: &str) -> Result<()> {
        debug!(event_id, "dropping calendar event deletion");
        Ok(())
    }

    async fn refresh_token(&self, _refresh_token: &str) -> Result<String> {
        Err(HireflowError::Auth("Token refresh is not supported for stand-in credentials".into()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn details() -> MeetingDetails {
        let start = Utc::now() + Duration::hours(1);
        MeetingDetails {
            job_title: "Backend Engineer".to_string(),
            candidate_email: "ada@example.com".to_string(),
            interviewer_email: "grace@example.com".to_string(),
            start_time: start,
            end_time: start + Duration::hours(1),
        }
    }

    #[tokio::test]
    async fn fabricated_link_has_expected_shape() {
        let provider = StubCalendarProvider::new();

        let event = provider.create_event("token", &details()).await.unwrap();

        let suffix = event
            .meet_link
            .strip_prefix("https://meet.google.com/placeholder-")
            .expect("link carries the placeholder prefix");
        assert_eq!(suffix.len(), MEET_LINK_SUFFIX_LEN);
        assert!(event.event_id.is_none());
    }

    #[tokio::test]
    async fn delete_is_accepted() {
        let provider = StubCalendarProvider::new();
        provider.delete_event("token", "event-1").await.unwrap();
    }

    #[tokio::test]
    async fn refresh_always_fails() {
        let provider = StubCalendarProvider::new();
        let err = provider.refresh_token("refresh").await.unwrap_err();
        assert!(matches!(err, HireflowError::Auth(_)));
    }
}
