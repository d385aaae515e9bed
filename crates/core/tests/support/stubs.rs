//! Configurable calendar and notifier doubles.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use hireflow_core::{CalendarProvider, CreatedEvent, MeetingDetails, Notifier};
use hireflow_domain::{HireflowError, Interview, Result as DomainResult};

/// Calendar double that records the access token it was handed and can be
/// switched into a failing or never-resolving mode.
pub struct FakeCalendar {
    pub fail: AtomicBool,
    pub hang: AtomicBool,
    seen_tokens: Mutex<Vec<String>>,
}

impl FakeCalendar {
    pub fn new() -> Self {
        Self {
            fail: AtomicBool::new(false),
            hang: AtomicBool::new(false),
            seen_tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        let calendar = Self::new();
        calendar.fail.store(true, Ordering::SeqCst);
        calendar
    }

    pub fn hanging() -> Self {
        let calendar = Self::new();
        calendar.hang.store(true, Ordering::SeqCst);
        calendar
    }

    pub fn seen_tokens(&self) -> Vec<String> {
        self.seen_tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl CalendarProvider for FakeCalendar {
    async fn create_event(
        &self,
        access_token: &str,
        _details: &MeetingDetails,
    ) -> DomainResult<CreatedEvent> {
        self.seen_tokens.lock().unwrap().push(access_token.to_string());
        if self.hang.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(HireflowError::Calendar("provider unavailable".into()));
        }
        Ok(CreatedEvent {
            meet_link: "https://meet.google.com/placeholder-testtest12".to_string(),
            event_id: Some("event-1".to_string()),
        })
    }

    async fn delete_event(&self, _access_token: &str, _event_id: &str) -> DomainResult<()> {
        Ok(())
    }

    async fn refresh_token(&self, _refresh_token: &str) -> DomainResult<String> {
        Err(HireflowError::Auth("Token refresh is not supported".into()))
    }
}

/// Notifier double that counts dispatches and can be told to report
/// failure or to never resolve.
pub struct RecordingNotifier {
    pub succeed: AtomicBool,
    pub hang: AtomicBool,
    scheduled_calls: AtomicUsize,
    cancelled_calls: AtomicUsize,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            succeed: AtomicBool::new(true),
            hang: AtomicBool::new(false),
            scheduled_calls: AtomicUsize::new(0),
            cancelled_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        let notifier = Self::new();
        notifier.succeed.store(false, Ordering::SeqCst);
        notifier
    }

    pub fn hanging() -> Self {
        let notifier = Self::new();
        notifier.hang.store(true, Ordering::SeqCst);
        notifier
    }

    pub fn scheduled_calls(&self) -> usize {
        self.scheduled_calls.load(Ordering::SeqCst)
    }

    pub fn cancelled_calls(&self) -> usize {
        self.cancelled_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_scheduled(&self, _interview: &Interview) -> bool {
        self.scheduled_calls.fetch_add(1, Ordering::SeqCst);
        if self.hang.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        self.succeed.load(Ordering::SeqCst)
    }

    async fn notify_cancelled(&self, _interview: &Interview) -> bool {
        self.cancelled_calls.fetch_add(1, Ordering::SeqCst);
        self.succeed.load(Ordering::SeqCst)
    }
}
