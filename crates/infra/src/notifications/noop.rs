//! Notifier used when outbound mail is disabled.

use async_trait::async_trait;
use hireflow_core::Notifier;
use hireflow_domain::Interview;
use tracing::info;

/// Logs notifications instead of sending them.
#[derive(Default)]
pub struct NoopNotifier;

impl NoopNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify_scheduled(&self, interview: &Interview) -> bool {
        info!(
            interview_id = interview.id,
            candidate = %interview.candidate_email,
            interviewer = %interview.interviewer_email,
            "mail disabled, skipping scheduled notification"
        );
        true
    }

    async fn notify_cancelled(&self, interview: &Interview) -> bool {
        info!(interview_id = interview.id, "mail disabled, skipping cancellation notification");
        true
    }
}
