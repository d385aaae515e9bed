//! Notification port interface
//!
//! Notification is best-effort by contract: implementations report failure
//! through the returned boolean and must never surface an error to the
//! scheduling workflow.

use async_trait::async_trait;
use hireflow_domain::Interview;

/// Trait for dispatching interview notifications to both parties
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Notify candidate and interviewer that an interview was scheduled.
    /// Returns false when any dispatch failed.
    async fn notify_scheduled(&self, interview: &Interview) -> bool;

    /// Notify candidate and interviewer that an interview was cancelled.
    /// Returns false when any dispatch failed.
    async fn notify_cancelled(&self, interview: &Interview) -> bool;
}
