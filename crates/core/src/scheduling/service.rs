//! Interview scheduling service - core business logic

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use hireflow_domain::validation::{
    is_valid_email, is_valid_required, MAX_JOB_TITLE_LEN, MAX_PARTICIPANT_FIELD_LEN,
};
use hireflow_domain::{
    AccessToken, CreateInterviewRequest, HireflowError, InterviewStatus, InterviewView,
    NewInterview, Result, WorkflowConfig,
};
use tokio::time::timeout;
use tracing::{debug, warn};

use super::ports::InterviewRepository;
use crate::auth::ports::TokenRepository;
use crate::calendar_ports::{CalendarProvider, MeetingDetails};
use crate::notification_ports::Notifier;

/// Interview scheduling service
///
/// Orchestrates the creation workflow (validate, gate on a token, obtain a
/// meeting link, persist, notify) and passes the remaining CRUD operations
/// straight through to the store.
pub struct SchedulingService {
    interviews: Arc<dyn InterviewRepository>,
    tokens: Arc<dyn TokenRepository>,
    calendar: Arc<dyn CalendarProvider>,
    notifier: Arc<dyn Notifier>,
    calendar_timeout: Duration,
    notify_timeout: Duration,
}

impl SchedulingService {
    /// Create a new scheduling service
    pub fn new(
        interviews: Arc<dyn InterviewRepository>,
        tokens: Arc<dyn TokenRepository>,
        calendar: Arc<dyn CalendarProvider>,
        notifier: Arc<dyn Notifier>,
        workflow: &WorkflowConfig,
    ) -> Self {
        Self {
            interviews,
            tokens,
            calendar,
            notifier,
            calendar_timeout: Duration::from_secs(workflow.calendar_timeout_secs),
            notify_timeout: Duration::from_secs(workflow.notify_timeout_secs),
        }
    }

    /// Run the full creation workflow for the given caller identity.
    ///
    /// Notification failure never invalidates a successful persist; the
    /// returned projection reflects the stored row regardless of whether
    /// either email went out.
    pub async fn create_interview(
        &self,
        request: CreateInterviewRequest,
        user_id: &str,
    ) -> Result<InterviewView> {
        validate_request(&request)?;

        let token = self
            .get_valid_token(user_id)
            .await?
            .ok_or_else(|| HireflowError::Auth("Valid Google authentication required".into()))?;

        let details = MeetingDetails {
            job_title: request.job_title.clone(),
            candidate_email: request.candidate_email.clone(),
            interviewer_email: request.interviewer_email.clone(),
            start_time: request.start_time,
            end_time: request.end_time,
        };

        let event = timeout(
            self.calendar_timeout,
            self.calendar.create_event(&token.access_token, &details),
        )
        .await
        .map_err(|_| HireflowError::Calendar("Calendar event creation timed out".into()))??;

        debug!(meet_link = %event.meet_link, "calendar event created");

        let new_interview = NewInterview {
            job_title: request.job_title,
            candidate_name: request.candidate_name,
            candidate_email: request.candidate_email,
            interviewer_name: request.interviewer_name,
            interviewer_email: request.interviewer_email,
            start_time: request.start_time,
            end_time: request.end_time,
            google_meet_link: Some(event.meet_link),
            calendar_event_id: event.event_id,
            created_at: Utc::now(),
            status: InterviewStatus::Scheduled,
        };

        // Single insert; there is no multi-step write to roll back.
        let interview = self
            .interviews
            .insert(new_interview)
            .await
            .map_err(|e| HireflowError::Internal(format!("Failed to create interview: {e}")))?;

        match timeout(self.notify_timeout, self.notifier.notify_scheduled(&interview)).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(interview_id = interview.id, "interview notification dispatch failed");
            }
            Err(_) => {
                warn!(interview_id = interview.id, "interview notification dispatch timed out");
            }
        }

        Ok(interview.into())
    }

    /// Fetch a single interview projection.
    pub async fn get_interview(&self, id: i64) -> Result<InterviewView> {
        self.interviews
            .find_by_id(id)
            .await?
            .map(InterviewView::from)
            .ok_or_else(|| HireflowError::NotFound("Interview not found".into()))
    }

    /// List all interviews, newest first.
    pub async fn list_interviews(&self) -> Result<Vec<InterviewView>> {
        let interviews = self.interviews.list_all().await?;
        Ok(interviews.into_iter().map(InterviewView::from).collect())
    }

    /// Update the status of an interview from its textual name.
    ///
    /// The name must match the enumeration exactly (case-sensitive).
    pub async fn update_status(&self, id: i64, status_name: &str) -> Result<()> {
        let status: InterviewStatus = status_name.parse()?;
        if self.interviews.update_status(id, status).await? {
            Ok(())
        } else {
            Err(HireflowError::NotFound("Interview not found".into()))
        }
    }

    /// Delete an interview.
    pub async fn delete_interview(&self, id: i64) -> Result<()> {
        if self.interviews.delete(id).await? {
            Ok(())
        } else {
            Err(HireflowError::NotFound("Interview not found".into()))
        }
    }

    /// Return the caller's active token if present and unexpired.
    ///
    /// An active-but-expired row is deactivated before reporting absence,
    /// so a stale token is only ever consumed once.
    async fn get_valid_token(&self, user_id: &str) -> Result<Option<AccessToken>> {
        let Some(token) = self.tokens.find_active(user_id).await? else {
            return Ok(None);
        };

        if token.is_expired(Utc::now()) {
            self.tokens.deactivate(token.id).await?;
            return Ok(None);
        }

        Ok(Some(token))
    }
}

fn validate_request(request: &CreateInterviewRequest) -> Result<()> {
    if !is_valid_required(&request.job_title, MAX_JOB_TITLE_LEN) {
        return Err(HireflowError::Validation("Job title is required".into()));
    }
    if !is_valid_required(&request.candidate_name, MAX_PARTICIPANT_FIELD_LEN) {
        return Err(HireflowError::Validation("Candidate name is required".into()));
    }
    if !is_valid_required(&request.interviewer_name, MAX_PARTICIPANT_FIELD_LEN) {
        return Err(HireflowError::Validation("Interviewer name is required".into()));
    }
    if !is_valid_email(&request.candidate_email) {
        return Err(HireflowError::Validation("Candidate email is not a valid address".into()));
    }
    if !is_valid_email(&request.interviewer_email) {
        return Err(HireflowError::Validation("Interviewer email is not a valid address".into()));
    }
    if request.end_time <= request.start_time {
        return Err(HireflowError::Validation("End time must be after start time".into()));
    }
    if request.start_time <= Utc::now() {
        return Err(HireflowError::Validation(
            "Interview must be scheduled for future time".into(),
        ));
    }
    Ok(())
}
