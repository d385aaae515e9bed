//! Common data types used throughout the application

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::HireflowError;

/// Lifecycle status of an interview.
///
/// Stored as its canonical text form; parsing is a case-sensitive exact
/// match so that `"scheduled"` is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl InterviewStatus {
    /// Canonical text form, used both on the wire and in the database.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewStatus {
    type Err = HireflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Scheduled" => Ok(Self::Scheduled),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            other => Err(HireflowError::Validation(format!("Invalid status value: {other}"))),
        }
    }
}

/// A scheduled meeting record between a candidate and an interviewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: i64,
    pub job_title: String,
    pub candidate_name: String,
    pub candidate_email: String,
    pub interviewer_name: String,
    pub interviewer_email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub google_meet_link: Option<String>,
    pub calendar_event_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: InterviewStatus,
}

impl Interview {
    /// Length of the interview in whole minutes.
    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

/// Interview fields as persisted by the scheduling workflow, before the
/// store has assigned an identifier.
#[derive(Debug, Clone)]
pub struct NewInterview {
    pub job_title: String,
    pub candidate_name: String,
    pub candidate_email: String,
    pub interviewer_name: String,
    pub interviewer_email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub google_meet_link: Option<String>,
    pub calendar_event_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: InterviewStatus,
}

/// Inbound request body for creating an interview.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterviewRequest {
    pub job_title: String,
    pub candidate_name: String,
    pub candidate_email: String,
    pub interviewer_name: String,
    pub interviewer_email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Read-only projection of a stored interview, with the status rendered
/// as its textual name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewView {
    pub id: i64,
    pub job_title: String,
    pub candidate_name: String,
    pub candidate_email: String,
    pub interviewer_name: String,
    pub interviewer_email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub google_meet_link: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Interview> for InterviewView {
    fn from(interview: Interview) -> Self {
        Self {
            id: interview.id,
            job_title: interview.job_title,
            candidate_name: interview.candidate_name,
            candidate_email: interview.candidate_email,
            interviewer_name: interview.interviewer_name,
            interviewer_email: interview.interviewer_email,
            start_time: interview.start_time,
            end_time: interview.end_time,
            google_meet_link: interview.google_meet_link,
            status: interview.status.to_string(),
            created_at: interview.created_at,
        }
    }
}

/// Stand-in OAuth credential gating calendar access. At most one active
/// row exists per user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub id: i64,
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl AccessToken {
    /// Whether the token has passed its expiry timestamp.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Token fields for a replacement row, before the store has assigned an
/// identifier.
#[derive(Debug, Clone)]
pub struct NewAccessToken {
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Authentication status as reported to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub is_authenticated: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub has_token: bool,
}
