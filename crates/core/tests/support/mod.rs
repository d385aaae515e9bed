//! Shared test doubles for core workflow tests.

pub mod repositories;
pub mod stubs;

use chrono::{DateTime, Duration, Utc};
use hireflow_domain::CreateInterviewRequest;

/// A request one hour in the future with a 45 minute slot.
pub fn valid_request() -> CreateInterviewRequest {
    let start = Utc::now() + Duration::hours(1);
    request_at(start, start + Duration::minutes(45))
}

pub fn request_at(start: DateTime<Utc>, end: DateTime<Utc>) -> CreateInterviewRequest {
    CreateInterviewRequest {
        job_title: "Backend Engineer".to_string(),
        candidate_name: "Ada Lovelace".to_string(),
        candidate_email: "ada@example.com".to_string(),
        interviewer_name: "Grace Hopper".to_string(),
        interviewer_email: "grace@example.com".to_string(),
        start_time: start,
        end_time: end,
    }
}
