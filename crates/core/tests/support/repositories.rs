//! In-memory mocks for the persistence ports, enabling deterministic
//! workflow tests without a database.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use hireflow_core::{InterviewRepository, TokenRepository};
use hireflow_domain::{
    AccessToken, Interview, InterviewStatus, NewAccessToken, NewInterview,
    Result as DomainResult,
};

/// In-memory mock for `InterviewRepository`.
#[derive(Default)]
pub struct MockInterviewRepository {
    rows: Mutex<Vec<Interview>>,
    next_id: Mutex<i64>,
}

impl MockInterviewRepository {
    pub fn new() -> Self {
        Self { rows: Mutex::new(Vec::new()), next_id: Mutex::new(1) }
    }

    /// Seed the mock with an existing row, keeping the id counter ahead
    /// of the seeded ids.
    pub fn with_interview(self, interview: Interview) -> Self {
        {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id = (*next_id).max(interview.id + 1);
            self.rows.lock().unwrap().push(interview);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl InterviewRepository for MockInterviewRepository {
    async fn insert(&self, interview: NewInterview) -> DomainResult<Interview> {
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        let stored = Interview {
            id,
            job_title: interview.job_title,
            candidate_name: interview.candidate_name,
            candidate_email: interview.candidate_email,
            interviewer_name: interview.interviewer_name,
            interviewer_email: interview.interviewer_email,
            start_time: interview.start_time,
            end_time: interview.end_time,
            google_meet_link: interview.google_meet_link,
            calendar_event_id: interview.calendar_event_id,
            created_at: interview.created_at,
            status: interview.status,
        };
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Interview>> {
        Ok(self.rows.lock().unwrap().iter().find(|row| row.id == id).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Interview>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn update_status(&self, id: i64, status: InterviewStatus) -> DomainResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        Ok(rows.len() < before)
    }
}

/// In-memory mock for `TokenRepository`.
#[derive(Default)]
pub struct MockTokenRepository {
    rows: Mutex<Vec<AccessToken>>,
    next_id: Mutex<i64>,
}

impl MockTokenRepository {
    pub fn new() -> Self {
        Self { rows: Mutex::new(Vec::new()), next_id: Mutex::new(1) }
    }

    pub fn with_token(self, token: AccessToken) -> Self {
        {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id = (*next_id).max(token.id + 1);
            self.rows.lock().unwrap().push(token);
        }
        self
    }

    /// All stored rows, for asserting on replacement behaviour.
    pub fn rows(&self) -> Vec<AccessToken> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn find_active(&self, user_id: &str) -> DomainResult<Option<AccessToken>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|row| row.user_id == user_id && row.is_active)
            .max_by_key(|row| row.created_at)
            .cloned())
    }

    async fn deactivate(&self, id: i64) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
            row.is_active = false;
        }
        Ok(())
    }

    async fn replace(&self, token: NewAccessToken) -> DomainResult<AccessToken> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|row| row.user_id != token.user_id);

        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        let stored = AccessToken {
            id,
            user_id: token.user_id,
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at: token.expires_at,
            created_at: Utc::now(),
            is_active: token.is_active,
        };
        rows.push(stored.clone());
        Ok(stored)
    }
}
