//! SQLite-backed implementation of the InterviewRepository port.

use async_trait::async_trait;
use hireflow_core::InterviewRepository;
use hireflow_domain::{HireflowError, Interview, InterviewStatus, NewInterview, Result};
use rusqlite::types::Type;
use rusqlite::{params, Row};
use tracing::{debug, instrument};

use super::{datetime_from_ts, DbManager};
use crate::errors::InfraError;

const COLUMNS: &str = "id, job_title, candidate_name, candidate_email, interviewer_name, \
                       interviewer_email, start_ts, end_ts, google_meet_link, \
                       calendar_event_id, created_at, status";

/// SQLite implementation of InterviewRepository
pub struct SqliteInterviewRepository {
    db: DbManager,
}

impl SqliteInterviewRepository {
    /// Create a new interview repository
    pub fn new(db: DbManager) -> Self {
        Self { db }
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<Interview> {
    let status_text: String = row.get(11)?;
    let status: InterviewStatus = status_text
        .parse()
        .map_err(|e: HireflowError| rusqlite::Error::FromSqlConversionFailure(11, Type::Text, Box::new(e)))?;

    Ok(Interview {
        id: row.get(0)?,
        job_title: row.get(1)?,
        candidate_name: row.get(2)?,
        candidate_email: row.get(3)?,
        interviewer_name: row.get(4)?,
        interviewer_email: row.get(5)?,
        start_time: datetime_from_ts(6, row.get(6)?)?,
        end_time: datetime_from_ts(7, row.get(7)?)?,
        google_meet_link: row.get(8)?,
        calendar_event_id: row.get(9)?,
        created_at: datetime_from_ts(10, row.get(10)?)?,
        status,
    })
}

#[async_trait]
impl InterviewRepository for SqliteInterviewRepository {
    #[instrument(skip(self, interview))]
    async fn insert(&self, interview: NewInterview) -> Result<Interview> {
        let conn = self.db.get_connection()?;

        conn.execute(
            "INSERT INTO interviews (
                job_title, candidate_name, candidate_email, interviewer_name,
                interviewer_email, start_ts, end_ts, google_meet_link,
                calendar_event_id, created_at, status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                interview.job_title,
                interview.candidate_name,
                interview.candidate_email,
                interview.interviewer_name,
                interview.interviewer_email,
                interview.start_time.timestamp(),
                interview.end_time.timestamp(),
                interview.google_meet_link,
                interview.calendar_event_id,
                interview.created_at.timestamp(),
                interview.status.as_str(),
            ],
        )
        .map_err(InfraError::from)?;

        let id = conn.last_insert_rowid();
        debug!(interview_id = id, "inserted interview");

        let stored = conn
            .query_row(&format!("SELECT {COLUMNS} FROM interviews WHERE id = ?1"), params![id], map_row)
            .map_err(InfraError::from)?;

        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Interview>> {
        let conn = self.db.get_connection()?;

        let result = conn.query_row(
            &format!("SELECT {COLUMNS} FROM interviews WHERE id = ?1"),
            params![id],
            map_row,
        );

        match result {
            Ok(interview) => Ok(Some(interview)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(InfraError::from(e).into()),
        }
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Interview>> {
        let conn = self.db.get_connection()?;

        let mut stmt = conn
            .prepare(&format!("SELECT {COLUMNS} FROM interviews ORDER BY created_at DESC, id DESC"))
            .map_err(InfraError::from)?;

        let rows = stmt
            .query_map([], map_row)
            .map_err(InfraError::from)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(InfraError::from)?;

        debug!(count = rows.len(), "listed interviews");

        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: i64, status: InterviewStatus) -> Result<bool> {
        let conn = self.db.get_connection()?;

        let updated = conn
            .execute(
                "UPDATE interviews SET status = ?1 WHERE id = ?2",
                params![status.as_str(), id],
            )
            .map_err(InfraError::from)?;

        debug!(interview_id = id, status = %status, updated, "updated interview status");

        Ok(updated > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.db.get_connection()?;

        let deleted = conn
            .execute("DELETE FROM interviews WHERE id = ?1", params![id])
            .map_err(InfraError::from)?;

        debug!(interview_id = id, deleted, "deleted interview");

        Ok(deleted > 0)
    }
}
