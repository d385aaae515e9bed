//! SQLite-backed implementation of the TokenRepository port.

use async_trait::async_trait;
use chrono::Utc;
use hireflow_core::TokenRepository;
use hireflow_domain::{AccessToken, NewAccessToken, Result};
use rusqlite::{params, Row};
use tracing::{debug, instrument};

use super::{datetime_from_ts, DbManager};
use crate::errors::InfraError;

const COLUMNS: &str =
    "id, user_id, access_token, refresh_token, expires_at, created_at, is_active";

/// SQLite implementation of TokenRepository
pub struct SqliteTokenRepository {
    db: DbManager,
}

impl SqliteTokenRepository {
    /// Create a new token repository
    pub fn new(db: DbManager) -> Self {
        Self { db }
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<AccessToken> {
    Ok(AccessToken {
        id: row.get(0)?,
        user_id: row.get(1)?,
        access_token: row.get(2)?,
        refresh_token: row.get(3)?,
        expires_at: datetime_from_ts(4, row.get(4)?)?,
        created_at: datetime_from_ts(5, row.get(5)?)?,
        is_active: row.get(6)?,
    })
}

#[async_trait]
impl TokenRepository for SqliteTokenRepository {
    #[instrument(skip(self))]
    async fn find_active(&self, user_id: &str) -> Result<Option<AccessToken>> {
        let conn = self.db.get_connection()?;

        let result = conn.query_row(
            &format!(
                "SELECT {COLUMNS} FROM user_tokens
                 WHERE user_id = ?1 AND is_active = 1
                 ORDER BY created_at DESC
                 LIMIT 1"
            ),
            params![user_id],
            map_row,
        );

        match result {
            Ok(token) => Ok(Some(token)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(InfraError::from(e).into()),
        }
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: i64) -> Result<()> {
        let conn = self.db.get_connection()?;

        conn.execute("UPDATE user_tokens SET is_active = 0 WHERE id = ?1", params![id])
            .map_err(InfraError::from)?;

        debug!(token_id = id, "deactivated token");

        Ok(())
    }

    #[instrument(skip(self, token))]
    async fn replace(&self, token: NewAccessToken) -> Result<AccessToken> {
        let mut conn = self.db.get_connection()?;

        let created_at = Utc::now();

        // Delete-then-insert inside one transaction so a user never holds
        // two token rows.
        let tx = conn.transaction().map_err(InfraError::from)?;
        tx.execute("DELETE FROM user_tokens WHERE user_id = ?1", params![token.user_id])
            .map_err(InfraError::from)?;
        tx.execute(
            "INSERT INTO user_tokens (user_id, access_token, refresh_token, expires_at, created_at, is_active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                token.user_id,
                token.access_token,
                token.refresh_token,
                token.expires_at.timestamp(),
                created_at.timestamp(),
                token.is_active,
            ],
        )
        .map_err(InfraError::from)?;
        let id = tx.last_insert_rowid();
        tx.commit().map_err(InfraError::from)?;

        debug!(token_id = id, user_id = %token.user_id, "replaced user token");

        let conn = self.db.get_connection()?;
        let stored = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM user_tokens WHERE id = ?1"),
                params![id],
                map_row,
            )
            .map_err(InfraError::from)?;

        Ok(stored)
    }
}
