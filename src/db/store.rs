//! # Member Store
//!
//! The seam between HTTP handlers and the database. Each trait method is
//! exactly one handler's database phase: acquire a single connection, run
//! the parameterized statements, release the connection on every path. One
//! inbound request therefore uses at most one connection.

use async_trait::async_trait;
use sqlx::mysql::MySqlConnection;
use sqlx::Connection;
use thiserror::Error;

use crate::schema::{MemberDraft, MemberRecord};

use super::provider::{ConnectionProvider, ProviderError};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Could not establish a database connection
    #[error(transparent)]
    Connection(#[from] ProviderError),

    /// A statement failed during execution
    #[error("statement execution failed: {0}")]
    Execution(#[from] sqlx::Error),

    /// Store-internal failure outside the database
    #[error("{0}")]
    Internal(String),
}

/// Outcome of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Row deleted
    Removed,
    /// No member with the given id
    NotFound,
    /// A workout session still references the member
    SessionExists,
}

/// Member persistence operations, one method per handler
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// All member rows, in table order.
    async fn list_members(&self) -> StoreResult<Vec<MemberRecord>>;

    /// Single-row lookup by exact id.
    async fn find_member(&self, id: u64) -> StoreResult<Option<MemberRecord>>;

    /// Insert a new row; the database assigns the id.
    async fn insert_member(&self, draft: &MemberDraft) -> StoreResult<()>;

    /// Update name and age for the given id.
    ///
    /// Zero affected rows is not an error: updating a nonexistent id
    /// succeeds without touching anything.
    async fn update_member(&self, id: u64, draft: &MemberDraft) -> StoreResult<()>;

    /// Delete the member unless a workout session still references it.
    async fn remove_member(&self, id: u64) -> StoreResult<DeleteOutcome>;
}

/// MySQL-backed store opening one connection per operation
pub struct MySqlMemberStore {
    provider: ConnectionProvider,
}

impl MySqlMemberStore {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    /// Delete flow on an already-open connection: lookup, dependency check,
    /// delete. The three statements share the connection but are not
    /// wrapped in a transaction.
    async fn remove_on(conn: &mut MySqlConnection, id: u64) -> StoreResult<DeleteOutcome> {
        let member = sqlx::query("SELECT id FROM members WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        if member.is_none() {
            return Ok(DeleteOutcome::NotFound);
        }

        let session = sqlx::query("SELECT id FROM workoutsessions WHERE member_id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        if session.is_some() {
            return Ok(DeleteOutcome::SessionExists);
        }

        sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(DeleteOutcome::Removed)
    }
}

#[async_trait]
impl MemberStore for MySqlMemberStore {
    async fn list_members(&self) -> StoreResult<Vec<MemberRecord>> {
        let mut conn = self.provider.acquire().await?;
        let result = sqlx::query_as::<_, MemberRecord>("SELECT id, name, age FROM members")
            .fetch_all(&mut conn)
            .await;
        conn.close().await.ok();
        Ok(result?)
    }

    async fn find_member(&self, id: u64) -> StoreResult<Option<MemberRecord>> {
        let mut conn = self.provider.acquire().await?;
        let result =
            sqlx::query_as::<_, MemberRecord>("SELECT id, name, age FROM members WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut conn)
                .await;
        conn.close().await.ok();
        Ok(result?)
    }

    async fn insert_member(&self, draft: &MemberDraft) -> StoreResult<()> {
        let mut conn = self.provider.acquire().await?;
        let result = sqlx::query("INSERT INTO members (name, age) VALUES (?, ?)")
            .bind(&draft.name)
            .bind(&draft.age)
            .execute(&mut conn)
            .await;
        conn.close().await.ok();
        result?;
        Ok(())
    }

    async fn update_member(&self, id: u64, draft: &MemberDraft) -> StoreResult<()> {
        let mut conn = self.provider.acquire().await?;
        let result = sqlx::query("UPDATE members SET name = ?, age = ? WHERE id = ?")
            .bind(&draft.name)
            .bind(&draft.age)
            .bind(id)
            .execute(&mut conn)
            .await;
        conn.close().await.ok();
        result?;
        Ok(())
    }

    async fn remove_member(&self, id: u64) -> StoreResult<DeleteOutcome> {
        let mut conn = self.provider.acquire().await?;
        let result = Self::remove_on(&mut conn, id).await;
        conn.close().await.ok();
        result
    }
}
