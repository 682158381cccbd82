use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Matches the inactivity expiry the server configures.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// An isolated in-memory SQLite database plus an optional session stored in it.
///
/// Keep the context alive for the whole test: dropping it closes the database.
#[derive(Default)]
pub struct TestContext {
    /// Connection to the in-memory database, opened on first use.
    pub db: Option<DatabaseConnection>,
    /// Session persisted in the same database, created on first use.
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the database, connecting to a fresh `sqlite::memory:` the first time.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db
            .as_ref()
            .ok_or_else(|| TestError::Session("database was not opened".to_string()))
    }

    /// Runs the given `CREATE TABLE` statements in order.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;
        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, creating the session table and a new session the first time.
    ///
    /// ```rust,ignore
    /// let session = test.session().await?;
    /// session.insert("auth:user", client.id).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let store = SqliteStore::new(self.database().await?.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| TestError::Session(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| TestError::Session("session was not created".to_string()))
    }

    /// Borrows the database and the session together, initializing both.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (&self.db, &self.session) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::Session("test context was not initialized".to_string())),
        }
    }
}
