use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated test environment.
///
/// Owns an in-memory SQLite database and, once requested, a session whose
/// records live in the same database. Both are created lazily.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
    store: Option<Arc<SqliteStore>>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
            store: None,
        }
    }

    /// Returns the database, connecting on first use.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            self.db = Some(db);
        }

        match self.db {
            Some(ref db) => Ok(db),
            None => unreachable!("database initialised above"),
        }
    }

    /// Executes CREATE TABLE statements in order.
    pub async fn create_tables(
        &mut self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    async fn store(&mut self) -> Result<Arc<SqliteStore>, TestError> {
        if let Some(ref store) = self.store {
            return Ok(store.clone());
        }

        let pool = self.database().await?.get_sqlite_connection_pool().clone();
        let store = SqliteStore::new(pool);
        store
            .migrate()
            .await
            .map_err(|e| TestError::SessionStore(e.to_string()))?;

        let store = Arc::new(store);
        self.store = Some(store.clone());
        Ok(store)
    }

    /// Returns the context's session, creating it on first use.
    ///
    /// The same session is returned on every call, which mirrors one browser
    /// issuing several requests.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let session = self.new_session().await?;
            self.session = Some(session);
        }

        match self.session {
            Some(ref session) => Ok(session),
            None => unreachable!("session initialised above"),
        }
    }

    /// Creates an additional session sharing the same store, as if a second
    /// browser connected.
    pub async fn new_session(&mut self) -> Result<Session, TestError> {
        let store = self.store().await?;
        Ok(Session::new(
            None,
            store,
            Some(Expiry::OnInactivity(Duration::days(7))),
        ))
    }

    /// Returns both the database and the context's session.
    pub async fn db_and_session(
        &mut self,
    ) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => unreachable!("database and session initialised above"),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
