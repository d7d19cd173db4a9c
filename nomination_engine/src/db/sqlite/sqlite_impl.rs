//! `SqliteDatabase` is the concrete storage backend for the nomination engine.
//!
//! It owns a connection pool. Build one at start-up and clone it into whatever needs it; clones share the pool.
use std::fmt::Debug;

use log::*;
use sqlx::{migrate::Migrator, SqlitePool};

use super::{new_pool, nominations, SqliteDatabaseError};
use crate::{
    db_types::{NewNomination, Nomination},
    gca_api::errors::NominationApiError,
    traits::NominationManagement,
};

static MIGRATOR: Migrator = sqlx::migrate!("./src/db/sqlite/migrations");

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl NominationManagement for SqliteDatabase {
    async fn insert_nomination(&self, nomination: NewNomination) -> Result<Nomination, NominationApiError> {
        let mut conn = self.pool.acquire().await.map_err(SqliteDatabaseError::from)?;
        let nomination = nominations::insert_nomination(nomination, &mut conn).await?;
        Ok(nomination)
    }

    async fn fetch_nominations(&self) -> Result<Vec<Nomination>, NominationApiError> {
        let mut conn = self.pool.acquire().await.map_err(SqliteDatabaseError::from)?;
        let result = nominations::fetch_nominations(&mut conn).await?;
        Ok(result)
    }
}

impl SqliteDatabase {
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, SqliteDatabaseError> {
        trace!("🗃️ Creating new database connection pool with url {url}");
        let pool = new_pool(url, max_connections).await?;
        let url = url.to_string();
        Ok(Self { url, pool })
    }

    /// Brings the schema up to date. Safe to call on every start-up.
    pub async fn run_migrations(&self) -> Result<(), SqliteDatabaseError> {
        MIGRATOR.run(&self.pool).await?;
        info!("🗃️ Database migrations complete");
        Ok(())
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub async fn count_nominations(&self) -> Result<i64, SqliteDatabaseError> {
        let mut conn = self.pool.acquire().await?;
        nominations::count_nominations(&mut conn).await
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
