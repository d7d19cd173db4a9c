use thiserror::Error;

use crate::gca_api::errors::NominationApiError;

#[derive(Debug, Error)]
pub enum SqliteDatabaseError {
    #[error("Database connection error: {0}")]
    DriverError(#[from] sqlx::Error),
    #[error("Database migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

impl From<SqliteDatabaseError> for NominationApiError {
    fn from(e: SqliteDatabaseError) -> Self {
        NominationApiError::DatabaseError(e.to_string())
    }
}
