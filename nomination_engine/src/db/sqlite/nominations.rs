use chrono::Utc;
use log::{debug, trace};
use sqlx::SqliteConnection;

use super::SqliteDatabaseError;
use crate::db_types::{NewNomination, Nomination};

/// Inserts a new nomination using the given connection and returns the stored row. The creation timestamp is
/// assigned here, at insertion time.
///
/// This is not atomic with respect to anything else. Pass `&mut *tx` as the connection if it needs to be.
pub async fn insert_nomination(
    nomination: NewNomination,
    conn: &mut SqliteConnection,
) -> Result<Nomination, SqliteDatabaseError> {
    let nomination: Nomination = sqlx::query_as(
        r#"
            INSERT INTO nominations (
                full_name,
                organization_name,
                phone_number,
                email,
                address,
                state,
                city,
                gstin,
                sector,
                website,
                doctorate,
                forbes,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *;
        "#,
    )
    .bind(nomination.full_name)
    .bind(nomination.organization_name)
    .bind(nomination.phone_number)
    .bind(nomination.email)
    .bind(nomination.address)
    .bind(nomination.state)
    .bind(nomination.city)
    .bind(nomination.gstin)
    .bind(nomination.sector)
    .bind(nomination.website)
    .bind(nomination.doctorate)
    .bind(nomination.forbes)
    .bind(Utc::now())
    .fetch_one(conn)
    .await?;
    debug!("🗃️ Nomination #{} inserted for {}", nomination.id, nomination.organization_name);
    Ok(nomination)
}

/// Returns every nomination, most recent first.
pub async fn fetch_nominations(conn: &mut SqliteConnection) -> Result<Vec<Nomination>, SqliteDatabaseError> {
    let nominations: Vec<Nomination> =
        sqlx::query_as("SELECT * FROM nominations ORDER BY created_at DESC, id DESC").fetch_all(conn).await?;
    trace!("🗃️ Fetched {} nominations", nominations.len());
    Ok(nominations)
}

pub async fn count_nominations(conn: &mut SqliteConnection) -> Result<i64, SqliteDatabaseError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM nominations").fetch_one(conn).await?;
    Ok(count)
}
