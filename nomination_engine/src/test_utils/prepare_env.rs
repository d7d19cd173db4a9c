use log::*;
use sqlx::{migrate::MigrateDatabase, Sqlite};

use crate::{db_types::NewNomination, validation::NominationForm, SqliteDatabase};

/// Creates a fresh, migrated database at `url`, dropping whatever was there before.
pub async fn prepare_test_env(url: &str) -> SqliteDatabase {
    dotenvy::from_filename(".env.test").ok();
    let _ = env_logger::try_init();
    debug!("🚀️ Logging initialised");
    create_database(url).await;
    run_migrations(url).await
}

pub fn random_db_path() -> String {
    let dir = std::env::temp_dir();
    format!("sqlite://{}/gca_test_store_{}.db", dir.display(), rand::random::<u64>())
}

pub async fn run_migrations(url: &str) -> SqliteDatabase {
    let db = SqliteDatabase::new_with_url(url, 5).await.expect("Error creating connection to database");
    db.run_migrations().await.expect("Error running DB migrations");
    info!("🚀️ Migrations complete");
    db
}

pub async fn create_database(url: &str) {
    if Sqlite::database_exists(url).await.unwrap_or(false) {
        if let Err(e) = Sqlite::drop_database(url).await {
            warn!("Error dropping database {url}: {e:?}");
        }
    }
    Sqlite::create_database(url).await.expect("Error creating database");
    info!("Created Sqlite database {url}");
}

pub async fn tear_down(db: SqliteDatabase) {
    let url = db.url().to_string();
    db.close().await;
    if let Err(e) = Sqlite::drop_database(&url).await {
        warn!("Error dropping database {url}: {e:?}");
    }
}

/// A nomination that passes validation. Vary the returned value to build fixtures.
pub fn sample_form(full_name: &str) -> NominationForm {
    NominationForm {
        full_name: full_name.to_string(),
        organization_name: format!("{full_name} Enterprises"),
        phone_number: "+91 98765 43210".to_string(),
        email: "nominee@example.in".to_string(),
        address: "221 Residency Road".to_string(),
        state: "Karnataka".to_string(),
        city: "Bengaluru".to_string(),
        gstin: None,
        sector: "Technology".to_string(),
        website: Some("https://example.in".to_string()),
        doctorate: "Yes".to_string(),
        forbes: "No".to_string(),
    }
}

pub fn sample_nomination(full_name: &str) -> NewNomination {
    sample_form(full_name).validate().expect("sample nomination is valid")
}
