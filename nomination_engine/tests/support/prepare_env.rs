use log::*;
use nomination_engine::{db_types::NewNomination, NominationForm, SqliteDatabase};
use sqlx::{migrate::MigrateDatabase, Sqlite};

pub async fn prepare_test_env(url: &str) -> SqliteDatabase {
    dotenvy::from_filename(".env.test").ok();
    let _ = env_logger::try_init();
    debug!("🚀️ Logging initialised");
    Sqlite::create_database(url).await.expect("Error creating database");
    let db = SqliteDatabase::new_with_url(url, 5).await.expect("Error creating connection to database");
    db.run_migrations().await.expect("Error running DB migrations");
    info!("🚀️ Created and migrated {url}");
    db
}

pub fn random_db_path() -> String {
    format!("sqlite://{}/gca_engine_test_{}.db", std::env::temp_dir().display(), rand::random::<u64>())
}

pub async fn tear_down(db: SqliteDatabase) {
    let url = db.url().to_string();
    db.close().await;
    if let Err(e) = Sqlite::drop_database(&url).await {
        warn!("Error dropping database {url}: {e:?}");
    }
}

pub fn sample_form(full_name: &str) -> NominationForm {
    NominationForm {
        full_name: full_name.to_string(),
        organization_name: "Kumar Logistics".to_string(),
        phone_number: "+91 98450 12345".to_string(),
        email: "contact@kumarlogistics.in".to_string(),
        address: "14 Park Street".to_string(),
        state: "West Bengal".to_string(),
        city: "Kolkata".to_string(),
        gstin: None,
        sector: "Technology".to_string(),
        website: None,
        doctorate: "Yes".to_string(),
        forbes: "No".to_string(),
    }
}

pub fn sample_nomination(full_name: &str) -> NewNomination {
    sample_form(full_name).validate().expect("sample nomination is valid")
}
