//! Runs the nomination routes against a real, freshly migrated SQLite database.
use actix_web::{http::StatusCode, web, web::ServiceConfig};
use gca_common::Secret;
use nomination_engine::{
    test_utils::prepare_env::{prepare_test_env, random_db_path, tear_down},
    NominationApi,
    SqliteDatabase,
};
use serde_json::Value;

use super::helpers::{get_request, post_request};
use crate::{
    config::ProxyConfig,
    middleware::{AdminKey, ADMIN_KEY_HEADER},
    routes::{ListNominationsRoute, SubmitNominationRoute},
};

fn configure(db: SqliteDatabase) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(NominationApi::new(db)))
            .app_data(web::Data::new(AdminKey::new(Some(Secret::new("admin".to_string())))))
            .app_data(web::Data::new(ProxyConfig::default()))
            .service(SubmitNominationRoute::<SqliteDatabase>::new())
            .service(ListNominationsRoute::<SqliteDatabase>::new());
    }
}

fn nomination(name: &str) -> String {
    serde_json::json!({
        "fullName": name,
        "organizationName": "Kaveri Cloud Pvt Ltd",
        "phoneNumber": "080-4567 8901",
        "email": "founders@kavericloud.in",
        "address": "3rd Floor, Prestige Tower",
        "state": "Karnataka",
        "city": "Mysuru",
        "gstin": "29ABCDE1234F1Z5",
        "sector": "Technology",
        "website": "https://kavericloud.in",
        "doctorate": "Yes",
        "forbes": "No"
    })
    .to_string()
}

#[actix_web::test]
async fn submitted_nominations_are_listed_newest_first() {
    let db = prepare_test_env(&random_db_path()).await;
    for name in ["First Nominee", "Second Nominee"] {
        let (status, body) = post_request("/nominations", &nomination(name), configure(db.clone())).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["data"]["sector"], "Technology");
        assert_eq!(json["data"]["doctorate"], "Yes");
        assert_eq!(json["data"]["forbes"], "No");
    }
    let headers = [(ADMIN_KEY_HEADER, "admin")];
    let (status, body) = get_request("/nominations", &headers, configure(db.clone())).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let json: Value = serde_json::from_str(&body).unwrap();
    let list = json["data"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["fullName"], "Second Nominee");
    assert_eq!(list[1]["fullName"], "First Nominee");
    assert_eq!(list[0]["gstin"], "29ABCDE1234F1Z5");
    assert_eq!(list[0]["city"], "Mysuru");
    tear_down(db).await;
}

#[actix_web::test]
async fn rejected_nominations_are_not_stored() {
    let db = prepare_test_env(&random_db_path()).await;
    let bad = nomination("Someone").replace("Technology", "Space");
    let (status, _) = post_request("/nominations", &bad, configure(db.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(db.count_nominations().await.unwrap(), 0);
    tear_down(db).await;
}
