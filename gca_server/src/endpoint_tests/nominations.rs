use actix_web::{http::StatusCode, web, web::ServiceConfig};
use gca_common::Secret;
use nomination_engine::{
    db_types::{Sector, YesNo},
    test_utils::prepare_env::sample_nomination,
    NominationApi,
    NominationApiError,
};
use serde_json::Value;

use super::{
    helpers::{get_request, post_request},
    mocks::{stored, timestamp, MockNominationStore},
};
use crate::{
    config::ProxyConfig,
    middleware::{AdminKey, ADMIN_KEY_HEADER},
    routes::{ListNominationsRoute, SubmitNominationRoute},
};

const ADMIN_KEY: &str = "correct horse battery staple";

const VALID_NOMINATION: &str = r#"{
    "fullName": "Asha Verma",
    "organizationName": "Verma Agritech",
    "phoneNumber": "+91 98765 43210",
    "email": "asha@vermaagri.in",
    "address": "14 MG Road",
    "state": "Karnataka",
    "city": "Bengaluru",
    "gstin": "",
    "sector": "Agriculture",
    "website": "",
    "doctorate": "Yes",
    "forbes": "No"
}"#;

fn configure(store: MockNominationStore, admin_key: Option<&str>) -> impl FnOnce(&mut ServiceConfig) {
    let admin_key = AdminKey::new(admin_key.map(|k| Secret::new(k.to_string())));
    move |cfg| {
        cfg.app_data(web::Data::new(NominationApi::new(store)))
            .app_data(web::Data::new(admin_key))
            .app_data(web::Data::new(ProxyConfig::default()))
            .service(SubmitNominationRoute::<MockNominationStore>::new())
            .service(ListNominationsRoute::<MockNominationStore>::new());
    }
}

fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("Response was not JSON ({e}): {body}"))
}

#[actix_web::test]
async fn submit_valid_nomination() {
    let mut store = MockNominationStore::new();
    store
        .expect_insert_nomination()
        .withf(|n| n.gstin.is_none() && n.website.is_none() && n.sector == Sector::Agriculture)
        .times(1)
        .returning(|n| Ok(stored(n, 1, timestamp(0))));
    let (status, body) = post_request("/nominations", VALID_NOMINATION, configure(store, None)).await;
    assert_eq!(status, StatusCode::CREATED);
    let json = parse(&body);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Nomination submitted successfully");
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["fullName"], "Asha Verma");
    assert_eq!(json["data"]["doctorate"], "Yes");
    assert_eq!(json["data"]["forbes"], "No");
    assert!(json["data"]["createdAt"].is_string());
}

#[actix_web::test]
async fn submission_values_are_not_altered() {
    let mut store = MockNominationStore::new();
    store
        .expect_insert_nomination()
        .withf(|n| n.full_name == "  Ravi  Kumar " && n.doctorate == YesNo::No)
        .times(1)
        .returning(|n| Ok(stored(n, 2, timestamp(0))));
    let body = VALID_NOMINATION
        .replace("Asha Verma", "  Ravi  Kumar ")
        .replace(r#""doctorate": "Yes""#, r#""doctorate": "No""#);
    let (status, body) = post_request("/nominations", &body, configure(store, None)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(parse(&body)["data"]["fullName"], "  Ravi  Kumar ");
}

#[actix_web::test]
async fn missing_fields_are_all_reported() {
    let mut store = MockNominationStore::new();
    store.expect_insert_nomination().never();
    let body = r#"{"fullName": "   ", "sector": "Technology"}"#;
    let (status, body) = post_request("/nominations", body, configure(store, None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json = parse(&body);
    assert_eq!(json["success"], false);
    let message = json["message"].as_str().unwrap();
    assert!(message.starts_with("Nomination validation failed: "), "was: {message}");
    for field in ["fullName", "organizationName", "phoneNumber", "email", "address", "state", "city", "doctorate"] {
        assert!(message.contains(&format!("{field} is required")), "{field} missing from: {message}");
    }
    assert!(!message.contains("sector"), "was: {message}");
}

#[actix_web::test]
async fn unknown_sector_is_rejected() {
    let mut store = MockNominationStore::new();
    store.expect_insert_nomination().never();
    let body = VALID_NOMINATION.replace("Agriculture", "Mining");
    let (status, body) = post_request("/nominations", &body, configure(store, None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json = parse(&body);
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("sector is invalid"), "was: {body}");
}

#[actix_web::test]
async fn malformed_json_is_rejected() {
    let mut store = MockNominationStore::new();
    store.expect_insert_nomination().never();
    let (status, body) = post_request("/nominations", "{ this is not json", configure(store, None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json = parse(&body);
    assert_eq!(json["success"], false);
    assert!(!json["message"].as_str().unwrap().is_empty());
}

#[actix_web::test]
async fn store_failure_on_submission() {
    let mut store = MockNominationStore::new();
    store
        .expect_insert_nomination()
        .times(1)
        .returning(|_| Err(NominationApiError::DatabaseError("disk I/O error".into())));
    let (status, body) = post_request("/nominations", VALID_NOMINATION, configure(store, None)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json = parse(&body);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Failed to submit nomination");
    assert!(!body.contains("disk I/O"));
}

#[actix_web::test]
async fn listing_needs_the_admin_key_header() {
    let mut store = MockNominationStore::new();
    store.expect_fetch_nominations().never();
    let (status, body) = get_request("/nominations", &[], configure(store, Some(ADMIN_KEY))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(parse(&body)["success"], false);
}

#[actix_web::test]
async fn listing_with_the_wrong_admin_key() {
    let mut store = MockNominationStore::new();
    store.expect_fetch_nominations().never();
    let headers = [(ADMIN_KEY_HEADER, "guess")];
    let (status, body) = get_request("/nominations", &headers, configure(store, Some(ADMIN_KEY))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(parse(&body)["success"], false);
}

#[actix_web::test]
async fn listing_is_disabled_without_a_configured_key() {
    let mut store = MockNominationStore::new();
    store.expect_fetch_nominations().never();
    let headers = [(ADMIN_KEY_HEADER, "")];
    let (status, _) = get_request("/nominations", &headers, configure(store, None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn list_nominations() {
    let mut store = MockNominationStore::new();
    store.expect_fetch_nominations().times(1).returning(|| {
        Ok(vec![
            stored(sample_nomination("Newest"), 3, timestamp(30)),
            stored(sample_nomination("Middle"), 2, timestamp(20)),
            stored(sample_nomination("Oldest"), 1, timestamp(10)),
        ])
    });
    let headers = [(ADMIN_KEY_HEADER, ADMIN_KEY)];
    let (status, body) = get_request("/nominations", &headers, configure(store, Some(ADMIN_KEY))).await;
    assert_eq!(status, StatusCode::OK);
    let json = parse(&body);
    assert_eq!(json["success"], true);
    let names = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["fullName"].as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, ["Newest", "Middle", "Oldest"]);
}

#[actix_web::test]
async fn empty_listing() {
    let mut store = MockNominationStore::new();
    store.expect_fetch_nominations().times(1).returning(|| Ok(vec![]));
    let headers = [(ADMIN_KEY_HEADER, ADMIN_KEY)];
    let (status, body) = get_request("/nominations", &headers, configure(store, Some(ADMIN_KEY))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":true,"data":[]}"#);
}

#[actix_web::test]
async fn store_failure_on_listing() {
    let mut store = MockNominationStore::new();
    store
        .expect_fetch_nominations()
        .times(1)
        .returning(|| Err(NominationApiError::DatabaseError("no such table: nominations".into())));
    let headers = [(ADMIN_KEY_HEADER, ADMIN_KEY)];
    let (status, body) = get_request("/nominations", &headers, configure(store, Some(ADMIN_KEY))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json = parse(&body);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Failed to fetch nominations");
}
