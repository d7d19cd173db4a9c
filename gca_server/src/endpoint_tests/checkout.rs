use actix_web::{http::StatusCode, web, web::ServiceConfig};
use gca_common::Paise;
use nomination_engine::{
    checkout_objects::OrderTerms,
    traits::GatewayOrder,
    CheckoutApi,
    CheckoutApiError,
};
use serde_json::Value;

use super::{helpers::post_request, mocks::MockGateway};
use crate::routes::{CreateOrderRoute, VerifyPaymentRoute};

fn configure(gateway: MockGateway) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(CheckoutApi::new(gateway, OrderTerms::default())))
            .service(CreateOrderRoute::<MockGateway>::new())
            .service(VerifyPaymentRoute::<MockGateway>::new());
    }
}

fn order_gateway() -> MockGateway {
    let mut gateway = MockGateway::new();
    gateway.expect_key_id().returning(|| "rzp_test_1DP5mmOlF5G5ag".to_string());
    gateway
}

#[actix_web::test]
async fn create_order_without_a_body() {
    let mut gateway = order_gateway();
    gateway
        .expect_create_order()
        .withf(|r| r.amount == Paise::from(250_000) && r.currency == "INR" && r.nomination_id.is_none())
        .times(1)
        .returning(|r| Ok(GatewayOrder { id: "order_EKwxwAgItmmXdp".into(), amount: r.amount, currency: r.currency }));
    let (status, body) = post_request("/create-order", "", configure(gateway)).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["orderId"], "order_EKwxwAgItmmXdp");
    assert_eq!(json["amount"], 250_000);
    assert_eq!(json["currency"], "INR");
    assert_eq!(json["keyId"], "rzp_test_1DP5mmOlF5G5ag");
    assert!(json["receipt"].as_str().unwrap().starts_with("receipt_"));
}

#[actix_web::test]
async fn create_order_for_a_nomination() {
    let mut gateway = order_gateway();
    gateway
        .expect_create_order()
        .withf(|r| r.nomination_id == Some(42))
        .times(1)
        .returning(|r| Ok(GatewayOrder { id: "order_42".into(), amount: r.amount, currency: r.currency }));
    let (status, body) = post_request("/create-order", r#"{"nominationId": 42}"#, configure(gateway)).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert!(body.contains(r#""orderId":"order_42""#), "was: {body}");
}

#[actix_web::test]
async fn the_client_cannot_set_the_amount() {
    let mut gateway = order_gateway();
    gateway
        .expect_create_order()
        .withf(|r| r.amount == Paise::from(250_000))
        .times(1)
        .returning(|r| Ok(GatewayOrder { id: "order_1".into(), amount: r.amount, currency: r.currency }));
    let (status, _) = post_request("/create-order", r#"{"amount": 100}"#, configure(gateway)).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn gateway_failure() {
    let mut gateway = order_gateway();
    gateway
        .expect_create_order()
        .times(1)
        .returning(|_| Err(CheckoutApiError::GatewayError("Query failed. Error 401. BAD_REQUEST_ERROR".into())));
    let (status, body) = post_request("/create-order", "", configure(gateway)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Failed to create order"}"#);
}

#[actix_web::test]
async fn unconfigured_gateway() {
    let mut gateway = order_gateway();
    gateway
        .expect_create_order()
        .times(1)
        .returning(|_| Err(CheckoutApiError::GatewayNotConfigured("Razorpay credentials are not configured".into())));
    let (status, body) = post_request("/create-order", "", configure(gateway)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Failed to create order"}"#);
}

fn signing_gateway() -> MockGateway {
    let mut gateway = MockGateway::new();
    gateway.expect_verify_signature().returning(|order_id, payment_id, signature| {
        order_id == "order_1" && payment_id == "pay_1" && signature == "cafebabe"
    });
    gateway
}

#[actix_web::test]
async fn verify_good_payment() {
    let body = r#"{"razorpay_order_id":"order_1","razorpay_payment_id":"pay_1","razorpay_signature":"cafebabe"}"#;
    let (status, body) = post_request("/verify-payment", body, configure(signing_gateway())).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body, r#"{"verified":true,"orderId":"order_1","paymentId":"pay_1"}"#);
}

#[actix_web::test]
async fn verify_forged_payment() {
    let body = r#"{"razorpay_order_id":"order_1","razorpay_payment_id":"pay_2","razorpay_signature":"cafebabe"}"#;
    let (status, body) = post_request("/verify-payment", body, configure(signing_gateway())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Payment signature verification failed"}"#);
}

#[actix_web::test]
async fn verify_incomplete_payment() {
    let mut gateway = MockGateway::new();
    gateway.expect_verify_signature().never();
    let body = r#"{"razorpay_order_id":"order_1","razorpay_payment_id":"","razorpay_signature":"cafebabe"}"#;
    let (status, body) = post_request("/verify-payment", body, configure(gateway)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("payment id is missing"), "was: {body}");
}

#[actix_web::test]
async fn verify_malformed_body() {
    let mut gateway = MockGateway::new();
    gateway.expect_verify_signature().never();
    let (status, body) = post_request("/verify-payment", r#"{"razorpay_order_id": 1}"#, configure(gateway)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with(r#"{"error":"#), "was: {body}");
}
