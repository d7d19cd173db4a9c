//! Order creation against a stand-in Razorpay REST server, so the whole path from the route through the HTTP client
//! and back is exercised.
use std::sync::Mutex;

use actix_web::{
    dev::ServerHandle,
    http::{header, StatusCode},
    web,
    web::ServiceConfig,
    App,
    HttpRequest,
    HttpResponse,
    HttpServer,
};
use gca_common::Paise;
use nomination_engine::{
    checkout_objects::OrderTerms,
    traits::{OrderRequest, PaymentGateway},
    CheckoutApi,
    CheckoutApiError,
};
use razorpay_tools::RazorpayConfig;
use serde_json::{json, Value};

use super::helpers::post_request;
use crate::{integrations::razorpay::RazorpayGateway, routes::CreateOrderRoute};

const KEY_ID: &str = "rzp_test_key";
const KEY_SECRET: &str = "good_secret";
// Basic auth for rzp_test_key:good_secret
const EXPECTED_AUTH: &str = "Basic cnpwX3Rlc3Rfa2V5Omdvb2Rfc2VjcmV0";

type SeenOrders = web::Data<Mutex<Vec<Value>>>;

async fn orders(req: HttpRequest, body: web::Json<Value>, seen: SeenOrders) -> HttpResponse {
    let auth = req.headers().get(header::AUTHORIZATION).and_then(|v| v.to_str().ok());
    if auth != Some(EXPECTED_AUTH) {
        return HttpResponse::Unauthorized().json(json!({
            "error": {
                "code": "BAD_REQUEST_ERROR",
                "description": "Authentication failed",
                "source": "NA",
                "step": "NA",
                "reason": "NA",
                "metadata": {}
            }
        }));
    }
    let order = body.into_inner();
    seen.lock().unwrap().push(order.clone());
    HttpResponse::Ok().json(json!({
        "id": "order_StubQ8nXk2mZ1a",
        "entity": "order",
        "amount": order["amount"],
        "amount_paid": 0,
        "amount_due": order["amount"],
        "currency": order["currency"],
        "receipt": order["receipt"],
        "offer_id": null,
        "status": "created",
        "attempts": 0,
        "notes": order.get("notes").cloned().unwrap_or_else(|| json!([])),
        "created_at": 1_740_000_000
    }))
}

/// Starts the stand-in on a free port and returns its base url.
fn start_razorpay() -> (String, ServerHandle, SeenOrders) {
    let seen: SeenOrders = web::Data::new(Mutex::new(Vec::new()));
    let data = seen.clone();
    let server = HttpServer::new(move || App::new().app_data(data.clone()).route("/v1/orders", web::post().to(orders)))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("Could not bind the Razorpay stand-in");
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    (format!("http://{addr}/v1"), handle, seen)
}

fn gateway(api_url: &str, key_secret: &str) -> RazorpayGateway {
    let config = RazorpayConfig { api_url: api_url.to_string(), ..RazorpayConfig::new(KEY_ID, key_secret) };
    RazorpayGateway::new(config).unwrap()
}

fn configure(gateway: RazorpayGateway) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(CheckoutApi::new(gateway, OrderTerms::default())))
            .service(web::scope("/api").service(CreateOrderRoute::<RazorpayGateway>::new()));
    }
}

#[actix_web::test]
async fn order_is_created_by_the_gateway() {
    let (url, handle, seen) = start_razorpay();
    let body = r#"{"nominationId": 42}"#;
    let (status, body) = post_request("/api/create-order", body, configure(gateway(&url, KEY_SECRET))).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["orderId"], "order_StubQ8nXk2mZ1a");
    assert_eq!(json["amount"], 250_000);
    assert_eq!(json["currency"], "INR");
    assert_eq!(json["keyId"], KEY_ID);
    {
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0]["amount"], 250_000);
        assert_eq!(seen[0]["receipt"], json["receipt"]);
        assert_eq!(seen[0]["notes"]["nomination_id"], "42");
    }
    handle.stop(true).await;
}

#[actix_web::test]
async fn rejected_credentials_give_a_generic_error() {
    let (url, handle, seen) = start_razorpay();
    let (status, body) = post_request("/api/create-order", "", configure(gateway(&url, "wrong_secret"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Failed to create order"}"#);
    assert!(seen.lock().unwrap().is_empty());
    handle.stop(true).await;
}

#[actix_web::test]
async fn gateway_error_body_is_kept_in_the_error() {
    let (url, handle, _) = start_razorpay();
    let request = OrderRequest {
        amount: Paise::from_rupees(2500),
        currency: "INR".into(),
        receipt: "receipt_q1w2e3r".into(),
        nomination_id: None,
    };
    let err = gateway(&url, "wrong_secret").create_order(request).await.unwrap_err();
    match err {
        CheckoutApiError::GatewayError(msg) => {
            assert!(msg.contains("Error 401"), "was: {msg}");
            assert!(msg.contains("BAD_REQUEST_ERROR: Authentication failed"), "was: {msg}");
        },
        other => panic!("Unexpected error: {other}"),
    }
    handle.stop(true).await;
}
