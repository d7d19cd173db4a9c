use anyhow::{anyhow, Result};
use gca_server::{data_objects::DataResponse, middleware::ADMIN_KEY_HEADER};
use log::*;
use nomination_engine::{
    checkout_objects::{CheckoutOrder, VerifiedPayment},
    db_types::Nomination,
    NominationForm,
};
use razorpay_tools::PaymentConfirmation;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
    Response,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::checkout::CheckoutBackend;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8360";

/// The two error shapes the server produces.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message: Some(m), .. }) | Ok(ErrorBody { error: Some(m), .. }) => m,
        _ => body.to_string(),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateOrderBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    nomination_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct AwardsServerClient {
    client: Client,
    server: Url,
}

impl AwardsServerClient {
    pub fn new(server: Url) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .user_agent("GCA Awards Client")
            .default_headers(headers)
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client. {e}"))?;
        Ok(Self { client, server })
    }

    pub fn server(&self) -> &Url {
        &self.server
    }

    pub fn url(&self, path: &str) -> Result<Url> {
        self.server.join(path).map_err(|e| anyhow!("Failed to join URL: {e}"))
    }

    pub async fn health(&self) -> Result<String> {
        let url = self.url("/health")?;
        let res = self.client.get(url).send().await?;
        Ok(res.text().await?)
    }

    pub async fn submit_nomination(&self, form: &NominationForm) -> Result<Nomination> {
        let url = self.url("/api/nominations")?;
        let res = self.client.post(url).json(form).send().await?;
        let response: DataResponse<Nomination> = read_json(res, "Nomination was not accepted").await?;
        if let Some(message) = &response.message {
            info!("{message}");
        }
        Ok(response.data)
    }

    /// Fetches every nomination, newest first. Needs the server's admin key.
    pub async fn list_nominations(&self, admin_key: &str) -> Result<Vec<Nomination>> {
        let url = self.url("/api/nominations")?;
        let res = self.client.get(url).header(ADMIN_KEY_HEADER, admin_key).send().await?;
        let response: DataResponse<Vec<Nomination>> = read_json(res, "Could not fetch nominations").await?;
        Ok(response.data)
    }

    pub async fn create_order(&self, nomination_id: Option<i64>) -> Result<CheckoutOrder> {
        let url = self.url("/api/create-order")?;
        let res = self.client.post(url).json(&CreateOrderBody { nomination_id }).send().await?;
        read_json(res, "Could not create order").await
    }

    pub async fn verify_payment(&self, confirmation: &PaymentConfirmation) -> Result<VerifiedPayment> {
        let url = self.url("/api/verify-payment")?;
        let res = self.client.post(url).json(confirmation).send().await?;
        read_json(res, "Payment was not verified").await
    }
}

async fn read_json<T: DeserializeOwned>(res: Response, context: &str) -> Result<T> {
    let status = res.status();
    if status.is_success() {
        return Ok(res.json().await?);
    }
    let body = res.text().await?;
    debug!("Server responded with {status}: {body}");
    Err(anyhow!("{context}: {status}, {}", error_message(&body)))
}

impl CheckoutBackend for AwardsServerClient {
    async fn create_order(&self, nomination_id: Option<i64>) -> Result<CheckoutOrder> {
        AwardsServerClient::create_order(self, nomination_id).await
    }

    async fn verify_payment(&self, confirmation: &PaymentConfirmation) -> Result<VerifiedPayment> {
        AwardsServerClient::verify_payment(self, confirmation).await
    }
}
