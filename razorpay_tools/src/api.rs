use std::sync::Arc;

use log::*;
use reqwest::{header::HeaderMap, header::HeaderValue, Client, Method};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::RazorpayConfig,
    data_objects::{NewRazorpayOrder, RazorpayErrorResponse, RazorpayOrder},
    RazorpayApiError,
};

#[derive(Clone, Debug)]
pub struct RazorpayApi {
    config: RazorpayConfig,
    client: Arc<Client>,
}

impl RazorpayApi {
    pub fn new(config: RazorpayConfig) -> Result<Self, RazorpayApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .user_agent("GCA Awards Server")
            .default_headers(headers)
            .build()
            .map_err(|e| RazorpayApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn key_id(&self) -> &str {
        self.config.key_id.as_str()
    }

    pub fn config(&self) -> &RazorpayConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_url.trim_end_matches('/'))
    }

    pub async fn rest_query<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, RazorpayApiError> {
        if !self.config.has_credentials() {
            return Err(RazorpayApiError::MissingCredentials);
        }
        let url = self.url(path);
        trace!("💳️ Sending REST query: {method} {url}");
        let mut req =
            self.client.request(method, url).basic_auth(&self.config.key_id, Some(self.config.key_secret.reveal()));
        if let Some(body) = body {
            req = req.json(&body);
        }
        let response = req.send().await.map_err(|e| RazorpayApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("💳️ REST query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| RazorpayApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let text = response.text().await.map_err(|e| RazorpayApiError::RestResponseError(e.to_string()))?;
            // Razorpay wraps failures in {"error": {...}}. Fall back to the raw text for anything else.
            let message = match serde_json::from_str::<RazorpayErrorResponse>(&text) {
                Ok(e) => format!("{}: {}", e.error.code, e.error.description),
                Err(_) => text,
            };
            Err(RazorpayApiError::QueryError { status, message })
        }
    }

    /// Asks Razorpay to create a new order. The returned order id is what the hosted widget needs.
    pub async fn create_order(&self, order: NewRazorpayOrder) -> Result<RazorpayOrder, RazorpayApiError> {
        order.validate()?;
        debug!("💳️ Creating order for {} {} with receipt {}", order.amount, order.currency, order.receipt);
        let result = self.rest_query::<RazorpayOrder, _>(Method::POST, "/orders", Some(order)).await?;
        info!("💳️ Created order {} ({})", result.id, result.amount);
        Ok(result)
    }
}
