use log::*;
use gca_common::{helpers::non_empty_env, Secret};

pub const DEFAULT_RAZORPAY_API_URL: &str = "https://api.razorpay.com/v1";

#[derive(Debug, Clone, Default)]
pub struct RazorpayConfig {
    /// The public key id, e.g. `rzp_test_1DP5mmOlF5G5ag`. This value is handed to the hosted widget on the client.
    pub key_id: String,
    /// The key secret. It authenticates REST calls and signs payment confirmations, so it never leaves the server.
    pub key_secret: Secret<String>,
    /// Base url for REST calls. Only override this to point the client at a sandbox or a stub server.
    pub api_url: String,
}

impl RazorpayConfig {
    pub fn new(key_id: &str, key_secret: &str) -> Self {
        Self {
            key_id: key_id.to_string(),
            key_secret: Secret::new(key_secret.to_string()),
            api_url: DEFAULT_RAZORPAY_API_URL.to_string(),
        }
    }

    pub fn new_from_env_or_default() -> Self {
        let key_id = non_empty_env("GCA_RAZORPAY_KEY_ID").unwrap_or_else(|| {
            warn!("💳️ GCA_RAZORPAY_KEY_ID not set. Order creation will fail until it is configured.");
            String::default()
        });
        let key_secret = Secret::new(non_empty_env("GCA_RAZORPAY_KEY_SECRET").unwrap_or_else(|| {
            warn!("💳️ GCA_RAZORPAY_KEY_SECRET not set. Order creation and payment verification will fail.");
            String::default()
        }));
        let api_url = non_empty_env("GCA_RAZORPAY_API_URL").unwrap_or_else(|| {
            debug!("💳️ GCA_RAZORPAY_API_URL not set, using {DEFAULT_RAZORPAY_API_URL}");
            DEFAULT_RAZORPAY_API_URL.to_string()
        });
        Self { key_id, key_secret, api_url }
    }

    /// True if both halves of the API key pair are present.
    pub fn has_credentials(&self) -> bool {
        !self.key_id.is_empty() && !self.key_secret.is_unset()
    }
}
