use std::env;

use gca_common::{
    helpers::{env_flag, non_empty_env},
    Paise,
    Secret,
    INR_CURRENCY_CODE,
};
use log::*;
use nomination_engine::checkout_objects::OrderTerms;
use razorpay_tools::{RazorpayConfig, MIN_ORDER_AMOUNT};

const DEFAULT_GCA_HOST: &str = "127.0.0.1";
const DEFAULT_GCA_PORT: u16 = 8360;
const DEFAULT_GCA_DATABASE_URL: &str = "sqlite://data/gca_awards.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 25;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    /// The key that must be presented in the `gca_admin_key` header to read nominations. When `None`, the listing
    /// endpoint refuses every request.
    pub admin_api_key: Option<Secret<String>>,
    pub razorpay: RazorpayConfig,
    /// The amount and currency charged for every checkout.
    pub order_terms: OrderTerms,
    /// If true, the X-Forwarded-For header will be used to determine the client's IP address, rather than the
    /// connection's remote address.
    pub use_x_forwarded_for: bool,
    /// If true, the Forwarded header will be used to determine the client's IP address, rather than the
    /// connection's remote address.
    pub use_forwarded: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_GCA_HOST.to_string(),
            port: DEFAULT_GCA_PORT,
            database_url: DEFAULT_GCA_DATABASE_URL.to_string(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            admin_api_key: None,
            razorpay: RazorpayConfig::default(),
            order_terms: OrderTerms::default(),
            use_x_forwarded_for: false,
            use_forwarded: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env_or_default() -> Self {
        let host = env::var("GCA_HOST").ok().unwrap_or_else(|| DEFAULT_GCA_HOST.into());
        let port = env::var("GCA_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for GCA_PORT. {e} Using the default, {DEFAULT_GCA_PORT}, instead."
                    );
                    DEFAULT_GCA_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_GCA_PORT);
        let database_url = non_empty_env("GCA_DATABASE_URL").unwrap_or_else(|| {
            warn!("🪛️ GCA_DATABASE_URL is not set. Using the default, {DEFAULT_GCA_DATABASE_URL}.");
            DEFAULT_GCA_DATABASE_URL.to_string()
        });
        let db_max_connections = env::var("GCA_DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| {
                s.parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .or_else(|| {
                        warn!("🪛️ Invalid value for GCA_DB_MAX_CONNECTIONS: {s}. Using {DEFAULT_DB_MAX_CONNECTIONS}.");
                        None
                    })
            })
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);
        let admin_api_key = non_empty_env("GCA_ADMIN_API_KEY").map(Secret::new);
        if admin_api_key.is_none() {
            warn!(
                "🪛️ GCA_ADMIN_API_KEY is not set. The nomination listing is disabled and will refuse every request \
                 until a key is configured."
            );
        }
        let razorpay = RazorpayConfig::new_from_env_or_default();
        let order_terms = configure_order_terms();
        let use_x_forwarded_for = env_flag("GCA_USE_X_FORWARDED_FOR", false);
        let use_forwarded = env_flag("GCA_USE_FORWARDED", false);
        Self {
            host,
            port,
            database_url,
            db_max_connections,
            admin_api_key,
            razorpay,
            order_terms,
            use_x_forwarded_for,
            use_forwarded,
        }
    }
}

fn configure_order_terms() -> OrderTerms {
    let default = OrderTerms::default();
    let amount = parse_order_amount(env::var("GCA_ORDER_AMOUNT").ok(), default.amount);
    let currency = non_empty_env("GCA_ORDER_CURRENCY")
        .map(|s| s.trim().to_uppercase())
        .and_then(|s| {
            if s.len() == 3 && s.chars().all(|c| c.is_ascii_alphabetic()) {
                Some(s)
            } else {
                warn!("🪛️ GCA_ORDER_CURRENCY must be a three letter currency code. Using {INR_CURRENCY_CODE}.");
                None
            }
        })
        .unwrap_or(default.currency);
    info!("🪛️ Checkout amount is {amount} {currency}");
    OrderTerms { amount, currency }
}

/// Reads the checkout amount in paise. Anything Razorpay would refuse to create an order for falls back to `default`.
fn parse_order_amount(value: Option<String>, default: Paise) -> Paise {
    let Some(s) = value else {
        info!("🪛️ GCA_ORDER_AMOUNT is not set. Using the default of {default}.");
        return default;
    };
    match s.parse::<Paise>() {
        Ok(p) if p.value() >= MIN_ORDER_AMOUNT => p,
        Ok(p) => {
            warn!(
                "🪛️ GCA_ORDER_AMOUNT of {p} is below the gateway minimum of {}. Using the default of {default}.",
                Paise::from(MIN_ORDER_AMOUNT)
            );
            default
        },
        Err(e) => {
            warn!("🪛️ Invalid configuration value for GCA_ORDER_AMOUNT. {e} Using the default of {default}.");
            default
        },
    }
}

/// The subset of the configuration that handlers need to work out who a request came from.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProxyConfig {
    pub use_x_forwarded_for: bool,
    pub use_forwarded: bool,
}

impl ProxyConfig {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self { use_x_forwarded_for: config.use_x_forwarded_for, use_forwarded: config.use_forwarded }
    }
}
