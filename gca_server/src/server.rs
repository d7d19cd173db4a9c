use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::*;
use nomination_engine::{CheckoutApi, NominationApi, SqliteDatabase};

use crate::{
    config::{ProxyConfig, ServerConfig},
    errors::ServerError,
    integrations::razorpay::RazorpayGateway,
    middleware::AdminKey,
    routes::{health, CreateOrderRoute, ListNominationsRoute, SubmitNominationRoute, VerifyPaymentRoute},
};

/// Builds the store and the payment gateway, then runs the server until it is shut down.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, config.db_max_connections)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    db.run_migrations().await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    info!("🗃️ Database at {} is ready", db.url());
    let gateway =
        RazorpayGateway::new(config.razorpay.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, db, gateway)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(
    config: ServerConfig,
    db: SqliteDatabase,
    gateway: RazorpayGateway,
) -> Result<Server, ServerError> {
    let admin_key = AdminKey::new(config.admin_api_key.clone());
    if !admin_key.is_configured() {
        warn!("🔐️ No admin key is configured. GET /api/nominations will refuse every request.");
    }
    let proxy_config = ProxyConfig::from_config(&config);
    let order_terms = config.order_terms.clone();
    let srv = HttpServer::new(move || {
        let nominations_api = NominationApi::new(db.clone());
        let checkout_api = CheckoutApi::new(gateway.clone(), order_terms.clone());
        let api_scope = web::scope("/api")
            .service(SubmitNominationRoute::<SqliteDatabase>::new())
            .service(ListNominationsRoute::<SqliteDatabase>::new())
            .service(CreateOrderRoute::<RazorpayGateway>::new())
            .service(VerifyPaymentRoute::<RazorpayGateway>::new());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("gca::access_log"))
            .app_data(web::Data::new(nominations_api))
            .app_data(web::Data::new(checkout_api))
            .app_data(web::Data::new(admin_key.clone()))
            .app_data(web::Data::new(proxy_config))
            .service(health)
            .service(api_scope)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
