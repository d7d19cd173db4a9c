//! Admin key middleware for Actix Web.
//!
//! Wrap any route or scope that exposes submitted data with this middleware. Callers must present the configured
//! admin key in the `gca_admin_key` header.
//!
//! * If no admin key is configured, every request is refused with 403.
//! * If the header is missing, the request is refused with 401.
//! * If the header does not match the configured key, the request is refused with 403.
//!
//! The key is read from the [`AdminKey`] app data at request time.
use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web,
    Error,
};
use futures::future::LocalBoxFuture;
use gca_common::{helpers::constant_time_eq, Secret};
use log::{trace, warn};

use crate::errors::ServerError;

pub const ADMIN_KEY_HEADER: &str = "gca_admin_key";

/// The admin key configured for this server, if any. Register it with `App::app_data(web::Data::new(..))`.
#[derive(Debug, Clone, Default)]
pub struct AdminKey(Option<Secret<String>>);

impl AdminKey {
    pub fn new(key: Option<Secret<String>>) -> Self {
        Self(key.filter(|k| !k.is_unset()))
    }

    pub fn is_configured(&self) -> bool {
        self.0.is_some()
    }

    /// Checks a presented key against the configured one.
    pub fn check(&self, presented: Option<&str>) -> Result<(), ServerError> {
        let expected = self.0.as_ref().ok_or(ServerError::AdminAccessDisabled)?;
        let presented = presented.ok_or(ServerError::MissingAdminKey)?;
        if constant_time_eq(expected.reveal(), presented) {
            Ok(())
        } else {
            Err(ServerError::InvalidAdminKey)
        }
    }
}

pub struct AdminKeyMiddlewareFactory;

impl AdminKeyMiddlewareFactory {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminKeyMiddlewareFactory
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type InitError = ();
    type Response = ServiceResponse<EitherBody<B>>;
    type Transform = AdminKeyMiddlewareService<S>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminKeyMiddlewareService { service: Rc::new(service) }))
    }
}

pub struct AdminKeyMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminKeyMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;
    type Response = ServiceResponse<EitherBody<B>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        Box::pin(async move {
            trace!("🔐️ Checking admin key for {}", req.path());
            let admin_key = req.app_data::<web::Data<AdminKey>>().map(|k| k.get_ref().clone()).unwrap_or_default();
            let presented = req.headers().get(ADMIN_KEY_HEADER).and_then(|v| v.to_str().ok()).map(str::to_string);
            match admin_key.check(presented.as_deref()) {
                Ok(()) => {
                    trace!("🔐️ Admin key check ✅️");
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                },
                Err(e) => {
                    warn!("🔐️ Denying access to {}. {e}", req.path());
                    Ok(req.error_response(e).map_into_right_body())
                },
            }
        })
    }
}
