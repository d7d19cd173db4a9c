//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause the
//! current worker to stop processing new requests. Storage and gateway calls are all asynchronous, so keep them that
//! way.
use actix_web::{get, http::StatusCode, web, HttpRequest, HttpResponse, Responder};
use log::*;
use nomination_engine::{
    traits::{NominationManagement, PaymentGateway},
    CheckoutApi,
    NominationApi,
    NominationApiError,
    NominationForm,
};
use razorpay_tools::PaymentConfirmation;

use crate::{
    config::ProxyConfig,
    data_objects::{CreateOrderRequest, DataResponse},
    errors::ServerError,
    helpers::get_remote_ip,
};

pub const NOMINATION_SUBMITTED: &str = "Nomination submitted successfully";
pub const NOMINATION_SUBMISSION_FAILED: &str = "Failed to submit nomination";
pub const NOMINATION_FETCH_FAILED: &str = "Failed to fetch nominations";

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };

    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+ where requires admin)  => {
        paste::paste! { pub struct [<$name:camel Route>]<A>(core::marker::PhantomData<fn() -> A>);}
        paste::paste! { impl<A> [<$name:camel Route>]<A> {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(core::marker::PhantomData::<fn() -> A>)
            }
        }}
        paste::paste! { impl<A> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<A>
        where
            A: $($bounds)++ 'static,
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::<A>)
                    .wrap($crate::middleware::AdminKeyMiddlewareFactory::new());
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Nominations  ----------------------------------------------------
route!(submit_nomination => Post "/nominations" impl NominationManagement);
/// Route handler for nomination submissions.
///
/// The body is a JSON nomination form. Missing fields are treated as empty, so they are reported by validation
/// rather than by the JSON parser. A body that is not JSON at all is rejected with the parser's message.
///
/// Responses use the `{success, message, data}` envelope:
/// * 201 with the stored nomination on success,
/// * 400 with a list of the offending fields if the form is invalid,
/// * 500 with a generic message if the nomination could not be stored.
pub async fn submit_nomination<B: NominationManagement>(
    req: HttpRequest,
    body: Result<web::Json<NominationForm>, actix_web::Error>,
    config: web::Data<ProxyConfig>,
    api: web::Data<NominationApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let remote_ip = get_remote_ip(&req, config.use_x_forwarded_for, config.use_forwarded);
    let ip = remote_ip.map(|ip| ip.to_string()).unwrap_or_else(|| "an unknown address".into());
    info!("💻️ Received nomination from {ip}");
    let form = body
        .map_err(|e| {
            debug!("💻️ Could not read nomination body. {e}");
            ServerError::nomination_failure(StatusCode::BAD_REQUEST, e.to_string())
        })?
        .into_inner();
    let nomination = api.submit_nomination(form).await.map_err(|e| match e {
        NominationApiError::ValidationError(e) => {
            ServerError::nomination_failure(StatusCode::BAD_REQUEST, e.to_string())
        },
        NominationApiError::DatabaseError(e) => {
            error!("💻️ Could not store nomination from {ip}. {e}");
            ServerError::nomination_failure(StatusCode::INTERNAL_SERVER_ERROR, NOMINATION_SUBMISSION_FAILED)
        },
    })?;
    Ok(HttpResponse::Created().json(DataResponse::with_message(NOMINATION_SUBMITTED, nomination)))
}

route!(list_nominations => Get "/nominations" impl NominationManagement where requires admin);
/// Route handler for the nomination listing.
///
/// Returns every nomination, newest first. Callers must present the admin key in the `gca_admin_key` header.
pub async fn list_nominations<B: NominationManagement>(
    api: web::Data<NominationApi<B>>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received nomination listing request");
    let nominations = api.list_nominations().await.map_err(|e| {
        error!("💻️ Could not fetch nominations. {e}");
        ServerError::nomination_failure(StatusCode::INTERNAL_SERVER_ERROR, NOMINATION_FETCH_FAILED)
    })?;
    debug!("💻️ Returning {} nominations", nominations.len());
    Ok(HttpResponse::Ok().json(DataResponse::new(nominations)))
}

//----------------------------------------------   Checkout  ----------------------------------------------------
route!(create_order => Post "/create-order" impl PaymentGateway);
/// Route handler for creating a payment order.
///
/// The body is optional. If present, it may carry the `nominationId` the payment is for, which is attached to the
/// order. The amount and currency are always taken from server configuration.
///
/// Any gateway failure is reported as a 500 with `{"error": "Failed to create order"}`. The cause is logged.
pub async fn create_order<G: PaymentGateway>(
    body: Option<web::Json<CreateOrderRequest>>,
    api: web::Data<CheckoutApi<G>>,
) -> Result<HttpResponse, ServerError> {
    let request = body.map(|b| b.into_inner()).unwrap_or_default();
    trace!("💻️ Received create order request. {request:?}");
    let order = api.create_order(request.nomination_id).await.map_err(|e| {
        error!("💻️ Failed to create order. {e}");
        ServerError::from(e)
    })?;
    Ok(HttpResponse::Ok().json(order))
}

route!(verify_payment => Post "/verify-payment" impl PaymentGateway);
/// Route handler for confirming a completed payment.
///
/// The body is the payload the hosted checkout widget hands to its success callback. The signature is recomputed
/// with the server's key secret. Only a matching signature produces a 200 response.
pub async fn verify_payment<G: PaymentGateway>(
    body: Result<web::Json<PaymentConfirmation>, actix_web::Error>,
    api: web::Data<CheckoutApi<G>>,
) -> Result<HttpResponse, ServerError> {
    let confirmation = body
        .map_err(|e| {
            debug!("💻️ Could not read payment confirmation. {e}");
            ServerError::InvalidRequestBody(e.to_string())
        })?
        .into_inner();
    trace!("💻️ Received payment confirmation for order {}", confirmation.razorpay_order_id);
    let verified = api.confirm_payment(
        &confirmation.razorpay_order_id,
        &confirmation.razorpay_payment_id,
        &confirmation.razorpay_signature,
    )?;
    Ok(HttpResponse::Ok().json(verified))
}
