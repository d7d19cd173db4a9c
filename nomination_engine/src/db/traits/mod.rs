mod nomination_management;
mod payment_gateway;

pub use nomination_management::NominationManagement;
pub use payment_gateway::{GatewayOrder, OrderRequest, PaymentGateway};
