pub mod checkout_api;
pub mod checkout_objects;
pub mod errors;
pub mod nomination_api;
