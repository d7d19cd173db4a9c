use chrono::{DateTime, TimeZone, Utc};
use mockall::mock;
use nomination_engine::{
    db_types::{NewNomination, Nomination},
    traits::{GatewayOrder, NominationManagement, OrderRequest, PaymentGateway},
    CheckoutApiError,
    NominationApiError,
};

mock! {
    pub NominationStore {}
    impl NominationManagement for NominationStore {
        async fn insert_nomination(&self, nomination: NewNomination) -> Result<Nomination, NominationApiError>;
        async fn fetch_nominations(&self) -> Result<Vec<Nomination>, NominationApiError>;
    }
}

mock! {
    pub Gateway {}
    impl PaymentGateway for Gateway {
        fn key_id(&self) -> String;
        async fn create_order(&self, request: OrderRequest) -> Result<GatewayOrder, CheckoutApiError>;
        fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool;
    }
}

pub fn timestamp(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_740_000_000 + secs, 0).unwrap()
}

/// What a store would hand back after inserting `new`.
pub fn stored(new: NewNomination, id: i64, created_at: DateTime<Utc>) -> Nomination {
    Nomination {
        id,
        full_name: new.full_name,
        organization_name: new.organization_name,
        phone_number: new.phone_number,
        email: new.email,
        address: new.address,
        state: new.state,
        city: new.city,
        gstin: new.gstin,
        sector: new.sector,
        website: new.website,
        doctorate: new.doctorate,
        forbes: new.forbes,
        created_at,
    }
}
