use crate::{
    db_types::{NewNomination, Nomination},
    gca_api::errors::NominationApiError,
};

/// The `NominationManagement` trait defines the storage behaviour for nomination records.
///
/// Records are insert-only. There are no update or delete operations.
#[allow(async_fn_in_trait)]
pub trait NominationManagement {
    /// Stores a validated nomination and returns the stored record, including its id and creation timestamp.
    async fn insert_nomination(&self, nomination: NewNomination) -> Result<Nomination, NominationApiError>;

    /// Fetches every nomination, newest first. Records created in the same instant are ordered by descending id.
    async fn fetch_nominations(&self) -> Result<Vec<Nomination>, NominationApiError>;
}
