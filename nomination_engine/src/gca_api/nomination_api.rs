//! The public API for submitting and listing nominations.
use std::fmt::Debug;

use log::*;

use crate::{
    db_types::Nomination,
    gca_api::errors::NominationApiError,
    traits::NominationManagement,
    validation::NominationForm,
};

/// `NominationApi` validates submissions before they reach the storage backend.
pub struct NominationApi<B> {
    db: B,
}

impl<B: Debug> Debug for NominationApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NominationApi ({:?})", self.db)
    }
}

impl<B> NominationApi<B>
where B: NominationManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &B {
        &self.db
    }

    /// Validates and stores a nomination.
    ///
    /// Nothing is written if validation fails. No other side effects (emails, notifications) take place.
    pub async fn submit_nomination(&self, form: NominationForm) -> Result<Nomination, NominationApiError> {
        let nomination = form.validate().map_err(|e| {
            debug!("📝️ Rejected nomination. {e}");
            e
        })?;
        let nomination = self.db.insert_nomination(nomination).await?;
        info!("📝️ Nomination #{} received for {}", nomination.id, nomination.organization_name);
        Ok(nomination)
    }

    /// Returns every nomination, newest first. There is no filtering or pagination.
    pub async fn list_nominations(&self) -> Result<Vec<Nomination>, NominationApiError> {
        self.db.fetch_nominations().await
    }
}
