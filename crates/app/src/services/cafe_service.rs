//! Cafe service: use-cases for browsing and maintaining the cafe directory.

use cafehub_domain::auth::ApiKey;
use cafehub_domain::cafe::{Cafe, NewCafe};
use cafehub_domain::error::{CafeHubError, NotFoundError, ValidationError};
use cafehub_domain::id::CafeId;

use crate::ports::CafeRepository;

/// Application service for cafe reads and writes.
pub struct CafeService<R> {
    repo: R,
    api_key: ApiKey,
}

impl<R: CafeRepository> CafeService<R> {
    /// Create a new service backed by the given repository.
    ///
    /// `api_key` is the shared secret that [`Self::report_closed`] checks.
    pub fn new(repo: R, api_key: ApiKey) -> Self {
        Self { repo, api_key }
    }

    /// Pick one cafe at random.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn random_cafe(&self) -> Result<Option<Cafe>, CafeHubError> {
        self.repo.get_random().await
    }

    /// List every cafe ordered by name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_cafes(&self) -> Result<Vec<Cafe>, CafeHubError> {
        self.repo.get_all().await
    }

    /// List the cafes at exactly `location`, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn search_cafes(&self, location: Option<String>) -> Result<Vec<Cafe>, CafeHubError> {
        self.repo.find_by_location(location).await
    }

    /// Persist a new cafe.
    ///
    /// The candidate is handed to storage as-is; missing required fields and
    /// duplicate names surface as [`CafeHubError::Write`].
    ///
    /// # Errors
    ///
    /// Returns [`CafeHubError::Write`] when the insert is rejected.
    pub async fn add_cafe(&self, cafe: NewCafe) -> Result<Cafe, CafeHubError> {
        let created = self.repo.insert(cafe).await?;
        tracing::info!(id = %created.id, name = %created.name, "cafe added");
        Ok(created)
    }

    /// Set the coffee price of an existing cafe to the raw `new_price` text.
    ///
    /// # Errors
    ///
    /// Returns [`CafeHubError::Validation`] when `new_price` is absent or
    /// empty, [`CafeHubError::NotFound`] when the id is unknown, or
    /// [`CafeHubError::Write`] when the update is rejected.
    pub async fn update_price(
        &self,
        id: CafeId,
        new_price: Option<String>,
    ) -> Result<Cafe, CafeHubError> {
        let new_price = new_price
            .filter(|price| !price.is_empty())
            .ok_or(ValidationError::MissingPrice)?;

        let updated = self
            .repo
            .update_coffee_price(id, new_price)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(%id, coffee_price = ?updated.coffee_price, "coffee price updated");
        Ok(updated)
    }

    /// Remove a cafe reported as closed.
    ///
    /// # Errors
    ///
    /// Returns [`CafeHubError::Unauthorized`] when `api_key` does not match
    /// the configured secret, [`CafeHubError::NotFound`] when the id is
    /// unknown, or [`CafeHubError::Write`] when the delete is rejected.
    pub async fn report_closed(
        &self,
        id: CafeId,
        api_key: Option<&str>,
    ) -> Result<Cafe, CafeHubError> {
        if !self.api_key.matches(api_key) {
            tracing::warn!(%id, "rejected close report with invalid api key");
            return Err(CafeHubError::Unauthorized);
        }

        let removed = self.repo.delete(id).await?.ok_or_else(|| not_found(id))?;
        tracing::info!(%id, name = %removed.name, "cafe removed");
        Ok(removed)
    }
}

fn not_found(id: CafeId) -> CafeHubError {
    NotFoundError {
        entity: "Cafe",
        id: id.to_string(),
    }
    .into()
}
