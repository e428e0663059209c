//! Storage port: repository trait for persisting cafes.

use std::future::Future;

use cafehub_domain::cafe::{Cafe, NewCafe};
use cafehub_domain::error::CafeHubError;
use cafehub_domain::id::CafeId;

/// Repository for persisting and querying [`Cafe`]s.
///
/// Every mutating method runs as a single transaction: it either commits
/// entirely or rolls back and returns
/// [`CafeHubError::Write`](cafehub_domain::error::CafeHubError::Write).
pub trait CafeRepository {
    /// Insert a candidate record and return it with its assigned id.
    fn insert(&self, cafe: NewCafe) -> impl Future<Output = Result<Cafe, CafeHubError>> + Send;

    /// Pick one cafe uniformly at random, or `None` when the table is empty.
    fn get_random(&self) -> impl Future<Output = Result<Option<Cafe>, CafeHubError>> + Send;

    /// Get all cafes ordered by name.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Cafe>, CafeHubError>> + Send;

    /// Get the cafes whose location equals `location` exactly, ordered by name.
    ///
    /// A `None` location compares against SQL `NULL` and matches nothing.
    fn find_by_location(
        &self,
        location: Option<String>,
    ) -> impl Future<Output = Result<Vec<Cafe>, CafeHubError>> + Send;

    /// Replace the coffee price of an existing cafe.
    ///
    /// Returns `None` when no cafe has this id.
    fn update_coffee_price(
        &self,
        id: CafeId,
        coffee_price: String,
    ) -> impl Future<Output = Result<Option<Cafe>, CafeHubError>> + Send;

    /// Remove a cafe. Returns the removed record, or `None` when no cafe has this id.
    fn delete(&self, id: CafeId)
    -> impl Future<Output = Result<Option<Cafe>, CafeHubError>> + Send;
}
