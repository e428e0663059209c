//! Shared application state for axum handlers.

use std::sync::Arc;

use cafehub_app::ports::CafeRepository;
use cafehub_app::services::cafe_service::CafeService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Cafe read/write service.
    pub cafe_service: Arc<CafeService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            cafe_service: Arc::clone(&self.cafe_service),
        }
    }
}

impl<R> AppState<R>
where
    R: CafeRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(cafe_service: CafeService<R>) -> Self {
        Self {
            cafe_service: Arc::new(cafe_service),
        }
    }
}
