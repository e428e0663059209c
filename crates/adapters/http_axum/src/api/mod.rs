//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod cafes;

use axum::Router;
use axum::routing::{delete, get, patch, post};

use cafehub_app::ports::CafeRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: CafeRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/random", get(cafes::random::<R>))
        .route("/all", get(cafes::all::<R>))
        .route("/search", get(cafes::search::<R>))
        .route("/add", post(cafes::add::<R>))
        .route("/update-price/{id}", patch(cafes::update_price::<R>))
        .route("/report-closed/{id}", delete(cafes::report_closed::<R>))
}
