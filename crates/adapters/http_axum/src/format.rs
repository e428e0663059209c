//! Response shapes shared by the read endpoints.
//!
//! A cafe is always projected through [`CafeView`]; lists go through
//! [`CafeListResponse`], which turns an empty result into a 404.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use cafehub_domain::cafe::Cafe;
use cafehub_domain::id::CafeId;

use crate::error::{ErrorBody, NO_CAFES};

/// Placeholder for an empty URL column.
const NOT_AVAILABLE: &str = "N/A";

/// Flat JSON projection of a [`Cafe`].
///
/// `map_url` and `img_url` fall back to `"N/A"` when empty. Other text
/// columns are passed through untouched.
#[derive(Debug, Serialize)]
pub struct CafeView {
    pub id: CafeId,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

fn or_not_available(value: String) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value
    }
}

impl From<Cafe> for CafeView {
    fn from(cafe: Cafe) -> Self {
        Self {
            id: cafe.id,
            name: cafe.name,
            map_url: or_not_available(cafe.map_url),
            img_url: or_not_available(cafe.img_url),
            location: cafe.location,
            seats: cafe.seats,
            has_toilet: cafe.has_toilet,
            has_wifi: cafe.has_wifi,
            has_sockets: cafe.has_sockets,
            can_take_calls: cafe.can_take_calls,
            coffee_price: cafe.coffee_price,
        }
    }
}

/// `{"cafe": {...}}`
#[derive(Debug, Serialize)]
pub struct CafeBody {
    pub cafe: CafeView,
}

/// `{"cafes": [...]}`
#[derive(Debug, Serialize)]
pub struct CafesBody {
    pub cafes: Vec<CafeView>,
}

/// Possible responses for a single randomly picked cafe.
pub enum RandomResponse {
    Ok(Json<CafeBody>),
    Empty,
}

impl From<Option<Cafe>> for RandomResponse {
    fn from(cafe: Option<Cafe>) -> Self {
        match cafe {
            Some(cafe) => Self::Ok(Json(CafeBody { cafe: cafe.into() })),
            None => Self::Empty,
        }
    }
}

impl IntoResponse for RandomResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Empty => not_found(),
        }
    }
}

/// Possible responses for a list of cafes.
pub enum CafeListResponse {
    Ok(Json<CafesBody>),
    Empty,
}

impl From<Vec<Cafe>> for CafeListResponse {
    fn from(cafes: Vec<Cafe>) -> Self {
        if cafes.is_empty() {
            return Self::Empty;
        }
        Self::Ok(Json(CafesBody {
            cafes: cafes.into_iter().map(CafeView::from).collect(),
        }))
    }
}

impl IntoResponse for CafeListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Empty => not_found(),
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorBody::not_found(NO_CAFES))).into_response()
}

#[derive(Serialize)]
struct SuccessDetail {
    success: &'static str,
}

#[derive(Serialize)]
struct SuccessBody {
    success: SuccessDetail,
}

/// `{"success": {"success": <message>}}` with status 200.
pub struct SuccessResponse(&'static str);

impl SuccessResponse {
    /// Message returned by every successful mutation.
    pub const SAVED: Self = Self("Successfully added the new cafe");
}

impl IntoResponse for SuccessResponse {
    fn into_response(self) -> Response {
        Json(SuccessBody {
            success: SuccessDetail { success: self.0 },
        })
        .into_response()
    }
}
