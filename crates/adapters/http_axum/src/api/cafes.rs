//! JSON REST handlers for cafes.

use axum::extract::{Path, State};

use cafehub_app::ports::CafeRepository;
use cafehub_domain::cafe::{Cafe, NewCafe};
use cafehub_domain::error::NotFoundError;
use cafehub_domain::id::CafeId;

use crate::error::ApiError;
use crate::extract::{LenientForm, LenientQuery, Params};
use crate::format::{CafeListResponse, RandomResponse, SuccessResponse};
use crate::state::AppState;

/// Form body for adding a cafe.
///
/// Every field is optional: absent text columns are rejected by storage,
/// absent flags read as `false`.
#[derive(Debug, Default)]
pub struct AddCafeForm {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub loc: Option<String>,
    pub sockets: Option<String>,
    pub toilet: Option<String>,
    pub wifi: Option<String>,
    pub calls: Option<String>,
    pub seats: Option<String>,
    pub coffee_price: Option<String>,
}

impl From<Params> for AddCafeForm {
    fn from(mut params: Params) -> Self {
        Self {
            name: params.take("name"),
            map_url: params.take("map_url"),
            img_url: params.take("img_url"),
            loc: params.take("loc"),
            sockets: params.take("sockets"),
            toilet: params.take("toilet"),
            wifi: params.take("wifi"),
            calls: params.take("calls"),
            seats: params.take("seats"),
            coffee_price: params.take("coffee_price"),
        }
    }
}

impl From<AddCafeForm> for NewCafe {
    fn from(form: AddCafeForm) -> Self {
        Cafe::builder()
            .name(form.name)
            .map_url(form.map_url)
            .img_url(form.img_url)
            .location(form.loc)
            .has_sockets(form.sockets.as_deref())
            .has_toilet(form.toilet.as_deref())
            .has_wifi(form.wifi.as_deref())
            .can_take_calls(form.calls.as_deref())
            .seats(form.seats)
            .coffee_price(form.coffee_price)
            .build()
    }
}

/// Query string for `GET /api/search`.
#[derive(Debug)]
pub struct SearchParams {
    pub loc: Option<String>,
}

impl From<Params> for SearchParams {
    fn from(mut params: Params) -> Self {
        Self {
            loc: params.take("loc"),
        }
    }
}

/// Query string for `PATCH /api/update-price/{id}`.
#[derive(Debug)]
pub struct UpdatePriceParams {
    pub new_price: Option<String>,
}

impl From<Params> for UpdatePriceParams {
    fn from(mut params: Params) -> Self {
        Self {
            new_price: params.take("new_price"),
        }
    }
}

/// Query string for `DELETE /api/report-closed/{id}`.
#[derive(Debug)]
pub struct ReportClosedParams {
    pub api_key: Option<String>,
}

impl From<Params> for ReportClosedParams {
    fn from(mut params: Params) -> Self {
        Self {
            api_key: params.take("api-key"),
        }
    }
}

/// Non-numeric ids cannot exist, so they are reported like unknown ones.
fn parse_id(raw: &str) -> Result<CafeId, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::from(NotFoundError {
            entity: "Cafe",
            id: raw.to_string(),
        })
    })
}

/// `GET /api/random`
pub async fn random<R>(State(state): State<AppState<R>>) -> Result<RandomResponse, ApiError>
where
    R: CafeRepository + Send + Sync + 'static,
{
    let cafe = state.cafe_service.random_cafe().await?;
    Ok(cafe.into())
}

/// `GET /api/all`
pub async fn all<R>(State(state): State<AppState<R>>) -> Result<CafeListResponse, ApiError>
where
    R: CafeRepository + Send + Sync + 'static,
{
    let cafes = state.cafe_service.list_cafes().await?;
    Ok(cafes.into())
}

/// `GET /api/search?loc=`
pub async fn search<R>(
    State(state): State<AppState<R>>,
    LenientQuery(params): LenientQuery<SearchParams>,
) -> Result<CafeListResponse, ApiError>
where
    R: CafeRepository + Send + Sync + 'static,
{
    let cafes = state.cafe_service.search_cafes(params.loc).await?;
    Ok(cafes.into())
}

/// `POST /api/add`
///
/// Reads `urlencoded` or `multipart/form-data` bodies. A request without a
/// form body adds nothing and fails on the first required column.
pub async fn add<R>(
    State(state): State<AppState<R>>,
    LenientForm(form): LenientForm<AddCafeForm>,
) -> Result<SuccessResponse, ApiError>
where
    R: CafeRepository + Send + Sync + 'static,
{
    state.cafe_service.add_cafe(form.into()).await?;
    Ok(SuccessResponse::SAVED)
}

/// `PATCH /api/update-price/{id}?new_price=`
pub async fn update_price<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    LenientQuery(params): LenientQuery<UpdatePriceParams>,
) -> Result<SuccessResponse, ApiError>
where
    R: CafeRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state
        .cafe_service
        .update_price(id, params.new_price)
        .await?;
    Ok(SuccessResponse::SAVED)
}

/// `DELETE /api/report-closed/{id}?api-key=`
pub async fn report_closed<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    LenientQuery(params): LenientQuery<ReportClosedParams>,
) -> Result<SuccessResponse, ApiError>
where
    R: CafeRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state
        .cafe_service
        .report_closed(id, params.api_key.as_deref())
        .await?;
    Ok(SuccessResponse::SAVED)
}
