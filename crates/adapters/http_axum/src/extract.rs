//! Extractors for query strings and form bodies as HTML clients send them.
//!
//! Parameters are kept as ordered pairs and a repeated key resolves to its
//! first value. Anything that cannot be decoded is rejected with an
//! [`ApiError`], so the response keeps the JSON error shape.

use axum::Form;
use axum::extract::{FromRequest, FromRequestParts, Multipart, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;

use crate::error::ApiError;

const URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART: &str = "multipart/form-data";

/// Decoded key/value pairs in the order they were sent.
#[derive(Debug, Default)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Remove and return the first value sent for `key`.
    pub fn take(&mut self, key: &str) -> Option<String> {
        let index = self.0.iter().position(|(name, _)| name == key)?;
        Some(self.0.remove(index).1)
    }
}

impl From<Vec<(String, String)>> for Params {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

/// Query-string extractor that tolerates repeated keys.
#[derive(Debug)]
pub struct LenientQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: From<Params> + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(ApiError::malformed)?;
        Ok(Self(T::from(Params::from(pairs))))
    }
}

/// Form-body extractor for both `urlencoded` and `multipart/form-data`.
///
/// File parts of a multipart body are ignored. A request with no form
/// content type yields no parameters.
#[derive(Debug)]
pub struct LenientForm<T>(pub T);

impl<T, S> FromRequest<S> for LenientForm<T>
where
    T: From<Params> + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let params = if content_type.starts_with(MULTIPART) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(ApiError::malformed)?;
            read_multipart(multipart).await?
        } else if content_type.starts_with(URLENCODED) {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(ApiError::malformed)?;
            Params::from(pairs)
        } else {
            tracing::debug!(%content_type, "request carries no form body");
            Params::default()
        };

        Ok(Self(T::from(params)))
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<Params, ApiError> {
    let mut pairs = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(ApiError::malformed)? {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field.text().await.map_err(ApiError::malformed)?;
        pairs.push((name, value));
    }
    Ok(Params::from(pairs))
}
