use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::WebError;

/// Typed query string extractor
///
/// Missing parameters fall back to the target type's serde defaults; values
/// that do not coerce to the declared type are rejected with a structured
/// 400 instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|err| WebError::bad_request(format!("Invalid query parameters: {}", err.body_text())))?;

        Ok(QueryParams(query))
    }
}
