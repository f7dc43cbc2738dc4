use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::WebError;

/// JSON body extractor with structured rejections
///
/// Ill-typed bodies map to 422, malformed JSON to 400 and a missing
/// `Content-Type: application/json` to 415.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state)
            .await
            .map_err(rejection_to_web_error)?;

        Ok(JsonBody(value))
    }
}

fn rejection_to_web_error(rejection: JsonRejection) -> WebError {
    let message = rejection.body_text();
    match rejection {
        JsonRejection::JsonDataError(_) => WebError::unprocessable(message),
        JsonRejection::MissingJsonContentType(_) => WebError::unsupported_media_type(message),
        _ => WebError::bad_request(message),
    }
}
