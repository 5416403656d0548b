use axum::{
    extract::{FromRequestParts, Path, rejection::PathRejection},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Path extractor with the same JSON rejection shape as `JsonBody`.
/// Segments that fail to parse (e.g. `/items/abc`) are 422.
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                let status = match &rejection {
                    PathRejection::FailedToDeserializePathParams(_) => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    other => other.status(),
                };
                let payload = json!({
                    "error": "Invalid path parameter",
                    "message": rejection.body_text(),
                });
                (status, axum::Json(payload))
            })?;

        Ok(Self(value))
    }
}
