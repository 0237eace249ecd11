use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::Request,
    Json,
};

use crate::errors::RequestError;

const INVALID_BODY: &str = "Invalid request body";

/// `Json<T>` whose rejections use the `{"msg"}` error body.
///
/// Malformed JSON, a missing `application/json` content type and fields of the
/// wrong type all become 400 "Invalid request body".
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<S, B, T> FromRequest<S, B> for JsonBody<T>
where
    Json<T>: FromRequest<S, B, Rejection = JsonRejection>,
    S: Send + Sync,
    B: Send + 'static,
{
    type Rejection = RequestError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "rejected request body");
                Err(RequestError::InvalidInput(INVALID_BODY))
            }
        }
    }
}
