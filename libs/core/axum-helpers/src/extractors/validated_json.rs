//! JSON extractor with validation through the `validator` crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor that runs `Validate::validate` after deserializing.
///
/// Malformed bodies reject with 400 `INVALID_JSON` (415 when the content type
/// is missing); failed validation rejects with 400 `VALIDATION_ERROR` and the
/// per-field errors in `details`.
///
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
///
/// async fn create_product(ValidatedJson(input): ValidatedJson<ProductInput>) -> String {
///     format!("Creating {}", input.name)
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
