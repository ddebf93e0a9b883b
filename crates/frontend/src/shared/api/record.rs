//! Loading a single record for detail views.

use contracts::shared::{decode_mutation, ApiResponse};
use serde::de::DeserializeOwned;

use super::client::{ApiClient, ApiRequest};
use super::error::ApiError;

/// Send `request` and decode the record under `data.<record_key>` (or `data`
/// itself). A success without a record is reported as not found.
pub async fn fetch_record<T: DeserializeOwned>(
    client: &dyn ApiClient,
    request: ApiRequest,
    record_key: Option<&str>,
) -> Result<T, ApiError> {
    let body = client.send(request).await?;
    match decode_mutation::<T>(body, record_key).map_err(ApiError::Shape)? {
        ApiResponse::Success(Some(record)) => Ok(record),
        ApiResponse::Success(None) => Err(ApiError::Shape("record not found in response".to_string())),
        ApiResponse::Failure { message } => Err(ApiError::Rejected(message)),
    }
}
