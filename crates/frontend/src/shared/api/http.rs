//! Browser implementation of [`ApiClient`] on top of `gloo-net`.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

use super::client::{ApiClient, ApiRequest, FormPart, Method, RequestBody};
use super::error::ApiError;
use crate::shared::api_utils::join_url;
use crate::system::auth::Session;

/// Authenticated HTTP client; the session is read-only for its lifetime
#[derive(Clone, Debug)]
pub struct HttpClient {
    base_url: String,
    session: Session,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            base_url: base_url.into(),
            session,
        }
    }

    fn builder(&self, request: &ApiRequest) -> Result<RequestBuilder, ApiError> {
        let auth_header = self.session.bearer().ok_or(ApiError::NotAuthenticated)?;
        let url = join_url(&self.base_url, &request.path_and_query());
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        Ok(builder.header("Authorization", &auth_header))
    }
}

fn form_data(parts: &[FormPart]) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|e| ApiError::Request(format!("FormData unavailable: {:?}", e)))?;
    for part in parts {
        let appended = match part {
            FormPart::Text { name, value } => form.append_with_str(name, value),
            FormPart::File { name, file } => {
                form.append_with_blob_and_filename(name, file, &file.name())
            }
        };
        appended.map_err(|e| ApiError::Request(format!("Failed to append `{}`: {:?}", part.name(), e)))?;
    }
    Ok(form)
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.text().await {
        Ok(text) => serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| response.status_text()),
        Err(_) => response.status_text(),
    };
    ApiError::Http { status, message }
}

#[async_trait(?Send)]
impl ApiClient for HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let builder = self.builder(&request)?;
        log::debug!("{} {}", request.method.as_str(), request.path_and_query());

        let prepared = match &request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Null => builder
                .header("Content-Type", "application/json")
                .body("null"),
            RequestBody::Json(value) => builder.json(value),
            // The browser sets the multipart boundary header itself
            RequestBody::Multipart(parts) => builder.body(form_data(parts)?),
        }?;

        let response = prepared.send().await?;
        if !response.ok() {
            let err = error_from_response(response).await;
            log::warn!("{} {} failed: {}", request.method.as_str(), request.path, err);
            return Err(err);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Shape(format!("Failed to parse response: {}", e)))
    }
}
