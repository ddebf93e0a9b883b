//! Transport seam between screens and the admin API.
//!
//! Screens describe a call as an [`ApiRequest`] and hand it to an
//! [`ApiClient`]. The browser implementation lives in `http.rs`; tests
//! substitute a scripted client.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// One part of a multipart body
#[derive(Debug, Clone)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file: web_sys::File },
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormPart::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    /// No body at all
    Empty,
    /// Literal JSON `null`, what the POST list endpoints expect without filters
    Null,
    Json(Value),
    Multipart(Vec<FormPart>),
}

impl RequestBody {
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(RequestBody::Json)
            .map_err(|e| ApiError::Request(e.to_string()))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// A call to the admin API, relative to the configured base URL
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// Already encoded query string, without the leading `?`
    pub query: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Encode `params` with `serde_qs` into the query string
    pub fn with_query<Q: Serialize>(mut self, params: &Q) -> Result<Self, ApiError> {
        let encoded = serde_qs::to_string(params)?;
        self.query = (!encoded.is_empty()).then_some(encoded);
        Ok(self)
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    pub fn with_json<T: Serialize>(self, value: &T) -> Result<Self, ApiError> {
        Ok(self.with_body(RequestBody::json(value)?))
    }

    /// Path plus query string, relative to the API base
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }
}

/// Sends requests and returns the JSON body of a 2xx response
#[async_trait(?Send)]
pub trait ApiClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}
