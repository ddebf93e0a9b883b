//! Admin API transport: request description, client trait, browser client.

pub mod client;
pub mod context;
pub mod error;
pub mod http;
pub mod record;
#[cfg(test)]
pub mod testing;

pub use client::{ApiClient, ApiRequest, FormPart, Method, RequestBody};
pub use context::{provide_api_client, use_api_client};
pub use error::ApiError;
pub use http::HttpClient;
pub use record::fetch_record;
