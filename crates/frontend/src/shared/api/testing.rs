//! Scripted [`ApiClient`] for unit tests.

use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

use super::client::{ApiClient, ApiRequest};
use super::error::ApiError;

/// Replays queued responses in order and records every request it sees.
/// An empty queue answers with a transport error.
#[derive(Default)]
pub struct ScriptedClient {
    responses: RefCell<VecDeque<Result<Value, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: Result<Value, ApiError>) -> Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl ApiClient for ScriptedClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }
}
