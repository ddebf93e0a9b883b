//! Loads one page of an entity list and discards superseded responses.

use contracts::shared::{decode_list, ApiResponse, ListPayload, ListQuery};
use serde::de::DeserializeOwned;
use std::cell::Cell;
use std::future::Future;
use std::marker::PhantomData;
use std::rc::Rc;

use super::entity::ListEndpoint;
use super::state::ListAction;
use crate::shared::api::{ApiClient, ApiError};

#[derive(Debug, PartialEq)]
pub enum FetchOutcome<T> {
    Loaded(ListPayload<T>),
    /// `status: false` from the server
    Rejected(String),
    Failed(ApiError),
    /// A newer fetch was issued while this one was in flight
    Stale,
}

impl<T> FetchOutcome<T> {
    /// Stale outcomes never reach the state
    pub fn into_action(self) -> Option<ListAction<T>> {
        match self {
            FetchOutcome::Loaded(payload) => Some(ListAction::FetchSucceeded(payload)),
            FetchOutcome::Rejected(message) => Some(ListAction::FetchFailed(message)),
            FetchOutcome::Failed(err) => Some(ListAction::FetchFailed(err.to_string())),
            FetchOutcome::Stale => None,
        }
    }
}

pub struct Fetcher<T> {
    client: Rc<dyn ApiClient>,
    endpoint: ListEndpoint,
    request_seq: Rc<Cell<u64>>,
    _rows: PhantomData<T>,
}

impl<T: DeserializeOwned + 'static> Fetcher<T> {
    pub fn new(client: Rc<dyn ApiClient>, endpoint: ListEndpoint) -> Self {
        Self {
            client,
            endpoint,
            request_seq: Rc::new(Cell::new(0)),
            _rows: PhantomData,
        }
    }

    fn bump_request_id(&self) -> u64 {
        let next = self.request_seq.get().wrapping_add(1);
        self.request_seq.set(next);
        next
    }

    /// Invalidate whatever is in flight, e.g. when the screen unmounts
    pub fn cancel(&self) {
        self.bump_request_id();
    }

    /// Start a fetch. The request id is taken when this is called, not when
    /// the future is first polled, so call order decides which response wins.
    pub fn fetch(&self, query: &ListQuery) -> impl Future<Output = FetchOutcome<T>> + 'static {
        let request_id = self.bump_request_id();
        let request = self.endpoint.request(query);
        let client = Rc::clone(&self.client);
        let request_seq = Rc::clone(&self.request_seq);
        let endpoint = self.endpoint;

        async move {
            let request = match request {
                Ok(request) => request,
                Err(err) => return FetchOutcome::Failed(err),
            };
            let result = client.send(request).await;

            if request_seq.get() != request_id {
                log::debug!("{}: dropping stale response #{}", endpoint.path, request_id);
                return FetchOutcome::Stale;
            }

            let body = match result {
                Ok(body) => body,
                Err(err) => {
                    log::error!("{}: fetch failed: {}", endpoint.path, err);
                    return FetchOutcome::Failed(err);
                }
            };

            match decode_list::<T>(body, endpoint.list_key) {
                Ok(ApiResponse::Success(payload)) => {
                    log::debug!(
                        "{}: loaded {} rows, {} pages",
                        endpoint.path,
                        payload.items.len(),
                        payload.total_pages
                    );
                    FetchOutcome::Loaded(payload)
                }
                Ok(ApiResponse::Failure { message }) => {
                    log::warn!("{}: rejected: {}", endpoint.path, message);
                    FetchOutcome::Rejected(message)
                }
                Err(shape) => {
                    log::error!("{}: {}", endpoint.path, shape);
                    FetchOutcome::Failed(ApiError::Shape(shape))
                }
            }
        }
    }
}
