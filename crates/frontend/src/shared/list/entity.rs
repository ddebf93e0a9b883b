//! Per-entity configuration of the generic list screen.

use contracts::enums::RequestStatus;
use contracts::shared::ListQuery;
use serde::de::DeserializeOwned;

use super::filter::FieldAccessor;
use super::row_actions::RowAction;
use super::sort::Sortable;
use crate::shared::api::{ApiError, ApiRequest, Method, RequestBody};

pub const DEFAULT_PAGE_SIZES: &[u32] = &[15, 25, 50];
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Where the search box is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Filter the rows of the current page in memory
    Client,
    /// Send `search` to the server after a debounce
    Server,
}

/// List endpoint of one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEndpoint {
    pub path: &'static str,
    pub method: Method,
    /// Key of the row array inside `data`
    pub list_key: &'static str,
}

impl ListEndpoint {
    pub const fn get(path: &'static str, list_key: &'static str) -> Self {
        Self {
            path,
            method: Method::Get,
            list_key,
        }
    }

    pub const fn post(path: &'static str, list_key: &'static str) -> Self {
        Self {
            path,
            method: Method::Post,
            list_key,
        }
    }

    /// GET endpoints take everything in the query string. POST endpoints take
    /// `page`/`limit` in the query string and the filters as the JSON body,
    /// literal `null` when there are none.
    pub fn request(&self, query: &ListQuery) -> Result<ApiRequest, ApiError> {
        match self.method {
            Method::Post => {
                let request = ApiRequest::post(self.path).with_query(&query.paging())?;
                if query.filters.is_empty() {
                    Ok(request.with_body(RequestBody::Null))
                } else {
                    request.with_json(&query.filters)
                }
            }
            _ => ApiRequest::get(self.path).with_query(query),
        }
    }
}

/// How a cell is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Number,
    Money,
    Date,
    DateTime,
    /// Short status word shown as a badge
    Badge,
    /// Link or image URL
    Link,
}

/// Table column: header, cell text and sort key
pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub value: fn(&T) -> String,
    pub kind: CellKind,
    pub sortable: bool,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> Column<T> {
    pub const fn new(key: &'static str, label: &'static str, value: fn(&T) -> String) -> Self {
        Self {
            key,
            label,
            value,
            kind: CellKind::Text,
            sortable: true,
        }
    }

    pub const fn kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn is_right_aligned(&self) -> bool {
        matches!(self.kind, CellKind::Number | CellKind::Money)
    }
}

/// Everything the generic controller needs to know about one record type.
///
/// Mutations return the request together with the locally patched row; the
/// patch is applied only after the server confirms.
pub trait ListEntity:
    Clone + PartialEq + DeserializeOwned + Send + Sync + Sortable + 'static
{
    /// Tab key of the list screen, also used as log tag
    const KEY: &'static str;
    const TITLE: &'static str;
    const ENDPOINT: ListEndpoint;
    const COLUMNS: &'static [Column<Self>];
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>];
    const PAGE_SIZES: &'static [u32] = DEFAULT_PAGE_SIZES;
    const SEARCH_MODE: SearchMode = SearchMode::Client;
    /// Show the date-range filter and send it to the server
    const DATE_FILTER: bool = false;
    /// Key of the echoed record inside `data` of mutation responses
    const RECORD_KEY: Option<&'static str> = None;
    const ROW_ACTIONS: &'static [RowAction] = &[];

    fn id(&self) -> &str;

    fn delete_request(&self) -> Option<ApiRequest> {
        None
    }

    fn toggle_request(&self) -> Option<(ApiRequest, Self)> {
        None
    }

    fn review_request(&self, _status: RequestStatus) -> Option<(ApiRequest, Self)> {
        None
    }

    /// `(tab key, tab title)` of the detail view
    fn detail_tab(&self) -> Option<(String, String)> {
        None
    }

    fn default_page_size() -> u32 {
        if Self::PAGE_SIZES.contains(&DEFAULT_PAGE_SIZE) {
            DEFAULT_PAGE_SIZE
        } else {
            Self::PAGE_SIZES.first().copied().unwrap_or(DEFAULT_PAGE_SIZE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::shared::DateRange;
    use serde_json::json;

    #[test]
    fn test_get_endpoint_puts_filters_in_query() {
        let endpoint = ListEndpoint::get("/admin/support", "supportReq");
        let request = endpoint
            .request(&ListQuery::new(2, 25).with_search("refund"))
            .unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path_and_query(), "/admin/support?page=2&limit=25&search=refund");
        assert!(matches!(request.body, RequestBody::Empty));
    }

    #[test]
    fn test_post_endpoint_without_filters_sends_null() {
        let endpoint = ListEndpoint::post("/admin/tickets/list", "tickets");
        let request = endpoint.request(&ListQuery::new(1, 15)).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path_and_query(), "/admin/tickets/list?page=1&limit=15");
        assert!(matches!(request.body, RequestBody::Null));
    }

    #[test]
    fn test_post_endpoint_with_date_range_sends_json() {
        let endpoint = ListEndpoint::post("/admin/deposits", "deposits");
        let range = DateRange::new(NaiveDate::from_ymd_opt(2024, 5, 1), None);
        let request = endpoint
            .request(&ListQuery::new(3, 50).with_date_range(range))
            .unwrap();
        assert_eq!(request.path_and_query(), "/admin/deposits?page=3&limit=50");
        assert_eq!(request.body.as_json(), Some(&json!({ "startDate": "2024-05-01" })));
    }
}
