//! Query parameters of a paginated list request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date range for tables filtered by the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    /// A range with start after end can never match anything
    pub fn is_valid(&self) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }
}

/// Filters that travel to the server (query string for GET endpoints,
/// JSON body for POST endpoints)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(flatten)]
    pub date_range: DateRange,
}

impl ListFilters {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.date_range.is_empty()
    }
}

/// Page request: 1-based `page`, `limit` rows per page, optional filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(flatten)]
    pub filters: ListFilters,
}

/// Paging part of a query, for endpoints that send filters in the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub page: u32,
    pub limit: u32,
}

impl ListQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit,
            filters: ListFilters::default(),
        }
    }

    pub fn with_search(mut self, term: &str) -> Self {
        let term = term.trim();
        self.filters.search = (!term.is_empty()).then(|| term.to_string());
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.filters.date_range = range;
        self
    }

    pub fn paging(&self) -> Paging {
        Paging {
            page: self.page,
            limit: self.limit,
        }
    }
}
