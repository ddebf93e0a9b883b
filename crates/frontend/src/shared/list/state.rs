//! State of one list screen and the reducer that drives it.
//!
//! Every change goes through [`ListState::apply`], which returns the effect
//! the controller has to run next (usually a refetch). Keeping the reducer
//! free of signals and futures makes the paging rules testable as plain
//! functions.

use contracts::shared::{DateRange, ListPayload, ListQuery};

use super::entity::{ListEntity, SearchMode};
use super::filter::filter_items;
use super::sort::{apply_sort, SortState};

/// What the controller must do after an action was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEffect {
    None,
    Refetch,
    /// Refetch after the search debounce elapsed
    DebouncedRefetch,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<T> {
    FetchStarted,
    FetchSucceeded(ListPayload<T>),
    FetchFailed(String),
    GoToPage(u32),
    NextPage,
    PrevPage,
    SetPageSize(u32),
    SetSearch(String),
    ToggleSort(&'static str),
    SetDateRange(DateRange),
    /// Confirmed row mutation (status toggle, approve, reject)
    ItemPatched(T),
    /// Modal submit succeeded; the server may or may not echo the record
    RecordSaved(Option<T>),
    /// Confirmed delete
    ItemRemoved(String),
    ActionFailed(String),
    DismissActionError,
    Reload,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    /// Rows of the current page in server order
    pub items: Vec<T>,
    /// 1-based
    pub page: u32,
    pub page_size: u32,
    /// Always at least 1
    pub total_pages: u32,
    pub total_items: Option<u64>,
    pub loading: bool,
    /// Last fetch failure, rendered above the table
    pub error: Option<String>,
    /// Last row-action failure, rendered as a notice
    pub action_error: Option<String>,
    pub sort: SortState,
    pub search: String,
    pub date_range: DateRange,
    pub is_loaded: bool,
}

impl<T: ListEntity> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ListEntity> ListState<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: T::default_page_size(),
            total_pages: 1,
            total_items: None,
            loading: false,
            error: None,
            action_error: None,
            sort: SortState::default(),
            search: String::new(),
            date_range: DateRange::default(),
            is_loaded: false,
        }
    }

    /// Query for the current page and server-side filters
    pub fn query(&self) -> ListQuery {
        let mut query = ListQuery::new(self.page, self.page_size);
        if T::SEARCH_MODE == SearchMode::Server {
            query = query.with_search(&self.search);
        }
        if T::DATE_FILTER {
            query = query.with_date_range(self.date_range);
        }
        query
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Rows as displayed: searched (client mode only), then sorted
    pub fn visible_items(&self) -> Vec<T> {
        let rows = match T::SEARCH_MODE {
            SearchMode::Client => filter_items(&self.items, &self.search, T::SEARCH_FIELDS),
            SearchMode::Server => self.items.clone(),
        };
        apply_sort(rows, &self.sort)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn go_to(&mut self, page: u32) -> ListEffect {
        let target = page.clamp(1, self.total_pages.max(1));
        if target == self.page {
            return ListEffect::None;
        }
        self.page = target;
        ListEffect::Refetch
    }

    /// Replace the row with the same id, or ask for a refetch when it is
    /// not on this page
    fn patch_or_refetch(&mut self, record: T) -> ListEffect {
        match self.position(record.id()) {
            Some(index) => {
                self.items[index] = record;
                ListEffect::None
            }
            None => ListEffect::Refetch,
        }
    }

    pub fn apply(&mut self, action: ListAction<T>) -> ListEffect {
        match action {
            ListAction::FetchStarted => {
                self.loading = true;
                ListEffect::None
            }
            ListAction::FetchSucceeded(payload) => {
                self.items = payload.items;
                self.total_pages = payload.total_pages.max(1);
                self.total_items = payload.total_items;
                self.loading = false;
                self.error = None;
                self.is_loaded = true;
                if self.page > self.total_pages {
                    self.page = self.total_pages;
                    ListEffect::Refetch
                } else {
                    ListEffect::None
                }
            }
            ListAction::FetchFailed(message) => {
                // rows stay as they were
                self.loading = false;
                self.error = Some(message);
                ListEffect::None
            }
            ListAction::GoToPage(page) => self.go_to(page),
            ListAction::NextPage => self.go_to(self.page.saturating_add(1)),
            ListAction::PrevPage => self.go_to(self.page.saturating_sub(1)),
            ListAction::SetPageSize(size) => {
                if size == self.page_size || !T::PAGE_SIZES.contains(&size) {
                    return ListEffect::None;
                }
                self.page_size = size;
                self.page = 1;
                ListEffect::Refetch
            }
            ListAction::SetSearch(term) => {
                if term == self.search {
                    return ListEffect::None;
                }
                self.search = term;
                match T::SEARCH_MODE {
                    SearchMode::Client => ListEffect::None,
                    SearchMode::Server => {
                        self.page = 1;
                        ListEffect::DebouncedRefetch
                    }
                }
            }
            ListAction::ToggleSort(key) => {
                self.sort.toggle(key);
                ListEffect::None
            }
            ListAction::SetDateRange(range) => {
                if !range.is_valid() {
                    self.error = Some("Start date must not be after end date".to_string());
                    return ListEffect::None;
                }
                if range == self.date_range {
                    return ListEffect::None;
                }
                self.date_range = range;
                self.page = 1;
                self.error = None;
                ListEffect::Refetch
            }
            ListAction::ItemPatched(record) => {
                self.action_error = None;
                self.patch_or_refetch(record)
            }
            ListAction::RecordSaved(Some(record)) => self.patch_or_refetch(record),
            ListAction::RecordSaved(None) => ListEffect::Refetch,
            ListAction::ItemRemoved(id) => {
                let before = self.items.len();
                self.items.retain(|item| item.id() != id);
                if self.items.len() == before {
                    return ListEffect::None;
                }
                self.action_error = None;
                if let Some(total) = self.total_items.as_mut() {
                    *total = total.saturating_sub(1);
                }
                if self.items.is_empty() && self.page > 1 {
                    self.page -= 1;
                    ListEffect::Refetch
                } else {
                    ListEffect::None
                }
            }
            ListAction::ActionFailed(message) => {
                self.action_error = Some(message);
                ListEffect::None
            }
            ListAction::DismissActionError => {
                self.action_error = None;
                ListEffect::None
            }
            ListAction::Reload => ListEffect::Refetch,
        }
    }
}
