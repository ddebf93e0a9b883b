//! Generic list screen core: state reducer, fetcher, client-side search and
//! sort, row actions, plus the reactive controller that ties them together.

pub mod controller;
pub mod entity;
pub mod fetcher;
pub mod filter;
pub mod row_actions;
pub mod sort;
pub mod state;
#[cfg(test)]
pub mod testing;

pub use controller::ListController;
pub use entity::{CellKind, Column, ListEndpoint, ListEntity, SearchMode};
pub use fetcher::{FetchOutcome, Fetcher};
pub use filter::{filter_items, FieldAccessor};
pub use row_actions::{MutationEffect, PendingMutation, RowAction, RowActionDispatcher, RowRoute};
pub use sort::{apply_sort, sort_items, SortDirection, SortState, SortValue, Sortable};
pub use state::{ListAction, ListEffect, ListState};
