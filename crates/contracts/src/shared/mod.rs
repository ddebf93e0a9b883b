pub mod envelope;
pub mod list_query;
pub mod validation;

pub use envelope::{decode_list, decode_mutation, ApiResponse, Envelope, ListPayload, Pagination};
pub use list_query::{DateRange, ListFilters, ListQuery, Paging};
