pub mod badge;
pub mod date_range_filter;
pub mod entity_list;
pub mod notice;
pub mod page_header;
pub mod pagination_controls;
pub mod sortable_header;

pub use entity_list::EntityList;
