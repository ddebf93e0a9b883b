//! Seller detail tab: a read-only card loaded by id.

mod model;
mod view;

pub use view::SellerDetails;
