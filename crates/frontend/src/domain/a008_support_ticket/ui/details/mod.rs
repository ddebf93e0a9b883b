//! Support ticket detail tab: the full message and a close / reopen button.

mod model;
mod view;

pub use view::SupportTicketDetails;
