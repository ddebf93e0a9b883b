pub mod aggregate;

pub use aggregate::SupportTicket;
