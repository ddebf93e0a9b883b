pub mod aggregate;

pub use aggregate::EnquiryTicket;
