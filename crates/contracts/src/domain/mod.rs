pub mod a001_manager;
pub mod a002_seller;
pub mod a003_event;
pub mod a004_venue;
pub mod a005_banner;
pub mod a006_ticket;
pub mod a007_ticket_request;
pub mod a008_support_ticket;
pub mod a009_enquiry;
pub mod a010_deposit;
pub mod a011_withdrawal;
