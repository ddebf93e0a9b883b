pub mod request_status;
pub mod support_status;

pub use request_status::RequestStatus;
pub use support_status::SupportStatus;
