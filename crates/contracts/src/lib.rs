//! Wire types shared by every admin screen: domain records, create/update
//! DTOs, the response envelope, list queries and form validation rules.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
