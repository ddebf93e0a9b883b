pub mod aggregate;

pub use aggregate::{Manager, ManagerDto};
