pub mod aggregate;

pub use aggregate::DepositRecord;
