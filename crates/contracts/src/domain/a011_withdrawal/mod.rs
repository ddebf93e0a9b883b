pub mod aggregate;

pub use aggregate::WithdrawalRequest;
