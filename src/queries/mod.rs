//! Query modules for the contract engine.
//!
//! Each module provides free functions over a contract slice plus a query
//! struct that borrows a loaded snapshot from the
//! [`ContractEngine`](crate::ContractEngine).

pub mod contracts;
pub mod dashboard;

pub use contracts::ContractQuery;
pub use dashboard::DashboardQuery;
