//! Core contracts for mockgen.
//!
//! This crate defines the customer and saving-book record shapes, the
//! built-in customer table, the customer join directory, and the in-memory
//! stores that mirror the helper functions emitted into generated modules.

pub mod customer;
pub mod dataset;
pub mod directory;
pub mod error;
pub mod saving_book;
pub mod store;
pub mod validation;

pub use customer::{CustomerPatch, CustomerRecord};
pub use dataset::builtin_customers;
pub use directory::{CustomerDirectory, CustomerRef, UNKNOWN_CITIZEN_ID, UNKNOWN_CUSTOMER_NAME};
pub use error::{Error, Result};
pub use saving_book::{
    BalanceChange, ClosedSavingBook, LegacySavingBook, STATUS_ACTIVE, STATUS_CLOSED, SavingBook,
    SavingBookPatch,
};
pub use store::{CustomerStore, SavingBookStore};
pub use validation::{DatasetIssue, validate_customers};
