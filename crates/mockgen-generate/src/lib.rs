//! Mock module pipelines for mockgen.
//!
//! [`CustomerDatasetGenerator`] renders the customer table into a module;
//! [`SavingBookTransformer`] extracts legacy saving books from an existing
//! module, joins them against the customer table, and renders the reshaped
//! records. Both write their output atomically and return a [`RunReport`].

pub mod customers;
pub mod errors;
pub mod model;
pub mod output;
pub mod saving_books;

pub use customers::{CustomerDatasetGenerator, CustomerRun};
pub use errors::GenerationError;
pub use model::{CustomerOptions, CustomerSource, RunIssue, RunReport, SavingBookOptions};
pub use output::{write_module, write_report};
pub use saving_books::{SavingBookRun, SavingBookTransformer, reshape_books};
