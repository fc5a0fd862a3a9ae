use std::path::{Path, PathBuf};
use std::time::Instant;

use mockgen_core::{
    CustomerDirectory, LegacySavingBook, SavingBook, SavingBookStore, builtin_customers,
};
use mockgen_extract::{extract_customers, extract_legacy_saving_books};
use mockgen_render::{render_module, saving_book_module};
use tracing::{debug, info, warn};

use crate::errors::GenerationError;
use crate::model::{CustomerSource, RunIssue, RunReport, SavingBookOptions};
use crate::output::{same_file, write_module};

/// Result of a saving-book transform.
#[derive(Debug, Clone)]
pub struct SavingBookRun {
    pub output_path: PathBuf,
    pub report: RunReport,
    /// The reshaped books, available for in-process queries.
    pub store: SavingBookStore,
}

/// Rewrites a legacy saving-book module into the new layout.
#[derive(Debug, Clone)]
pub struct SavingBookTransformer {
    options: SavingBookOptions,
}

impl SavingBookTransformer {
    pub fn new(options: SavingBookOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<SavingBookRun, GenerationError> {
        let start = Instant::now();
        let input_path = &self.options.input_path;
        let output_path = self.options.out_path.clone();

        let text = read_input(input_path)?;
        if same_file(input_path, &output_path)? {
            return Err(GenerationError::SameInputOutput(output_path));
        }
        let directory = self.load_directory()?;

        let mut report = RunReport::new("saving_books", output_path.display().to_string());
        report.input = Some(input_path.display().to_string());

        info!(
            run_id = %report.run_id,
            input = %input_path.display(),
            output = %output_path.display(),
            customers = directory.len(),
            "saving book transform started"
        );

        let extraction = extract_legacy_saving_books(&text)?;
        report.records_matched = extraction.books.len() as u64;
        report.blocks_skipped = extraction.skipped as u64;
        info!(
            found = extraction.books.len(),
            skipped = extraction.skipped,
            "legacy saving books extracted"
        );

        let books = reshape_books(extraction.books, &directory, &mut report);
        let text = render_module(&saving_book_module(), &books)?;
        report.bytes_written = write_module(&output_path, &text)?;
        report.records_written = books.len() as u64;
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %report.run_id,
            records_written = report.records_written,
            unknown_customers = report.warning_count(UNKNOWN_CUSTOMER_CODE),
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "saving book transform completed"
        );

        Ok(SavingBookRun {
            output_path,
            report,
            store: SavingBookStore::new(books),
        })
    }

    fn load_directory(&self) -> Result<CustomerDirectory, GenerationError> {
        match &self.options.customers {
            CustomerSource::Builtin => Ok(CustomerDirectory::from_records(&builtin_customers())),
            CustomerSource::Module(path) => {
                let text = read_input(path)?;
                let extraction = extract_customers(&text)?;
                debug!(
                    path = %path.display(),
                    customers = extraction.customers.len(),
                    skipped = extraction.skipped,
                    "customer module loaded"
                );
                Ok(CustomerDirectory::from_records(&extraction.customers))
            }
        }
    }
}

const UNKNOWN_CUSTOMER_CODE: &str = "unknown_customer_reference";
const BALANCE_RANGE_CODE: &str = "balance_out_of_range";

/// Join legacy books against `directory` and reshape them, preserving order.
///
/// A book whose customer is not in the directory gets the sentinel customer
/// and an `unknown_customer_reference` warning. A balance too large for the
/// signed layout is clamped to `i64::MAX` with a `balance_out_of_range`
/// warning.
pub fn reshape_books(
    legacy: Vec<LegacySavingBook>,
    directory: &CustomerDirectory,
    report: &mut RunReport,
) -> Vec<SavingBook> {
    legacy
        .into_iter()
        .map(|book| {
            let (customer, found) = directory.resolve(&book.customer_id);
            if !found {
                warn!(
                    book_id = %book.book_id,
                    customer_id = %book.customer_id,
                    "saving book references an unknown customer"
                );
                report.record_warning(RunIssue::warning(
                    UNKNOWN_CUSTOMER_CODE,
                    format!("customer {} not found", book.customer_id),
                    Some(book.book_id.clone()),
                ));
            }
            if book.balance_out_of_range() {
                warn!(
                    book_id = %book.book_id,
                    current_balance = book.current_balance,
                    "saving book balance clamped to i64::MAX"
                );
                report.record_warning(RunIssue::warning(
                    BALANCE_RANGE_CODE,
                    format!("currentbalance {} exceeds {}", book.current_balance, i64::MAX),
                    Some(book.book_id.clone()),
                ));
            }
            book.reshape(&customer)
        })
        .collect()
}

fn read_input(path: &Path) -> Result<String, GenerationError> {
    std::fs::read_to_string(path).map_err(|source| GenerationError::MissingInput {
        path: path.to_path_buf(),
        source,
    })
}
