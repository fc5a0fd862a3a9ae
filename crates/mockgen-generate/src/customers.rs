use std::path::PathBuf;
use std::time::Instant;

use mockgen_core::{CustomerRecord, CustomerStore, builtin_customers, validate_customers};
use mockgen_render::{customer_module, render_module};
use tracing::{info, warn};

use crate::errors::GenerationError;
use crate::model::{CustomerOptions, RunIssue, RunReport};
use crate::output::write_module;

/// Result of a customer module run.
#[derive(Debug, Clone)]
pub struct CustomerRun {
    pub output_path: PathBuf,
    pub report: RunReport,
    /// The rendered customers, available for in-process queries.
    pub store: CustomerStore,
}

/// Renders a customer table into the `customers` module.
#[derive(Debug, Clone)]
pub struct CustomerDatasetGenerator {
    options: CustomerOptions,
    customers: Vec<CustomerRecord>,
}

impl CustomerDatasetGenerator {
    /// Generator over the built-in customer table.
    pub fn new(options: CustomerOptions) -> Self {
        Self::with_customers(options, builtin_customers())
    }

    pub fn with_customers(options: CustomerOptions, customers: Vec<CustomerRecord>) -> Self {
        Self { options, customers }
    }

    pub fn run(&self) -> Result<CustomerRun, GenerationError> {
        let start = Instant::now();
        let output_path = self.options.out_path.clone();
        let mut report = RunReport::new("customers", output_path.display().to_string());

        info!(
            run_id = %report.run_id,
            customers = self.customers.len(),
            output = %output_path.display(),
            "customer generation started"
        );

        for issue in validate_customers(&self.customers)? {
            warn!(
                code = issue.code,
                customer_id = %issue.record_id,
                "{}",
                issue.message
            );
            report.record_warning(RunIssue::warning(
                issue.code,
                issue.message,
                Some(issue.record_id),
            ));
        }

        let text = render_module(&customer_module(), &self.customers)?;
        report.bytes_written = write_module(&output_path, &text)?;
        report.records_matched = self.customers.len() as u64;
        report.records_written = self.customers.len() as u64;
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %report.run_id,
            records_written = report.records_written,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "customer generation completed"
        );

        Ok(CustomerRun {
            output_path,
            report,
            store: CustomerStore::new(self.customers.clone()),
        })
    }
}
