use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::customer::CustomerRecord;
use crate::error::{Error, Result};

/// Non-fatal finding about a source dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetIssue {
    pub code: &'static str,
    pub record_id: String,
    pub message: String,
}

/// Validate a customer table before rendering.
///
/// Duplicate `customerid` values are an error. Birth dates that are not
/// `YYYY-MM-DD` are returned as issues. Citizen ids are not checked.
pub fn validate_customers(records: &[CustomerRecord]) -> Result<Vec<DatasetIssue>> {
    let mut seen = BTreeSet::new();
    let mut issues = Vec::new();

    for record in records {
        if !seen.insert(record.customer_id.as_str()) {
            return Err(Error::InvalidDataset(format!(
                "duplicate customer id: {}",
                record.customer_id
            )));
        }

        if NaiveDate::parse_from_str(&record.date_of_birth, "%Y-%m-%d").is_err() {
            issues.push(DatasetIssue {
                code: "invalid_date_of_birth",
                record_id: record.customer_id.clone(),
                message: format!("date of birth is not YYYY-MM-DD: {}", record.date_of_birth),
            });
        }
    }

    Ok(issues)
}
