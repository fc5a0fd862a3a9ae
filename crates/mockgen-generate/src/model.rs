use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for the customer module pipeline.
#[derive(Debug, Clone)]
pub struct CustomerOptions {
    /// Where the rendered module is written. Overwritten if present.
    pub out_path: PathBuf,
}

impl Default for CustomerOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from("customers.js"),
        }
    }
}

/// Where the transformer takes its customer join table from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CustomerSource {
    /// The built-in customer table.
    #[default]
    Builtin,
    /// Customers parsed from a previously rendered customer module.
    Module(PathBuf),
}

/// Options for the saving-book pipeline.
#[derive(Debug, Clone)]
pub struct SavingBookOptions {
    /// Legacy module to read.
    pub input_path: PathBuf,
    /// Where the reshaped module is written. Must differ from the input.
    pub out_path: PathBuf,
    pub customers: CustomerSource,
}

impl Default for SavingBookOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("savingBooks.js"),
            out_path: PathBuf::from("savingBooks_new.js"),
            customers: CustomerSource::Builtin,
        }
    }
}

/// Structured, non-fatal finding recorded during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunIssue {
    pub level: String,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}

impl RunIssue {
    pub fn warning(
        code: impl Into<String>,
        message: impl Into<String>,
        record_id: Option<String>,
    ) -> Self {
        Self {
            level: "warning".to_string(),
            code: code.into(),
            message: message.into(),
            record_id,
        }
    }
}

/// Report for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    pub pipeline: String,
    pub started_at: String,
    pub duration_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    pub output: String,
    pub records_matched: u64,
    pub records_written: u64,
    pub blocks_skipped: u64,
    pub bytes_written: u64,
    pub warnings_by_code: BTreeMap<String, u64>,
    pub warnings: Vec<RunIssue>,
}

impl RunReport {
    pub fn new(pipeline: &str, output: String) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            pipeline: pipeline.to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            duration_ms: 0,
            input: None,
            output,
            records_matched: 0,
            records_written: 0,
            blocks_skipped: 0,
            bytes_written: 0,
            warnings_by_code: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    pub fn record_warning(&mut self, issue: RunIssue) {
        *self.warnings_by_code.entry(issue.code.clone()).or_insert(0) += 1;
        self.warnings.push(issue);
    }

    pub fn warning_count(&self, code: &str) -> u64 {
        self.warnings_by_code.get(code).copied().unwrap_or(0)
    }
}
