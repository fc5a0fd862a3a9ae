use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::directory::CustomerRef;

/// Status value matched by the active-books lookup.
pub const STATUS_ACTIVE: &str = "active";
/// Status value assigned when a book is closed.
pub const STATUS_CLOSED: &str = "closed";

/// Saving book in the legacy layout, keyed to customers by `customerid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LegacySavingBook {
    #[serde(rename = "bookid")]
    pub book_id: String,
    #[serde(rename = "customerid")]
    pub customer_id: String,
    #[serde(rename = "typeid")]
    pub type_id: String,
    #[serde(rename = "registertime")]
    pub register_time: String,
    #[serde(rename = "maturitydate")]
    pub maturity_date: Option<String>,
    #[serde(rename = "initialdeposit")]
    pub initial_deposit: u64,
    #[serde(rename = "currentbalance")]
    pub current_balance: u64,
    #[serde(rename = "interestrate")]
    pub interest_rate: f64,
    pub status: String,
}

impl LegacySavingBook {
    /// Reshape into the new layout using the joined customer fields.
    ///
    /// `initialdeposit` and `interestrate` are dropped; the maturity date keeps
    /// its null-vs-string distinction. A balance above `i64::MAX` saturates;
    /// check [`Self::balance_out_of_range`] first to report it.
    pub fn reshape(self, customer: &CustomerRef) -> SavingBook {
        SavingBook {
            book_id: self.book_id,
            citizen_id: customer.citizen_id.clone(),
            customer_name: customer.full_name.clone(),
            type_saving_id: self.type_id,
            open_date: self.register_time,
            maturity_date: self.maturity_date,
            balance: i64::try_from(self.current_balance).unwrap_or(i64::MAX),
            status: self.status,
        }
    }

    /// Whether `currentbalance` cannot be carried as a signed balance.
    pub fn balance_out_of_range(&self) -> bool {
        i64::try_from(self.current_balance).is_err()
    }
}

/// Saving book in the new layout with denormalized customer fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavingBook {
    pub book_id: String,
    pub citizen_id: String,
    pub customer_name: String,
    pub type_saving_id: String,
    pub open_date: String,
    pub maturity_date: Option<String>,
    /// Signed so runtime balance updates may go below zero.
    pub balance: i64,
    pub status: String,
}

/// Partial update for a [`SavingBook`]; `None` keeps the current value.
///
/// `maturity_date: Some(None)` clears the date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavingBookPatch {
    pub book_id: Option<String>,
    pub citizen_id: Option<String>,
    pub customer_name: Option<String>,
    pub type_saving_id: Option<String>,
    pub open_date: Option<String>,
    pub maturity_date: Option<Option<String>>,
    pub balance: Option<i64>,
    pub status: Option<String>,
}

impl SavingBookPatch {
    /// Merge the patch over `book`; patched fields take precedence.
    pub fn apply_to(self, book: &mut SavingBook) {
        if let Some(value) = self.book_id {
            book.book_id = value;
        }
        if let Some(value) = self.citizen_id {
            book.citizen_id = value;
        }
        if let Some(value) = self.customer_name {
            book.customer_name = value;
        }
        if let Some(value) = self.type_saving_id {
            book.type_saving_id = value;
        }
        if let Some(value) = self.open_date {
            book.open_date = value;
        }
        if let Some(value) = self.maturity_date {
            book.maturity_date = value;
        }
        if let Some(value) = self.balance {
            book.balance = value;
        }
        if let Some(value) = self.status {
            book.status = value;
        }
    }
}

/// Result of a balance adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChange {
    pub saving_book: SavingBook,
    pub balance_before: i64,
    pub balance_after: i64,
}

/// Snapshot returned when a book is closed.
///
/// `book` reflects the closed state (zero balance); `final_balance` is the
/// balance held immediately before closing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosedSavingBook {
    #[serde(flatten)]
    pub book: SavingBook,
    pub final_balance: i64,
}
