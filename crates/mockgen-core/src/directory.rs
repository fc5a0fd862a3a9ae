use std::collections::HashMap;

use crate::customer::CustomerRecord;

/// Citizen id substituted when a saving book references an unknown customer.
pub const UNKNOWN_CITIZEN_ID: &str = "000000000000";
/// Name substituted when a saving book references an unknown customer.
pub const UNKNOWN_CUSTOMER_NAME: &str = "Unknown Customer";

/// The customer fields denormalized into a saving book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRef {
    pub citizen_id: String,
    pub full_name: String,
}

impl CustomerRef {
    pub fn unknown() -> Self {
        Self {
            citizen_id: UNKNOWN_CITIZEN_ID.to_string(),
            full_name: UNKNOWN_CUSTOMER_NAME.to_string(),
        }
    }
}

/// Customer lookup table keyed by `customerid`, used for the left-outer join.
#[derive(Debug, Clone, Default)]
pub struct CustomerDirectory {
    by_id: HashMap<String, CustomerRef>,
}

impl CustomerDirectory {
    /// Build the directory; on duplicate ids the first record wins.
    pub fn from_records(records: &[CustomerRecord]) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for record in records {
            by_id
                .entry(record.customer_id.clone())
                .or_insert_with(|| CustomerRef {
                    citizen_id: record.citizen_id.clone(),
                    full_name: record.full_name.clone(),
                });
        }
        Self { by_id }
    }

    pub fn get(&self, customer_id: &str) -> Option<&CustomerRef> {
        self.by_id.get(customer_id)
    }

    /// Resolve a reference, falling back to the sentinel customer.
    ///
    /// The flag is `false` when the sentinel was substituted.
    pub fn resolve(&self, customer_id: &str) -> (CustomerRef, bool) {
        match self.get(customer_id) {
            Some(found) => (found.clone(), true),
            None => (CustomerRef::unknown(), false),
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
