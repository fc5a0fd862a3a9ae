use mockgen_core::{CustomerRecord, LegacySavingBook};

use crate::errors::ExtractError;
use crate::pattern::{BlockPattern, ExtractedBlock, FieldKind, extract_blocks};

/// Legacy saving-book fields, in the order they must appear in a block.
pub const LEGACY_SAVING_BOOK_FIELDS: &[(&str, FieldKind)] = &[
    ("bookid", FieldKind::Text),
    ("customerid", FieldKind::Text),
    ("typeid", FieldKind::Text),
    ("registertime", FieldKind::Text),
    ("maturitydate", FieldKind::NullableText),
    ("initialdeposit", FieldKind::Unsigned),
    ("currentbalance", FieldKind::Unsigned),
    ("interestrate", FieldKind::Decimal),
    ("status", FieldKind::Text),
];

/// Customer fields, in the order the customer module renders them.
pub const CUSTOMER_FIELDS: &[(&str, FieldKind)] = &[
    ("customerid", FieldKind::Text),
    ("fullname", FieldKind::Text),
    ("citizenid", FieldKind::Text),
    ("address", FieldKind::Text),
    ("phone", FieldKind::Text),
    ("email", FieldKind::Text),
    ("dateofbirth", FieldKind::Text),
];

/// Legacy saving books found in a text, plus the count of unmatched blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyExtraction {
    pub books: Vec<LegacySavingBook>,
    pub skipped: usize,
}

/// Customers found in a text, plus the count of unmatched blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerExtraction {
    pub customers: Vec<CustomerRecord>,
    pub skipped: usize,
}

pub fn extract_legacy_saving_books(text: &str) -> Result<LegacyExtraction, ExtractError> {
    let pattern = BlockPattern::new(LEGACY_SAVING_BOOK_FIELDS)?;
    let extraction = extract_blocks(text, &pattern);
    let books = extraction
        .blocks
        .iter()
        .filter_map(legacy_from_block)
        .collect();

    Ok(LegacyExtraction {
        books,
        skipped: extraction.skipped,
    })
}

pub fn extract_customers(text: &str) -> Result<CustomerExtraction, ExtractError> {
    let pattern = BlockPattern::new(CUSTOMER_FIELDS)?;
    let extraction = extract_blocks(text, &pattern);
    let customers = extraction
        .blocks
        .iter()
        .filter_map(customer_from_block)
        .collect();

    Ok(CustomerExtraction {
        customers,
        skipped: extraction.skipped,
    })
}

fn legacy_from_block(block: &ExtractedBlock) -> Option<LegacySavingBook> {
    Some(LegacySavingBook {
        book_id: block.text("bookid")?.to_string(),
        customer_id: block.text("customerid")?.to_string(),
        type_id: block.text("typeid")?.to_string(),
        register_time: block.text("registertime")?.to_string(),
        maturity_date: block
            .get("maturitydate")?
            .as_nullable_str()?
            .map(str::to_string),
        initial_deposit: block.get("initialdeposit")?.as_u64()?,
        current_balance: block.get("currentbalance")?.as_u64()?,
        interest_rate: block.get("interestrate")?.as_f64()?,
        status: block.text("status")?.to_string(),
    })
}

fn customer_from_block(block: &ExtractedBlock) -> Option<CustomerRecord> {
    Some(CustomerRecord::new(
        block.text("customerid")?,
        block.text("fullname")?,
        block.text("citizenid")?,
        block.text("address")?,
        block.text("phone")?,
        block.text("email")?,
        block.text("dateofbirth")?,
    ))
}
