//! In-memory stores mirroring the helper functions emitted into generated
//! modules. Each store owns its ordered sequence; "not found" is `None`.

use crate::customer::{CustomerPatch, CustomerRecord};
use crate::saving_book::{
    BalanceChange, ClosedSavingBook, STATUS_ACTIVE, STATUS_CLOSED, SavingBook, SavingBookPatch,
};

/// Ordered customer collection with first-match lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerStore {
    records: Vec<CustomerRecord>,
}

impl CustomerStore {
    pub fn new(records: Vec<CustomerRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CustomerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_id(&self, customer_id: &str) -> Option<&CustomerRecord> {
        self.records
            .iter()
            .find(|record| record.customer_id == customer_id)
    }

    pub fn find_by_citizen_id(&self, citizen_id: &str) -> Option<&CustomerRecord> {
        self.records
            .iter()
            .find(|record| record.citizen_id == citizen_id)
    }

    /// Append without a uniqueness check.
    pub fn add(&mut self, record: CustomerRecord) -> &CustomerRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn update(&mut self, customer_id: &str, patch: CustomerPatch) -> Option<&CustomerRecord> {
        let index = self.position(customer_id)?;
        patch.apply_to(&mut self.records[index]);
        Some(&self.records[index])
    }

    pub fn delete(&mut self, customer_id: &str) -> Option<CustomerRecord> {
        let index = self.position(customer_id)?;
        Some(self.records.remove(index))
    }

    fn position(&self, customer_id: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.customer_id == customer_id)
    }
}

/// Ordered saving-book collection.
///
/// Citizen and type lookups return every match in collection order, since one
/// citizen may hold several books.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavingBookStore {
    books: Vec<SavingBook>,
}

impl SavingBookStore {
    pub fn new(books: Vec<SavingBook>) -> Self {
        Self { books }
    }

    pub fn records(&self) -> &[SavingBook] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn find_by_id(&self, book_id: &str) -> Option<&SavingBook> {
        self.books.iter().find(|book| book.book_id == book_id)
    }

    pub fn find_by_citizen_id(&self, citizen_id: &str) -> Vec<&SavingBook> {
        self.books
            .iter()
            .filter(|book| book.citizen_id == citizen_id)
            .collect()
    }

    pub fn find_by_type(&self, type_saving_id: &str) -> Vec<&SavingBook> {
        self.books
            .iter()
            .filter(|book| book.type_saving_id == type_saving_id)
            .collect()
    }

    /// Books whose status is exactly `"active"`.
    pub fn find_active(&self) -> Vec<&SavingBook> {
        self.books
            .iter()
            .filter(|book| book.status == STATUS_ACTIVE)
            .collect()
    }

    /// Append without de-duplication.
    pub fn add(&mut self, book: SavingBook) -> &SavingBook {
        self.books.push(book);
        &self.books[self.books.len() - 1]
    }

    pub fn update(&mut self, book_id: &str, patch: SavingBookPatch) -> Option<&SavingBook> {
        let index = self.position(book_id)?;
        patch.apply_to(&mut self.books[index]);
        Some(&self.books[index])
    }

    /// Add `delta` to the balance. No lower bound is enforced, so the result
    /// may be negative; it saturates at the `i64` limits instead of wrapping.
    pub fn update_balance(&mut self, book_id: &str, delta: i64) -> Option<BalanceChange> {
        let index = self.position(book_id)?;
        let book = &mut self.books[index];
        let balance_before = book.balance;
        book.balance = book.balance.saturating_add(delta);
        Some(BalanceChange {
            saving_book: book.clone(),
            balance_before,
            balance_after: book.balance,
        })
    }

    pub fn close(&mut self, book_id: &str) -> Option<ClosedSavingBook> {
        let index = self.position(book_id)?;
        let book = &mut self.books[index];
        book.status = STATUS_CLOSED.to_string();
        let final_balance = book.balance;
        book.balance = 0;
        Some(ClosedSavingBook {
            book: book.clone(),
            final_balance,
        })
    }

    pub fn delete(&mut self, book_id: &str) -> Option<SavingBook> {
        let index = self.position(book_id)?;
        Some(self.books.remove(index))
    }

    fn position(&self, book_id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.book_id == book_id)
    }
}
