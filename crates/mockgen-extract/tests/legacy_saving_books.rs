use std::fs;
use std::path::PathBuf;

use mockgen_extract::extract_legacy_saving_books;

fn fixture() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/savingBooks.js");
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("missing fixture at {}", path.display()))
}

#[test]
fn extracts_every_book_from_fixture() {
    let extraction = extract_legacy_saving_books(&fixture()).expect("extract");
    assert_eq!(extraction.books.len(), 8);

    let ids: Vec<&str> = extraction
        .books
        .iter()
        .map(|book| book.book_id.as_str())
        .collect();
    assert_eq!(
        ids,
        ["SB00123", "SB00124", "SB00125", "SB00126", "SB00127", "SB00128", "SB00129", "SB00130"]
    );
}

#[test]
fn carries_fields_and_null_maturity() {
    let extraction = extract_legacy_saving_books(&fixture()).expect("extract");

    let first = &extraction.books[0];
    assert_eq!(first.customer_id, "CUST001");
    assert_eq!(first.type_id, "TS002");
    assert_eq!(first.register_time, "2025-08-20");
    assert_eq!(first.maturity_date.as_deref(), Some("2025-11-20"));
    assert_eq!(first.initial_deposit, 5_000_000);
    assert_eq!(first.current_balance, 6_000_000);
    assert_eq!(first.interest_rate, 0.045);
    assert_eq!(first.status, "active");

    let third = &extraction.books[2];
    assert_eq!(third.book_id, "SB00125");
    assert_eq!(third.maturity_date, None);
}

#[test]
fn helper_bodies_are_skipped_not_matched() {
    let extraction = extract_legacy_saving_books(&fixture()).expect("extract");
    assert!(extraction.skipped > 0);
}

#[test]
fn incomplete_block_is_skipped_without_affecting_neighbours() {
    let text = r#"
export const mockSavingBooks = [
  { bookid: "SB1", customerid: "CUST001", typeid: "TS001", registertime: "2025-01-01",
    maturitydate: null, initialdeposit: 1, currentbalance: 2, interestrate: 0.02, status: "active" },
  { bookid: "SB2", customerid: "CUST002", typeid: "TS001", registertime: "2025-01-01",
    maturitydate: null, currentbalance: 2, interestrate: 0.02, status: "active" },
  { bookid: "SB3", customerid: "CUST003", typeid: "TS001", registertime: "2025-01-01",
    maturitydate: "2025-06-01", initialdeposit: 1, currentbalance: 2, interestrate: 0.02, status: "closed" }
];
"#;
    let extraction = extract_legacy_saving_books(text).expect("extract");
    let ids: Vec<&str> = extraction
        .books
        .iter()
        .map(|book| book.book_id.as_str())
        .collect();
    assert_eq!(ids, ["SB1", "SB3"]);
    assert_eq!(extraction.skipped, 1);
}

#[test]
fn empty_text_yields_nothing() {
    let extraction = extract_legacy_saving_books("").expect("extract");
    assert!(extraction.books.is_empty());
    assert_eq!(extraction.skipped, 0);
}

#[test]
fn oversized_balance_keeps_the_block() {
    let text = r#"[
  { bookid: "SB9", customerid: "CUST001", typeid: "TS001", registertime: "2025-01-01",
    maturitydate: null, initialdeposit: 1, currentbalance: 123456789012345678901234567890,
    interestrate: 0.02, status: "active" }
]"#;
    let extraction = extract_legacy_saving_books(text).expect("extract");
    assert_eq!(extraction.skipped, 0);
    assert_eq!(extraction.books.len(), 1);
    assert_eq!(extraction.books[0].book_id, "SB9");
    assert_eq!(extraction.books[0].current_balance, u64::MAX);
}
