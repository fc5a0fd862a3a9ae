use mockgen_core::{CustomerRecord, SavingBook, builtin_customers};
use mockgen_extract::extract_customers;
use mockgen_render::{customer_module, render_module, saving_book_module};

fn saving_book(book_id: &str, maturity_date: Option<&str>) -> SavingBook {
    SavingBook {
        book_id: book_id.to_string(),
        citizen_id: "079011111111".to_string(),
        customer_name: "Lê Văn C".to_string(),
        type_saving_id: "TS001".to_string(),
        open_date: "2025-03-10".to_string(),
        maturity_date: maturity_date.map(str::to_string),
        balance: 8_000_000,
        status: "active".to_string(),
    }
}

#[test]
fn rendered_customers_parse_back_exactly() {
    let customers = builtin_customers();
    let text = render_module(&customer_module(), &customers).expect("render customers");

    let parsed = extract_customers(&text).expect("extract customers");
    assert_eq!(parsed.customers, customers);
}

#[test]
fn awkward_strings_survive_round_trip() {
    let customers = vec![CustomerRecord::new(
        "CUST\"X\"",
        "Back\\slash {braces}",
        "079000000000",
        "Line one\nLine two\tTabbed",
        "090'000",
        "odd@email.com",
        "1990-01-15",
    )];
    let text = render_module(&customer_module(), &customers).expect("render customers");

    let parsed = extract_customers(&text).expect("extract customers");
    assert_eq!(parsed.customers, customers);
}

#[test]
fn customer_module_shape() {
    let customers = builtin_customers();
    let text = render_module(&customer_module(), &customers).expect("render customers");

    assert!(text.starts_with("/**\n * Mock data for Customers (Khách hàng)\n */\n\nexport const mockCustomers = [\n  {\n    customerid: \"CUST001\",\n    fullname: \"Nguyễn Văn A\",\n"));
    assert!(text.contains("    dateofbirth: \"1990-01-15\"\n  },\n  {\n"));
    assert!(text.contains("    dateofbirth: \"1994-03-16\"\n  }\n];\n"));
    assert!(text.contains(
        "export const findCustomerByCitizenId = (citizenid) => {\n  return mockCustomers.find(c => c.citizenid === citizenid);\n};\n"
    ));
    assert!(text.contains(
        "export const updateCustomer = (customerid, updates) => {\n  const index = mockCustomers.findIndex(c => c.customerid === customerid);\n  if (index !== -1) {\n    mockCustomers[index] = { ...mockCustomers[index], ...updates };\n    return mockCustomers[index];\n  }\n  return null;\n};\n"
    ));
    assert!(text.ends_with("};\n\nexport default mockCustomers;\n"));
}

#[test]
fn null_maturity_renders_unquoted() {
    let books = vec![
        saving_book("SB00125", None),
        saving_book("SB00126", Some("2025-09-20")),
    ];
    let text = render_module(&saving_book_module(), &books).expect("render books");

    assert!(text.contains("    maturityDate: null,\n"));
    assert!(!text.contains("maturityDate: \"null\""));
    assert!(text.contains("    maturityDate: \"2025-09-20\",\n"));
    assert!(text.contains("    balance: 8000000,\n"));
}

#[test]
fn saving_book_helpers_are_emitted_in_order() {
    let text = render_module::<SavingBook>(&saving_book_module(), &[]).expect("render books");

    let names = [
        "findSavingBookById",
        "findSavingBooksByCitizenId",
        "findSavingBooksByType",
        "findActiveSavingBooks",
        "addSavingBook",
        "updateSavingBook",
        "updateSavingBookBalance",
        "closeSavingBook",
        "deleteSavingBook",
    ];
    let mut cursor = 0;
    for name in names {
        let needle = format!("export const {name} = ");
        let found = text[cursor..]
            .find(&needle)
            .unwrap_or_else(|| panic!("missing helper {name}"));
        cursor += found + needle.len();
    }

    assert!(text.contains("  return mockSavingBooks.filter(sb => sb.citizenId === citizenId);\n"));
    assert!(text.contains("  return mockSavingBooks.filter(sb => sb.status === \"active\");\n"));
    assert!(text.contains("    savingBook.status = \"closed\";\n    const finalBalance = savingBook.balance;\n    savingBook.balance = 0;\n"));
    assert!(text.contains("      balanceBefore: oldBalance,\n      balanceAfter: savingBook.balance\n"));
}

#[test]
fn empty_saving_books_render_a_valid_array() {
    let text = render_module::<SavingBook>(&saving_book_module(), &[]).expect("render books");
    assert!(text.contains("export const mockSavingBooks = [\n];\n"));
}
