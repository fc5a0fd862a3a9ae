use mockgen_core::{ClosedSavingBook, CustomerRecord, SavingBook};
use schemars::schema_for;

fn saving_book() -> SavingBook {
    SavingBook {
        book_id: "SB00125".to_string(),
        citizen_id: "079011111111".to_string(),
        customer_name: "Lê Văn C".to_string(),
        type_saving_id: "TS001".to_string(),
        open_date: "2025-03-10".to_string(),
        maturity_date: None,
        balance: 8_000_000,
        status: "active".to_string(),
    }
}

#[test]
fn customer_serializes_with_frontend_keys() {
    let customer = CustomerRecord::new(
        "CUST001",
        "Nguyễn Văn A",
        "079012345678",
        "123 Nguyễn Huệ, Q1, TP.HCM",
        "0901234567",
        "nguyenvana@email.com",
        "1990-01-15",
    );

    let json = serde_json::to_string(&customer).expect("serialize customer");
    let expected = concat!(
        r#"{"customerid":"CUST001","fullname":"Nguyễn Văn A","citizenid":"079012345678","#,
        r#""address":"123 Nguyễn Huệ, Q1, TP.HCM","phone":"0901234567","#,
        r#""email":"nguyenvana@email.com","dateofbirth":"1990-01-15"}"#
    );
    assert_eq!(json, expected);
}

#[test]
fn saving_book_keeps_null_maturity_date() {
    let json = serde_json::to_value(saving_book()).expect("serialize saving book");
    assert_eq!(json["bookId"], "SB00125");
    assert_eq!(json["maturityDate"], serde_json::Value::Null);
    assert_eq!(json["balance"], 8_000_000);
}

#[test]
fn closed_snapshot_flattens_book_fields() {
    let closed = ClosedSavingBook {
        book: SavingBook {
            balance: 0,
            status: "closed".to_string(),
            ..saving_book()
        },
        final_balance: 8_000_000,
    };
    let json = serde_json::to_value(&closed).expect("serialize snapshot");
    assert_eq!(json["bookId"], "SB00125");
    assert_eq!(json["balance"], 0);
    assert_eq!(json["finalBalance"], 8_000_000);
}

#[test]
fn json_schema_lists_required_fields() {
    let schema = serde_json::to_value(schema_for!(SavingBook)).expect("serialize schema");
    let required: Vec<&str> = schema["required"]
        .as_array()
        .expect("required array")
        .iter()
        .filter_map(|value| value.as_str())
        .collect();
    assert!(required.contains(&"bookId"));
    assert!(required.contains(&"citizenId"));
    assert!(!required.contains(&"maturityDate"));
}
