use mockgen_core::{CustomerRecord, SavingBook};
use schemars::schema_for;

fn main() {
    let customer = schema_for!(CustomerRecord);
    let saving_book = schema_for!(SavingBook);
    let json = serde_json::json!({
        "customer": customer,
        "saving_book": saving_book,
    });
    let json = serde_json::to_string_pretty(&json).expect("serialize json schema");
    println!("{json}");
}
