use mockgen_core::{CustomerRecord, STATUS_ACTIVE, STATUS_CLOSED, SavingBook};

use crate::helpers::{Helper, Key};
use crate::literal::JsValue;
use crate::module::{ModuleSpec, RenderRecord};

impl RenderRecord for CustomerRecord {
    fn fields(&self) -> Vec<(&'static str, JsValue)> {
        vec![
            ("customerid", JsValue::str(&self.customer_id)),
            ("fullname", JsValue::str(&self.full_name)),
            ("citizenid", JsValue::str(&self.citizen_id)),
            ("address", JsValue::str(&self.address)),
            ("phone", JsValue::str(&self.phone)),
            ("email", JsValue::str(&self.email)),
            ("dateofbirth", JsValue::str(&self.date_of_birth)),
        ]
    }
}

impl RenderRecord for SavingBook {
    fn fields(&self) -> Vec<(&'static str, JsValue)> {
        vec![
            ("bookId", JsValue::str(&self.book_id)),
            ("citizenId", JsValue::str(&self.citizen_id)),
            ("customerName", JsValue::str(&self.customer_name)),
            ("typeSavingId", JsValue::str(&self.type_saving_id)),
            ("openDate", JsValue::str(&self.open_date)),
            (
                "maturityDate",
                JsValue::nullable_str(self.maturity_date.as_deref()),
            ),
            ("balance", JsValue::Int(self.balance)),
            ("status", JsValue::str(&self.status)),
        ]
    }
}

/// Layout of the `customers` module.
pub fn customer_module() -> ModuleSpec {
    let key = Key::new("customerid", "customerid");
    ModuleSpec {
        header: vec!["Mock data for Customers (Khách hàng)"],
        collection: "mockCustomers",
        helpers_title: "Helper functions for customer data",
        alias: "c",
        helpers: vec![
            Helper::FindFirst {
                name: "findCustomerById",
                key,
            },
            Helper::FindFirst {
                name: "findCustomerByCitizenId",
                key: Key::new("citizenid", "citizenid"),
            },
            Helper::Add {
                name: "addCustomer",
                param: "customer",
            },
            Helper::Update {
                name: "updateCustomer",
                key,
            },
            Helper::Delete {
                name: "deleteCustomer",
                key,
            },
        ],
    }
}

/// Layout of the reshaped `savingBooks` module.
pub fn saving_book_module() -> ModuleSpec {
    let key = Key::new("bookId", "bookId");
    ModuleSpec {
        header: vec![
            "Mock data for SavingBooks (Sổ tiết kiệm)",
            "New structure with embedded customer data",
        ],
        collection: "mockSavingBooks",
        helpers_title: "Helper functions for savingbook data",
        alias: "sb",
        helpers: vec![
            Helper::FindFirst {
                name: "findSavingBookById",
                key,
            },
            Helper::FindAll {
                name: "findSavingBooksByCitizenId",
                key: Key::new("citizenId", "citizenId"),
            },
            Helper::FindAll {
                name: "findSavingBooksByType",
                key: Key::new("typeSavingId", "typeSavingId"),
            },
            Helper::FindWhere {
                name: "findActiveSavingBooks",
                field: "status",
                value: STATUS_ACTIVE,
            },
            Helper::Add {
                name: "addSavingBook",
                param: "savingBook",
            },
            Helper::Update {
                name: "updateSavingBook",
                key,
            },
            Helper::UpdateBalance {
                name: "updateSavingBookBalance",
                param: "bookId",
                find: "findSavingBookById",
                binding: "savingBook",
                balance: "balance",
            },
            Helper::Close {
                name: "closeSavingBook",
                param: "bookId",
                find: "findSavingBookById",
                binding: "savingBook",
                balance: "balance",
                status: "status",
                closed: STATUS_CLOSED,
            },
            Helper::Delete {
                name: "deleteSavingBook",
                key,
            },
        ],
    }
}
