use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A customer as exposed by the generated `customers` module.
///
/// Field names serialize to the lowercase keys used by the frontend mock
/// layer (`customerid`, `fullname`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CustomerRecord {
    #[serde(rename = "customerid")]
    pub customer_id: String,
    #[serde(rename = "fullname")]
    pub full_name: String,
    /// National identity number. Passed through verbatim.
    #[serde(rename = "citizenid")]
    pub citizen_id: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// ISO date (`YYYY-MM-DD`).
    #[serde(rename = "dateofbirth")]
    pub date_of_birth: String,
}

impl CustomerRecord {
    pub fn new(
        customer_id: impl Into<String>,
        full_name: impl Into<String>,
        citizen_id: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            full_name: full_name.into(),
            citizen_id: citizen_id.into(),
            address: address.into(),
            phone: phone.into(),
            email: email.into(),
            date_of_birth: date_of_birth.into(),
        }
    }
}

/// Partial update for a [`CustomerRecord`]; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPatch {
    #[serde(default, rename = "customerid", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, rename = "fullname", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, rename = "citizenid", skip_serializing_if = "Option::is_none")]
    pub citizen_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, rename = "dateofbirth", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

impl CustomerPatch {
    /// Merge the patch over `record`; patched fields take precedence.
    pub fn apply_to(self, record: &mut CustomerRecord) {
        if let Some(value) = self.customer_id {
            record.customer_id = value;
        }
        if let Some(value) = self.full_name {
            record.full_name = value;
        }
        if let Some(value) = self.citizen_id {
            record.citizen_id = value;
        }
        if let Some(value) = self.address {
            record.address = value;
        }
        if let Some(value) = self.phone {
            record.phone = value;
        }
        if let Some(value) = self.email {
            record.email = value;
        }
        if let Some(value) = self.date_of_birth {
            record.date_of_birth = value;
        }
    }
}
