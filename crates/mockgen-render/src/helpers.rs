use std::fmt::Write as _;

/// A lookup key: the function parameter and the record field it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub param: &'static str,
    pub field: &'static str,
}

impl Key {
    pub const fn new(param: &'static str, field: &'static str) -> Self {
        Self { param, field }
    }
}

/// An exported helper function emitted after the record array.
///
/// Helpers that return "not found" emit `null`; first-match lookups return
/// whatever `Array.prototype.find` yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Helper {
    /// First record whose `key.field` equals the argument.
    FindFirst { name: &'static str, key: Key },
    /// Every record whose `key.field` equals the argument, in order.
    FindAll { name: &'static str, key: Key },
    /// Every record whose `field` equals a fixed string, in order.
    FindWhere {
        name: &'static str,
        field: &'static str,
        value: &'static str,
    },
    /// Append and return the record; no uniqueness check.
    Add { name: &'static str, param: &'static str },
    /// Spread-merge updates over the matching record.
    Update { name: &'static str, key: Key },
    /// Add an amount to a numeric field, returning before/after values.
    UpdateBalance {
        name: &'static str,
        param: &'static str,
        find: &'static str,
        binding: &'static str,
        balance: &'static str,
    },
    /// Mark closed, zero the balance, return a snapshot with the final balance.
    Close {
        name: &'static str,
        param: &'static str,
        find: &'static str,
        binding: &'static str,
        balance: &'static str,
        status: &'static str,
        closed: &'static str,
    },
    /// Splice out the matching record and return it.
    Delete { name: &'static str, key: Key },
}

impl Helper {
    pub fn name(&self) -> &'static str {
        match self {
            Helper::FindFirst { name, .. }
            | Helper::FindAll { name, .. }
            | Helper::FindWhere { name, .. }
            | Helper::Add { name, .. }
            | Helper::Update { name, .. }
            | Helper::UpdateBalance { name, .. }
            | Helper::Close { name, .. }
            | Helper::Delete { name, .. } => name,
        }
    }

    /// Write the helper to `out`. `collection` is the exported array and
    /// `alias` the element name used in callbacks.
    pub fn write_to(
        &self,
        out: &mut String,
        collection: &str,
        alias: &str,
    ) -> Result<(), std::fmt::Error> {
        match *self {
            Helper::FindFirst { name, key } => {
                writeln!(out, "export const {name} = ({}) => {{", key.param)?;
                writeln!(
                    out,
                    "  return {collection}.find({alias} => {alias}.{} === {});",
                    key.field, key.param
                )?;
                writeln!(out, "}};")?;
            }
            Helper::FindAll { name, key } => {
                writeln!(out, "export const {name} = ({}) => {{", key.param)?;
                writeln!(
                    out,
                    "  return {collection}.filter({alias} => {alias}.{} === {});",
                    key.field, key.param
                )?;
                writeln!(out, "}};")?;
            }
            Helper::FindWhere { name, field, value } => {
                writeln!(out, "export const {name} = () => {{")?;
                writeln!(
                    out,
                    "  return {collection}.filter({alias} => {alias}.{field} === {});",
                    crate::literal::quote_str(value)
                )?;
                writeln!(out, "}};")?;
            }
            Helper::Add { name, param } => {
                writeln!(out, "export const {name} = ({param}) => {{")?;
                writeln!(out, "  {collection}.push({param});")?;
                writeln!(out, "  return {param};")?;
                writeln!(out, "}};")?;
            }
            Helper::Update { name, key } => {
                writeln!(out, "export const {name} = ({}, updates) => {{", key.param)?;
                write_find_index(out, collection, alias, key)?;
                writeln!(out, "  if (index !== -1) {{")?;
                writeln!(
                    out,
                    "    {collection}[index] = {{ ...{collection}[index], ...updates }};"
                )?;
                writeln!(out, "    return {collection}[index];")?;
                writeln!(out, "  }}")?;
                writeln!(out, "  return null;")?;
                writeln!(out, "}};")?;
            }
            Helper::UpdateBalance {
                name,
                param,
                find,
                binding,
                balance,
            } => {
                writeln!(out, "export const {name} = ({param}, amount) => {{")?;
                writeln!(out, "  const {binding} = {find}({param});")?;
                writeln!(out, "  if ({binding}) {{")?;
                writeln!(out, "    const oldBalance = {binding}.{balance};")?;
                writeln!(out, "    {binding}.{balance} += amount;")?;
                writeln!(out, "    return {{")?;
                writeln!(out, "      {binding},")?;
                writeln!(out, "      balanceBefore: oldBalance,")?;
                writeln!(out, "      balanceAfter: {binding}.{balance}")?;
                writeln!(out, "    }};")?;
                writeln!(out, "  }}")?;
                writeln!(out, "  return null;")?;
                writeln!(out, "}};")?;
            }
            Helper::Close {
                name,
                param,
                find,
                binding,
                balance,
                status,
                closed,
            } => {
                writeln!(out, "export const {name} = ({param}) => {{")?;
                writeln!(out, "  const {binding} = {find}({param});")?;
                writeln!(out, "  if ({binding}) {{")?;
                writeln!(
                    out,
                    "    {binding}.{status} = {};",
                    crate::literal::quote_str(closed)
                )?;
                writeln!(out, "    const finalBalance = {binding}.{balance};")?;
                writeln!(out, "    {binding}.{balance} = 0;")?;
                writeln!(out, "    return {{")?;
                writeln!(out, "      ...{binding},")?;
                writeln!(out, "      finalBalance")?;
                writeln!(out, "    }};")?;
                writeln!(out, "  }}")?;
                writeln!(out, "  return null;")?;
                writeln!(out, "}};")?;
            }
            Helper::Delete { name, key } => {
                writeln!(out, "export const {name} = ({}) => {{", key.param)?;
                write_find_index(out, collection, alias, key)?;
                writeln!(out, "  if (index !== -1) {{")?;
                writeln!(
                    out,
                    "    const deleted = {collection}.splice(index, 1)[0];"
                )?;
                writeln!(out, "    return deleted;")?;
                writeln!(out, "  }}")?;
                writeln!(out, "  return null;")?;
                writeln!(out, "}};")?;
            }
        }
        Ok(())
    }
}

fn write_find_index(
    out: &mut String,
    collection: &str,
    alias: &str,
    key: Key,
) -> Result<(), std::fmt::Error> {
    writeln!(
        out,
        "  const index = {collection}.findIndex({alias} => {alias}.{} === {});",
        key.field, key.param
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(helper: &Helper) -> String {
        let mut out = String::new();
        helper
            .write_to(&mut out, "mockCustomers", "c")
            .expect("write helper");
        out
    }

    #[test]
    fn find_first_uses_find() {
        let helper = Helper::FindFirst {
            name: "findCustomerById",
            key: Key::new("customerid", "customerid"),
        };
        assert_eq!(
            render(&helper),
            "export const findCustomerById = (customerid) => {\n  return mockCustomers.find(c => c.customerid === customerid);\n};\n"
        );
    }

    #[test]
    fn find_where_quotes_value() {
        let helper = Helper::FindWhere {
            name: "findActive",
            field: "status",
            value: "active",
        };
        assert!(render(&helper).contains("c.status === \"active\""));
    }

    #[test]
    fn delete_splices_and_returns_null_when_absent() {
        let helper = Helper::Delete {
            name: "deleteCustomer",
            key: Key::new("customerid", "customerid"),
        };
        let text = render(&helper);
        assert!(text.contains("mockCustomers.splice(index, 1)[0]"));
        assert!(text.trim_end().ends_with("return null;\n};"));
    }
}
