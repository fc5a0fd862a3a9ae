use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::errors::RenderError;
use crate::helpers::Helper;
use crate::literal::JsValue;

/// A record that can be rendered as an object literal.
pub trait RenderRecord {
    /// Field name and value pairs, in output order.
    fn fields(&self) -> Vec<(&'static str, JsValue)>;
}

/// Layout of an emitted module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSpec {
    /// Lines of the leading doc comment.
    pub header: Vec<&'static str>,
    /// Name of the exported array (also the default export).
    pub collection: &'static str,
    /// Title of the doc comment above the helpers.
    pub helpers_title: &'static str,
    /// Element name used inside helper callbacks.
    pub alias: &'static str,
    pub helpers: Vec<Helper>,
}

impl ModuleSpec {
    fn validate(&self) -> Result<(), RenderError> {
        if self.collection.is_empty() || self.alias.is_empty() {
            return Err(RenderError::InvalidSpec(
                "collection and alias must be non-empty".to_string(),
            ));
        }
        let mut names = BTreeSet::new();
        for helper in &self.helpers {
            if !names.insert(helper.name()) {
                return Err(RenderError::InvalidSpec(format!(
                    "duplicate helper name: {}",
                    helper.name()
                )));
            }
        }
        Ok(())
    }
}

/// Render `records` into a complete module following `spec`.
///
/// Output ends with a single newline. An empty record list produces an empty
/// array literal.
pub fn render_module<R: RenderRecord>(
    spec: &ModuleSpec,
    records: &[R],
) -> Result<String, RenderError> {
    spec.validate()?;

    let mut out = String::new();
    write_doc_comment(&mut out, &spec.header)?;
    writeln!(out)?;

    writeln!(out, "export const {} = [", spec.collection)?;
    for (idx, record) in records.iter().enumerate() {
        write_record(&mut out, record)?;
        if idx + 1 < records.len() {
            writeln!(out, ",")?;
        } else {
            writeln!(out)?;
        }
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    write_doc_comment(&mut out, &[spec.helpers_title])?;
    for helper in &spec.helpers {
        helper.write_to(&mut out, spec.collection, spec.alias)?;
        writeln!(out)?;
    }

    writeln!(out, "export default {};", spec.collection)?;
    Ok(out)
}

fn write_doc_comment(out: &mut String, lines: &[&str]) -> Result<(), std::fmt::Error> {
    writeln!(out, "/**")?;
    for line in lines {
        writeln!(out, " * {line}")?;
    }
    writeln!(out, " */")
}

/// Writes the object literal without a trailing newline so the caller can
/// place the separator.
fn write_record<R: RenderRecord>(out: &mut String, record: &R) -> Result<(), std::fmt::Error> {
    let fields = record.fields();
    writeln!(out, "  {{")?;
    for (idx, (name, value)) in fields.iter().enumerate() {
        let separator = if idx + 1 < fields.len() { "," } else { "" };
        writeln!(out, "    {name}: {}{separator}", value.to_literal())?;
    }
    write!(out, "  }}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::Key;

    struct Row(&'static str, Option<&'static str>);

    impl RenderRecord for Row {
        fn fields(&self) -> Vec<(&'static str, JsValue)> {
            vec![
                ("id", JsValue::str(self.0)),
                ("due", JsValue::nullable_str(self.1)),
            ]
        }
    }

    fn spec() -> ModuleSpec {
        ModuleSpec {
            header: vec!["Rows"],
            collection: "rows",
            helpers_title: "Helpers",
            alias: "r",
            helpers: vec![Helper::FindFirst {
                name: "findRow",
                key: Key::new("id", "id"),
            }],
        }
    }

    #[test]
    fn renders_records_and_helpers() {
        let text = render_module(&spec(), &[Row("a", None), Row("b", Some("2025-01-01"))])
            .expect("render");
        let expected = "\
/**
 * Rows
 */

export const rows = [
  {
    id: \"a\",
    due: null
  },
  {
    id: \"b\",
    due: \"2025-01-01\"
  }
];

/**
 * Helpers
 */
export const findRow = (id) => {
  return rows.find(r => r.id === id);
};

export default rows;
";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_collection_is_an_empty_array() {
        let text = render_module::<Row>(&spec(), &[]).expect("render");
        assert!(text.contains("export const rows = [\n];\n"));
        assert!(text.ends_with("export default rows;\n"));
    }

    #[test]
    fn duplicate_helper_names_are_rejected() {
        let mut spec = spec();
        spec.helpers.push(spec.helpers[0].clone());
        assert!(matches!(
            render_module::<Row>(&spec, &[]),
            Err(RenderError::InvalidSpec(_))
        ));
    }
}
