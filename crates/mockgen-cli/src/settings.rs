use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CustomerSettings {
    pub output: PathBuf,
}

impl Default for CustomerSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("customers.js"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SavingBookSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Parse the join table from this rendered customer module.
    pub customers_module: Option<PathBuf>,
}

impl Default for SavingBookSettings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("savingBooks.js"),
            output: PathBuf::from("savingBooks_new.js"),
            customers_module: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter used when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub customers: CustomerSettings,
    pub saving_books: SavingBookSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load settings from `path`, or defaults when the file does not exist.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("mockgen_settings_{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).expect("write settings");
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join(format!("absent_{}.toml", uuid::Uuid::new_v4()));
        let settings = load_settings(&path).expect("defaults");
        assert_eq!(settings.customers.output, PathBuf::from("customers.js"));
        assert_eq!(settings.saving_books.input, PathBuf::from("savingBooks.js"));
        assert_eq!(settings.saving_books.output, PathBuf::from("savingBooks_new.js"));
        assert!(settings.saving_books.customers_module.is_none());
        assert_eq!(settings.logging.level, "info");
        assert!(!settings.logging.json);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_file(
            r#"
[saving_books]
input = "legacy/books.js"
customers_module = "out/customers.js"

[logging]
json = true
"#,
        );
        let settings = load_settings(&path).expect("load");
        assert_eq!(settings.saving_books.input, PathBuf::from("legacy/books.js"));
        assert_eq!(settings.saving_books.output, PathBuf::from("savingBooks_new.js"));
        assert_eq!(
            settings.saving_books.customers_module,
            Some(PathBuf::from("out/customers.js"))
        );
        assert!(settings.logging.json);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.customers.output, PathBuf::from("customers.js"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_file("[customers\noutput = 3");
        assert!(matches!(
            load_settings(&path),
            Err(SettingsError::Decode { .. })
        ));
    }
}
