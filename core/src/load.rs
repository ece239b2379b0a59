//! Reading option schemas from JSON and YAML documents.
//!
//! A schema document is either a bare list of options or a mapping with an
//! `options` key:
//!
//! ```yaml
//! options:
//!   - long: file
//!     short: f
//!     default: foo.txt
//!     help: the file to blazblarg
//!   - long: stuff
//!     help: what to call your stuff
//! ```
//!
//! Loaded schemas are validated with [`validate_schema`](crate::validate_schema).

use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::OptionSchema;
use crate::error::{LoadError, Result};
use crate::validate::validate_schema;

/// Document format of a schema file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Yaml,
}

impl SchemaFormat {
    /// Picks the format from a file extension; anything other than
    /// `.yaml`/`.yml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

impl OptionSchema {
    /// Parses and validates a schema from a JSON string.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_options_core::OptionSchema;
    ///
    /// let schema = OptionSchema::from_json_str(
    ///     r#"[{ "long": "file", "short": "f", "default": "foo.txt" }]"#,
    /// ).unwrap();
    /// assert_eq!(schema.long_names(), vec!["file"]);
    ///
    /// // Duplicate names are rejected.
    /// let dup = r#"[{ "long": "file" }, { "long": "file" }]"#;
    /// assert!(OptionSchema::from_json_str(dup).is_err());
    /// ```
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let schema: Self = serde_json::from_str(raw)?;
        schema.into_validated()
    }

    /// Parses and validates a schema from a YAML string.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let schema: Self = serde_yaml::from_str(raw)?;
        schema.into_validated()
    }

    /// Loads and validates a schema file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read,
    /// [`LoadError::Json`] or [`LoadError::Yaml`] if parsing fails, and
    /// [`LoadError::Invalid`] if the schema fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = SchemaFormat::from_path(path);
        debug!(path = %path.display(), ?format, "loading option schema");

        let reader = BufReader::new(std::fs::File::open(path)?);
        let schema: Self = match format {
            SchemaFormat::Json => serde_json::from_reader(reader)?,
            SchemaFormat::Yaml => serde_yaml::from_reader(reader)?,
        };
        schema.into_validated()
    }

    fn into_validated(self) -> Result<Self> {
        match validate_schema(&self).into_iter().next() {
            Some(err) => Err(LoadError::Invalid(err)),
            None => Ok(self),
        }
    }
}
