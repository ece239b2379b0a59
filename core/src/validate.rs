//! Schema validation.
//!
//! Resolution itself accepts any schema, but a schema with duplicate or
//! malformed names can never be matched the way its author intended. These
//! checks catch that before the schema is used.
//!
//! # Examples
//!
//! ```
//! use command_options_core::*;
//!
//! let schema = OptionSchema::from_specs(vec![
//!     OptionSpec::new("file", Some('f'), Some("foo.txt")),
//!     OptionSpec::new("name", Some('n'), None),
//! ]);
//! assert!(validate_schema(&schema).is_empty());
//!
//! // Invalid: two options share the short name 'f'
//! let bad = schema.clone().with_option(OptionSpec::new("format", Some('f'), None));
//! assert!(!validate_schema(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{OptionSchema, OptionSpec};

/// Schema validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Long name is empty or whitespace-only.
    #[error("option long name cannot be empty")]
    EmptyLongName,
    /// Long name starts with a dash (e.g. `"--file"` instead of `"file"`).
    #[error("invalid long name (write it without leading dashes): {0}")]
    DashedLongName(String),
    /// Long name contains whitespace and could never appear as one argument.
    #[error("invalid long name (contains whitespace): {0:?}")]
    WhitespaceInLongName(String),
    /// Short name is `-` or whitespace.
    #[error("invalid short name for --{long}: {short:?}")]
    InvalidShortName { long: String, short: char },
    /// Two options share a long name.
    #[error("duplicate long name: --{0}")]
    DuplicateLongName(String),
    /// Two options share a short name.
    #[error("duplicate short name: -{0}")]
    DuplicateShortName(char),
}

/// Validates an option schema.
///
/// Returns at most one error, the first problem found in declaration order.
///
/// # Examples
///
/// ```
/// use command_options_core::*;
///
/// let schema = OptionSchema::from_specs(vec![
///     OptionSpec::long_only("stuff", None),
///     OptionSpec::long_only("stuff", Some("x")),
/// ]);
/// assert_eq!(
///     validate_schema(&schema),
///     vec![SchemaError::DuplicateLongName("stuff".into())]
/// );
/// ```
pub fn validate_schema(schema: &OptionSchema) -> Vec<SchemaError> {
    let mut errors = Vec::new();
    let mut seen_long: HashSet<&str> = HashSet::new();
    let mut seen_short: HashSet<char> = HashSet::new();

    for spec in schema {
        if let Some(err) = check_names(spec) {
            errors.push(err);
            return errors;
        }

        if !seen_long.insert(spec.long_name.as_str()) {
            errors.push(SchemaError::DuplicateLongName(spec.long_name.clone()));
            return errors;
        }

        if let Some(short) = spec.short_name {
            if !seen_short.insert(short) {
                errors.push(SchemaError::DuplicateShortName(short));
                return errors;
            }
        }
    }

    errors
}

fn check_names(spec: &OptionSpec) -> Option<SchemaError> {
    let long = spec.long_name.as_str();
    if long.trim().is_empty() {
        return Some(SchemaError::EmptyLongName);
    }
    if long.starts_with('-') {
        return Some(SchemaError::DashedLongName(long.to_string()));
    }
    if long.chars().any(char::is_whitespace) {
        return Some(SchemaError::WhitespaceInLongName(long.to_string()));
    }

    match spec.short_name {
        Some(short) if short == '-' || short.is_whitespace() => {
            Some(SchemaError::InvalidShortName {
                long: long.to_string(),
                short,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_schema_accepts_valid_schema() {
        let schema = OptionSchema::from_specs(vec![
            OptionSpec::new("file", Some('f'), Some("foo.txt")),
            OptionSpec::new("name", Some('n'), Some("ibarland")),
            OptionSpec::long_only("stuff", None),
            OptionSpec::long_only("other", None),
        ]);

        assert!(validate_schema(&schema).is_empty());
    }

    #[test]
    fn test_validate_schema_rejects_empty_long_name() {
        let schema = OptionSchema::new().with_option(OptionSpec::long_only("  ", None));
        assert_eq!(validate_schema(&schema), vec![SchemaError::EmptyLongName]);
    }

    #[test]
    fn test_validate_schema_rejects_dashed_long_name() {
        let schema = OptionSchema::new().with_option(OptionSpec::long_only("--file", None));
        assert_eq!(
            validate_schema(&schema),
            vec![SchemaError::DashedLongName("--file".to_string())]
        );
    }

    #[test]
    fn test_validate_schema_rejects_whitespace_long_name() {
        let schema = OptionSchema::new().with_option(OptionSpec::long_only("my file", None));
        assert_eq!(
            validate_schema(&schema),
            vec![SchemaError::WhitespaceInLongName("my file".to_string())]
        );
    }

    #[test]
    fn test_validate_schema_rejects_dash_short_name() {
        let schema = OptionSchema::new().with_option(OptionSpec::new("file", Some('-'), None));
        assert_eq!(
            validate_schema(&schema),
            vec![SchemaError::InvalidShortName {
                long: "file".to_string(),
                short: '-'
            }]
        );
    }

    #[test]
    fn test_validate_schema_rejects_whitespace_short_name() {
        let schema = OptionSchema::new().with_option(OptionSpec::new("file", Some(' '), None));
        assert_eq!(
            validate_schema(&schema),
            vec![SchemaError::InvalidShortName {
                long: "file".to_string(),
                short: ' '
            }]
        );

        let schema = OptionSchema::new().with_option(OptionSpec::new("file", Some('\t'), None));
        assert!(matches!(
            validate_schema(&schema).as_slice(),
            [SchemaError::InvalidShortName { short: '\t', .. }]
        ));
    }

    #[test]
    fn test_validate_schema_rejects_duplicate_long_name() {
        let schema = OptionSchema::from_specs(vec![
            OptionSpec::new("size", Some('s'), Some("98")),
            OptionSpec::long_only("name", None),
            OptionSpec::new("size", Some('z'), None),
        ]);
        let errors = validate_schema(&schema);
        assert_eq!(errors, vec![SchemaError::DuplicateLongName("size".to_string())]);
        assert_eq!(errors[0].to_string(), "duplicate long name: --size");
    }

    #[test]
    fn test_validate_schema_rejects_duplicate_short_name() {
        let schema = OptionSchema::from_specs(vec![
            OptionSpec::new("size", Some('s'), None),
            OptionSpec::new("stuff", Some('s'), None),
        ]);
        assert_eq!(
            validate_schema(&schema),
            vec![SchemaError::DuplicateShortName('s')]
        );
    }
}
