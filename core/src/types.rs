//! Option schema type definitions.
//!
//! An [`OptionSchema`] is an ordered list of [`OptionSpec`] entries. The
//! order is significant: resolved values come back in exactly the same
//! order the options were declared. Both types serialize with [`serde`] so a
//! schema can be kept in a JSON or YAML document next to the program that
//! uses it.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// One declared option.
///
/// Every option has a long form (`--size`) and may have a single-character
/// short form (`-s`). Each option always takes a value; there are no
/// boolean switches in this model. When the option does not appear on the
/// command line, [`default_value`](OptionSpec::default_value) is used, and an
/// option without a default resolves to `None`.
///
/// # Examples
///
/// ```
/// use command_options_core::OptionSpec;
///
/// let size = OptionSpec::new("size", Some('s'), Some("98"))
///     .with_help("how many blazzes to blarg (in dozens)");
/// assert_eq!(size.long_name, "size");
/// assert_eq!(size.short_name, Some('s'));
/// assert_eq!(size.default_value.as_deref(), Some("98"));
///
/// let stuff = OptionSpec::long_only("stuff", None);
/// assert!(stuff.short_name.is_none());
/// assert!(stuff.default_value.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Long name without the leading dashes (e.g. "file" for `--file`)
    #[serde(rename = "long")]
    pub long_name: String,
    /// Short name without the leading dash (e.g. 'f' for `-f`)
    #[serde(
        rename = "short",
        default,
        deserialize_with = "deserialize_short_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub short_name: Option<char>,
    /// Value used when the option is not given
    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Free-form description, carried but never interpreted
    #[serde(rename = "help", default, skip_serializing_if = "String::is_empty")]
    pub help_text: String,
}

impl OptionSpec {
    /// Creates an option with a long name, optional short name and optional
    /// default.
    pub fn new(long_name: &str, short_name: Option<char>, default_value: Option<&str>) -> Self {
        Self {
            long_name: long_name.to_string(),
            short_name,
            default_value: default_value.map(String::from),
            help_text: String::new(),
        }
    }

    /// Creates an option that has no short form.
    pub fn long_only(long_name: &str, default_value: Option<&str>) -> Self {
        Self::new(long_name, None, default_value)
    }

    /// Adds help text.
    pub fn with_help(mut self, help: &str) -> Self {
        self.help_text = help.to_string();
        self
    }

    /// Returns `true` if `name` is this option's long name.
    pub fn matches_long(&self, name: &str) -> bool {
        self.long_name == name
    }

    /// Returns `true` if `c` is this option's short name.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_options_core::OptionSpec;
    ///
    /// let file = OptionSpec::new("file", Some('f'), None);
    /// assert!(file.matches_short('f'));
    /// assert!(!file.matches_short('g'));
    ///
    /// // An option without a short form never matches a short token.
    /// let stuff = OptionSpec::long_only("stuff", None);
    /// assert!(!stuff.matches_short('s'));
    /// ```
    pub fn matches_short(&self, c: char) -> bool {
        self.short_name == Some(c)
    }

    /// Returns the default as a borrowed string.
    pub fn default_str(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}

/// Ordered collection of [`OptionSpec`] entries.
///
/// Deserializes from either a bare list of options or a document with an
/// `options` key; always serializes as the latter.
///
/// # Examples
///
/// ```
/// use command_options_core::{OptionSchema, OptionSpec};
///
/// let schema = OptionSchema::from_specs(vec![
///     OptionSpec::new("file", Some('f'), Some("foo.txt")),
///     OptionSpec::new("name", Some('n'), Some("ibarland")),
/// ]);
///
/// assert_eq!(schema.len(), 2);
/// assert_eq!(schema.find_short('n').unwrap().long_name, "name");
/// assert_eq!(schema.position_of("file"), Some(0));
/// assert!(schema.find_long("size").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionSchema {
    /// Declared options, in output order
    pub options: Vec<OptionSpec>,
}

impl<'de> Deserialize<'de> for OptionSchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SchemaVisitor)
    }
}

struct SchemaVisitor;

impl<'de> Visitor<'de> for SchemaVisitor {
    type Value = OptionSchema;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of options or a map with an `options` key")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut options = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(spec) = seq.next_element::<OptionSpec>()? {
            options.push(spec);
        }
        Ok(OptionSchema { options })
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut options = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "options" => {
                    if options.is_some() {
                        return Err(de::Error::duplicate_field("options"));
                    }
                    options = Some(map.next_value::<Vec<OptionSpec>>()?);
                }
                other => return Err(de::Error::unknown_field(other, &["options"])),
            }
        }
        let options = options.ok_or_else(|| de::Error::missing_field("options"))?;
        Ok(OptionSchema { options })
    }
}

fn deserialize_short_name<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<char>, D::Error> {
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Some(c)),
        _ => Err(de::Error::invalid_value(
            Unexpected::Str(&raw),
            &"a single-character short name",
        )),
    }
}

impl OptionSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schema from a list of specs, keeping their order.
    pub fn from_specs(options: Vec<OptionSpec>) -> Self {
        Self { options }
    }

    /// Appends an option.
    pub fn with_option(mut self, spec: OptionSpec) -> Self {
        self.options.push(spec);
        self
    }

    /// Number of declared options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if no options are declared.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterates over the declared options in order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionSpec> {
        self.options.iter()
    }

    /// Finds an option by long name.
    pub fn find_long(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|spec| spec.matches_long(name))
    }

    /// Finds an option by short name.
    pub fn find_short(&self, c: char) -> Option<&OptionSpec> {
        self.options.iter().find(|spec| spec.matches_short(c))
    }

    /// Index of the option with the given long name.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.options.iter().position(|spec| spec.matches_long(name))
    }

    /// All long names, in declaration order.
    pub fn long_names(&self) -> Vec<&str> {
        self.options.iter().map(|spec| spec.long_name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a OptionSchema {
    type Item = &'a OptionSpec;
    type IntoIter = std::slice::Iter<'a, OptionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

impl FromIterator<OptionSpec> for OptionSchema {
    fn from_iter<I: IntoIterator<Item = OptionSpec>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_spec_creation() {
        let spec = OptionSpec::new("name", Some('n'), Some("ibarland"))
            .with_help("the primary blazlbarger");

        assert_eq!(spec.long_name, "name");
        assert_eq!(spec.short_name, Some('n'));
        assert_eq!(spec.default_str(), Some("ibarland"));
        assert_eq!(spec.help_text, "the primary blazlbarger");
    }

    #[test]
    fn test_schema_deserializes_bare_list() {
        let raw = r#"[
            { "long": "file", "short": "f", "default": "foo.txt" },
            { "long": "stuff" }
        ]"#;
        let schema: OptionSchema = serde_json::from_str(raw).unwrap();

        assert_eq!(schema.long_names(), vec!["file", "stuff"]);
        assert_eq!(schema.options[0].short_name, Some('f'));
        assert!(schema.options[1].default_value.is_none());
        assert!(schema.options[1].help_text.is_empty());
    }

    #[test]
    fn test_schema_deserializes_options_document() {
        let raw = "options:\n  - long: size\n    short: s\n    default: \"98\"\n    help: how many\n";
        let schema: OptionSchema = serde_yaml::from_str(raw).unwrap();

        assert_eq!(schema.len(), 1);
        assert_eq!(schema.options[0].default_str(), Some("98"));
        assert_eq!(schema.options[0].help_text, "how many");
    }

    #[test]
    fn test_schema_serializes_as_document() {
        let schema = OptionSchema::new().with_option(OptionSpec::long_only("stuff", None));
        let value = serde_json::to_value(&schema).unwrap();

        assert_eq!(value, serde_json::json!({ "options": [ { "long": "stuff" } ] }));
    }

    #[test]
    fn test_schema_lookup() {
        let schema: OptionSchema = vec![
            OptionSpec::new("file", Some('f'), None),
            OptionSpec::long_only("stuff", None),
        ]
        .into_iter()
        .collect();

        assert!(schema.find_long("stuff").is_some());
        assert!(schema.find_short('f').is_some());
        assert!(schema.find_short('s').is_none());
        assert_eq!(schema.position_of("stuff"), Some(1));
    }
}
