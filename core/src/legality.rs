//! Legality of apparent options.

use crate::OptionSchema;
use crate::classify::{Classification, classify};

/// Checks whether `token` is either not option-shaped or a declared option.
///
/// Plain text and the terminator are always legal. This function does not
/// know about terminator positions; callers stop validating at `--`.
///
/// # Examples
///
/// ```
/// use command_options_core::{OptionSchema, OptionSpec, is_legal};
///
/// let schema = OptionSchema::from_specs(vec![
///     OptionSpec::new("name", Some('n'), Some("ibarland")),
///     OptionSpec::new("size", Some('s'), Some("45")),
/// ]);
///
/// assert!(is_legal(&schema, "--name"));
/// assert!(is_legal(&schema, "-s"));
/// assert!(!is_legal(&schema, "-z"));
/// assert!(is_legal(&schema, "blah"));
/// assert!(is_legal(&schema, "--"));
/// ```
pub fn is_legal(schema: &OptionSchema, token: &str) -> bool {
    match classify(token) {
        Classification::Long(name) => schema.find_long(name).is_some(),
        Classification::Short(c) => schema.find_short(c).is_some(),
        Classification::Terminator | Classification::Plain => true,
    }
}
