//! Whole-schema resolution.
//!
//! [`all_options`] resolves every declared option and then checks every
//! argument before the terminator, returning the values together with any
//! warnings. Nothing here fails: malformed input only produces diagnostics.

use serde::Serialize;
use tracing::{debug, warn};

use crate::OptionSchema;
use crate::classify::{TERMINATOR, classify};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::legality::is_legal;
use crate::resolve::resolve;

/// Output of [`all_options`].
///
/// `values` has one entry per declared option, in schema order. Values
/// borrow from the argument vector or from the schema defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    pub values: Vec<Option<&'a str>>,
    pub diagnostics: Vec<Diagnostic<'a>>,
}

impl<'a> Resolution<'a> {
    /// Looks up a resolved value by long name.
    ///
    /// Returns `None` both for undeclared names and for declared options
    /// without a value; use [`OptionSchema::find_long`] to tell them apart.
    pub fn value_of(&self, schema: &OptionSchema, long_name: &str) -> Option<&'a str> {
        schema
            .position_of(long_name)
            .and_then(|i| self.values.get(i).copied().flatten())
    }

    /// Returns `true` if no diagnostics were produced.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Copies the values out so they no longer borrow the inputs.
    pub fn into_owned(self) -> Vec<Option<String>> {
        self.values
            .into_iter()
            .map(|value| value.map(String::from))
            .collect()
    }
}

/// Resolves every option in `schema` against `args`.
///
/// `args` is scanned verbatim, so leave out the program name unless it
/// should be considered. Values are resolved first, in schema order. Then
/// each argument before the first `--` is checked with
/// [`is_legal`](crate::is_legal), and finally a trailing option-shaped
/// argument with no value after it is reported. Each diagnostic is also
/// logged at `warn` level.
///
/// # Examples
///
/// ```
/// use command_options_core::{OptionSchema, OptionSpec, all_options};
///
/// let schema = OptionSchema::from_specs(vec![
///     OptionSpec::new("file", Some('f'), Some("foo.txt")),
///     OptionSpec::new("name", Some('n'), Some("ibarland")),
///     OptionSpec::new("size", Some('s'), Some("98")),
/// ]);
///
/// let args = ["--size", "44", "-f", "baz.txt"];
/// let resolution = all_options(&schema, &args);
///
/// assert_eq!(
///     resolution.values,
///     vec![Some("baz.txt"), Some("ibarland"), Some("44")]
/// );
/// assert!(resolution.is_clean());
/// ```
pub fn all_options<'a, S: AsRef<str>>(schema: &'a OptionSchema, args: &'a [S]) -> Resolution<'a> {
    let values: Vec<Option<&'a str>> = schema
        .iter()
        .map(|spec| {
            let value = resolve(spec, args);
            debug!(option = %spec.long_name, value = ?value, "resolved option");
            value
        })
        .collect();

    let mut diagnostics = Vec::new();
    let mut terminated = false;
    for (index, arg) in args.iter().enumerate() {
        let token = arg.as_ref();
        if token == TERMINATOR {
            terminated = true;
            break;
        }
        if !is_legal(schema, token) {
            diagnostics.push(Diagnostic::new(DiagnosticKind::UnknownOption, token, index));
        }
    }

    if !terminated {
        if let Some(last) = args.last() {
            let token = last.as_ref();
            if classify(token).is_option() {
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::MissingTrailingValue,
                    token,
                    args.len() - 1,
                ));
            }
        }
    }

    for diag in &diagnostics {
        warn!(kind = %diag.kind, index = diag.index, token = diag.token, "{diag}");
    }

    Resolution {
        values,
        diagnostics,
    }
}
