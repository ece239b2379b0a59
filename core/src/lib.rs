//! Named command-line option resolution against a declared schema.
//!
//! This crate turns a raw argument vector into one value per declared
//! option:
//!
//! - [`OptionSpec`] — one option with a long name, optional short name,
//!   optional default and help text.
//! - [`OptionSchema`] — the ordered list of options; resolved values come
//!   back in the same order.
//! - [`classify`] — decides whether a token is `--long`, `-s`, the `--`
//!   terminator, or plain text.
//! - [`resolve`] — finds one option's value (last occurrence wins, `--`
//!   stops the scan, the default fills in otherwise).
//! - [`is_legal`] — checks that an option-shaped token is declared.
//! - [`all_options`] — resolves the whole schema and collects
//!   [`Diagnostic`]s for unknown options and a trailing flag without a value.
//!
//! Resolution never fails. Problems with the arguments are reported as
//! diagnostics and logged through [`tracing`]; only schema loading
//! ([`OptionSchema::load`]) and [`validate_schema`] produce errors.
//!
//! Every option takes a value. There are no boolean switches, no bundled
//! short options (`-xvf`) and no `--name=value` forms.
//!
//! # Example
//!
//! ```
//! use command_options_core::*;
//!
//! let schema = OptionSchema::new()
//!     .with_option(OptionSpec::new("file", Some('f'), Some("foo.txt")))
//!     .with_option(OptionSpec::new("name", Some('n'), Some("ibarland")))
//!     .with_option(OptionSpec::new("size", Some('s'), Some("98")));
//! assert!(validate_schema(&schema).is_empty());
//!
//! let args = ["--size", "44", "-f", "baz.txt", "-z", "1"];
//! let resolution = all_options(&schema, &args);
//!
//! assert_eq!(resolution.values, vec![Some("baz.txt"), Some("ibarland"), Some("44")]);
//! assert_eq!(resolution.diagnostics.len(), 1);
//! assert_eq!(resolution.diagnostics[0].kind, DiagnosticKind::UnknownOption);
//! assert_eq!(resolution.diagnostics[0].index, 4);
//! ```

mod classify;
mod diagnostics;
mod driver;
mod error;
mod legality;
mod load;
mod resolve;
mod types;
mod validate;

pub use classify::{Classification, TERMINATOR, classify, long_option_name, short_option_name};
pub use diagnostics::{Diagnostic, DiagnosticKind, report_diagnostics};
pub use driver::{Resolution, all_options};
pub use error::{LoadError, Result};
pub use legality::is_legal;
pub use load::SchemaFormat;
pub use resolve::resolve;
pub use types::*;
pub use validate::{SchemaError, validate_schema};
