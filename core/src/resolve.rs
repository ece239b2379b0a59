//! Single-option resolution.
//!
//! [`resolve`] scans the argument vector left to right for one option. Each
//! occurrence takes the following argument as its value, a later occurrence
//! replaces an earlier one, and the terminator `--` ends the scan. The final
//! argument is never a flag position since nothing follows it.

use tracing::trace;

use crate::OptionSpec;
use crate::classify::{Classification, TERMINATOR, classify};

/// Finds the effective value of `spec` in `args`.
///
/// Returns the value following the last `--long` or `-s` occurrence before
/// any terminator, or `spec.default_value` if there is none. The result
/// borrows from `args` or from `spec`.
///
/// # Examples
///
/// ```
/// use command_options_core::{OptionSpec, resolve};
///
/// let hello = OptionSpec::new("hello", Some('h'), Some("ibarland"));
///
/// let args = ["--hello", "tag", "-b", "99", "--hello", "tag2"];
/// assert_eq!(resolve(&hello, &args), Some("tag2"));
///
/// let args = ["--hello", "tag", "-b", "99", "--", "--hello", "tag2"];
/// assert_eq!(resolve(&hello, &args), Some("tag"));
///
/// assert_eq!(resolve(&hello, &[] as &[&str]), Some("ibarland"));
/// ```
pub fn resolve<'a, S: AsRef<str>>(spec: &'a OptionSpec, args: &'a [S]) -> Option<&'a str> {
    let mut found = spec.default_str();
    let last = args.len().saturating_sub(1);

    let mut i = 0;
    while i < last {
        let token = args[i].as_ref();
        if token == TERMINATOR {
            trace!(option = %spec.long_name, index = i, "terminator stops scan");
            break;
        }
        let matched = match classify(token) {
            Classification::Long(name) => spec.matches_long(name),
            Classification::Short(c) => spec.matches_short(c),
            Classification::Terminator | Classification::Plain => false,
        };
        if matched {
            found = Some(args[i + 1].as_ref());
            trace!(option = %spec.long_name, index = i, value = ?found, "matched");
            // the value is consumed and never reconsidered as a flag
            i += 1;
        }
        i += 1;
    }

    found
}
