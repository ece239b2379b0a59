//! Argument token classification.
//!
//! Every argument string falls into exactly one of four shapes:
//!
//! | Token        | Shape                                  |
//! |--------------|----------------------------------------|
//! | `--name`     | [`Classification::Long`] (`"name"`)    |
//! | `--`         | [`Classification::Terminator`]         |
//! | `-c`         | [`Classification::Short`] (`'c'`)      |
//! | anything else| [`Classification::Plain`]              |
//!
//! The long name is returned as a slice of the original token, so
//! classification never allocates.

/// The literal token that ends option scanning.
pub const TERMINATOR: &str = "--";

/// Shape of a single argument token.
///
/// # Examples
///
/// ```
/// use command_options_core::{Classification, classify};
///
/// assert_eq!(classify("--hello"), Classification::Long("hello"));
/// assert_eq!(classify("-h"), Classification::Short('h'));
/// assert_eq!(classify("--"), Classification::Terminator);
/// assert_eq!(classify("-"), Classification::Plain);
/// assert_eq!(classify("hello"), Classification::Plain);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// `--name`, carrying the name after the dashes.
    Long(&'a str),
    /// `-c`, carrying the single character.
    Short(char),
    /// Exactly `--`.
    Terminator,
    /// Not option-shaped.
    Plain,
}

impl Classification<'_> {
    /// Returns `true` for long and short options, declared or not.
    pub fn is_option(&self) -> bool {
        matches!(self, Self::Long(_) | Self::Short(_))
    }
}

/// Classifies one argument token.
pub fn classify(token: &str) -> Classification<'_> {
    if token == TERMINATOR {
        return Classification::Terminator;
    }
    if let Some(name) = long_option_name(token) {
        return Classification::Long(name);
    }
    match short_option_name(token) {
        Some(c) => Classification::Short(c),
        None => Classification::Plain,
    }
}

/// Returns the name of a `--name` token.
///
/// The token must be longer than the two-dash marker, so the bare terminator
/// `--` is never a long option.
///
/// # Examples
///
/// ```
/// use command_options_core::long_option_name;
///
/// assert_eq!(long_option_name("--hello"), Some("hello"));
/// assert_eq!(long_option_name("--"), None);
/// assert_eq!(long_option_name("-hello"), None);
/// assert_eq!(long_option_name("noLeadingDashes"), None);
/// ```
pub fn long_option_name(token: &str) -> Option<&str> {
    match token.strip_prefix(TERMINATOR) {
        Some(name) if !name.is_empty() => Some(name),
        _ => None,
    }
}

/// Returns the character of a `-c` token.
///
/// The token must be exactly two characters, start with a single dash, and
/// must not be the terminator.
///
/// # Examples
///
/// ```
/// use command_options_core::short_option_name;
///
/// assert_eq!(short_option_name("-h"), Some('h'));
/// assert_eq!(short_option_name("--"), None);
/// assert_eq!(short_option_name("-"), None);
/// assert_eq!(short_option_name("-hello"), None);
/// ```
pub fn short_option_name(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('-'), Some(c), None) if c != '-' => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_option_name() {
        assert_eq!(long_option_name("--hello"), Some("hello"));
        assert_eq!(long_option_name("noLeadingDashes"), None);
        assert_eq!(long_option_name("-hello"), None);
        assert_eq!(long_option_name("-h"), None);
        assert_eq!(long_option_name("--"), None);
        assert_eq!(long_option_name(""), None);
    }

    #[test]
    fn test_long_option_name_borrows_token() {
        let token = String::from("--size");
        let name = long_option_name(&token).unwrap();
        assert!(std::ptr::eq(name.as_ptr(), token[2..].as_ptr()));
    }

    #[test]
    fn test_short_option_name() {
        assert_eq!(short_option_name("-h"), Some('h'));
        assert_eq!(short_option_name("h"), None);
        assert_eq!(short_option_name("hello"), None);
        assert_eq!(short_option_name("--hello"), None);
        assert_eq!(short_option_name("h-"), None);
        assert_eq!(short_option_name("-"), None);
        assert_eq!(short_option_name("--"), None);
        assert_eq!(short_option_name(""), None);
    }

    #[test]
    fn test_short_option_counts_characters() {
        assert_eq!(short_option_name("-é"), Some('é'));
        assert_eq!(short_option_name("-5"), Some('5'));
    }

    #[test]
    fn test_classification_is_exclusive() {
        for token in ["", "-", "--", "---", "-h", "--h", "h", "-hh", "--hello", "a-b"] {
            let long = long_option_name(token).is_some();
            let short = short_option_name(token).is_some();
            let terminator = token == TERMINATOR;
            let shapes = [long, short, terminator].iter().filter(|b| **b).count();
            assert!(shapes <= 1, "token {token:?} matched {shapes} shapes");
        }
    }

    #[test]
    fn test_classify_triple_dash_is_long() {
        assert_eq!(classify("---"), Classification::Long("-"));
        assert!(classify("---").is_option());
        assert!(!classify("--").is_option());
    }
}
