//! Token syntax and separator-aware string handling.
//!
//! A token is written `<name>` or `<sepname>`, where `sep` is `/` or `\`
//! placed directly after the opening bracket. A separator character counts as
//! a path separator only when it is not immediately preceded by `<`; this
//! keeps the declared separator of an unprocessed token attached to it.
//!
//! A whole segment is a token when its name is any run of non-whitespace
//! characters. Scanning for token syntax inside a longer string is narrower:
//! the name there excludes `<`, `>` and both separators, so text such as
//! `<a/b>` is never reported as unresolved.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::platform::Separator;

/// Matches token syntax anywhere in a string.
static TOKEN_SCAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[/\\]?[^\s<>/\\]+>").expect("token scan pattern is valid"));

/// Matches a whole segment that is a single token, capturing the declared
/// separator and the name.
static TOKEN_EXACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<([/\\])?(\S+)>$").expect("token pattern is valid"));

/// Matches a name the scan pattern can find inside a longer string.
static SCANNABLE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s<>/\\]+$").expect("name pattern is valid"));

/// A parsed token segment.
///
/// # Examples
///
/// ```
/// use tokpath::token::parse_token;
/// use tokpath::Separator;
///
/// let spec = parse_token(r"<\root>").unwrap();
/// assert_eq!(spec.name, "root");
/// assert_eq!(spec.separator, Some(Separator::Backslash));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpec<'a> {
    /// The name looked up in the token store.
    pub name: &'a str,
    /// The separator the token declares for the rest of the resolution.
    pub separator: Option<Separator>,
}

/// True iff no substring of `input` is token syntax.
///
/// # Examples
///
/// ```
/// use tokpath::token::is_resolved;
///
/// assert!(is_resolved("/srv/data"));
/// assert!(!is_resolved("<root>/data"));
/// ```
#[must_use]
pub fn is_resolved(input: &str) -> bool {
    !TOKEN_SCAN.is_match(input)
}

/// True iff the entire segment is a single token.
///
/// # Examples
///
/// ```
/// use tokpath::token::is_token;
///
/// assert!(is_token("<root>"));
/// assert!(is_token("</root>"));
/// assert!(!is_token("<root>/data"));
/// assert!(!is_token("root"));
/// ```
#[must_use]
pub fn is_token(segment: &str) -> bool {
    TOKEN_EXACT.is_match(segment)
}

/// Parse a token segment into its name and declared separator.
///
/// Returns `None` when the segment is not a token.
#[must_use]
pub fn parse_token(segment: &str) -> Option<TokenSpec<'_>> {
    let captures = TOKEN_EXACT.captures(segment)?;
    let name = captures.get(2)?.as_str();
    let separator = captures
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .and_then(Separator::from_char);

    Some(TokenSpec { name, separator })
}

/// True iff `name` can be found by scanning, i.e. `<name>` embedded in a
/// path is reported as unresolved.
///
/// # Examples
///
/// ```
/// use tokpath::token::is_scannable_name;
///
/// assert!(is_scannable_name("project_root"));
/// assert!(!is_scannable_name("a/b"));
/// assert!(!is_scannable_name("a>b"));
/// ```
#[must_use]
pub fn is_scannable_name(name: &str) -> bool {
    SCANNABLE_NAME.is_match(name)
}

/// Byte offsets of every separator in `input` that is not preceded by `<`.
fn separator_positions(input: &str) -> impl Iterator<Item = usize> + '_ {
    let mut previous = None;
    input.char_indices().filter_map(move |(index, c)| {
        let escaped = previous == Some('<');
        previous = Some(c);
        (Separator::from_char(c).is_some() && !escaped).then_some(index)
    })
}

/// Split `input` on unescaped separators.
///
/// Always yields at least one segment; the empty string yields `[""]`.
///
/// # Examples
///
/// ```
/// use tokpath::token::split_segments;
///
/// assert_eq!(split_segments(r"a/b\c"), vec!["a", "b", "c"]);
/// assert_eq!(split_segments(r"<\root>/x"), vec![r"<\root>", "x"]);
/// ```
#[must_use]
pub fn split_segments(input: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for index in separator_positions(input) {
        segments.push(&input[start..index]);
        // Both separators are single-byte characters.
        start = index + 1;
    }
    segments.push(&input[start..]);

    segments
}

/// Replace every unescaped separator in `input` with `separator`.
///
/// # Examples
///
/// ```
/// use tokpath::token::replace_separators;
/// use tokpath::Separator;
///
/// assert_eq!(replace_separators(r"a\b/c", Separator::Slash), "a/b/c");
/// ```
#[must_use]
pub fn replace_separators(input: &str, separator: Separator) -> String {
    split_segments(input).join(&separator.to_string())
}
