//! Accessor-name recognition for translatable attributes.
//!
//! Accepted shape: `<attribute>[_<locale>][=]`, where `<attribute>` is a whole
//! registered name and `<locale>` is one run of lowercase ASCII letters.
//! Overlapping registered names resolve to the longest one that accounts for
//! the whole remainder, so with `name` and `name_short` registered,
//! `name_short_en` is (`name_short`, `en`).

use once_cell::sync::Lazy;
use regex::Regex;

static LOCALE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+$").expect("valid locale token regex"));

const SETTER_SUFFIX: char = '=';
const LOCALE_SEPARATOR: char = '_';

/// A recognized translatable accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    /// Registered base attribute name.
    pub attribute: String,
    /// Explicit locale suffix, if present.
    pub locale: Option<String>,
    /// Whether the name ends with `=`.
    pub is_setter: bool,
}

/// Parses `name` against `attributes`.
///
/// Returns `None` when the name is not a translatable accessor. That is a
/// negative recognition result, not an error.
pub fn parse_accessor<S: AsRef<str>>(name: &str, attributes: &[S]) -> Option<Accessor> {
    let (base, is_setter) = split_setter(name);
    let mut candidates: Vec<&str> = attributes
        .iter()
        .map(AsRef::as_ref)
        .filter(|attribute| !attribute.is_empty())
        .collect();
    candidates.sort_by_key(|attribute| std::cmp::Reverse(attribute.len()));

    match_longest_first(base, is_setter, candidates)
}

/// Parses `name` against names already ordered longest first.
pub(crate) fn parse_longest_first<S: AsRef<str>>(
    name: &str,
    longest_first: &[S],
) -> Option<Accessor> {
    let (base, is_setter) = split_setter(name);
    match_longest_first(base, is_setter, longest_first.iter().map(|name| name.as_ref()))
}

fn split_setter(name: &str) -> (&str, bool) {
    match name.strip_suffix(SETTER_SUFFIX) {
        Some(stripped) => (stripped, true),
        None => (name, false),
    }
}

fn match_longest_first<'a>(
    base: &str,
    is_setter: bool,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<Accessor> {
    candidates.into_iter().find_map(|attribute| {
        let rest = base.strip_prefix(attribute)?;
        let locale = if rest.is_empty() {
            None
        } else {
            let token = rest.strip_prefix(LOCALE_SEPARATOR)?;
            if !LOCALE_TOKEN_RE.is_match(token) {
                return None;
            }
            Some(token.to_string())
        };
        Some(Accessor {
            attribute: attribute.to_string(),
            locale,
            is_setter,
        })
    })
}
