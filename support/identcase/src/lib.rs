//! Identifier case conversions used when deriving generated names from class
//! and artifact names.
//!
//! `capitalize` and `decapitalize` only touch the first character, which is
//! what is needed to turn `text` into `setText` or `TextView` into
//! `textView`. The word-splitting conversions are delegated to
//! `convert_case`.
use convert_case::{Case, Casing};

/// Upper-case the first character of `s`, leaving the rest untouched.
///
/// ```
/// assert_eq!(identcase::capitalize("text"), "Text");
/// assert_eq!(identcase::capitalize("Text"), "Text");
/// assert_eq!(identcase::capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    map_first_char(s, char::to_uppercase)
}

/// Lower-case the first character of `s`, leaving the rest untouched.
///
/// ```
/// assert_eq!(identcase::decapitalize("TextView"), "textView");
/// ```
pub fn decapitalize(s: &str) -> String {
    map_first_char(s, char::to_lowercase)
}

fn map_first_char<I>(s: &str, f: impl FnOnce(char) -> I) -> String
where
    I: Iterator<Item = char>,
{
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(f(first));
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// `tintedButton` → `TINTED_BUTTON`
pub fn to_constant_case(s: &str) -> String {
    s.to_case(Case::Constant)
}

/// `appcompat-v7` → `AppcompatV7`
pub fn to_pascal_case(s: &str) -> String {
    s.to_case(Case::Pascal)
}

/// `TextView` → `text_view`
pub fn to_snake_case(s: &str) -> String {
    s.to_case(Case::Snake)
}
