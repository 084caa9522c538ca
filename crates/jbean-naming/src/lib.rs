//! Naming convention helpers for JavaBean-style identifiers.
//!
//! These are small, allocation-light string transforms used by property
//! introspection (accessor prefix stripping, decapitalization) and by anything
//! that needs to move between `camelCase`, `hyphen-case`, and `underscore_case`
//! spellings or split a qualified type name.
//!
//! All functions operate on Unicode scalar values; case tests use
//! [`char::is_uppercase`] / [`char::is_lowercase`].

#![forbid(unsafe_code)]

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Decapitalizes `name` following the JavaBeans rule.
///
/// The first character is lower-cased unless the second character is also
/// upper-case, in which case the name is returned unchanged (`"URL"` stays
/// `"URL"`, `"Name"` becomes `"name"`).
#[must_use]
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if chars.clone().next().is_some_and(char::is_uppercase) {
        return name.to_string();
    }
    first.to_lowercase().chain(chars).collect()
}

/// [`decapitalize`] lifted over an optional name.
#[must_use]
pub fn decapitalize_opt(name: Option<&str>) -> Option<String> {
    name.map(decapitalize)
}

/// Decapitalizes `name` and then strips the first matching suffix.
///
/// `decapitalize_without_suffix("FooService", &["Service"])` yields `"foo"`.
#[must_use]
pub fn decapitalize_without_suffix(name: &str, suffixes: &[&str]) -> String {
    let decapitalized = decapitalize(name);
    trim_suffix(&decapitalized, suffixes).to_string()
}

/// Converts a property name to its capitalized accessor form.
///
/// Names such as `"pNAME"` (lower-case first character followed by an
/// upper-case one) are returned unchanged so that `getpNAME`-style accessors
/// round-trip through [`decapitalize`].
pub fn capitalize(name: &str) -> Result<String, NamingError> {
    let mut chars = name.chars();
    let first = chars
        .next()
        .ok_or(NamingError::InvalidArgument("cannot capitalize an empty name"))?;
    let rest = chars.as_str();

    if first.is_lowercase() && rest.chars().next().is_some_and(char::is_uppercase) {
        return Ok(name.to_string());
    }

    Ok(first.to_uppercase().chain(rest.chars()).collect())
}

/// Removes the first suffix (in the given order) that `s` ends with.
#[must_use]
pub fn trim_suffix<'a>(s: &'a str, suffixes: &[&str]) -> &'a str {
    suffixes
        .iter()
        .find_map(|suffix| s.strip_suffix(suffix))
        .unwrap_or(s)
}

/// Converts `camelCase` to lower-case `hyphen-case`.
#[must_use]
pub fn hyphenate(name: &str) -> String {
    hyphenate_with(name, true)
}

/// Inserts `-` at camel-case boundaries, optionally lower-casing the result.
///
/// With `lower_case = false` the input casing is preserved
/// (`"FooBarBaz"` becomes `"Foo-Bar-Baz"`).
#[must_use]
pub fn hyphenate_with(name: &str, lower_case: bool) -> String {
    separate_camel_case(name, lower_case, '-')
}

/// Converts `camelCase` to lower-case `underscore_case`.
#[must_use]
pub fn underscore_separate(name: &str) -> String {
    separate_camel_case(name, true, '_')
}

/// Converts `hyphen-case` to `CamelCase`.
///
/// Each segment that starts with a letter gets that letter upper-cased; the
/// rest of the segment is kept as-is. This does not restore the casing lost by
/// [`hyphenate`].
#[must_use]
pub fn dehyphenate(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) if first.is_alphabetic() => {
                    first.to_uppercase().chain(chars).collect::<String>()
                }
                _ => segment.to_string(),
            }
        })
        .collect()
}

/// Package portion of a qualified name (`"a.b.C"` → `"a.b"`), or `""`.
#[must_use]
pub fn package_name(qualified_name: &str) -> &str {
    qualified_name
        .rfind('.')
        .map_or("", |idx| &qualified_name[..idx])
}

/// Simple-name portion of a qualified name (`"a.b.C"` → `"C"`).
#[must_use]
pub fn simple_name(qualified_name: &str) -> &str {
    qualified_name
        .rfind('.')
        .map_or(qualified_name, |idx| &qualified_name[idx + 1..])
}

/// Returns `true` for names of the form `setX...` where `X` is upper-case.
#[must_use]
pub fn is_setter_name(method_name: &str) -> bool {
    method_name
        .strip_prefix("set")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase)
}

/// Property name a setter writes (`"setName"` → `"name"`).
///
/// Names that are not setter names are returned unchanged.
#[must_use]
pub fn property_name_for_setter(setter_name: &str) -> String {
    if is_setter_name(setter_name) {
        decapitalize(&setter_name[3..])
    } else {
        setter_name.to_string()
    }
}

/// Scanner state for [`separate_camel_case`].
#[derive(Clone, Copy, Debug)]
struct CamelScan {
    /// Nothing has been emitted for the current segment yet.
    segment_start: bool,
    prev: Option<char>,
}

impl CamelScan {
    const START: Self = Self {
        segment_start: true,
        prev: None,
    };

    fn prev_is_upper(self) -> bool {
        self.prev.is_some_and(char::is_uppercase)
    }

    /// Lower-casing mode: a boundary precedes an upper-case (or otherwise
    /// non-lower-case) letter unless it starts the name or follows an
    /// upper-case letter or a `.`.
    fn lowering(self, c: char, separator: char, out: &mut String) -> Self {
        let is_boundary_candidate = c.is_alphabetic() && !c.is_lowercase();
        if is_boundary_candidate
            && !self.segment_start
            && !self.prev_is_upper()
            && self.prev != Some('.')
        {
            out.push(separator);
        }
        out.extend(c.to_lowercase());
        Self {
            segment_start: false,
            prev: Some(c),
        }
    }

    /// Preserving mode: a boundary precedes an upper-case character that does
    /// not follow another upper-case one. A `.` opens a new segment.
    fn preserving(self, c: char, separator: char, out: &mut String) -> Self {
        if self.segment_start {
            out.push(c);
            return Self {
                segment_start: false,
                prev: Some(c),
            };
        }

        if c.is_uppercase() && !self.prev_is_upper() {
            out.push(separator);
            out.push(c);
            return Self {
                segment_start: false,
                prev: Some(c),
            };
        }

        out.push(c);
        Self {
            segment_start: c == '.',
            prev: Some(c),
        }
    }
}

fn separate_camel_case(name: &str, lower_case: bool, separator: char) -> String {
    let mut out = String::with_capacity(name.len() + name.len() / 4);
    name.chars().fold(CamelScan::START, |scan, c| {
        if lower_case {
            scan.lowering(c, separator, &mut out)
        } else {
            scan.preserving(c, separator, &mut out)
        }
    });
    out
}
