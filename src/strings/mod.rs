//! Stateless text transforms
//!
//! Each helper takes a string slice and fixed parameters and returns a new
//! `String`. Nothing here mutates its input or raises domain errors, with one
//! exception: the padding helpers validate their pad string (an empty pad can
//! never make progress) and return `Result`.
//!
//! Case conversions assume ASCII capital letters; non-ASCII input passes
//! through untouched. Several transforms (slugify, strip_html) are lossy and
//! non-reversible by design.

mod case;

pub use case::{camel_case, kebab_case, snake_case, title_case};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::UtilError;

static NON_ALNUM_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Convert a string into a URL-safe slug.
///
/// Output contains only lowercase ASCII letters, digits, and single hyphens,
/// never leading or trailing ones.
///
/// ```
/// assert_eq!(kitbag::strings::slugify("Hello, World!"), "hello-world");
/// assert_eq!(kitbag::strings::slugify("  --Rust 2021--  "), "rust-2021");
/// ```
pub fn slugify(s: &str) -> String {
    let lowered = s.to_lowercase();
    NON_ALNUM_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Truncate to at most `max_len` characters, appending `...` when truncated.
///
/// Strings already within the limit come back unchanged. When truncation
/// happens the result is exactly `max_len` characters including the ellipsis;
/// for `max_len <= 3` the result is just that many dots.
///
/// ```
/// assert_eq!(kitbag::strings::truncate("hello", 10), "hello");
/// assert_eq!(kitbag::strings::truncate("hello world", 8), "hello...");
/// assert_eq!(kitbag::strings::truncate("hello", 2), "..");
/// ```
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return ".".repeat(max_len);
    }
    let mut out: String = s.chars().take(max_len - 3).collect();
    out.push_str("...");
    out
}

/// Uppercase the first character, lowercase the rest (ASCII).
///
/// ```
/// assert_eq!(kitbag::strings::capitalize("hELLO"), "Hello");
/// assert_eq!(kitbag::strings::capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Escape the five HTML-significant characters into entities.
///
/// ```
/// assert_eq!(
///     kitbag::strings::escape_html(r#"<a href="x">&'</a>"#),
///     "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
/// );
/// ```
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Remove HTML tags, keeping the text between them.
///
/// Lossy: attributes and tag structure are gone for good. Not a sanitizer --
/// do not use this as an XSS defence.
///
/// ```
/// assert_eq!(kitbag::strings::strip_html("<b>bold</b> move"), "bold move");
/// ```
pub fn strip_html(s: &str) -> String {
    HTML_TAG.replace_all(s, "").into_owned()
}

/// True when the string is empty or whitespace-only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Reverse by `char`. Not grapheme-aware: combining marks will detach.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Count non-overlapping occurrences of `needle`. An empty needle is 0.
///
/// ```
/// assert_eq!(kitbag::strings::count_occurrences("banana", "an"), 2);
/// assert_eq!(kitbag::strings::count_occurrences("banana", ""), 0);
/// ```
pub fn count_occurrences(s: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    s.matches(needle).count()
}

/// Drop all Unicode whitespace.
pub fn remove_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Left-pad to `target_len` characters by repeating `pad`.
///
/// The pad string may be longer than one character; the final repetition is
/// truncated to fit. Strings already at or past the target come back
/// unchanged. An empty pad string is rejected (it can never make progress).
///
/// ```
/// assert_eq!(kitbag::strings::pad_start("7", 3, "0").unwrap(), "007");
/// assert_eq!(kitbag::strings::pad_start("ab", 5, "xy").unwrap(), "xyxab");
/// assert!(kitbag::strings::pad_start("ab", 5, "").is_err());
/// ```
pub fn pad_start(s: &str, target_len: usize, pad: &str) -> Result<String, UtilError> {
    let fill = padding_for(s, target_len, pad)?;
    Ok(fill + s)
}

/// Right-pad to `target_len` characters by repeating `pad`.
///
/// Same rules as [`pad_start`].
pub fn pad_end(s: &str, target_len: usize, pad: &str) -> Result<String, UtilError> {
    let fill = padding_for(s, target_len, pad)?;
    Ok(s.to_string() + &fill)
}

fn padding_for(s: &str, target_len: usize, pad: &str) -> Result<String, UtilError> {
    if pad.is_empty() {
        return Err(UtilError::EmptyPadding);
    }
    let current = s.chars().count();
    if current >= target_len {
        return Ok(String::new());
    }
    let needed = target_len - current;
    Ok(pad.chars().cycle().take(needed).collect())
}
