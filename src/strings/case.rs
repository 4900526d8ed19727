//! Case conversions (ASCII boundary rules)

use super::capitalize;

/// Split into words on delimiters (space, `_`, `-`) and lower-to-upper
/// case boundaries. ASCII-only: `"helloWorld"` splits, `"helloÜber"` does not.
fn split_words(s: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if c == ' ' || c == '_' || c == '-' || c == '\t' || c == '\n' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        if let Some(p) = prev {
            let boundary = c.is_ascii_uppercase() && (p.is_ascii_lowercase() || p.is_ascii_digit());
            if boundary && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Capitalize each whitespace-separated word.
///
/// ```
/// assert_eq!(kitbag::strings::title_case("the quick brown fox"), "The Quick Brown Fox");
/// ```
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert to `camelCase`.
///
/// ```
/// assert_eq!(kitbag::strings::camel_case("user name"), "userName");
/// assert_eq!(kitbag::strings::camel_case("user_login-count"), "userLoginCount");
/// ```
pub fn camel_case(s: &str) -> String {
    let words = split_words(s);
    let mut out = String::with_capacity(s.len());
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_ascii_lowercase());
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// Convert to `snake_case`.
///
/// ```
/// assert_eq!(kitbag::strings::snake_case("userName"), "user_name");
/// assert_eq!(kitbag::strings::snake_case("User Login-Count"), "user_login_count");
/// ```
pub fn snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert to `kebab-case`.
///
/// ```
/// assert_eq!(kitbag::strings::kebab_case("userName"), "user-name");
/// ```
pub fn kebab_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
