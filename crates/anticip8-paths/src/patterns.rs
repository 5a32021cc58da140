//! Compiled path patterns.

use std::sync::LazyLock;

use regex::Regex;

const UUID: &str =
    "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}";

/// A whole segment that is a version 1-5 UUID.
pub static UUID_SEGMENT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(&format!("^{UUID}$")).ok());

/// A whole segment of ASCII decimal digits.
pub static INT_SEGMENT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new("^[0-9]+$").ok());

/// A UUID anywhere in a raw path.
pub static UUID_TOKEN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(UUID).ok());

/// A digit run bounded by separators or string boundaries.
pub static INT_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new("(?:^|/)[0-9]+(?:/|$)").ok());

pub fn matches(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}
