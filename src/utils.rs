// Utility functions
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

static WHITESPACE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Stable 32-bit string hash: `h = h * 31 + unit` over UTF-16 code units,
/// wrapping, then absolute value.
pub fn hash_string(text: &str) -> u32 {
    let hash = text
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    hash.unsigned_abs()
}

/// Drops `<...>` tags. An unclosed `<` and an empty `<>` are kept.
pub fn strip_html(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

/// Converts a string to a URL handle: whitespace runs become `-`.
pub fn to_handle(text: &str) -> String {
    WHITESPACE_PATTERN.replace_all(text, "-").into_owned()
}

/// Removes quote and line-break characters, then trims.
pub fn clean_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '"' | '\r' | '\n'))
        .collect::<String>()
        .trim()
        .to_string()
}
