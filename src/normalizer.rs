// Text normalization shared by schema matching and keyword classification
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

const NBSP: char = '\u{a0}';

fn is_combining_mark(c: char) -> bool {
    ('\u{300}'..='\u{36f}').contains(&c)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical key for header and field lookups.
///
/// Non-breaking spaces are dropped, whitespace runs collapse to one space and
/// the result is trimmed and upper-cased.
pub fn normalize_key(raw: &str) -> String {
    let without_nbsp: String = raw.chars().filter(|&c| c != NBSP).collect();
    collapse_whitespace(&without_nbsp).to_uppercase()
}

/// Like [`normalize_key`], with accents removed so "Chloé" and "CHLOE" agree.
pub fn normalize_vendor_key(raw: &str) -> String {
    let folded: String = raw.nfkd().filter(|&c| !is_combining_mark(c)).collect();
    normalize_key(&folded)
}

/// Lower-cased NFC text with collapsed whitespace, used before keyword checks.
pub fn normalize_for_matching(raw: &str) -> String {
    let lowered = raw.nfc().collect::<String>().to_lowercase();
    collapse_whitespace(&lowered.nfc().collect::<String>())
}

/// Decomposes and drops combining marks, then lower-cases.
pub fn fold_diacritics(raw: &str) -> String {
    raw.nfd()
        .filter(|&c| !is_combining_mark(c))
        .collect::<String>()
        .to_lowercase()
}

pub fn capitalize_words(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Whole-word alternation over `words`, e.g. `\b(?:dây|band)\b`.
pub fn stopword_pattern(words: &[&str]) -> Result<Regex, regex::Error> {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation))
}

/// Removes every stopword match from already normalized text, then trims.
pub fn strip_stopwords(text: &str, stopwords: &Regex) -> String {
    stopwords.replace_all(text, "").trim().to_string()
}
