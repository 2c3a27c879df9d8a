// Label/value extraction from free-text description blocks
use crate::normalizer::fold_diacritics;

fn is_colon(c: char) -> bool {
    c == ':' || c == '：'
}

/// Returns the value of the first `label: value` line whose label contains
/// `label`, compared without accents or case.
///
/// The query may be shorter than the line's label ("Chất liệu" hits
/// "Chất liệu vỏ máy"). Extra colons stay in the value as `:`.
pub fn extract_labeled_value(block: &str, label: &str) -> String {
    if block.is_empty() {
        return String::new();
    }
    let wanted = fold_diacritics(label);

    for line in block.lines() {
        let Some((head, tail)) = line.split_once(is_colon) else {
            continue;
        };
        if fold_diacritics(head).contains(&wanted) {
            return tail.replace('：', ":").trim().to_string();
        }
    }
    String::new()
}

/// Tries each label in order and returns the first non-empty value.
pub fn extract_first(block: &str, labels: &[&str]) -> String {
    labels
        .iter()
        .map(|label| extract_labeled_value(block, label))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}
