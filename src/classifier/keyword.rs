use crate::classifier::tables::{CASE_COLOR, ClassifierTable, STRAP_COLOR, STRAP_MATERIAL};
use crate::normalizer::{normalize_for_matching, strip_stopwords};

/// Scans rules top-down, keywords in declared order, and returns the first
/// rule value whose keyword occurs in the normalized text.
pub fn classify(table: &ClassifierTable, input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }
    let text = strip_stopwords(&normalize_for_matching(input), table.stopwords);

    for rule in table.rules {
        for keyword in rule.keywords {
            if text.contains(keyword) {
                return format!("{}{}", table.prefix, rule.value);
            }
        }
    }
    String::new()
}

/// "Dây da bò" style material label, or empty.
pub fn strap_material(input: &str) -> String {
    classify(&STRAP_MATERIAL, input)
}

pub fn strap_color(input: &str) -> String {
    classify(&STRAP_COLOR, input)
}

pub fn case_color(input: &str) -> String {
    classify(&CASE_COLOR, input)
}
