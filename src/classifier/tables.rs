// Ordered keyword tables. Order is priority: the first rule with a keyword
// present in the text wins, so broader keywords must come after narrower ones.
use crate::normalizer::stopword_pattern;
use once_cell::sync::Lazy;
use regex::Regex;

/// One rule: any of `keywords` maps the text to `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub value: &'static str,
}

const fn rule(keywords: &'static [&'static str], value: &'static str) -> KeywordRule {
    KeywordRule { keywords, value }
}

/// Stopwords and rules for one classifier.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierTable {
    /// Whole words removed before keyword matching.
    pub stopwords: &'static Lazy<Regex>,
    pub rules: &'static [KeywordRule],
    pub prefix: &'static str,
}

static STRAP_MATERIAL_STOPWORDS: Lazy<Regex> =
    Lazy::new(|| stopword_pattern(&["dây", "band", "màu"]).unwrap());

pub static STRAP_MATERIAL: ClassifierTable = ClassifierTable {
    stopwords: &STRAP_MATERIAL_STOPWORDS,
    prefix: "Dây ",
    rules: &[
        rule(&["nhựa", "resin"], "nhựa"),
        rule(&["cao su", "rubber"], "cao su"),
        rule(&["da bò", "genuine leather"], "da bò"),
        rule(&["da", "leather"], "da"),
        rule(&["kim loại", "inox", "thép", "metal", "steel"], "kim loại"),
        rule(&["lưới", "mesh"], "lưới"),
        rule(&["vải", "dệt", "canvas"], "vải"),
        rule(&["nylon"], "nylon"),
        rule(&["silicone"], "silicone"),
        rule(&["gốm", "ceramic"], "gốm"),
        rule(&["mạ vàng", "gold plated", "mạ", "mạ gold"], "kim loại"),
    ],
};

static STRAP_COLOR_STOPWORDS: Lazy<Regex> =
    Lazy::new(|| stopword_pattern(&["dây", "band", "strap", "có"]).unwrap());

pub static STRAP_COLOR: ClassifierTable = ClassifierTable {
    stopwords: &STRAP_COLOR_STOPWORDS,
    prefix: "",
    rules: &[
        rule(&["đen", "black"], "Đen"),
        rule(&["trắng", "white"], "Trắng"),
        rule(&["nâu", "brown"], "Nâu"),
        rule(&["đỏ", "red"], "Đỏ"),
        rule(&["bạc", "silver"], "Bạc"),
        rule(&["kem", "beige"], "Kem"),
        rule(&["xám", "ghi", "grey"], "Xám"),
        rule(&["xanh dương", "blue"], "Xanh Dương"),
        rule(&["xanh navy", "navy"], "Xanh Navy"),
        rule(&["xanh lá", "green"], "Xanh"),
        rule(&["xanh"], "Xanh"),
        rule(&["vàng gold", "gold"], "Vàng Gold"),
        rule(&["vàng hồng", "rose gold"], "Vàng Hồng"),
        rule(&["vàng"], "Vàng"),
        rule(&["hồng", "pink"], "Hồng"),
    ],
};

static CASE_COLOR_STOPWORDS: Lazy<Regex> =
    Lazy::new(|| stopword_pattern(&["có"]).unwrap());

pub static CASE_COLOR: ClassifierTable = ClassifierTable {
    stopwords: &CASE_COLOR_STOPWORDS,
    prefix: "",
    rules: &[
        rule(&["đen"], "Đen"),
        rule(&["hồng"], "Hồng"),
        rule(&["trắng"], "Trắng"),
        rule(&["nâu"], "Nâu"),
        rule(&["đỏ"], "Đỏ"),
        rule(&["tím"], "Tím"),
        rule(&["bạc", "silver"], "Bạc"),
        rule(&["kem"], "Kem"),
        rule(&["ivory"], "Ivory"),
        rule(&["champagne"], "Champagne"),
        rule(&["xám", "ghi"], "Xám"),
        rule(&["xanh dương", "blue"], "Xanh Dương"),
        rule(&["xanh navy", "navy"], "Xanh Navy"),
        rule(&["xanh lá", "xanh rêu"], "Xanh lá"),
        rule(&["xanh"], "Xanh"),
        rule(&["vàng gold", "gold"], "Vàng Gold"),
        rule(&["vàng hồng", "rose gold"], "Vàng Hồng"),
        rule(&["vàng"], "Vàng"),
        rule(&["hoạ tiết", "pattern"], "Hoạ Tiết"),
        rule(&["hai màu", "two tone", "2 tone"], "Hai Màu"),
        rule(&["điện tử"], "Điện tử"),
    ],
};
