// Process-wide constant lookup tables for brands and categories.
use crate::normalizer::normalize_vendor_key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const UNKNOWN_COUNTRY: &str = "chưa xác định";

/// The only category with the watch-specific title, tags and HTML body.
pub const WATCHES: &str = "Watches";

const RAW_BRAND_COUNTRY: &[(&str, &str)] = &[
    ("Alexander McQueen", "Anh"),
    ("Dolce & Gabbana", "Ý"),
    ("Balenciaga", "Tây Ban Nha"),
    ("Chopard", "Thụy Sĩ"),
    ("Montblanc", "Thụy Sĩ"),
    ("Miu Miu", "Ý"),
    ("Ferragamo", "Thụy Sĩ"),
    ("Ted Baker", "Anh Quốc"),
    ("Philipp Plein", "Đức"),
    ("Guess", "Hoa Kỳ"),
    ("Adidas", "Đức"),
    ("Furla", "Ý"),
    ("Locman", "Ý"),
    ("Missoni", "Ý"),
    ("Versace", "Ý"),
    ("Vivienne Westwood", "Anh"),
    ("By Far", "Bungari"),
    ("Burberry", "Anh Quốc"),
    ("Fendi", "Ý"),
    ("Jimmy Choo", "Anh Quốc"),
    ("Roberto Cavalli", "Ý"),
    ("Givenchy", "Pháp"),
    ("Stella McCartney", "Anh Quốc"),
    ("Versus By Versace", "Ý"),
];

static BRAND_COUNTRY: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    RAW_BRAND_COUNTRY
        .iter()
        .map(|(brand, country)| (normalize_vendor_key(brand), *country))
        .collect()
});

/// Country of origin for a vendor, accent- and case-insensitive.
pub fn brand_country(vendor: &str) -> &'static str {
    BRAND_COUNTRY
        .get(&normalize_vendor_key(vendor))
        .copied()
        .unwrap_or(UNKNOWN_COUNTRY)
}

const PRODUCT_CATEGORIES: &[(&str, &str)] = &[
    ("Watches", "Apparel & Accessories > Jewelry > Watches"),
    ("Sunglasses", "Apparel & Accessories > Clothing Accessories > Sunglasses"),
    ("Handbags", "Apparel & Accessories > Handbags, Wallets & Cases > Handbags"),
    ("Earrings", "Apparel & Accessories > Jewelry > Earrings"),
    ("Necklaces", "Apparel & Accessories > Jewelry > Necklaces"),
    ("Bracelets", "Apparel & Accessories > Jewelry > Bracelets"),
    ("Rings", "Apparel & Accessories > Jewelry > Rings"),
    (
        "Wallets",
        "Apparel & Accessories > Handbags, Wallets & Cases > Wallets & Money Clips > Wallets",
    ),
    (
        "HairPin",
        "Health & Beauty > Personal Care > Hair Care > Hair Styling Tool Accessories > Hair Curler Clips & Pins",
    ),
    ("WatchBand", "Apparel & Accessories > Jewelry > Watch Bands"),
];

/// Platform taxonomy path for a product type; exact match.
pub fn product_category(product_type: &str) -> &'static str {
    PRODUCT_CATEGORIES
        .iter()
        .find(|(name, _)| *name == product_type)
        .map(|(_, path)| *path)
        .unwrap_or("")
}

const SEO_TITLE_PREFIXES: &[(&str, &str)] = &[
    ("Watches", "Đồng Hồ"),
    ("Sunglasses", "Gọng Kính"),
    ("Handbags", "Túi Xách"),
    ("Earrings", "Bông Tai"),
    ("Necklaces", "Vòng Cổ"),
    ("Bracelets", "Vòng Tay"),
    ("Rings", "Nhẫn"),
    ("HairPin", "Kẹp Tóc"),
    ("WatchBand", "Dây Đồng Hồ"),
];

/// `"<prefix> <gender> <vendor> <title>"` for known categories, otherwise
/// `"<vendor> <title>"`. `vendor` is expected already capitalized.
pub fn seo_title(product_type: &str, gender: &str, vendor: &str, title: &str) -> String {
    match SEO_TITLE_PREFIXES.iter().find(|(name, _)| *name == product_type) {
        Some((_, prefix)) => format!("{} {} {} {}", prefix, gender, vendor, title),
        None => format!("{} {}", vendor, title),
    }
}
