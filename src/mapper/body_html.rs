// Product detail HTML for the "Body (HTML)" column
use crate::mapper::catalog_tables::{WATCHES, brand_country};
use crate::model::SourceRecord;
use crate::normalizer::normalize_vendor_key;
use crate::parser::{extract_first, extract_labeled_value};

/// Inputs already resolved by the record mapper.
#[derive(Debug, Clone, Copy)]
pub struct BodyInput<'a> {
    pub source: &'a SourceRecord,
    pub description: &'a str,
    pub short_description: &'a str,
    pub sku: &'a str,
    pub gender: &'a str,
    pub vendor: &'a str,
    pub product_type: &'a str,
    pub size: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandOrigin {
    /// Brand country only.
    Country(&'static str),
    /// Italian brand, Swiss-made.
    ItalianSwissMade,
    /// Brand country plus a Japanese movement.
    CountryJapaneseMovement(&'static str),
}

pub fn brand_origin(vendor: &str) -> BrandOrigin {
    match normalize_vendor_key(vendor).as_str() {
        "FURLA" | "LOCMAN" => BrandOrigin::Country(brand_country(vendor)),
        "FERRAGAMO" | "VERSACE" => BrandOrigin::ItalianSwissMade,
        _ => BrandOrigin::CountryJapaneseMovement(brand_country(vendor)),
    }
}

/// Movement is "Automatic" only when the sheet says exactly that.
pub fn movement(raw: &str) -> &'static str {
    if raw == "Automatic" { "Automatic" } else { "Quartz" }
}

pub fn generate_body_html(input: &BodyInput<'_>) -> String {
    let desc = input.description;
    let row = input.source;

    let material = first_non_empty(&[
        extract_first(desc, &["Chất liệu", "Chất liệu vỏ máy"]),
        row.get("Chất liệu").to_string(),
    ]);

    let mut html = String::new();
    html.push_str(&format!("<p>{}</p>\n", input.short_description));
    html.push_str("<p><strong>Thông số sản phẩm</strong></p>\n<ul>\n");
    item(&mut html, "Mã SKU", input.sku);
    item(&mut html, "Giới tính", input.gender);

    if input.product_type == WATCHES {
        let dial_color = first_non_empty(&[
            extract_first(desc, &["Màu sắc", "Màu mặt số"]),
            row.first_of(&["Màu sắc", "Color"]),
        ]);
        let bezel = extract_labeled_value(desc, "Viền đồng hồ");
        let glass = extract_first(desc, &["Chất liệu kính", "Chất liệu mặt kính"]);
        let water = extract_labeled_value(desc, "Chống nước");
        let machine = movement(&extract_labeled_value(desc, "Máy"));
        let strap = extract_labeled_value(desc, "Dây đeo");

        item(&mut html, "Chất liệu vỏ máy", &material);
        item(&mut html, "Viền đồng hồ", &bezel);
        item(&mut html, "Đường kính", input.size);
        item(&mut html, "Màu mặt số", &dial_color);
        item(&mut html, "Chất liệu kính", &glass);
        item(&mut html, "Chống nước", &water);
        item(&mut html, "Máy", machine);
        item(&mut html, "Dây đeo", &strap);

        match brand_origin(input.vendor) {
            BrandOrigin::Country(country) => {
                item(&mut html, "Xuất xứ thương hiệu", country);
            }
            BrandOrigin::ItalianSwissMade => {
                item(&mut html, "Xuất xứ thương hiệu", "Ý");
                item(&mut html, "Sản xuất tại", "Thụy Sĩ");
            }
            BrandOrigin::CountryJapaneseMovement(country) => {
                item(&mut html, "Xuất xứ thương hiệu", country);
                item(&mut html, "Xuất xứ máy", "Máy Nhật");
            }
        }
    } else {
        let color = extract_labeled_value(desc, "Màu sắc");
        item(&mut html, "Chất liệu", &material);
        item(&mut html, "Màu sắc", &color);
        item(&mut html, "Size", input.size);
        item(&mut html, "Xuất xứ thương hiệu", brand_country(input.vendor));
    }

    html.push_str("</ul>");
    html
}

fn item(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!("<li>{}: {}</li>\n", label, value));
}

fn first_non_empty(candidates: &[String]) -> String {
    candidates
        .iter()
        .find(|c| !c.is_empty())
        .cloned()
        .unwrap_or_default()
}
