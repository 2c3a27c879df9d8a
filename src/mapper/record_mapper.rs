// Per-row mapping from a source catalog record to a target product
use crate::classifier::{case_color, strap_color, strap_material};
use crate::mapper::body_html::{BodyInput, generate_body_html};
use crate::mapper::catalog_tables::{WATCHES, product_category, seo_title};
use crate::mapper::description::DescriptionPools;
use crate::model::{Metafields, PlatformDefaults, SourceRecord, TargetRecord};
use crate::normalizer::capitalize_words;
use crate::parser::{extract_first, extract_labeled_value};
use crate::utils::{clean_code, strip_html, to_handle};
use tracing::debug;

pub const DEFAULT_FACE_SHAPE: &str = "Mặt tròn";

const DESCRIPTION: &[&str] = &["Description"];
const VENDOR: &[&str] = &["Vendor", "Thương hiệu"];
const TYPE: &[&str] = &["Type"];
const SKU: &[&str] = &["Product code", "Mã hàng", "Mã SKU", "Mã sản phẩm"];
const GENDER: &[&str] = &["Giới tính", "Gender"];
const TITLE: &[&str] = &["Tên sản phẩm", "TEN SAN PHAM", "Title"];
const SHORT_DESCRIPTION: &[&str] = &["Mô tả"];
const SALE_PRICE: &[&str] = &["Giá sale", "Giá giảm", "Variant Price"];
const COMPARE_PRICE: &[&str] = &["Giá bán lẻ", "Giá bán"];
const QUANTITY: &[&str] = &["Quantity", "Số lượng"];
const SIZE_LABELS: &[&str] = &["Size", "Đường kính", "Kích thước"];
const CASE_COLOR_FIELD: &str = "PRODUCT.METAFIELDS.CUSTOM.CASECOLOR";
const FACE_SHAPE_FIELD: &str = "PRODUCT.METAFIELDS.CUSTOM.FACESHAPE";

/// Trait defining the interface for a row mapper.
pub trait Mapper {
    fn map_record(&self, source: &SourceRecord) -> TargetRecord;
}

/// Maps source catalog rows onto the commerce template fields.
#[derive(Debug, Clone)]
pub struct CatalogMapper {
    pools: DescriptionPools,
    image_src: String,
}

impl CatalogMapper {
    pub fn new(pools: DescriptionPools, image_src: impl Into<String>) -> Self {
        Self {
            pools,
            image_src: image_src.into(),
        }
    }
}

fn or_else(value: String, fallback: impl FnOnce() -> String) -> String {
    if value.is_empty() { fallback() } else { value }
}

/// Comma-joined tag list. Empty parts keep their position.
pub fn build_tags(
    gender: &str,
    vendor: &str,
    size: &str,
    product_type: &str,
    strap: &str,
    water_resistance: &str,
) -> String {
    let gender = if gender == "Unisex" { "Unisex, Nam, Nữ" } else { gender };
    let kind = if product_type == WATCHES { "Watch, Watches" } else { product_type };
    [gender, vendor, size, kind, strap, water_resistance].join(", ")
}

impl Mapper for CatalogMapper {
    fn map_record(&self, source: &SourceRecord) -> TargetRecord {
        let desc = source.first_of(DESCRIPTION);
        let vendor = source.first_of(VENDOR);
        let product_type = source.first_of(TYPE);
        let sku = SKU
            .iter()
            .map(|label| clean_code(source.get(label)))
            .find(|code| !code.is_empty())
            .unwrap_or_default();

        let gender = or_else(extract_labeled_value(&desc, "Giới tính"), || {
            source.first_of(GENDER)
        });

        let strap_raw = extract_labeled_value(&desc, "Dây đeo");
        let strap = strap_material(&strap_raw);
        let strap_colour = strap_color(&strap_raw);
        let water_resistance = extract_labeled_value(&desc, "Chống nước");

        let title_raw = capitalize_words(&source.first_of(TITLE));
        let title = if product_type == WATCHES {
            format!("Đồng Hồ {} {}", gender, title_raw)
        } else {
            title_raw.clone()
        };

        let short_description = or_else(source.first_of(SHORT_DESCRIPTION), || {
            self.pools.pick(&product_type, &sku, &gender, &title_raw)
        });

        let size = or_else(extract_first(&desc, SIZE_LABELS), || source.first_of(&["Size"]));

        let case_colour_raw = or_else(extract_labeled_value(&desc, "Màu mặt số"), || {
            source.first_of(&[CASE_COLOR_FIELD])
        });
        let case_colour = case_color(&case_colour_raw);
        let face_shape = or_else(extract_labeled_value(&desc, "Hình dạng mặt số"), || {
            source.first_of(&[FACE_SHAPE_FIELD])
        });

        debug!("Mapping row: sku={} type={}", sku, product_type);

        let body_html = generate_body_html(&BodyInput {
            source,
            description: &desc,
            short_description: &short_description,
            sku: &sku,
            gender: &gender,
            vendor: &vendor,
            product_type: &product_type,
            size: &size,
        });

        let mut target = TargetRecord {
            title,
            vendor: vendor.clone(),
            product_category: product_category(&product_type).to_string(),
            gender: gender.clone(),
            tags: build_tags(&gender, &vendor, &size, &product_type, &strap, &water_resistance),
            sku: sku.clone(),
            inventory_qty: source.first_of(QUANTITY),
            seo_title: seo_title(&product_type, &gender, &capitalize_words(&vendor), &title_raw),
            handle: to_handle(&format!("{}-{}", vendor, sku)),
            price: source.first_of(SALE_PRICE),
            compare_at_price: source.first_of(COMPARE_PRICE),
            seo_description: strip_html(&short_description),
            image_src: self.image_src.clone(),
            body_html,
            defaults: PlatformDefaults::default(),
            metafields: Metafields {
                strap_color: or_else(strap_colour, || case_colour.clone()),
                case_color: case_colour,
                face_shape: or_else(face_shape, || DEFAULT_FACE_SHAPE.to_string()),
                face_size: size,
                gender,
                band_material: strap,
            },
            product_type,
            ..Default::default()
        };
        target.absorb_passthrough(source);
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::keys;

    fn record(pairs: &[(&str, &str)]) -> SourceRecord {
        SourceRecord::from_raw(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn mapper() -> CatalogMapper {
        CatalogMapper::new(DescriptionPools::default(), "https://cdn.example/logo.jpg")
    }

    fn furla() -> SourceRecord {
        record(&[
            ("Vendor", "Furla"),
            ("Type", "Watches"),
            ("Tên sản phẩm", "co 38mm"),
            (
                "Description",
                "Chất liệu vỏ máy: Kim loại\nMàu sắc: Đen\nMáy: Automatic",
            ),
            ("Mã SKU", "FUR001"),
        ])
    }

    #[test]
    fn watch_row_end_to_end() {
        let t = mapper().map_record(&furla());
        assert_eq!(t.title, "Đồng Hồ  Co 38mm");
        assert_eq!(t.vendor, "Furla");
        assert_eq!(t.handle, "Furla-FUR001");
        assert_eq!(t.sku, "FUR001");
        assert_eq!(t.gender, "");
        assert_eq!(t.seo_title, "Đồng Hồ  Furla Co 38mm");
        assert_eq!(t.product_category, "Apparel & Accessories > Jewelry > Watches");
        assert_eq!(t.tags, ", Furla, , Watch, Watches, , ");
        assert_eq!(t.image_src, "https://cdn.example/logo.jpg");
        assert_eq!(t.metafields.face_shape, DEFAULT_FACE_SHAPE);
        assert!(t.body_html.contains("<li>Xuất xứ thương hiệu: Ý</li>"));
    }

    #[test]
    fn synthesized_description_feeds_seo_description() {
        let t = mapper().map_record(&furla());
        let expected = DescriptionPools::default().pick("Watches", "FUR001", "", "Co 38mm");
        assert!(expected.contains("<b>Co 38mm</b>"));
        assert!(t.body_html.starts_with(&format!("<p>{}</p>", expected)));
        assert_eq!(t.seo_description, expected.replace("<b>", "").replace("</b>", ""));
    }

    #[test]
    fn explicit_short_description_wins() {
        let rec = SourceRecord::from_raw(
            furla()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .chain([("Mô tả".to_string(), "<i>Đẹp</i> lắm".to_string())])
                .collect(),
        );
        let t = mapper().map_record(&rec);
        assert_eq!(t.seo_description, "Đẹp lắm");
    }

    #[test]
    fn strap_and_metafields_from_description() {
        let rec = record(&[
            ("Thương hiệu", "Guess"),
            ("Type", "Watches"),
            ("Title", "GW0001"),
            (
                "Description",
                "Giới tính: Unisex\nDây đeo: Dây cao su màu xanh navy\nChống nước: 5 ATM\nĐường kính: 40mm\nMàu mặt số: Bạc\nHình dạng mặt số: Mặt vuông",
            ),
            ("Product code", "\"GW 0001\"\n"),
        ]);
        let t = mapper().map_record(&rec);
        assert_eq!(t.gender, "Unisex");
        assert_eq!(t.sku, "GW 0001");
        assert_eq!(t.handle, "Guess-GW-0001");
        assert_eq!(
            t.tags,
            "Unisex, Nam, Nữ, Guess, 40mm, Watch, Watches, Dây cao su, 5 ATM"
        );
        assert_eq!(t.metafields.band_material, "Dây cao su");
        assert_eq!(t.metafields.strap_color, "Xanh Navy");
        assert_eq!(t.metafields.case_color, "Bạc");
        assert_eq!(t.metafields.face_shape, "Mặt vuông");
        assert_eq!(t.metafields.face_size, "40mm");
    }

    #[test]
    fn quote_only_sku_falls_through_to_next_candidate() {
        let rec = record(&[
            ("Vendor", "Furla"),
            ("Product code", "\"\""),
            ("Mã hàng", "MH1"),
        ]);
        let t = mapper().map_record(&rec);
        assert_eq!(t.sku, "MH1");
        assert_eq!(t.handle, "Furla-MH1");
        assert_eq!(t.get(keys::VARIANT_SKU), Some("MH1"));
    }

    #[test]
    fn strap_color_falls_back_to_case_color() {
        let rec = record(&[("Description", "Màu mặt số: Trắng\nDây đeo: Thép")]);
        let t = mapper().map_record(&rec);
        assert_eq!(t.metafields.strap_color, "Trắng");
        assert_eq!(t.metafields.band_material, "Dây kim loại");
    }

    #[test]
    fn non_watch_title_and_seo_fallback() {
        let rec = record(&[
            ("Vendor", "by far"),
            ("Type", "Wallets"),
            ("Tên sản phẩm", "VÍ DA"),
            ("Giới tính", "Nữ"),
            ("Mã hàng", "BF1"),
            ("Giá sale", "1000"),
            ("Giá bán lẻ", "2000"),
            ("Số lượng", "3"),
        ]);
        let t = mapper().map_record(&rec);
        assert_eq!(t.title, "Ví Da");
        assert_eq!(t.gender, "Nữ");
        assert_eq!(t.seo_title, "By Far Ví Da");
        assert_eq!(t.tags, "Nữ, by far, , Wallets, , ");
        assert_eq!(t.price, "1000");
        assert_eq!(t.compare_at_price, "2000");
        assert_eq!(t.inventory_qty, "3");
        assert_eq!(t.handle, "by-far-BF1");
        // no pool for wallets
        assert_eq!(t.seo_description, "");
    }

    #[test]
    fn platform_constants_present() {
        let t = mapper().map_record(&SourceRecord::default());
        assert_eq!(t.get(keys::VARIANT_FULFILLMENT_SERVICE), Some("manual"));
        assert_eq!(t.get(keys::STATUS), Some("draft"));
        assert_eq!(t.get(keys::INVENTORY_POLICY), Some("deny"));
        assert_eq!(t.get(keys::VARIANT_INVENTORY_POLICY), Some("DENY"));
        assert_eq!(t.get(keys::PUBLISHED), Some("TRUE"));
    }

    #[test]
    fn raw_columns_pass_through_without_clobbering() {
        let rec = record(&[
            ("Tên sản phẩm", "co"),
            ("Handle", "raw-handle"),
            ("Tags", "raw, tags"),
            ("Barcode", "8938"),
        ]);
        let t = mapper().map_record(&rec);
        assert_eq!(t.get("HANDLE"), Some("-"));
        assert_eq!(t.get("TAGS"), Some(", , , , , "));
        assert_eq!(t.get("BARCODE"), Some("8938"));
        assert_eq!(t.get("TÊN SẢN PHẨM"), Some("co"));
    }
}
