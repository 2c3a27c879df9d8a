// Core structs: SourceRecord, TargetRecord, HeaderTemplate, OutputRow
use crate::normalizer::normalize_key;
use std::collections::HashMap;
use thiserror::Error;

/// One input row as read from the source table, before normalization.
pub type RawRow = Vec<(String, String)>;

/// One input row keyed by normalized field name. Values are trimmed.
#[derive(Debug, Clone, Default)]
pub struct SourceRecord {
    fields: HashMap<String, String>,
}

impl SourceRecord {
    /// Normalizes every header with [`normalize_key`]. Later duplicates win.
    pub fn from_raw(row: RawRow) -> Self {
        let fields = row
            .into_iter()
            .map(|(key, value)| (normalize_key(&key), value.trim().to_string()))
            .collect();
        Self { fields }
    }

    /// Looks up a field by any spelling of its label.
    pub fn get(&self, label: &str) -> &str {
        self.fields
            .get(&normalize_key(label))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// First non-blank value among the candidate labels, trimmed.
    pub fn first_of(&self, labels: &[&str]) -> String {
        labels
            .iter()
            .map(|label| self.get(label).trim())
            .find(|value| !value.is_empty())
            .unwrap_or("")
            .to_string()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Normalized keys of every computed target field.
pub mod keys {
    pub const TITLE: &str = "TITLE";
    pub const VENDOR: &str = "VENDOR";
    pub const TYPE: &str = "TYPE";
    pub const PRODUCT_CATEGORY: &str = "PRODUCT CATEGORY";
    pub const GENDER: &str = "GENDER";
    pub const TAGS: &str = "TAGS";
    pub const VARIANT_SKU: &str = "VARIANT SKU";
    pub const VARIANT_INVENTORY_QTY: &str = "VARIANT INVENTORY QTY";
    pub const VARIANT_FULFILLMENT_SERVICE: &str = "VARIANT FULFILLMENT SERVICE";
    pub const STATUS: &str = "STATUS";
    pub const INVENTORY_POLICY: &str = "INVENTORY POLICY";
    pub const VARIANT_INVENTORY_TRACKER: &str = "VARIANT INVENTORY TRACKER";
    pub const SEO_TITLE: &str = "SEO TITLE";
    pub const HANDLE: &str = "HANDLE";
    pub const PUBLISHED: &str = "PUBLISHED";
    pub const VARIANT_PRICE: &str = "VARIANT PRICE";
    pub const VARIANT_COMPARE_AT_PRICE: &str = "VARIANT COMPARE AT PRICE";
    pub const VARIANT_REQUIRES_SHIPPING: &str = "VARIANT REQUIRES SHIPPING";
    pub const VARIANT_TAXABLE: &str = "VARIANT TAXABLE";
    pub const VARIANT_INVENTORY_POLICY: &str = "VARIANT INVENTORY POLICY";
    pub const SEO_DESCRIPTION: &str = "SEO DESCRIPTION";
    pub const IMAGE_SRC: &str = "IMAGE SRC";
    pub const BODY_HTML: &str = "BODY (HTML)";
    pub const CASE_COLOR: &str = "MÀU MẶT SỐ (PRODUCT.METAFIELDS.CUSTOM.CASECOLOR)";
    pub const FACE_SHAPE: &str = "HÌNH DẠNG MẶT SỐ (PRODUCT.METAFIELDS.CUSTOM.FACESHAPE)";
    pub const FACE_SIZE: &str = "KÍCH THƯỚC MẶT SỐ (PRODUCT.METAFIELDS.CUSTOM.FACESIZE)";
    pub const GENDER_META: &str = "GIỚI TÍNH (PRODUCT.METAFIELDS.CUSTOM.GENDER)";
    pub const STRAP_COLOR: &str = "MÀU DÂY (PRODUCT.METAFIELDS.CUSTOM.M_U_D_Y)";
    pub const BAND_MATERIAL: &str = "CHẤT LIỆU DÂY (PRODUCT.METAFIELDS.CUSTOM.BANDMATERIAL)";
}

/// Metafields attached to a product beyond the primary commerce columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metafields {
    pub case_color: String,
    pub face_shape: String,
    pub face_size: String,
    pub gender: String,
    pub strap_color: String,
    pub band_material: String,
}

/// Fixed values every exported product carries.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformDefaults {
    pub fulfillment_service: &'static str,
    pub status: &'static str,
    pub inventory_policy: &'static str,
    pub inventory_tracker: &'static str,
    pub published: &'static str,
    pub requires_shipping: &'static str,
    pub taxable: &'static str,
    pub variant_inventory_policy: &'static str,
}

impl Default for PlatformDefaults {
    fn default() -> Self {
        Self {
            fulfillment_service: "manual",
            status: "draft",
            inventory_policy: "deny",
            inventory_tracker: "shopify",
            published: "TRUE",
            requires_shipping: "TRUE",
            taxable: "TRUE",
            variant_inventory_policy: "DENY",
        }
    }
}

/// One output product. Computed fields are named; every other source column
/// survives in `passthrough`, which never shadows a computed key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetRecord {
    pub title: String,
    pub vendor: String,
    pub product_type: String,
    pub product_category: String,
    pub gender: String,
    pub tags: String,
    pub sku: String,
    pub inventory_qty: String,
    pub seo_title: String,
    pub handle: String,
    pub price: String,
    pub compare_at_price: String,
    pub seo_description: String,
    pub image_src: String,
    pub body_html: String,
    pub defaults: PlatformDefaults,
    pub metafields: Metafields,
    pub(crate) passthrough: HashMap<String, String>,
}

impl TargetRecord {
    /// Value of a computed field by normalized key.
    pub fn computed(&self, key: &str) -> Option<&str> {
        let value = match key {
            keys::TITLE => self.title.as_str(),
            keys::VENDOR => self.vendor.as_str(),
            keys::TYPE => self.product_type.as_str(),
            keys::PRODUCT_CATEGORY => self.product_category.as_str(),
            keys::GENDER => self.gender.as_str(),
            keys::TAGS => self.tags.as_str(),
            keys::VARIANT_SKU => self.sku.as_str(),
            keys::VARIANT_INVENTORY_QTY => self.inventory_qty.as_str(),
            keys::VARIANT_FULFILLMENT_SERVICE => self.defaults.fulfillment_service,
            keys::STATUS => self.defaults.status,
            keys::INVENTORY_POLICY => self.defaults.inventory_policy,
            keys::VARIANT_INVENTORY_TRACKER => self.defaults.inventory_tracker,
            keys::SEO_TITLE => self.seo_title.as_str(),
            keys::HANDLE => self.handle.as_str(),
            keys::PUBLISHED => self.defaults.published,
            keys::VARIANT_PRICE => self.price.as_str(),
            keys::VARIANT_COMPARE_AT_PRICE => self.compare_at_price.as_str(),
            keys::VARIANT_REQUIRES_SHIPPING => self.defaults.requires_shipping,
            keys::VARIANT_TAXABLE => self.defaults.taxable,
            keys::VARIANT_INVENTORY_POLICY => self.defaults.variant_inventory_policy,
            keys::SEO_DESCRIPTION => self.seo_description.as_str(),
            keys::IMAGE_SRC => self.image_src.as_str(),
            keys::BODY_HTML => self.body_html.as_str(),
            keys::CASE_COLOR => self.metafields.case_color.as_str(),
            keys::FACE_SHAPE => self.metafields.face_shape.as_str(),
            keys::FACE_SIZE => self.metafields.face_size.as_str(),
            keys::GENDER_META => self.metafields.gender.as_str(),
            keys::STRAP_COLOR => self.metafields.strap_color.as_str(),
            keys::BAND_MATERIAL => self.metafields.band_material.as_str(),
            _ => return None,
        };
        Some(value)
    }

    /// Copies every source field whose key is not computed.
    pub fn absorb_passthrough(&mut self, source: &SourceRecord) {
        for (key, value) in source.iter() {
            if self.computed(key).is_none() {
                self.passthrough
                    .entry(key.to_string())
                    .or_insert_with(|| value.to_string());
            }
        }
    }

    /// Computed value first, then the raw passthrough column.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.computed(key)
            .or_else(|| self.passthrough.get(key).map(String::as_str))
    }
}

/// Ordered output columns: original header text plus its normalized key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderTemplate {
    columns: Vec<(String, String)>,
}

impl HeaderTemplate {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns = headers
            .into_iter()
            .map(|h| {
                let original = h.as_ref().trim().to_string();
                let normalized = normalize_key(&original);
                (original, normalized)
            })
            .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[(String, String)] {
        &self.columns
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(original, _)| original.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// One exported row, cells in template order keyed by original header text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputRow {
    pub cells: Vec<(String, String)>,
}

impl OutputRow {
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("http error: {0}")]
    HttpError(String),
    #[error("unexpected response status {0}")]
    InvalidResponse(u16),
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("csv decode failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("workbook decode failed: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("workbook has no worksheet")]
    NoWorksheet,
    #[error("table has no header row")]
    MissingHeaderRow,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv encode failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("xlsx encode failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}
