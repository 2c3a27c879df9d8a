// Deterministic marketing blurb selection
use crate::normalizer::normalize_for_matching;
use crate::utils::hash_string;
use serde::Deserialize;
use std::collections::HashMap;

pub const NAME_PLACEHOLDER: &str = "{{NAME}}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderKey {
    Male,
    Female,
    Unisex,
}

impl GenderKey {
    /// "nam" means male, "nữ"/"nu" female, anything else unisex.
    pub fn from_text(gender: &str) -> Self {
        let g = normalize_for_matching(gender);
        if g.contains("nam") || g == "male" {
            GenderKey::Male
        } else if g.contains("nữ") || g.contains("nu") || g == "female" {
            GenderKey::Female
        } else {
            GenderKey::Unisex
        }
    }
}

/// Templates for one category, split by gender.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenderPool {
    #[serde(default)]
    pub male: Vec<String>,
    #[serde(default)]
    pub female: Vec<String>,
    #[serde(default)]
    pub unisex: Vec<String>,
}

impl GenderPool {
    /// Gendered list, or the unisex list when that one is empty.
    pub fn list(&self, key: GenderKey) -> &[String] {
        let list = match key {
            GenderKey::Male => &self.male,
            GenderKey::Female => &self.female,
            GenderKey::Unisex => &self.unisex,
        };
        if list.is_empty() { &self.unisex } else { list }
    }
}

/// Category names (lower-case) and the pool each one reads from.
const CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("watches", "watches"),
    ("watch", "watches"),
    ("dongho", "watches"),
    ("sunglasses", "sunglasses"),
    ("kính", "sunglasses"),
    ("kinhram", "sunglasses"),
];

/// Category pools keyed by lower-case category name.
#[derive(Debug, Clone)]
pub struct DescriptionPools {
    pools: HashMap<String, GenderPool>,
}

impl DescriptionPools {
    pub fn new(pools: HashMap<String, GenderPool>) -> Self {
        let pools = pools
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Self { pools }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let pools: HashMap<String, GenderPool> = serde_json::from_str(text)?;
        Ok(Self::new(pools))
    }

    fn pool_for(&self, category: &str) -> Option<&GenderPool> {
        let category = category.trim().to_lowercase();
        let key = CATEGORY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == category)
            .map(|(_, pool)| *pool)
            .unwrap_or(category.as_str());
        self.pools.get(key)
    }

    /// Picks a template by hashing the SKU (or the title when the SKU is
    /// empty) and substitutes the bold title for the placeholder. Empty when
    /// the category has no pool.
    pub fn pick(&self, category: &str, sku: &str, gender: &str, title: &str) -> String {
        let Some(pool) = self.pool_for(category) else {
            return String::new();
        };
        let list = pool.list(GenderKey::from_text(gender));
        if list.is_empty() {
            return String::new();
        }
        let seed = if sku.is_empty() { title } else { sku };
        let index = hash_string(seed) as usize % list.len();
        list[index].replacen(NAME_PLACEHOLDER, &format!("<b>{}</b>", title), 1)
    }
}

impl Default for DescriptionPools {
    fn default() -> Self {
        let to_vec = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let mut pools = HashMap::new();
        pools.insert(
            "watches".to_string(),
            GenderPool {
                male: to_vec(WATCHES_MALE),
                female: to_vec(WATCHES_FEMALE),
                unisex: to_vec(WATCHES_UNISEX),
            },
        );
        pools.insert(
            "sunglasses".to_string(),
            GenderPool {
                male: to_vec(SUNGLASSES_MALE),
                female: to_vec(SUNGLASSES_FEMALE),
                unisex: to_vec(SUNGLASSES_UNISEX),
            },
        );
        Self { pools }
    }
}

const WATCHES_MALE: &[&str] = &[
    "{{NAME}} mang phong cách lịch lãm, mạnh mẽ, là điểm nhấn hoàn hảo cho quý ông hiện đại.",
    "Thiết kế nam tính cùng bộ máy bền bỉ giúp {{NAME}} đồng hành cùng bạn trong mọi hoàn cảnh.",
    "{{NAME}} là lựa chọn tinh tế cho những người đàn ông trân trọng từng khoảnh khắc.",
    "Đường nét tối giản, chắc chắn của {{NAME}} khẳng định bản lĩnh và gu thẩm mỹ riêng.",
];

const WATCHES_FEMALE: &[&str] = &[
    "{{NAME}} tôn lên vẻ thanh lịch và nữ tính trên cổ tay của phái đẹp.",
    "Thiết kế mềm mại, tinh xảo giúp {{NAME}} trở thành món phụ kiện không thể thiếu của nàng.",
    "{{NAME}} là món quà ý nghĩa dành cho người phụ nữ yêu sự sang trọng.",
    "Nhỏ gọn và duyên dáng, {{NAME}} hoàn thiện mọi set đồ từ công sở đến dạo phố.",
];

const WATCHES_UNISEX: &[&str] = &[
    "{{NAME}} sở hữu thiết kế hiện đại, phù hợp cho cả nam và nữ.",
    "Phong cách trẻ trung, dễ phối đồ, {{NAME}} là lựa chọn lý tưởng cho mọi lứa tuổi.",
    "{{NAME}} kết hợp hài hòa giữa tính thời trang và độ bền cho sử dụng hằng ngày.",
];

const SUNGLASSES_MALE: &[&str] = &[
    "{{NAME}} với form dáng nam tính giúp bảo vệ đôi mắt và nâng tầm phong cách.",
    "Gọng chắc chắn, tròng kính chất lượng, {{NAME}} là người bạn đồng hành trên mọi hành trình.",
];

const SUNGLASSES_FEMALE: &[&str] = &[
    "{{NAME}} tôn lên gương mặt thanh tú và phong cách thời thượng của phái đẹp.",
    "Kiểu dáng thời trang, nhẹ nhàng, {{NAME}} giúp nàng tự tin dưới nắng.",
];

const SUNGLASSES_UNISEX: &[&str] = &[
    "{{NAME}} có thiết kế trung tính, dễ đeo cho cả nam và nữ.",
    "Bảo vệ mắt khỏi tia UV, {{NAME}} là phụ kiện không thể thiếu cho những ngày nắng.",
];
