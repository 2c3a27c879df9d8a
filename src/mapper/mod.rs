// Mapper module: turns one source catalog row into one target product.

pub mod body_html;
pub mod catalog_tables;
pub mod description;
pub mod record_mapper;

pub use description::{DescriptionPools, GenderPool};
pub use record_mapper::{CatalogMapper, Mapper};
