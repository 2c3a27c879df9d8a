use crate::mapper::DescriptionPools;
use crate::model::ConfigError;
use crate::parser::TableFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_IMAGE_SRC: &str =
    "https://cdn.shopify.com/s/files/1/0862/7906/1824/files/L_M_Logo.jpg?v=1767866894";

fn default_template() -> String {
    "./ONE.xlsx".to_string()
}

fn default_output_stem() -> String {
    "FILLED_ONE_FROM_TWO".to_string()
}

fn default_format() -> TableFormat {
    TableFormat::Xlsx
}

fn default_image_src() -> String {
    DEFAULT_IMAGE_SRC.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Header template location: file path or http(s) URL.
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_output_stem")]
    pub output_stem: String,
    #[serde(default = "default_format")]
    pub format: TableFormat,
    #[serde(default = "default_image_src")]
    pub image_src: String,
    /// JSON file replacing the built-in description pools.
    #[serde(default)]
    pub description_pools: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            output_stem: default_output_stem(),
            format: default_format(),
            image_src: default_image_src(),
            description_pools: None,
        }
    }
}

impl AppConfig {
    /// Built-in pools unless a pools file is configured.
    pub fn load_pools(&self) -> Result<DescriptionPools, ConfigError> {
        let Some(path) = &self.description_pools else {
            return Ok(DescriptionPools::default());
        };
        let content = read(path)?;
        DescriptionPools::from_json(&content).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// `<stem>.<ext>` for the configured format.
    pub fn output_file_name(&self, format: TableFormat) -> String {
        format!("{}.{}", self.output_stem, format.extension())
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// An explicit path must exist; the default `config.json` is optional.
pub fn load_or_default(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                load_config(default)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.template, "./ONE.xlsx");
        assert_eq!(cfg.format, TableFormat::Xlsx);
        assert_eq!(cfg.output_file_name(cfg.format), "FILLED_ONE_FROM_TWO.xlsx");
        assert_eq!(cfg.image_src, DEFAULT_IMAGE_SRC);
    }

    #[test]
    fn overrides_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"template": "https://host/ONE.xlsx", "format": "csv", "output_stem": "out"}}"#
        )
        .unwrap();
        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.template, "https://host/ONE.xlsx");
        assert_eq!(cfg.format, TableFormat::Csv);
        assert_eq!(cfg.output_file_name(TableFormat::Csv), "out.csv");
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_or_default(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn bad_json_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn pools_file_replaces_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"handbags": {{"unisex": ["Túi {{{{NAME}}}}"]}}}}"#).unwrap();
        let cfg = AppConfig {
            description_pools: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let pools = cfg.load_pools().unwrap();
        assert_eq!(pools.pick("Handbags", "H1", "", "Mini"), "Túi <b>Mini</b>");
        assert_eq!(pools.pick("Watches", "H1", "", "Mini"), "");
    }
}
