use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::{QueryParams, UrlPolicy, DEFAULT_PAD_WIDTH, DEFAULT_SCHEMES};

/// Global configuration loaded from `~/.config/anidl/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnidlConfig {
    /// Schemes accepted by `anidl check-url`.
    #[serde(default = "default_schemes")]
    pub allowed_url_schemes: Vec<String>,
    /// Width used when zero-padding episode numbers.
    #[serde(default = "default_pad_width")]
    pub pad_width: usize,
    /// Parameters added to every `anidl join`; parameters given on the command line win.
    #[serde(default)]
    pub default_query: Option<QueryParams>,
}

fn default_schemes() -> Vec<String> {
    DEFAULT_SCHEMES.iter().map(|s| s.to_string()).collect()
}

fn default_pad_width() -> usize {
    DEFAULT_PAD_WIDTH
}

impl Default for AnidlConfig {
    fn default() -> Self {
        Self {
            allowed_url_schemes: default_schemes(),
            pad_width: default_pad_width(),
            default_query: None,
        }
    }
}

impl AnidlConfig {
    /// Builds the URL policy described by `allowed_url_schemes`.
    pub fn url_policy(&self) -> Result<UrlPolicy> {
        UrlPolicy::from_schemes(&self.allowed_url_schemes)
            .context("invalid allowed_url_schemes in config")
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("anidl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AnidlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AnidlConfig::default();
        write_to(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from a specific file.
pub fn load_from(path: &Path) -> Result<AnidlConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: AnidlConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

fn write_to(path: &Path, cfg: &AnidlConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::QueryValue;

    #[test]
    fn default_config_values() {
        let cfg = AnidlConfig::default();
        assert_eq!(cfg.allowed_url_schemes, vec!["http", "https"]);
        assert_eq!(cfg.pad_width, 3);
        assert!(cfg.default_query.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = AnidlConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AnidlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: AnidlConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, AnidlConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            allowed_url_schemes = ["https"]
            pad_width = 4

            [default_query]
            server = 35
            lang = "en"
        "#;
        let cfg: AnidlConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.pad_width, 4);
        let q = cfg.default_query.as_ref().unwrap();
        assert_eq!(q.get_index(0), Some((&"server".to_string(), &QueryValue::Integer(35))));
        assert_eq!(q.get("lang"), Some(&QueryValue::from("en")));
        let policy = cfg.url_policy().unwrap();
        assert!(!policy.permits("http://example.com"));
        assert!(policy.permits("https://example.com"));
    }

    #[test]
    fn config_invalid_scheme_is_error() {
        let cfg = AnidlConfig {
            allowed_url_schemes: vec!["ht tp".into()],
            ..AnidlConfig::default()
        };
        assert!(cfg.url_policy().is_err());
    }

    #[test]
    fn load_from_file_and_write_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        write_to(&path, &AnidlConfig::default()).unwrap();
        assert_eq!(load_from(&path).unwrap(), AnidlConfig::default());

        std::fs::write(&path, "pad_width = \"wide\"").unwrap();
        assert!(load_from(&path).is_err());
    }
}
