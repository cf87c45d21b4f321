//! Page configuration: timings and thresholds for every interactive behavior.
//!
//! Values come from `assets/site.json` (embedded at build time). Every field
//! is defaulted, so the file only needs to name what it overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const SITE_JSON: &str = include_str!("../assets/site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Per-item animation delay step.
    pub stagger_unit_ms: u32,
    /// Wait before re-applying animation classes so the cleared state is committed.
    pub reflow_grace_ms: u32,
    pub section_threshold: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            stagger_unit_ms: 100,
            reflow_grace_ms: 20,
            section_threshold: 0.15,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub active_link_offset_px: f64,
    pub hide_after_px: f64,
    pub scrolled_after_px: f64,
    pub back_to_top_after_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            active_link_offset_px: 200.0,
            hide_after_px: 100.0,
            scrolled_after_px: 10.0,
            back_to_top_after_px: 300.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub typing_start_ms: u32,
    pub typing_char_ms: u32,
    pub parallax_content: f64,
    pub parallax_image: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            typing_start_ms: 500,
            typing_char_ms: 50,
            parallax_content: 0.5,
            parallax_image: 0.3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_delay_ms: u32,
    pub toast_show_ms: u32,
    pub toast_hide_ms: u32,
    pub toast_remove_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            toast_show_ms: 100,
            toast_hide_ms: 3000,
            toast_remove_ms: 300,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// A tick adds `target / speed` to the running value.
    pub speed: u32,
    pub tick_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            speed: 200,
            tick_ms: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: String,
    pub menu: MenuConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub hero: HeroConfig,
    pub contact: ContactConfig,
    pub counter: CounterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            menu: MenuConfig::default(),
            nav: NavConfig::default(),
            reveal: RevealConfig::default(),
            hero: HeroConfig::default(),
            contact: ContactConfig::default(),
            counter: CounterConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: SiteConfig = serde_json::from_str(raw)?;
        cfg.level_filter()?;
        Ok(cfg)
    }

    /// Embedded config, or defaults if it does not parse.
    pub fn load() -> (Self, Option<ConfigError>) {
        match Self::from_json(SITE_JSON) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let cfg = SiteConfig::from_json(SITE_JSON).unwrap();
        assert_eq!(cfg.menu.stagger_unit_ms, 100);
        assert_eq!(cfg.menu.reflow_grace_ms, 20);
        assert!((cfg.menu.section_threshold - 0.15).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = SiteConfig::from_json(r#"{ "menu": { "stagger_unit_ms": 80 } }"#).unwrap();
        assert_eq!(cfg.menu.stagger_unit_ms, 80);
        assert_eq!(cfg.menu.reflow_grace_ms, 20);
        assert_eq!(cfg.nav, NavConfig::default());
        assert_eq!(cfg.contact.submit_delay_ms, 2000);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "log_level": "loud" }"#),
            Err(ConfigError::LogLevel(_))
        ));
    }
}
