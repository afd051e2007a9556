use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub preloader: PreloaderConfig,
    pub cards: CardsConfig,
    pub sections: ObserverConfig,
    pub footer: FooterConfig,
    pub nav: NavConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PreloaderConfig {
    pub min_display_ms: u32,
    pub remove_delay_ms: u32,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            min_display_ms: 3000,
            remove_delay_ms: 600,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CardsConfig {
    pub flip_revert_ms: u32,
    /// Click-to-flip is enabled only at or below this viewport width.
    pub flip_max_width: f64,
    pub stagger_ms: u32,
    pub entrance_ms: u32,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            flip_revert_ms: 6000,
            flip_max_width: 992.0,
            stagger_ms: 70,
            entrance_ms: 560,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ObserverConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            root_margin: "0px 0px -30% 0px".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FooterConfig {
    pub threshold: f64,
    pub stagger_ms: u32,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            threshold: 0.08,
            stagger_ms: 120,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NavConfig {
    pub fallback_height: u32,
    pub main_padding_extra: u32,
    pub scroll_margin_extra: u32,
    pub anchor_gap: u32,
    pub load_settle_ms: u32,
    pub resize_debounce_ms: u32,
    pub orientation_delay_ms: u32,
    pub toggle_delay_ms: u32,
    pub float_after_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            fallback_height: 72,
            main_padding_extra: 6,
            scroll_margin_extra: 8,
            anchor_gap: 12,
            load_settle_ms: 90,
            resize_debounce_ms: 120,
            orientation_delay_ms: 180,
            toggle_delay_ms: 220,
            float_after_px: 24.0,
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[preloader]
min_display_ms = 3000
remove_delay_ms = 600

[cards]
flip_revert_ms = 6000
flip_max_width = 992.0
stagger_ms = 70
entrance_ms = 560

[sections]
threshold = 0.15
root_margin = "0px 0px -30% 0px"

[footer]
threshold = 0.08
stagger_ms = 120

[nav]
fallback_height = 72
main_padding_extra = 6
scroll_margin_extra = 8
anchor_gap = 12
load_settle_ms = 90
resize_debounce_ms = 120
orientation_delay_ms = 180
toggle_delay_ms = 220
float_after_px = 24.0
"#;

impl SiteConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid site configuration")
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_toml(DEFAULT_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.preloader.min_display_ms, 3000);
        assert_eq!(config.sections.root_margin, "0px 0px -30% 0px");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = SiteConfig::from_toml("[cards]\nstagger_ms = 40\n").unwrap();
        assert_eq!(config.cards.stagger_ms, 40);
        assert_eq!(config.cards.flip_revert_ms, 6000);
        assert_eq!(config.nav, NavConfig::default());
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(SiteConfig::from_toml("[cards]\nstagger_ms = \"fast\"\n").is_err());
    }
}
