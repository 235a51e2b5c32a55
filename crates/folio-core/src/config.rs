use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub typing: TypingConfig,
    #[serde(default)]
    pub scroll: ScrollSpyConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            typing: TypingConfig::default(),
            scroll: ScrollSpyConfig::default(),
            content: ContentConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Timing of the hero typewriter animation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingConfig {
    /// Delay between typed characters in milliseconds
    #[serde(default = "default_type_delay")]
    pub type_delay_ms: u64,
    /// Delay between deleted characters in milliseconds
    #[serde(default = "default_delete_delay")]
    pub delete_delay_ms: u64,
    /// Hold time at the fully typed title in milliseconds
    #[serde(default = "default_hold_delay")]
    pub hold_delay_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            type_delay_ms: default_type_delay(),
            delete_delay_ms: default_delete_delay(),
            hold_delay_ms: default_hold_delay(),
        }
    }
}

impl TypingConfig {
    #[inline]
    pub fn type_delay(&self) -> Duration {
        Duration::from_millis(self.type_delay_ms)
    }

    #[inline]
    pub fn delete_delay(&self) -> Duration {
        Duration::from_millis(self.delete_delay_ms)
    }

    #[inline]
    pub fn hold_delay(&self) -> Duration {
        Duration::from_millis(self.hold_delay_ms)
    }
}

/// Scroll-spy behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollSpyConfig {
    /// Rows added to the scroll offset before testing section bounds,
    /// compensating for the navigation bar overlapping the content
    #[serde(default = "default_activation_offset")]
    pub activation_offset: u32,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            activation_offset: default_activation_offset(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Portfolio content file; falls back to the default path, then to the
    /// built-in sample
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "midnight", "daybreak")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#22d3ee" or "22d3ee")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Page background
    pub bg0: Option<String>,
    /// Raised background (cards, nav bar)
    pub bg1: Option<String>,
    /// Selection background
    pub bg2: Option<String>,
    /// Border and rule color
    pub border: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground
    pub fg1: Option<String>,
    /// Dimmed foreground (hints, footers)
    pub muted: Option<String>,
    /// Primary accent (nav highlight, headings)
    pub accent: Option<String>,
    /// Secondary accent (typed text, timeline marks)
    pub accent_alt: Option<String>,
    /// Success / availability color
    pub success: Option<String>,
    /// Warning color
    pub warning: Option<String>,
    /// Error color
    pub error: Option<String>,
}

fn default_theme_name() -> String {
    "midnight".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_type_delay() -> u64 {
    150
}

fn default_delete_delay() -> u64 {
    30
}

fn default_hold_delay() -> u64 {
    2000
}

fn default_activation_offset() -> u32 {
    3
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Default location of the portfolio content file
    pub fn default_portfolio_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("portfolio.toml")
    }

    /// Resolve the portfolio content path (with tilde expansion), if one is
    /// configured
    pub fn portfolio_path(&self) -> Option<PathBuf> {
        self.content.path.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.typing.type_delay_ms, 150);
        assert_eq!(config.typing.delete_delay_ms, 30);
        assert_eq!(config.typing.hold_delay_ms, 2000);
        assert_eq!(config.scroll.activation_offset, 3);
        assert_eq!(config.ui.theme.name, "midnight");
        assert!(config.content.path.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [typing]
            type_delay_ms = 80
            "#,
        )
        .unwrap();
        assert_eq!(config.typing.type_delay_ms, 80);
        assert_eq!(config.typing.delete_delay_ms, 30);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_theme_as_string() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "daybreak"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "daybreak");
        assert!(config.ui.theme.colors.accent.is_none());
    }

    #[test]
    fn test_theme_as_table_with_overrides() {
        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "midnight"

            [ui.theme.colors]
            accent = "#ff8800"
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "midnight");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff8800"));
    }

    #[test]
    fn test_typing_durations() {
        let typing = TypingConfig::default();
        assert_eq!(typing.type_delay(), Duration::from_millis(150));
        assert_eq!(typing.delete_delay(), Duration::from_millis(30));
        assert_eq!(typing.hold_delay(), Duration::from_millis(2000));
    }
}
