//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Content (what the
//! page says) lives in `site.toml`; configuration (how the page looks and
//! behaves) lives here. Stock defaults are overridden by an optional
//! `config.toml` in the content root.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "assets"     # Copied verbatim to the output root
//!
//! [scene]
//! enabled = true            # Ship the lazily loaded 3D hero scene
//! threshold = 0.2           # Visible fraction of the hero that triggers loading
//!
//! [behavior]
//! smooth_scroll = true      # Smooth in-page scrolling (skipped for reduced motion)
//!
//! [theme]
//! content_width = "72rem"   # Max width of section content
//! radius = "0.75rem"        # Card corner radius
//! grid_gap = "1.5rem"       # Gap between cards
//!
//! [theme.section_padding]
//! size = "8vw"
//! min = "4rem"
//! max = "6rem"
//!
//! [colors.light]
//! background = "#ffffff"
//! surface = "#fafafa"
//! text = "#171717"
//! text_muted = "#525252"
//! border = "#e5e5e5"
//! accent = "#047857"
//! button = "#171717"
//! button_text = "#ffffff"
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! ...
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file inside the content root.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory (relative to the content root) copied to the output root.
    pub assets_dir: String,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Layout settings.
    pub theme: ThemeConfig,
    /// Hero scene loading.
    pub scene: SceneConfig,
    /// Page-level behavior toggles.
    pub behavior: BehaviorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            colors: ColorConfig::default(),
            theme: ThemeConfig::default(),
            scene: SceneConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scene.threshold > 0.0 && self.scene.threshold <= 1.0) {
            return Err(ConfigError::Validation(
                "scene.threshold must be greater than 0 and at most 1".into(),
            ));
        }
        if self.assets_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "assets_dir must not be empty".into(),
            ));
        }
        for (name, value) in self.css_values() {
            validate_css_value(&name, value)?;
        }
        Ok(())
    }

    /// Every user-supplied value that ends up inside the stylesheet.
    fn css_values(&self) -> Vec<(String, &str)> {
        let mut values = vec![
            ("theme.content_width".to_string(), self.theme.content_width.as_str()),
            ("theme.radius".to_string(), self.theme.radius.as_str()),
            ("theme.grid_gap".to_string(), self.theme.grid_gap.as_str()),
            (
                "theme.section_padding.size".to_string(),
                self.theme.section_padding.size.as_str(),
            ),
            (
                "theme.section_padding.min".to_string(),
                self.theme.section_padding.min.as_str(),
            ),
            (
                "theme.section_padding.max".to_string(),
                self.theme.section_padding.max.as_str(),
            ),
        ];
        for (mode, scheme) in [("light", &self.colors.light), ("dark", &self.colors.dark)] {
            for (key, value) in scheme.entries() {
                values.push((format!("colors.{mode}.{key}"), value));
            }
        }
        values
    }
}

/// Reject values that could break out of a CSS declaration.
///
/// Shared with content validation, which checks per-entry colours.
pub fn validate_css_value(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} must not be empty")));
    }
    if value.contains([';', '{', '}', '<', '>', '"']) {
        return Err(ConfigError::Validation(format!(
            "{field} contains characters not allowed in a CSS value: {value:?}"
        )));
    }
    Ok(())
}

/// Hero scene loading settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// When false the hero keeps its static placeholder and no loader
    /// script is emitted.
    pub enabled: bool,
    /// Fraction of the hero that must be on screen before the scene loads.
    pub threshold: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 0.2,
        }
    }
}

/// Page-level behavior toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Smooth scrolling for in-page navigation.
    pub smooth_scroll: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            smooth_scroll: true,
        }
    }
}

/// A responsive CSS size expressed as `clamp(min, size, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClampSize {
    /// Preferred/fluid value, typically viewport-relative (e.g. `"8vw"`).
    pub size: String,
    /// Minimum bound (e.g. `"4rem"`).
    pub min: String,
    /// Maximum bound (e.g. `"6rem"`).
    pub max: String,
}

impl ClampSize {
    /// Render as a CSS `clamp()` expression.
    pub fn to_css(&self) -> String {
        format!("clamp({}, {}, {})", self.min, self.size, self.max)
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Maximum width of section content.
    pub content_width: String,
    /// Corner radius of cards and buttons.
    pub radius: String,
    /// Gap between cards in the portfolio, shop, and contact grids.
    pub grid_gap: String,
    /// Vertical padding of each section.
    pub section_padding: ClampSize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            content_width: "72rem".to_string(),
            radius: "0.75rem".to_string(),
            grid_gap: "1.5rem".to_string(),
            section_padding: ClampSize {
                size: "8vw".to_string(),
                min: "4rem".to_string(),
                max: "6rem".to_string(),
            },
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Card and header background.
    pub surface: String,
    pub text: String,
    /// Secondary text: taglines, hints, footer.
    pub text_muted: String,
    pub border: String,
    /// Prices, badges, bullet dots.
    pub accent: String,
    /// Primary button background.
    pub button: String,
    pub button_text: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#fafafa".to_string(),
            text: "#171717".to_string(),
            text_muted: "#525252".to_string(),
            border: "#e5e5e5".to_string(),
            accent: "#047857".to_string(),
            button: "#171717".to_string(),
            button_text: "#ffffff".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            surface: "#171717".to_string(),
            text: "#f5f5f5".to_string(),
            text_muted: "#a3a3a3".to_string(),
            border: "#262626".to_string(),
            accent: "#34d399".to_string(),
            button: "#f5f5f5".to_string(),
            button_text: "#0a0a0a".to_string(),
        }
    }

    fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("text", self.text.as_str()),
            ("text_muted", self.text_muted.as_str()),
            ("border", self.border.as_str()),
            ("accent", self.accent.as_str()),
            ("button", self.button.as_str()),
            ("button_text", self.button_text.as_str()),
        ]
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Brand Site Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file next to site.toml in the content directory.
# Unknown keys will cause an error.

# Directory (relative to the content root) copied verbatim to the output root.
# Put favicon.ico, og images, fonts here.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Hero 3D scene
# ---------------------------------------------------------------------------
[scene]
# Ship the 3D scene at all. When false the hero keeps its static placeholder.
enabled = true

# Fraction of the hero (0 < t <= 1) that must be visible before the scene
# is fetched. The scene is never fetched for visitors who ask for reduced
# motion, and once mounted it stays mounted.
threshold = 0.2

# ---------------------------------------------------------------------------
# Behavior
# ---------------------------------------------------------------------------
[behavior]
# Smooth scrolling for nav links. Only applied when the visitor has not asked
# for reduced motion.
smooth_scroll = true

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
# Maximum width of section content (CSS value).
content_width = "72rem"

# Corner radius of cards and buttons (CSS value).
radius = "0.75rem"

# Gap between cards in the web, shop and contact grids (CSS value).
grid_gap = "1.5rem"

# Vertical padding of each section, as CSS clamp(min, size, max).
[theme.section_padding]
size = "8vw"
min = "4rem"
max = "6rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#fafafa"       # Cards, header bar
text = "#171717"
text_muted = "#525252"    # Taglines, hints, footer
border = "#e5e5e5"
accent = "#047857"        # Prices, badge, bullets
button = "#171717"
button_text = "#ffffff"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
surface = "#171717"
text = "#f5f5f5"
text_muted = "#a3a3a3"
border = "#262626"
accent = "#34d399"
button = "#f5f5f5"
button_text = "#0a0a0a"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    let vars = |scheme: &ColorScheme, pad: &str| -> String {
        scheme
            .entries()
            .iter()
            .map(|(key, value)| format!("{pad}--color-{}: {value};", key.replace('_', "-")))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        ":root {{\n{light}\n}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{dark}\n    }}\n}}",
        light = vars(&colors.light, "    "),
        dark = vars(&colors.dark, "        "),
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --content-width: {content_width};
    --radius: {radius};
    --grid-gap: {grid_gap};
    --section-padding: {section_padding};
}}"#,
        content_width = theme.content_width,
        radius = theme.radius,
        grid_gap = theme.grid_gap,
        section_padding = theme.section_padding.to_css(),
    )
}

/// Smooth scrolling, only for visitors without a reduced-motion preference.
///
/// Returns an empty string when disabled.
pub fn generate_behavior_css(behavior: &BehaviorConfig) -> String {
    if behavior.smooth_scroll {
        "@media (prefers-reduced-motion: no-preference) {\n    html { scroll-behavior: smooth; }\n}"
            .to_string()
    } else {
        String::new()
    }
}
