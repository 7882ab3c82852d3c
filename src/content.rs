//! Site content model and loading.
//!
//! All page content lives in a single `site.toml` in the content root. The
//! file is a direct description of the page, section by section:
//!
//! ```text
//! [brand]              name, developer, roles, language, meta description
//! [[nav]]              header links: { label, target }
//! [cta]                header button: { label, target, icon }
//! [hero]               badge, headline, intro, CTAs, highlight chips
//! [hero.scene]         3D scene URL, viewer script, placeholder label
//! [about]              markdown body, highlight bullets, callout box
//! [portfolio]          outbound link grid: [[portfolio.entries]]
//! [shop]               service cards: [[shop.services]], [shop.order]
//! [contact]            outbound contact grid: [[contact.entries]]
//! [footer]             rights text, optional pinned year
//! ```
//!
//! Every section has an `id` used as its fragment target (`#shop`). Targets in
//! `[[nav]]` and the CTAs may be written with or without the leading `#`.
//!
//! Entries have no identity beyond their position; the order in the file is
//! the order on the page. Unknown keys are rejected.
//!
//! This module only parses. Cross-field checks (URLs, section ids, targets)
//! happen in [`crate::scan`].

use crate::icons::Icon;
use crate::types::SectionAnchor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the content file inside the content root.
pub const CONTENT_FILE: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Content file not found: {0}")]
    Missing(PathBuf),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteContent {
    pub brand: Brand,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub cta: Option<HeaderCta>,
    pub hero: Hero,
    pub about: About,
    pub portfolio: Portfolio,
    pub shop: Shop,
    pub contact: Contact,
    #[serde(default)]
    pub footer: Footer,
}

impl SiteContent {
    /// All addressable sections in document order.
    pub fn sections(&self) -> Vec<SectionAnchor> {
        vec![
            SectionAnchor {
                id: self.hero.id.clone(),
                title: "Home".to_string(),
            },
            SectionAnchor {
                id: self.about.id.clone(),
                title: self.about.title.clone(),
            },
            SectionAnchor {
                id: self.portfolio.id.clone(),
                title: self.portfolio.title.clone(),
            },
            SectionAnchor {
                id: self.shop.id.clone(),
                title: self.shop.title.clone(),
            },
            SectionAnchor {
                id: self.contact.id.clone(),
                title: self.contact.title.clone(),
            },
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Brand {
    pub name: String,
    pub developer: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Brand {
    /// `Programer, Developer, Desainer`
    pub fn job_line(&self) -> String {
        self.roles.join(", ")
    }
}

fn default_lang() -> String {
    "en".to_string()
}

/// A labelled in-page link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

impl NavLink {
    /// Target section id without a leading `#`.
    pub fn fragment(&self) -> &str {
        self.target.trim_start_matches('#')
    }

    pub fn href(&self) -> String {
        format!("#{}", self.fragment())
    }
}

/// The button at the right of the header bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderCta {
    pub label: String,
    pub target: String,
    #[serde(default)]
    pub icon: Option<Icon>,
}

impl HeaderCta {
    pub fn link(&self) -> NavLink {
        NavLink {
            label: self.label.clone(),
            target: self.target.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    #[serde(default = "default_hero_id")]
    pub id: String,
    #[serde(default)]
    pub badge: Option<String>,
    pub headline: String,
    pub intro: String,
    #[serde(default)]
    pub primary_cta: Option<NavLink>,
    #[serde(default)]
    pub secondary_cta: Option<NavLink>,
    #[serde(default)]
    pub card_title: Option<String>,
    #[serde(default)]
    pub card_subtitle: Option<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    pub scene: Scene,
}

fn default_hero_id() -> String {
    "home".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Highlight {
    pub label: String,
    pub icon: Icon,
}

/// The embedded 3D scene behind the hero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    /// Scene file handed to the viewer (`.splinecode`).
    pub url: String,
    /// Module script defining the `<spline-viewer>` element.
    pub viewer_script: String,
    /// Accessible label of the placeholder shown until the scene mounts.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    "3D scene".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct About {
    #[serde(default = "default_about_id")]
    pub id: String,
    pub title: String,
    /// Markdown.
    pub body: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub callout: Option<Callout>,
}

fn default_about_id() -> String {
    "about".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Callout {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    #[serde(default = "default_portfolio_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    /// Shown under entries that have no description of their own.
    #[serde(default = "default_link_hint")]
    pub link_hint: String,
    #[serde(default)]
    pub entries: Vec<PortfolioEntry>,
}

fn default_portfolio_id() -> String {
    "web".to_string()
}

fn default_link_hint() -> String {
    "Open link".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioEntry {
    pub title: String,
    pub icon: Icon,
    #[serde(default)]
    pub icon_color: Option<String>,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Shop {
    #[serde(default = "default_shop_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    pub order: OrderSettings,
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
}

fn default_shop_id() -> String {
    "shop".to_string()
}

/// How order buttons are built for services without their own link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderSettings {
    /// WhatsApp number in international format, digits only.
    pub phone: String,
    /// Message prefix; the service title is appended.
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_order_label")]
    pub label: String,
    #[serde(default = "default_override_label")]
    pub override_label: String,
}

fn default_order_label() -> String {
    "Order now".to_string()
}

fn default_override_label() -> String {
    "Order via WhatsApp".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceEntry {
    pub title: String,
    pub price: String,
    pub icon: Icon,
    pub description: String,
    /// Explicit order destination, used verbatim when present.
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    #[serde(default = "default_contact_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default = "default_contact_hint")]
    pub link_hint: String,
    #[serde(default)]
    pub entries: Vec<ContactEntry>,
}

fn default_contact_id() -> String {
    "contact".to_string()
}

fn default_contact_hint() -> String {
    "Open".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactEntry {
    pub label: String,
    pub url: String,
    pub icon: Icon,
    /// Gradient accent as `[from, to]` CSS colours.
    pub accent: [String; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Footer {
    pub rights: String,
    /// Pin the copyright year instead of using the build year.
    pub year: Option<i32>,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            rights: "All rights reserved.".to_string(),
            year: None,
        }
    }
}

/// Parse site content from TOML text.
pub fn parse_content(text: &str) -> Result<SiteContent, ContentError> {
    Ok(toml::from_str(text)?)
}

/// Load `site.toml` from the content root.
pub fn load_content(root: &Path) -> Result<SiteContent, ContentError> {
    let path = root.join(CONTENT_FILE);
    if !path.exists() {
        return Err(ContentError::Missing(path));
    }
    let text = fs::read_to_string(&path)?;
    parse_content(&text)
}

/// The stock `site.toml` shipped with the tool, printed by `gen-content`.
pub fn stock_content_toml() -> &'static str {
    include_str!("../content/site.toml")
}
