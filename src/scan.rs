//! Content scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Reads the content directory, validates
//! everything that can be validated before rendering, resolves derived links,
//! and produces a [`Manifest`] that the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── site.toml        # Page content (required)
//! ├── config.toml      # Look and behaviour (optional, overrides stock defaults)
//! └── assets/          # Copied verbatim to the output root (optional)
//! ```
//!
//! ## Validation
//!
//! The scanner enforces these rules:
//! - Every outbound URL is absolute with an `http`, `https`, `mailto` or
//!   `tel` scheme
//! - Section ids are non-empty and unique
//! - Every nav link and call-to-action targets exactly one section
//! - The order phone number is digits only
//! - Per-entry colours are plain CSS values
//!
//! ## Resolution
//!
//! Service order links are resolved here (see [`crate::links`]) so the
//! manifest shows the exact destination every button will have.

use crate::config::{self, SiteConfig};
use crate::content::{self, NavLink, SiteContent};
use crate::generate;
use crate::links::{self, LinkError};
use crate::types::{ResolvedService, SectionAnchor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] content::ContentError),
    #[error("Link error: {0}")]
    Link(#[from] LinkError),
    #[error("Section id must not be empty: {0}")]
    EmptySectionId(String),
    #[error("Duplicate section id {id:?} used by {first} and {second}")]
    DuplicateSection {
        id: String,
        first: String,
        second: String,
    },
    #[error("{field}: target {target:?} does not name a section (known: {known})")]
    UnknownTarget {
        field: String,
        target: String,
        known: String,
    },
    #[error("Asset {0} would overwrite a generated file; rename or remove it")]
    ReservedAsset(String),
}

/// Manifest output from the scan stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Sections in document order.
    pub sections: Vec<SectionAnchor>,
    pub content: SiteContent,
    /// Services with their order links resolved, in content order.
    pub services: Vec<ResolvedService>,
    pub config: SiteConfig,
    /// Whether the assets directory exists in the content root.
    pub has_assets: bool,
}

/// Scan a content directory into a validated manifest.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;
    let content = content::load_content(root)?;
    tracing::debug!(root = %root.display(), "loaded site content and config");

    let assets_root = root.join(&config.assets_dir);
    let has_assets = assets_root.is_dir();
    if has_assets {
        check_reserved_assets(&assets_root, &config.assets_dir)?;
    }
    let manifest = build_manifest(content, config, has_assets)?;
    tracing::info!(
        sections = manifest.sections.len(),
        portfolio = manifest.content.portfolio.entries.len(),
        services = manifest.services.len(),
        contacts = manifest.content.contact.entries.len(),
        "scan complete"
    );
    Ok(manifest)
}

/// Validate content and resolve derived links. No filesystem access.
pub fn build_manifest(
    content: SiteContent,
    config: SiteConfig,
    has_assets: bool,
) -> Result<Manifest, ScanError> {
    let sections = content.sections();
    check_section_ids(&sections)?;
    check_targets(&content, &sections)?;
    check_links(&content)?;
    check_colors(&content)?;

    let order = &content.shop.order;
    let services = content
        .shop
        .services
        .iter()
        .map(|svc| ResolvedService::new(svc, links::resolve_order_link(svc, order)))
        .collect();

    Ok(Manifest {
        sections,
        content,
        services,
        config,
        has_assets,
    })
}

/// Assets are copied to the output root, so none may share a path with a
/// file the generator writes.
fn check_reserved_assets(assets_root: &Path, assets_dir: &str) -> Result<(), ScanError> {
    for name in generate::RESERVED_OUTPUTS {
        if assets_root.join(name).exists() {
            return Err(ScanError::ReservedAsset(format!("{assets_dir}/{name}")));
        }
    }
    Ok(())
}

fn check_section_ids(sections: &[SectionAnchor]) -> Result<(), ScanError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for section in sections {
        if section.id.trim().is_empty() {
            return Err(ScanError::EmptySectionId(section.title.clone()));
        }
        if let Some(first) = seen.insert(&section.id, &section.title) {
            return Err(ScanError::DuplicateSection {
                id: section.id.clone(),
                first: first.to_string(),
                second: section.title.clone(),
            });
        }
    }
    Ok(())
}

/// Every in-page link with the content field it came from.
fn in_page_links(content: &SiteContent) -> Vec<(String, NavLink)> {
    let mut out: Vec<(String, NavLink)> = content
        .nav
        .iter()
        .enumerate()
        .map(|(i, link)| (format!("nav[{i}]"), link.clone()))
        .collect();
    if let Some(cta) = &content.cta {
        out.push(("cta".to_string(), cta.link()));
    }
    if let Some(cta) = &content.hero.primary_cta {
        out.push(("hero.primary_cta".to_string(), cta.clone()));
    }
    if let Some(cta) = &content.hero.secondary_cta {
        out.push(("hero.secondary_cta".to_string(), cta.clone()));
    }
    out
}

fn check_targets(content: &SiteContent, sections: &[SectionAnchor]) -> Result<(), ScanError> {
    for (field, link) in in_page_links(content) {
        let matches = sections.iter().filter(|s| s.id == link.fragment()).count();
        if matches != 1 {
            return Err(ScanError::UnknownTarget {
                field,
                target: link.target.clone(),
                known: sections
                    .iter()
                    .map(|s| s.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
    }
    Ok(())
}

fn check_links(content: &SiteContent) -> Result<(), ScanError> {
    links::validate_href("hero.scene.url", &content.hero.scene.url)?;
    links::validate_href("hero.scene.viewer_script", &content.hero.scene.viewer_script)?;
    for (i, entry) in content.portfolio.entries.iter().enumerate() {
        links::validate_href(&format!("portfolio.entries[{i}].url"), &entry.url)?;
    }
    links::validate_phone("shop.order.phone", &content.shop.order.phone)?;
    for (i, svc) in content.shop.services.iter().enumerate() {
        if let Some(link) = &svc.link {
            links::validate_href(&format!("shop.services[{i}].link"), link)?;
        }
    }
    for (i, entry) in content.contact.entries.iter().enumerate() {
        links::validate_href(&format!("contact.entries[{i}].url"), &entry.url)?;
    }
    Ok(())
}

fn check_colors(content: &SiteContent) -> Result<(), ScanError> {
    for (i, entry) in content.portfolio.entries.iter().enumerate() {
        if let Some(color) = &entry.icon_color {
            config::validate_css_value(&format!("portfolio.entries[{i}].icon_color"), color)?;
        }
    }
    for (i, entry) in content.contact.entries.iter().enumerate() {
        for (j, color) in entry.accent.iter().enumerate() {
            config::validate_css_value(&format!("contact.entries[{i}].accent[{j}]"), color)?;
        }
    }
    Ok(())
}
