//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the scan manifest and writes the
//! final static site.
//!
//! ## Page Structure
//!
//! One page, composed top to bottom:
//!
//! ```text
//! header   brand, nav links (#fragments), call-to-action
//! #home    hero copy + gated 3D scene container
//! #about   markdown body, highlight bullets, callout
//! #web     portfolio link grid
//! #shop    service cards with order buttons
//! #contact contact link grid
//! footer   © year, brand, rights
//! ```
//!
//! Section ids come from the content file and are validated unique by the
//! scan stage, so every nav fragment resolves to exactly one element.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html     # The page, CSS inlined
//! ├── gate.js        # Scene loader (omitted when [scene] enabled = false)
//! └── ...            # Everything from content/assets/
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors and theme injected from config)
//! - `static/gate.js`: Visibility-gated scene loader, see [`crate::gate`]
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated content is escaped; outbound URLs are written exactly as
//! configured (modulo HTML attribute escaping).

use crate::config::{self, SiteConfig};
use crate::content::{About, Brand, Contact, HeaderCta, Hero, NavLink, Portfolio, Shop};
use crate::gate::GateState;
use crate::icons::Icon;
use crate::scan::Manifest;
use crate::types::ResolvedService;
use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Asset path error: {0}")]
    AssetPath(#[from] std::path::StripPrefixError),
    #[error("Asset {0} would overwrite a generated file")]
    ReservedAsset(String),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const GATE_JS: &str = include_str!("../static/gate.js");
const REVEAL_JS: &str = include_str!("../static/reveal.js");

/// Name of the page in the output directory.
pub const PAGE_FILE: &str = "index.html";

/// Name of the loader script in the output directory.
pub const GATE_SCRIPT: &str = "gate.js";

/// Name of the scroll-in animation script in the output directory.
pub const REVEAL_SCRIPT: &str = "reveal.js";

/// Output paths the generator writes itself. Assets may not use them.
pub const RESERVED_OUTPUTS: &[&str] = &[PAGE_FILE, GATE_SCRIPT, REVEAL_SCRIPT];

/// Files written by [`generate`], relative to the output directory.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub pages: Vec<String>,
    pub scripts: Vec<String>,
    pub assets: Vec<String>,
}

/// Run stage 2: read the manifest and write the site into `output_dir`.
pub fn generate(
    manifest_path: &Path,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    let year = manifest
        .content
        .footer
        .year
        .unwrap_or_else(|| chrono::Local::now().year());

    fs::create_dir_all(output_dir)?;
    let mut report = GenerateReport::default();

    // Assets go first: a reserved asset name aborts before anything is written.
    if manifest.has_assets {
        let assets_root = source_root.join(&manifest.config.assets_dir);
        report.assets = copy_assets(&assets_root, output_dir)?;
        tracing::debug!(count = report.assets.len(), "copied assets");
    }

    let css = build_css(&manifest.config);
    let page = render_page(&manifest, &css, year);
    fs::write(output_dir.join(PAGE_FILE), page.into_string())?;
    report.pages.push(PAGE_FILE.to_string());
    tracing::debug!(output = %output_dir.display(), "wrote {PAGE_FILE}");

    fs::write(output_dir.join(REVEAL_SCRIPT), REVEAL_JS)?;
    report.scripts.push(REVEAL_SCRIPT.to_string());

    if manifest.config.scene.enabled {
        fs::write(output_dir.join(GATE_SCRIPT), GATE_JS)?;
        report.scripts.push(GATE_SCRIPT.to_string());
    }

    tracing::info!(output = %output_dir.display(), "site generated");
    Ok(report)
}

/// Copy every file under `src` into `dst`, preserving relative paths.
///
/// Returns the copied paths relative to `dst`, sorted. Fails before copying
/// anything if an asset would land on one of [`RESERVED_OUTPUTS`].
fn copy_assets(src: &Path, dst: &Path) -> Result<Vec<String>, GenerateError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(src)?.to_string_lossy().replace('\\', "/");
        if RESERVED_OUTPUTS.contains(&rel.as_str()) {
            return Err(GenerateError::ReservedAsset(rel));
        }
        files.push((entry.into_path(), rel));
    }

    let mut copied = Vec::with_capacity(files.len());
    for (path, rel) in files {
        let target = dst.join(&rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&path, &target)?;
        copied.push(rel);
    }
    Ok(copied)
}

/// Full stylesheet: config-driven custom properties followed by base styles.
pub fn build_css(config: &SiteConfig) -> String {
    let mut parts = vec![
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme),
    ];
    let behavior = config::generate_behavior_css(&config.behavior);
    if !behavior.is_empty() {
        parts.push(behavior);
    }
    parts.push(CSS_STATIC.to_string());
    parts.join("\n\n")
}

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(brand: &Brand, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(brand.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="generator" content={ "brand-site " (env!("CARGO_PKG_VERSION")) };
                @if let Some(desc) = &brand.description {
                    meta name="description" content=(desc);
                }
                title { (brand.name) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// An outbound link that opens in a new tab.
fn external_link(href: &str, class: &str, body: Markup) -> Markup {
    html! {
        a class=(class) href=(href) target="_blank" rel="noreferrer" {
            (body)
        }
    }
}

fn section_heading(title: &str, tagline: Option<&str>) -> Markup {
    html! {
        div.section-heading {
            h2 { (title) }
            @if let Some(tagline) = tagline {
                span.section-tagline { (tagline) }
            }
        }
    }
}

fn developer_line(brand: &Brand) -> Markup {
    html! {
        p.developer-line {
            "Developer: "
            strong { (brand.developer) }
            @if !brand.roles.is_empty() {
                " \u{2022} Job: " (brand.job_line())
            }
        }
    }
}

/// Renders the sticky header bar with brand, nav and call-to-action
pub fn render_header(brand: &Brand, nav: &[NavLink], cta: Option<&HeaderCta>, home: &str) -> Markup {
    html! {
        header.site-header {
            div.header-bar {
                a.brand href={ "#" (home) } { (brand.name) }
                nav.site-nav aria-label="Sections" {
                    ul {
                        @for link in nav {
                            li { a href=(link.href()) { (link.label) } }
                        }
                    }
                }
                @if let Some(cta) = cta {
                    a.button.header-cta href=(cta.link().href()) {
                        @if let Some(icon) = cta.icon {
                            (icon.render(16))
                        }
                        (cta.label)
                    }
                }
            }
        }
    }
}

/// Renders the hero with the scene container in its initial gate state
pub fn render_hero(hero: &Hero, brand: &Brand, config: &SiteConfig) -> Markup {
    let initial = GateState::new(config.scene.threshold, false).view();

    html! {
        section.hero id=(hero.id) {
            @if config.scene.enabled {
                div.scene-gate
                    data-gate
                    data-gate-state=(initial.as_str())
                    data-threshold=(config.scene.threshold)
                    data-scene=(hero.scene.url)
                    data-viewer=(hero.scene.viewer_script)
                    role="img"
                    aria-label=(hero.scene.placeholder)
                {
                    div.scene-placeholder aria-hidden="true" {}
                }
            } @else {
                div.scene-gate data-gate-state=(initial.as_str()) role="img" aria-label=(hero.scene.placeholder) {
                    div.scene-placeholder aria-hidden="true" {}
                }
            }
            div.hero-veil aria-hidden="true" {}
            div.hero-inner {
                div.hero-copy.reveal {
                    @if let Some(badge) = &hero.badge {
                        span.badge { span.badge-dot {} (badge) }
                    }
                    h1 { (hero.headline) }
                    p.hero-intro { (hero.intro) }
                    div.hero-actions {
                        @if let Some(cta) = &hero.primary_cta {
                            a.button.primary href=(cta.href()) {
                                (cta.label) (Icon::ExternalLink.render(16))
                            }
                        }
                        @if let Some(cta) = &hero.secondary_cta {
                            a.button.secondary href=(cta.href()) { (cta.label) }
                        }
                    }
                    (developer_line(brand))
                }
                @if hero.card_title.is_some() || !hero.highlights.is_empty() {
                    aside.hero-card.reveal {
                        @if let Some(title) = &hero.card_title {
                            div.hero-card-title { (title) }
                        }
                        @if let Some(subtitle) = &hero.card_subtitle {
                            div.hero-card-subtitle { (subtitle) }
                        }
                        @if !hero.highlights.is_empty() {
                            ul.chips {
                                @for chip in &hero.highlights {
                                    li.chip { (chip.icon.render(16)) (chip.label) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the about section from markdown content
pub fn render_about(about: &About) -> Markup {
    html! {
        section.section id=(about.id) {
            div.container.reveal {
                (section_heading(&about.title, None))
                div.prose { (PreEscaped(markdown_to_html(&about.body))) }
                @if !about.highlights.is_empty() {
                    ul.highlights {
                        @for item in &about.highlights {
                            li { span.bullet aria-hidden="true" {} (item) }
                        }
                    }
                }
                @if let Some(callout) = &about.callout {
                    div.callout {
                        div.callout-title { (callout.title) }
                        p { (callout.body) }
                    }
                }
            }
        }
    }
}

/// Renders the portfolio grid; each card links to its entry's URL
pub fn render_portfolio(portfolio: &Portfolio) -> Markup {
    html! {
        section.section id=(portfolio.id) {
            div.container {
                (section_heading(&portfolio.title, portfolio.tagline.as_deref()))
                div.card-grid {
                    @for entry in &portfolio.entries {
                        @let hint = entry.description.as_deref().unwrap_or(&portfolio.link_hint);
                        (external_link(&entry.url, "card link-card reveal", html! {
                            span.icon-tile style=[entry.icon_color.as_ref().map(|c| format!("color: {c}"))] {
                                (entry.icon.render(20))
                            }
                            span.card-body {
                                span.card-title { (entry.title) }
                                span.card-hint { (hint) }
                            }
                            span.card-arrow { (Icon::ExternalLink.render(16)) }
                        }))
                    }
                }
            }
        }
    }
}

/// Renders the service catalogue with resolved order buttons
pub fn render_shop(shop: &Shop, services: &[ResolvedService]) -> Markup {
    html! {
        section.section id=(shop.id) {
            div.container {
                (section_heading(&shop.title, shop.tagline.as_deref()))
                div.card-grid {
                    @for svc in services {
                        article.card.service-card.reveal {
                            div.service-head {
                                span.icon-tile { (svc.icon.render(18)) }
                                div {
                                    div.card-title { (svc.title) }
                                    div.price { (svc.price) }
                                }
                            }
                            p.service-description { (svc.description) }
                            (external_link(&svc.order.href, "button primary order-button", html! {
                                (svc.order.label) (Icon::ExternalLink.render(16))
                            }))
                        }
                    }
                }
            }
        }
    }
}

/// Renders the contact grid; each card links to its entry's URL
pub fn render_contact(contact: &Contact, brand: &Brand) -> Markup {
    html! {
        section.section id=(contact.id) {
            div.container {
                (section_heading(&contact.title, None))
                @if let Some(intro) = &contact.intro {
                    p.section-intro { (intro) }
                }
                div.contact-grid {
                    @for entry in &contact.entries {
                        @let accent = format!(
                            "--accent-from: {}; --accent-to: {}",
                            entry.accent[0], entry.accent[1]
                        );
                        a.contact-card href=(entry.url) target="_blank" rel="noreferrer" style=(accent) {
                            span.contact-glow aria-hidden="true" {}
                            span.contact-icon { (entry.icon.render(20)) }
                            span.card-body {
                                span.card-title { (entry.label) }
                                span.card-hint { (contact.link_hint) }
                            }
                        }
                    }
                }
                (developer_line(brand))
            }
        }
    }
}

fn render_footer(brand: &Brand, rights: &str, year: i32) -> Markup {
    html! {
        footer.site-footer {
            div.container {
                "\u{a9} " (year) " " (brand.name) " \u{2022} " (rights)
            }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders the whole page. Pure: no I/O, no clock.
pub fn render_page(manifest: &Manifest, css: &str, year: i32) -> Markup {
    let content = &manifest.content;

    let body = html! {
        (render_header(&content.brand, &content.nav, content.cta.as_ref(), &content.hero.id))
        main {
            (render_hero(&content.hero, &content.brand, &manifest.config))
            (render_about(&content.about))
            (render_portfolio(&content.portfolio))
            (render_shop(&content.shop, &manifest.services))
            (render_contact(&content.contact, &content.brand))
        }
        (render_footer(&content.brand, &content.footer.rights, year))
        script src=(REVEAL_SCRIPT) defer {}
        @if manifest.config.scene.enabled {
            script src=(GATE_SCRIPT) defer {}
        }
    };

    base_document(&content.brand, css, body)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::parse_content;
    use crate::scan::build_manifest;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn minimal_manifest() -> Manifest {
        build_manifest(
            parse_content(MINIMAL_SITE).unwrap(),
            SiteConfig::default(),
            false,
        )
        .unwrap()
    }

    fn stock_manifest() -> Manifest {
        let tmp = setup_fixtures();
        crate::scan::scan(tmp.path()).unwrap()
    }

    fn page(manifest: &Manifest) -> String {
        render_page(manifest, "", 2025).into_string()
    }

    #[test]
    fn page_includes_doctype_and_lang() {
        let html = page(&stock_manifest());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="id">"#));
        assert!(html.contains("<title>VELLIXAO OFFICIAL</title>"));
    }

    #[test]
    fn every_section_id_appears_once() {
        let manifest = stock_manifest();
        let html = page(&manifest);
        for section in &manifest.sections {
            assert_eq!(count_id(&html, &section.id), 1, "id {}", section.id);
        }
    }

    #[test]
    fn nav_links_point_at_sections() {
        let manifest = stock_manifest();
        let html = render_header(
            &manifest.content.brand,
            &manifest.content.nav,
            manifest.content.cta.as_ref(),
            "home",
        )
        .into_string();
        for link in &manifest.content.nav {
            assert!(html.contains(&format!(r##"href="#{}""##, link.fragment())));
        }
        assert!(html.contains("header-cta"));
    }

    #[test]
    fn portfolio_hrefs_equal_configured_urls() {
        let manifest = stock_manifest();
        let html = render_portfolio(&manifest.content.portfolio).into_string();
        let hrefs = attr_values(&html, "href");
        let urls: Vec<&str> = manifest
            .content
            .portfolio
            .entries
            .iter()
            .map(|e| e.url.as_str())
            .collect();
        assert_eq!(hrefs, urls);
    }

    #[test]
    fn portfolio_uses_link_hint_without_description() {
        let manifest = minimal_manifest();
        let html = render_portfolio(&manifest.content.portfolio).into_string();
        assert!(html.contains("Open link"));
    }

    #[test]
    fn portfolio_icon_color_applied() {
        let manifest = stock_manifest();
        let html = render_portfolio(&manifest.content.portfolio).into_string();
        assert!(html.contains(r#"style="color: #059669""#));
    }

    #[test]
    fn shop_buttons_use_resolved_order_links() {
        let manifest = stock_manifest();
        let html = render_shop(&manifest.content.shop, &manifest.services).into_string();
        let hrefs = attr_values(&html, "href");
        let expected: Vec<&str> = manifest.services.iter().map(|s| s.order.href.as_str()).collect();
        assert_eq!(hrefs, expected);
        assert!(html.contains(r#"href="https://wa.me/6285706400""#));
        assert!(html.contains("Pesan via WhatsApp"));
        assert!(html.contains("Pesan Sekarang"));
    }

    #[test]
    fn contact_hrefs_equal_configured_urls() {
        let manifest = stock_manifest();
        let html = render_contact(&manifest.content.contact, &manifest.content.brand).into_string();
        let hrefs = attr_values(&html, "href");
        let urls: Vec<&str> = manifest
            .content
            .contact
            .entries
            .iter()
            .map(|e| e.url.as_str())
            .collect();
        assert_eq!(hrefs, urls);
        assert!(html.contains("--accent-from: #34d399; --accent-to: #059669"));
    }

    #[test]
    fn outbound_links_open_in_new_tab() {
        let manifest = stock_manifest();
        let html = render_contact(&manifest.content.contact, &manifest.content.brand).into_string();
        assert_eq!(attr_values(&html, "target").len(), 4);
        assert!(attr_values(&html, "rel").iter().all(|r| *r == "noreferrer"));
    }

    #[test]
    fn hero_renders_placeholder_with_gate_attributes() {
        let manifest = stock_manifest();
        let html = render_hero(
            &manifest.content.hero,
            &manifest.content.brand,
            &manifest.config,
        )
        .into_string();
        assert!(html.contains(r#"data-gate-state="placeholder""#));
        assert!(html.contains(r#"data-threshold="0.2""#));
        assert!(html.contains(
            r#"data-scene="https://prod.spline.design/OG17yM2eUIs8MUmA/scene.splinecode""#
        ));
        assert!(html.contains("scene-placeholder"));
        // The scene itself is never in the static markup.
        assert!(!html.contains("<spline-viewer"));
    }

    #[test]
    fn disabled_scene_has_no_loader() {
        let mut manifest = stock_manifest();
        manifest.config.scene.enabled = false;
        let html = page(&manifest);
        assert!(!html.contains("data-gate "));
        assert!(!html.contains("data-scene="));
        assert!(!html.contains(GATE_SCRIPT));
        assert!(html.contains(r#"data-gate-state="placeholder""#));
        assert!(html.contains(r#"<script src="reveal.js" defer></script>"#));
    }

    #[test]
    fn enabled_scene_includes_loader_script() {
        let html = page(&stock_manifest());
        assert!(html.contains(r#"<script src="gate.js" defer></script>"#));
    }

    #[test]
    fn reveal_stays_visible_until_script_arms_it() {
        let css = build_css(&SiteConfig::default());
        let motion = css
            .find("@media (prefers-reduced-motion: no-preference) {\n    .reveal-armed")
            .unwrap();
        let hidden = css.find(".reveal-armed .reveal {").unwrap();
        assert!(hidden > motion);
        // No bare `.reveal` rule: without the script the content is plain.
        assert!(!css.contains("\n.reveal {"));
        assert!(!css.contains("    .reveal {"));

        assert!(REVEAL_JS.contains("classList.add(\"reveal-armed\")"));
        assert!(REVEAL_JS.contains("observer.unobserve"));
    }

    #[test]
    fn gate_script_keeps_listeners_for_cached_pages() {
        let hide = GATE_JS.find("function onPageHide(event)").unwrap();
        let persisted = GATE_JS.find("if (event.persisted) return;").unwrap();
        let teardown = GATE_JS[hide..].find("stopObserving();").unwrap() + hide;
        assert!(hide < persisted && persisted < teardown);
        assert!(!GATE_JS.contains("once: true"));
    }

    #[test]
    fn about_converts_markdown() {
        let manifest = minimal_manifest();
        let html = render_about(&manifest.content.about).into_string();
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn about_renders_highlights_and_callout() {
        let manifest = stock_manifest();
        let html = render_about(&manifest.content.about).into_string();
        assert!(html.contains("Gaya Visual &amp; Animasi"));
        assert_eq!(html.matches("class=\"bullet\"").count(), 4);
    }

    #[test]
    fn footer_shows_year_and_brand() {
        let html = page(&stock_manifest());
        assert!(html.contains("\u{a9} 2025 VELLIXAO OFFICIAL \u{2022} All rights reserved."));
    }

    #[test]
    fn developer_line_lists_roles() {
        let html = page(&stock_manifest());
        assert!(html.contains("Job: Programer, Developer, Desainer"));
    }

    #[test]
    fn html_escape_in_maud() {
        let mut manifest = minimal_manifest();
        manifest.content.portfolio.entries[0].title = "<script>alert('xss')</script>".to_string();
        let html = render_portfolio(&manifest.content.portfolio).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn css_includes_config_and_base_styles() {
        let css = build_css(&SiteConfig::default());
        assert!(css.contains("--color-background:"));
        assert!(css.contains("--section-padding:"));
        assert!(css.contains("scroll-behavior: smooth"));
        assert!(css.contains(".scene-gate"));
    }

    #[test]
    fn generate_writes_site() {
        let tmp = setup_fixtures();
        fs::create_dir_all(tmp.path().join("assets/img")).unwrap();
        fs::write(tmp.path().join("assets/favicon.ico"), b"ico").unwrap();
        fs::write(tmp.path().join("assets/img/og.png"), b"png").unwrap();

        let manifest = crate::scan::scan(tmp.path()).unwrap();
        let work = TempDir::new().unwrap();
        let manifest_path = work.path().join("manifest.json");
        fs::write(&manifest_path, serde_json::to_string(&manifest).unwrap()).unwrap();

        let out = work.path().join("dist");
        let report = generate(&manifest_path, tmp.path(), &out).unwrap();

        assert_eq!(report.pages, vec!["index.html"]);
        assert_eq!(report.scripts, vec![REVEAL_SCRIPT, GATE_SCRIPT]);
        assert_eq!(report.assets, vec!["favicon.ico", "img/og.png"]);
        assert!(out.join("index.html").exists());
        assert!(out.join("img/og.png").exists());
        let js = fs::read_to_string(out.join(GATE_SCRIPT)).unwrap();
        assert!(js.contains("IntersectionObserver"));
    }

    #[test]
    fn generate_refuses_asset_over_generated_file() {
        let tmp = setup_fixtures();
        fs::create_dir_all(tmp.path().join("assets")).unwrap();
        fs::write(tmp.path().join("assets/favicon.ico"), b"ico").unwrap();
        let manifest = crate::scan::scan(tmp.path()).unwrap();

        // Appears after scan, so only the generate stage can catch it.
        fs::write(tmp.path().join("assets/index.html"), "STALE").unwrap();
        fs::write(tmp.path().join("assets/gate.js"), "// old").unwrap();

        let work = TempDir::new().unwrap();
        let manifest_path = work.path().join("manifest.json");
        fs::write(&manifest_path, serde_json::to_string(&manifest).unwrap()).unwrap();
        let out = work.path().join("dist");

        let err = generate(&manifest_path, tmp.path(), &out).unwrap_err();
        assert!(matches!(err, GenerateError::ReservedAsset(ref name) if name == "gate.js"));
        assert!(!out.join(PAGE_FILE).exists());
        assert!(!out.join(GATE_SCRIPT).exists());
        assert!(!out.join(REVEAL_SCRIPT).exists());
        assert!(!out.join("favicon.ico").exists());
    }

    #[test]
    fn generate_missing_manifest_is_error() {
        let work = TempDir::new().unwrap();
        let err = generate(
            &work.path().join("nope.json"),
            work.path(),
            &work.path().join("dist"),
        )
        .unwrap_err();
        assert!(matches!(err, GenerateError::Io(_)));
    }
}
