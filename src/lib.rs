//! # Brand Site
//!
//! A static generator for a single-page brand portfolio: a hero with a
//! lazily mounted 3D scene, an about block, a portfolio grid, a services
//! catalogue with order buttons, and a contact panel. All of it is described
//! in one `site.toml`, so the page is edited as data rather than markup.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (content + config → validated data)
//! 2. Generate  manifest  →  dist/            (index.html, scripts, assets)
//! ```
//!
//! Scan does every check that can fail: link schemes, section ids, nav
//! targets, order link resolution. Generate is a pure render of what scan
//! accepted. The manifest in between is plain JSON you can inspect, and it
//! lists the final destination of every button on the page.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: loads content and config, validates, resolves order links |
//! | [`generate`] | Stage 2: renders the page with Maud and writes the output directory |
//! | [`content`] | `site.toml` schema: brand, nav, hero, about, portfolio, shop, contact |
//! | [`config`] | `config.toml` loading, stock defaults, validation, CSS generation |
//! | [`links`] | URL validation, `encodeURIComponent`, WhatsApp deep links |
//! | [`gate`] | Visibility gate state machine for the hero scene |
//! | [`icons`] | Inline SVG icon set referenced by content entries |
//! | [`types`] | Resolved values shared between stages (`OrderLink`, `SectionAnchor`) |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup for the binary |
//!
//! # Design Decisions
//!
//! ## Gated Scene Loading
//!
//! The 3D viewer is heavy. The page ships a placeholder and a small vanilla
//! script (`gate.js`) that mounts the viewer only once the hero has been
//! visible past a threshold, and never while the visitor prefers reduced
//! motion. Once mounted it stays mounted. The transitions are modelled in
//! [`gate`] so they can be tested without a browser; the script mirrors them.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Malformed markup
//! is a build error and every interpolated value is escaped, which matters
//! here because every string on the page comes from content.
//!
//! ## No Runtime Framework
//!
//! The output is one HTML file, one stylesheet inlined into it, and one short
//! script. It can be dropped on any static file host.

pub mod config;
pub mod content;
pub mod gate;
pub mod generate;
pub mod icons;
pub mod links;
pub mod logging;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
