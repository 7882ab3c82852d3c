//! Shared test utilities for the brand-site test suite.
//!
//! Provides a minimal content fixture, a copy of the stock content directory,
//! manifest lookups, and small HTML inspection helpers.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let vip = find_service(&manifest, "VIP Script");
//! assert_eq!(vip.order.href, "https://wa.me/6285706400");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::Manifest;
use crate::types::ResolvedService;

/// Smallest content file that passes validation.
///
/// Each replaceable token appears exactly once so tests can break one rule
/// with a single `str::replace`.
pub const MINIMAL_SITE: &str = r##"
[brand]
name = "Test Brand"
developer = "Tester"
roles = ["Dev"]

[[nav]]
label = "About"
target = "about"

[[nav]]
label = "Shop"
target = "shop"

[hero]
headline = "Hello"
intro = "Intro text"

[hero.scene]
url = "https://example.com/scene.splinecode"
viewer_script = "https://example.com/viewer.js"

[about]
title = "About"
body = "Some **bold** words."

[portfolio]
title = "Work"

[[portfolio.entries]]
title = "One"
icon = "code"
url = "https://example.com/one"

[shop]
title = "Shop"

[shop.order]
phone = "628123"
message = "Order: "

[[shop.services]]
title = "Thing A"
price = "10"
icon = "server"
description = "Synthesized"

[contact]
title = "Contact"

[[contact.entries]]
label = "Mail"
url = "mailto:test@example.com"
icon = "mail"
accent = ["#111111", "#222222"]
"##;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy the stock `content/` directory to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting the real
/// site content.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let content = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
    copy_dir_recursive(&content, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups (panic with a clear message on miss)
// =========================================================================

/// Find a resolved service by title. Panics if not found.
pub fn find_service<'a>(manifest: &'a Manifest, title: &str) -> &'a ResolvedService {
    manifest
        .services
        .iter()
        .find(|s| s.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = manifest.services.iter().map(|s| s.title.as_str()).collect();
            panic!("service '{title}' not found. Available: {titles:?}")
        })
}

/// All section ids in document order.
pub fn section_ids(manifest: &Manifest) -> Vec<&str> {
    manifest.sections.iter().map(|s| s.id.as_str()).collect()
}

// =========================================================================
// HTML inspection
// =========================================================================

/// Values of every `attr="..."` occurrence, in document order.
pub fn attr_values<'a>(html: &'a str, attr: &str) -> Vec<&'a str> {
    let needle = format!(" {attr}=\"");
    let mut out = Vec::new();
    let mut rest = html;
    while let Some(pos) = rest.find(&needle) {
        let start = pos + needle.len();
        let Some(len) = rest[start..].find('"') else {
            break;
        };
        out.push(&rest[start..start + len]);
        rest = &rest[start + len..];
    }
    out
}

/// Number of elements carrying `id="<id>"`.
pub fn count_id(html: &str, id: &str) -> usize {
    attr_values(html, "id").iter().filter(|v| **v == id).count()
}
