//! CLI output formatting for the pipeline stages.
//!
//! Output is information-first: every entry leads with its positional index
//! and title, and the destination it resolves to follows an arrow. This makes
//! the scan output read as a link inventory of the page.
//!
//! ## Scan
//!
//! ```text
//! Sections
//! 001 Home (#home)
//! 002 About (#about)
//!
//! Portfolio
//! 001 Free Fire Tools → https://example.com/ff
//!
//! Services
//! 001 VIP Script (Rp 50.000) → https://wa.me/6285706400 [override]
//! 002 Bot WhatsApp (Rp 20.000) → https://wa.me/62857...?text=... [whatsapp]
//!
//! Contact
//! 001 WhatsApp → https://wa.me/62857...
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Generate
//!
//! ```text
//! index.html
//! reveal.js
//! gate.js
//! Assets
//!     favicon.ico
//!
//! Generated 1 page, 2 scripts, 1 asset in dist
//! ```
//!
//! Each stage has a pure `format_*` function returning lines and a `print_*`
//! wrapper that writes them to stdout.

use crate::config::CONFIG_FILE;
use crate::generate::GenerateReport;
use crate::scan::Manifest;
use crate::types::OrderLinkKind;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn destination_line(index: usize, title: &str, href: &str) -> String {
    format!("{} {} \u{2192} {}", format_index(index), title, href)
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan output: sections, every outbound destination, and config files.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];
    for (i, section) in manifest.sections.iter().enumerate() {
        lines.push(format!(
            "{} {} (#{})",
            format_index(i + 1),
            section.title,
            section.id
        ));
    }

    let portfolio = &manifest.content.portfolio;
    if !portfolio.entries.is_empty() {
        lines.push(String::new());
        lines.push("Portfolio".to_string());
        for (i, entry) in portfolio.entries.iter().enumerate() {
            lines.push(destination_line(i + 1, &entry.title, &entry.url));
        }
    }

    if !manifest.services.is_empty() {
        lines.push(String::new());
        lines.push("Services".to_string());
        for (i, service) in manifest.services.iter().enumerate() {
            let kind = match service.order.kind {
                OrderLinkKind::Override => "override",
                OrderLinkKind::Synthesized => "whatsapp",
            };
            lines.push(format!(
                "{} [{}]",
                destination_line(
                    i + 1,
                    &format!("{} ({})", service.title, service.price),
                    &service.order.href
                ),
                kind
            ));
        }
    }

    let contact = &manifest.content.contact;
    if !contact.entries.is_empty() {
        lines.push(String::new());
        lines.push("Contact".to_string());
        for (i, entry) in contact.entries.iter().enumerate() {
            lines.push(destination_line(i + 1, &entry.label, &entry.url));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join(CONFIG_FILE).exists() {
        lines.push(format!("    {CONFIG_FILE}"));
    }
    if manifest.has_assets {
        lines.push(format!("    {}/", manifest.config.assets_dir));
    }
    if !manifest.config.scene.enabled {
        lines.push("    scene: disabled".to_string());
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate output: written files followed by a one-line summary.
pub fn format_generate_output(report: &GenerateReport, output_dir: &Path) -> Vec<String> {
    let mut lines: Vec<String> = report
        .pages
        .iter()
        .chain(&report.scripts)
        .cloned()
        .collect();

    if !report.assets.is_empty() {
        lines.push("Assets".to_string());
        for asset in &report.assets {
            lines.push(format!("    {asset}"));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}, {} in {}",
        plural(report.pages.len(), "page"),
        plural(report.scripts.len(), "script"),
        plural(report.assets.len(), "asset"),
        output_dir.display()
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport, output_dir: &Path) {
    for line in format_generate_output(report, output_dir) {
        println!("{}", line);
    }
}
