//! Outbound link validation and deep-link construction.
//!
//! Every clickable destination on the page is either an in-page fragment
//! (`#shop`) or an absolute outbound URL. Outbound URLs are checked once at
//! scan time; the generator then writes them verbatim.
//!
//! ## Order links
//!
//! Each service card ends in an order button. A service with an explicit
//! `link` uses it as-is. Every other service gets a WhatsApp deep link with a
//! pre-filled message naming the service:
//!
//! ```text
//! https://wa.me/6285706400133?text=Halo%2C%20saya%20ingin%20memesan%3A%20Web%20Development
//! ```
//!
//! The message is encoded with the same rules as JavaScript's
//! `encodeURIComponent`, so the link matches what a browser-side builder
//! would produce for the same text.

use crate::content::{OrderSettings, ServiceEntry};
use crate::types::{OrderLink, OrderLinkKind};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;
use url::Url;

/// Schemes an outbound link may use.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Characters `encodeURIComponent` leaves alone besides ASCII alphanumerics.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Error, Debug, PartialEq)]
pub enum LinkError {
    #[error("{field}: link is empty")]
    Empty { field: String },
    #[error("{field}: invalid URL {href:?}: {reason}")]
    Malformed {
        field: String,
        href: String,
        reason: String,
    },
    #[error("{field}: unsupported scheme {scheme:?} in {href:?}")]
    UnsupportedScheme {
        field: String,
        href: String,
        scheme: String,
    },
    #[error("{field}: phone number {phone:?} must be digits only")]
    InvalidPhone { field: String, phone: String },
}

/// Check that `href` is an absolute URL with an allowed scheme.
///
/// `field` names the content location for error messages
/// (e.g. `portfolio.entries[2].url`).
pub fn validate_href(field: &str, href: &str) -> Result<(), LinkError> {
    if href.trim().is_empty() {
        return Err(LinkError::Empty {
            field: field.to_string(),
        });
    }
    let url = Url::parse(href).map_err(|e| LinkError::Malformed {
        field: field.to_string(),
        href: href.to_string(),
        reason: e.to_string(),
    })?;
    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(LinkError::UnsupportedScheme {
            field: field.to_string(),
            href: href.to_string(),
            scheme: url.scheme().to_string(),
        });
    }
    if matches!(url.scheme(), "http" | "https") && url.host_str().is_none_or(str::is_empty) {
        return Err(LinkError::Malformed {
            field: field.to_string(),
            href: href.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(())
}

/// Check a WhatsApp phone number: international format, digits only.
pub fn validate_phone(field: &str, phone: &str) -> Result<(), LinkError> {
    if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(LinkError::InvalidPhone {
            field: field.to_string(),
            phone: phone.to_string(),
        });
    }
    Ok(())
}

/// Percent-encode a string the way `encodeURIComponent` does.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Build a `wa.me` deep link, optionally with pre-filled message text.
pub fn whatsapp_link(phone: &str, text: &str) -> String {
    if text.is_empty() {
        format!("https://wa.me/{phone}")
    } else {
        format!("https://wa.me/{phone}?text={}", encode_component(text))
    }
}

/// Resolve the order button for a service.
///
/// An explicit `link` wins and is used verbatim. Otherwise a WhatsApp deep
/// link is synthesized with `order.message` followed by the service title.
pub fn resolve_order_link(service: &ServiceEntry, order: &OrderSettings) -> OrderLink {
    match &service.link {
        Some(link) => OrderLink {
            href: link.clone(),
            label: order.override_label.clone(),
            kind: OrderLinkKind::Override,
        },
        None => {
            let text = format!("{}{}", order.message, service.title);
            OrderLink {
                href: whatsapp_link(&order.phone, &text),
                label: order.label.clone(),
                kind: OrderLinkKind::Synthesized,
            }
        }
    }
}
