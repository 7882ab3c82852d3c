//! Shared types serialized between the scan and generate stages.
//!
//! The scan stage writes these into `manifest.json`; the generate stage reads
//! them back. Both sides must agree on the shape.

use crate::content::ServiceEntry;
use crate::icons::Icon;
use serde::{Deserialize, Serialize};

/// How an order button's destination was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderLinkKind {
    /// The service declared its own `link`, used verbatim.
    Override,
    /// A WhatsApp deep link built from the order settings and service title.
    Synthesized,
}

/// The resolved order button of a service card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLink {
    pub href: String,
    pub label: String,
    pub kind: OrderLinkKind,
}

/// A service entry with its order link already resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedService {
    pub title: String,
    pub price: String,
    pub icon: Icon,
    pub description: String,
    pub order: OrderLink,
}

impl ResolvedService {
    pub fn new(entry: &ServiceEntry, order: OrderLink) -> Self {
        Self {
            title: entry.title.clone(),
            price: entry.price.clone(),
            icon: entry.icon,
            description: entry.description.clone(),
            order,
        }
    }
}

/// One addressable section of the page, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAnchor {
    /// Fragment id (`about` for `#about`).
    pub id: String,
    /// Heading shown in CLI output.
    pub title: String,
}
