//! Outbound contact links, treated as configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host resolves [`SiteLinks`] from its environment and provides them to
//! the SSR render through Leptos context. The same value is embedded in the
//! page as a JSON `<script>` block so the hydrating client renders identical
//! hrefs without a round trip.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// DOM id of the embedded JSON block.
pub const EMBED_ELEMENT_ID: &str = "site-links";

pub const DEFAULT_GITHUB_URL: &str = "https://github.com/seeyaa77";
pub const DEFAULT_LINKEDIN_URL: &str = "https://linkedin.com";
pub const DEFAULT_EMAIL: &str = "contact@example.com";

/// Profile and contact links rendered in the hero and contact sections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLinks {
    pub github_url: String,
    pub linkedin_url: String,
    pub email: String,
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self {
            github_url: DEFAULT_GITHUB_URL.to_owned(),
            linkedin_url: DEFAULT_LINKEDIN_URL.to_owned(),
            email: DEFAULT_EMAIL.to_owned(),
        }
    }
}

impl SiteLinks {
    /// `mailto:` href for the configured address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Serialize `links` for embedding inside a `<script>` element.
///
/// `<` is escaped so a value can never close the surrounding tag.
///
/// # Errors
///
/// Returns the underlying serializer error.
pub fn embed_json(links: &SiteLinks) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(links)?.replace('<', "\\u003c"))
}

/// Parse the embedded JSON block.
///
/// # Errors
///
/// Returns an error if `raw` is not a complete `SiteLinks` object.
pub fn parse_embedded(raw: &str) -> Result<SiteLinks, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Read the embedded block from the live document. Browser-only; `None`
/// elsewhere or when the block is missing.
pub fn read_embedded() -> Option<SiteLinks> {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()?
            .document()?
            .get_element_by_id(EMBED_ELEMENT_ID)?
            .text_content()?;
        match parse_embedded(&raw) {
            Ok(links) => Some(links),
            Err(e) => {
                log::warn!("embedded site links malformed, using defaults: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Links for the current render: context first (SSR), then the embedded
/// block (hydrate), then the defaults.
pub fn resolve() -> SiteLinks {
    leptos::prelude::use_context::<SiteLinks>()
        .or_else(read_embedded)
        .unwrap_or_default()
}
