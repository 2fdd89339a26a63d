//! # docs-content
//!
//! Content model and navigation state for the YARDR documentation viewer.
//!
//! The documentation site is static: four content sections selectable from
//! a sidebar, each a block of prose plus screenshot references. This crate
//! holds everything the two rendering layers share, with no UI-framework
//! dependency of its own:
//!
//! - [`nav`] - the [`Section`] set and the [`NavState`] controller
//! - [`content`] - serde data types and the static Section → content table
//! - [`styles`] - the embedded stylesheet
//! - [`SiteConfig`] - deployment base path and asset URL resolution
//!
//! ## Quick Start
//!
//! ```rust
//! use docs_content::{NavState, Section, content::section_content, SiteConfig};
//!
//! let mut nav = NavState::new();
//! nav.select(Section::Admin);
//!
//! let block = section_content(nav.active());
//! assert_eq!(block.title, "Admin Panel");
//!
//! let config = SiteConfig::default();
//! let url = config.screenshot_url(&block.topics[0].screenshot.asset);
//! assert!(url.starts_with("/Yardr-Doc/docs/screenshots/"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod content;
pub mod nav;
pub mod styles;

pub use nav::{NavState, Section};

/// Deployment configuration baked in at build/export time.
///
/// The site is exported under a fixed path prefix; asset URLs are resolved
/// against it. This is not a runtime interface - nothing else about the
/// viewer's behavior depends on it.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Path prefix the exported site is served under, without a trailing
    /// slash. Empty means the site root.
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: "/Yardr-Doc".into(),
        }
    }
}

impl SiteConfig {
    /// Resolve a site asset (logo, favicon) to a URL.
    pub fn asset_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_path, name)
    }

    /// Resolve a screenshot name to a URL under `docs/screenshots/`.
    pub fn screenshot_url(&self, name: &str) -> String {
        format!("{}/docs/screenshots/{}", self.base_path, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_base_path_matches_deployment() {
        let config = SiteConfig::default();
        assert_eq!(config.base_path, "/Yardr-Doc");
        assert_eq!(config.asset_url("yardrlogo.svg"), "/Yardr-Doc/yardrlogo.svg");
        assert_eq!(
            config.screenshot_url("landing-page.png"),
            "/Yardr-Doc/docs/screenshots/landing-page.png"
        );
    }

    #[test]
    fn empty_base_path_serves_from_site_root() {
        let config = SiteConfig {
            base_path: String::new(),
        };
        assert_eq!(config.screenshot_url("a.png"), "/docs/screenshots/a.png");
    }
}
