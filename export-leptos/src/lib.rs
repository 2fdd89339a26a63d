//! # docs-export
//!
//! Leptos SSR renderer for the YARDR documentation static export.
//!
//! The interactive viewer (`docs-leptos`) is a trunk-built WASM app; this
//! crate produces the same page as a single self-contained HTML artifact
//! with no WASM and no external stylesheet. Section switching and the
//! mobile menu are wired up by a small embedded vanilla-JS script, so the
//! export behaves like the viewer anywhere a `<script>` tag runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use docs_content::SiteConfig;
//! use docs_export::render_docs;
//!
//! let html = render_docs(&SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! // std::fs::write("index.html", html)?;
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait - no reactive runtime and
//! no hydration, just components to a `String`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;

use components::DocsDocument;
use docs_content::SiteConfig;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete documentation page to an HTML string.
///
/// `config` supplies the deployment base path used to resolve the logo and
/// screenshot URLs. All four sections are pre-rendered; the embedded nav
/// script shows one at a time, starting with the overview.
///
/// # Example
///
/// ```rust
/// use docs_content::SiteConfig;
/// use docs_export::render_docs;
///
/// let html = render_docs(&SiteConfig { base_path: String::new() });
/// assert!(html.contains("/docs/screenshots/landing-page.png"));
/// ```
pub fn render_docs(config: &SiteConfig) -> String {
    let doc = view! { <DocsDocument config=config.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docs_content::{Section, content::section_content, styles::DOCS_CSS};
    use pretty_assertions::assert_eq;

    fn rendered() -> String {
        render_docs(&SiteConfig::default())
    }

    #[test]
    fn renders_complete_document() {
        let html = rendered();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("YARDR Documentation"));
    }

    #[test]
    fn embeds_stylesheet_and_nav_script() {
        let html = rendered();
        assert!(html.contains(DOCS_CSS));
        assert!(html.contains("data-section-panel"));
        assert!(html.contains("classList.toggle"));
    }

    #[test]
    fn prerenders_every_section() {
        let html = rendered();
        for section in Section::ALL {
            let block = section_content(section);
            assert!(html.contains(&block.title), "missing title for {}", section.id());
            for topic in &block.topics {
                assert!(html.contains(&topic.heading));
            }
        }
    }

    #[test]
    fn screenshot_urls_resolve_against_base_path() {
        let html = rendered();
        assert!(html.contains("/Yardr-Doc/docs/screenshots/landing-page.png"));
        assert!(html.contains("/Yardr-Doc/docs/screenshots/company-04-wallet.png"));
        assert!(html.contains("/Yardr-Doc/yardrlogo.svg"));
    }

    /// The opening tag containing `needle`, attribute order independent.
    fn enclosing_tag<'a>(html: &'a str, needle: &str) -> &'a str {
        let at = html.find(needle).unwrap_or_else(|| panic!("no {needle}"));
        let start = html[..at].rfind('<').expect("tag start");
        let end = at + html[at..].find('>').expect("tag end");
        &html[start..=end]
    }

    #[test]
    fn overview_panel_is_active_by_default() {
        let html = rendered();
        let tag = enclosing_tag(&html, "data-section-panel=\"overview\"");
        assert!(tag.contains("section-panel active"), "got tag: {tag}");
    }

    #[test]
    fn other_panels_start_hidden() {
        let html = rendered();
        for section in [Section::Admin, Section::Company, Section::Customer] {
            let needle = format!("data-section-panel=\"{}\"", section.id());
            let tag = enclosing_tag(&html, &needle);
            assert!(tag.contains("section-panel"), "got tag: {tag}");
            assert!(!tag.contains("active"), "got tag: {tag}");
        }
    }

    #[test]
    fn sidebar_lists_sections_in_order() {
        let html = rendered();
        let positions: Vec<usize> = Section::ALL
            .into_iter()
            .map(|s| {
                html.find(&format!("data-section=\"{}\"", s.id()))
                    .unwrap_or_else(|| panic!("no sidebar entry for {}", s.id()))
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}
