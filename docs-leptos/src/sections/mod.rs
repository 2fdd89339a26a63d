//! View components: page chrome and the per-section layouts.

mod nav;
mod overview;
mod panel;

pub use nav::{Header, Sidebar};
pub use overview::OverviewSection;
pub use panel::PanelSection;

use docs_content::content::{Screenshot, SectionContent};
use docs_content::SiteConfig;
use leptos::prelude::*;

/// Renders the content block of the active section.
///
/// The overview has its own card layout; the three panel sections share the
/// topic-list layout. Which one applies is visible from the data itself.
#[component]
pub fn SectionView(block: SectionContent, config: SiteConfig) -> impl IntoView {
    let is_overview = block.topics.is_empty();

    view! {
        <div>
            <h1>{block.title.clone()}</h1>
            <p class="docs-intro">{block.intro.clone()}</p>
        </div>
        {if is_overview {
            view! { <OverviewSection block=block config=config /> }.into_any()
        } else {
            view! { <PanelSection block=block config=config /> }.into_any()
        }}
    }
}

/// Bordered screenshot figure. A missing image renders as an empty frame
/// and never touches navigation state.
#[component]
pub fn ScreenshotFigure(shot: Screenshot, config: SiteConfig) -> impl IntoView {
    view! {
        <figure class="screenshot-frame">
            <img src=config.screenshot_url(&shot.asset) alt=shot.alt.clone() />
        </figure>
    }
}
