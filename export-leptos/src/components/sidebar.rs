//! Page chrome: sticky header and the section sidebar

use docs_content::{Section, SiteConfig};
use leptos::prelude::*;

/// Sticky header with logo, title and the mobile menu button
#[component]
pub fn HeaderBar(config: SiteConfig) -> impl IntoView {
    view! {
        <header class="docs-header">
            <a href="/" class="docs-brand">
                <img src=config.asset_url("yardrlogo.svg") alt="YARDR" />
                <span class="brand-title">"YARDR Docs"</span>
            </a>
            <button class="menu-btn" aria-label="Toggle menu">"☰"</button>
            <nav class="header-links">
                <a href="/">"Back to App"</a>
            </nav>
        </header>
    }
}

/// Sidebar listing all sections, overview active on load
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="docs-sidebar">
            <nav class="sidebar-nav">
                <div class="sidebar-caption">
                    <span class="icon">"📖"</span>
                    "Documentation"
                </div>
                {Section::ALL.into_iter().map(|section| {
                    let class = if section == Section::Overview {
                        "sidebar-link active"
                    } else {
                        "sidebar-link"
                    };
                    view! {
                        <button class=class data-section=section.id()>
                            <span class="icon">{section.icon()}</span>
                            {section.label()}
                            <span class="chevron">"›"</span>
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
