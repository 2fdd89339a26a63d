//! Sticky header and the section sidebar.

use docs_content::{NavState, Section, SiteConfig};
use leptos::prelude::*;

#[component]
pub fn Header(nav: RwSignal<NavState>, config: SiteConfig) -> impl IntoView {
    view! {
        <header class="docs-header">
            <a href="/" class="docs-brand">
                <img src=config.asset_url("yardrlogo.svg") alt="YARDR" />
                <span class="brand-title">"YARDR Docs"</span>
            </a>
            <button
                class="menu-btn"
                aria-label="Toggle menu"
                on:click=move |_| nav.update(|n| n.toggle_menu())
            >
                {move || if nav.get().menu_open() { "✕" } else { "☰" }}
            </button>
            <nav class="header-links">
                <a href="/">"Back to App"</a>
            </nav>
        </header>
    }
}

#[component]
pub fn Sidebar(nav: RwSignal<NavState>) -> impl IntoView {
    view! {
        <aside class=move || {
            if nav.get().menu_open() { "docs-sidebar open" } else { "docs-sidebar" }
        }>
            <nav class="sidebar-nav">
                <div class="sidebar-caption">
                    <span class="icon">"📖"</span>
                    "Documentation"
                </div>
                {Section::ALL.into_iter().map(|section| {
                    view! { <SidebarLink nav=nav section=section /> }
                }).collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}

#[component]
fn SidebarLink(nav: RwSignal<NavState>, section: Section) -> impl IntoView {
    view! {
        <button
            class=move || {
                if nav.get().active() == section {
                    "sidebar-link active"
                } else {
                    "sidebar-link"
                }
            }
            on:click=move |_| nav.update(|n| n.select(section))
        >
            <span class="icon">{section.icon()}</span>
            {section.label()}
            <span class="chevron">"›"</span>
        </button>
    }
}
