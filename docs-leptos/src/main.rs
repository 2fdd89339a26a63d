// YARDR Docs — Leptos 0.8 Edition

mod sections;

use docs_content::content::section_content;
use docs_content::styles::DOCS_CSS;
use docs_content::{NavState, SiteConfig};
use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    // The whole UI selection state of the page: active section + menu flag.
    let nav = RwSignal::new(NavState::new());
    let config = SiteConfig::default();

    let page_config = config.clone();

    view! {
        <style>{DOCS_CSS}</style>
        <Header nav=nav config=config.clone() />
        <div class="docs-shell">
            <Sidebar nav=nav />
            <Show when=move || nav.get().menu_open()>
                <div
                    class="menu-overlay"
                    on:click=move |_| nav.update(|n| n.close_menu())
                ></div>
            </Show>
            <main class="docs-main">
                <div class="docs-page">
                    {move || {
                        let block = section_content(nav.get().active());
                        view! { <SectionView block=block config=page_config.clone() /> }
                    }}
                </div>
            </main>
        </div>
    }
}
