//! Root document component - the complete HTML page

use docs_content::content::all_content;
use docs_content::styles::DOCS_CSS;
use docs_content::{Section, SiteConfig};
use leptos::prelude::*;

use super::{HeaderBar, SectionPanel, Sidebar};

/// The complete HTML document for the documentation export
#[component]
pub fn DocsDocument(config: SiteConfig) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"YARDR Documentation"</title>
                <style>{DOCS_CSS}</style>
            </head>
            <body>
                <HeaderBar config=config.clone() />

                <div class="docs-shell">
                    <Sidebar />
                    <div class="menu-overlay" hidden=true></div>
                    <main class="docs-main">
                        {all_content().into_iter().map(|block| {
                            let active = block.section == Section::Overview;
                            view! {
                                <SectionPanel block=block active=active config=config.clone() />
                            }
                        }).collect::<Vec<_>>()}
                    </main>
                </div>

                <script>{NAV_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Section switching and mobile menu wiring (vanilla JS)
const NAV_SCRIPT: &str = r#"
(() => {
  const sidebar = document.querySelector(".docs-sidebar");
  const overlay = document.querySelector(".menu-overlay");
  const menuBtn = document.querySelector(".menu-btn");
  const closeMenu = () => {
    sidebar.classList.remove("open");
    overlay.hidden = true;
    menuBtn.textContent = "☰";
  };
  menuBtn.addEventListener("click", () => {
    const open = sidebar.classList.toggle("open");
    overlay.hidden = !open;
    menuBtn.textContent = open ? "✕" : "☰";
  });
  overlay.addEventListener("click", closeMenu);
  document.querySelectorAll(".sidebar-link[data-section]").forEach((btn) => {
    btn.addEventListener("click", () => {
      document.querySelectorAll(".sidebar-link[data-section]").forEach((b) => {
        b.classList.remove("active");
      });
      btn.classList.add("active");
      const target = btn.dataset.section;
      document.querySelectorAll("[data-section-panel]").forEach((panel) => {
        panel.classList.toggle("active", panel.dataset.sectionPanel === target);
      });
      closeMenu();
    });
  });
})();
"#;
