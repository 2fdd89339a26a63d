//! Leptos UI components for the static documentation page.
//!
//! Each component is a Leptos `#[component]` function; together they build
//! the complete exported document.
//!
//! # Component Hierarchy
//!
//! ```text
//! DocsDocument
//! ├── HeaderBar
//! ├── Sidebar (one entry per Section)
//! └── SectionPanel (per section, overview active)
//!     ├── OverviewBody (lead image, info cards, role grid)
//!     └── PanelBody (topic list with screenshots)
//! ```

mod document;
mod section;
mod sidebar;

pub use document::DocsDocument;
pub use section::{OverviewBody, PanelBody, SectionPanel};
pub use sidebar::{HeaderBar, Sidebar};
