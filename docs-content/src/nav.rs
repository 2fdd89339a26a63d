//! Navigation state for the documentation viewer.
//!
//! The viewer has exactly two pieces of UI state: which [`Section`] is
//! active, and whether the mobile menu is open. Both live in [`NavState`],
//! which the rendering layer owns for the lifetime of one page view. The
//! state is never persisted.

use serde::{Deserialize, Serialize};

/// One of the four fixed content sections shown in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Platform overview and user roles.
    Overview,
    /// Admin panel documentation.
    Admin,
    /// Company panel documentation.
    Company,
    /// Customer panel documentation.
    Customer,
}

impl Section {
    /// All sections in sidebar order.
    pub const ALL: [Section; 4] = [
        Section::Overview,
        Section::Admin,
        Section::Company,
        Section::Customer,
    ];

    /// Stable string id, used for `data-*` attributes and element ids.
    pub fn id(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Admin => "admin",
            Section::Company => "company",
            Section::Customer => "customer",
        }
    }

    /// Label shown in the sidebar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Admin => "Admin Panel",
            Section::Company => "Company Panel",
            Section::Customer => "Customer Panel",
        }
    }

    /// Sidebar glyph.
    pub fn icon(self) -> &'static str {
        match self {
            Section::Overview => "🏠",
            Section::Admin => "👥",
            Section::Company => "🏢",
            Section::Customer => "👤",
        }
    }

    /// Parse a stable id back into a section.
    ///
    /// The viewer itself never constructs sections from strings (the set of
    /// invocation sites is closed), so this exists for tooling and tests.
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Overview
    }
}

/// Current UI selection: the active section plus mobile-menu visibility.
///
/// All transitions are total. Every combination of (section, menu) is valid;
/// the only coupling is that selecting a section always dismisses the menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    active: Section,
    menu_open: bool,
}

impl NavState {
    /// Initial state: overview shown, menu closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active section.
    pub fn active(&self) -> Section {
        self.active
    }

    /// Whether the mobile menu overlay is visible.
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Activate `section` and dismiss the menu (navigate-and-dismiss).
    pub fn select(&mut self, section: Section) {
        self.active = section;
        self.menu_open = false;
    }

    /// Flip mobile-menu visibility.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Hide the mobile menu. Idempotent.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_overview_with_menu_closed() {
        let nav = NavState::new();
        assert_eq!(nav.active(), Section::Overview);
        assert!(!nav.menu_open());
    }

    #[test]
    fn select_activates_section_and_closes_menu() {
        for start_open in [false, true] {
            for start_section in Section::ALL {
                for target in Section::ALL {
                    let mut nav = NavState::new();
                    nav.select(start_section);
                    if start_open {
                        nav.toggle_menu();
                    }

                    nav.select(target);
                    assert_eq!(nav.active(), target);
                    assert!(!nav.menu_open());
                }
            }
        }
    }

    #[test]
    fn toggle_menu_twice_is_identity() {
        for section in Section::ALL {
            let mut nav = NavState::new();
            nav.select(section);
            let before = nav;

            nav.toggle_menu();
            assert_ne!(nav.menu_open(), before.menu_open());
            nav.toggle_menu();
            assert_eq!(nav, before);
        }
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut nav = NavState::new();
        nav.toggle_menu();

        nav.close_menu();
        let once = nav;
        for _ in 0..5 {
            nav.close_menu();
            assert_eq!(nav, once);
        }
    }

    #[test]
    fn toggle_and_close_leave_active_section_alone() {
        let mut nav = NavState::new();
        nav.select(Section::Company);

        nav.toggle_menu();
        assert_eq!(nav.active(), Section::Company);
        nav.close_menu();
        assert_eq!(nav.active(), Section::Company);
    }

    #[test]
    fn menu_then_navigate_scenario() {
        let mut nav = NavState::new();
        assert_eq!((nav.active(), nav.menu_open()), (Section::Overview, false));

        nav.toggle_menu();
        assert_eq!((nav.active(), nav.menu_open()), (Section::Overview, true));

        nav.select(Section::Admin);
        assert_eq!((nav.active(), nav.menu_open()), (Section::Admin, false));

        nav.toggle_menu();
        assert_eq!((nav.active(), nav.menu_open()), (Section::Admin, true));

        nav.close_menu();
        assert_eq!((nav.active(), nav.menu_open()), (Section::Admin, false));
    }

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("wallet"), None);
        assert_eq!(Section::from_id(""), None);
    }

    #[test]
    fn section_serde_uses_stable_ids() {
        let json = serde_json::to_string(&Section::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
        let back: Section = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(back, Section::Customer);
    }
}
