//! Static documentation content.
//!
//! These types define the data model for the documentation pages. They're
//! designed to be:
//!
//! - **Serializable** - Easy JSON import/export via serde
//! - **Clone-friendly** - Views can share data without borrowing issues
//! - **Default-able** - Build partial blocks with `..Default::default()`
//!
//! The mapping from [`Section`] to its content block is pure data with no
//! computation: [`section_content`] is the dispatch table the rendering
//! layers (viewer and static export) select from on every state read.

use serde::{Deserialize, Serialize};

use crate::nav::Section;

/// A labeled screenshot reference.
///
/// `asset` is the logical file name under `docs/screenshots/`; resolving it
/// to a URL is the job of [`crate::SiteConfig`]. A missing image fails soft
/// in the rendering layer and never affects navigation state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    /// File name under the screenshots directory.
    pub asset: String,
    /// Alt text for the image.
    pub alt: String,
}

impl Screenshot {
    /// Shorthand for a screenshot reference.
    pub fn new(asset: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            alt: alt.into(),
        }
    }
}

/// A card on the overview page, optionally with a bullet list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoCard {
    /// Card heading.
    pub title: String,
    /// Body paragraph. Empty when the card is bullets-only.
    pub body: String,
    /// Bullet list items. Empty when the card is prose-only.
    pub bullets: Vec<String>,
}

/// One user role in the overview's role grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCard {
    /// Role name.
    pub role: String,
    /// One-line description.
    pub blurb: String,
}

/// One documented feature of a panel: heading, prose, screenshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Feature heading.
    pub heading: String,
    /// Descriptive paragraph.
    pub body: String,
    /// Screenshot of the feature.
    pub screenshot: Screenshot,
}

/// The full content block for one section.
///
/// The overview uses `lead_image`, `cards` and `roles`; the three panel
/// sections use `topics`. Fields not used by a section stay empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionContent {
    /// Which section this block belongs to.
    pub section: Section,
    /// Page heading.
    pub title: String,
    /// Lead paragraph under the heading.
    pub intro: String,
    /// Full-width screenshot shown right under the intro.
    pub lead_image: Option<Screenshot>,
    /// Overview feature cards.
    pub cards: Vec<InfoCard>,
    /// Overview user-role grid.
    pub roles: Vec<RoleCard>,
    /// Panel topics, in display order.
    pub topics: Vec<Topic>,
}

impl Default for SectionContent {
    fn default() -> Self {
        Self {
            section: Section::default(),
            title: String::new(),
            intro: String::new(),
            lead_image: None,
            cards: Vec::new(),
            roles: Vec::new(),
            topics: Vec::new(),
        }
    }
}

/// Content blocks for all sections, in sidebar order.
pub fn all_content() -> Vec<SectionContent> {
    Section::ALL.into_iter().map(section_content).collect()
}

/// The static Section → content dispatch table.
pub fn section_content(section: Section) -> SectionContent {
    match section {
        Section::Overview => overview(),
        Section::Admin => admin(),
        Section::Company => company(),
        Section::Customer => customer(),
    }
}

fn overview() -> SectionContent {
    SectionContent {
        section: Section::Overview,
        title: "YARDR Documentation".into(),
        intro: "Welcome to the YARDR Equipment Rental Platform documentation. \
                This guide will help you understand how to use the platform."
            .into(),
        lead_image: Some(Screenshot::new("landing-page.png", "YARDR Landing Page")),
        cards: vec![
            InfoCard {
                title: "What is YARDR?".into(),
                body: "YARDR is a comprehensive equipment rental platform connecting \
                       customers with equipment rental companies in Kuwait. The platform \
                       enables seamless equipment rental through a modern, user-friendly \
                       interface."
                    .into(),
                bullets: vec![],
            },
            InfoCard {
                title: "Key Features".into(),
                body: String::new(),
                bullets: vec![
                    "Browse and rent heavy equipment".into(),
                    "Company management dashboard".into(),
                    "Real-time order tracking".into(),
                    "Wallet system for payments".into(),
                    "Operator management".into(),
                ],
            },
        ],
        roles: vec![
            RoleCard {
                role: "Admin".into(),
                blurb: "Platform administrators who manage companies, listings, and users."
                    .into(),
            },
            RoleCard {
                role: "Company".into(),
                blurb: "Equipment providers who list and rent out their equipment.".into(),
            },
            RoleCard {
                role: "Customer".into(),
                blurb: "End users who browse and rent equipment for their projects.".into(),
            },
        ],
        topics: vec![],
    }
}

fn admin() -> SectionContent {
    SectionContent {
        section: Section::Admin,
        title: "Admin Panel".into(),
        intro: "The Admin Panel provides complete control over the platform, including \
                company approvals, listing management, and user oversight."
            .into(),
        topics: vec![
            Topic {
                heading: "Dashboard".into(),
                body: "The admin dashboard shows key metrics including total revenue, \
                       active companies, total listings, and orders."
                    .into(),
                screenshot: Screenshot::new(
                    "page-2025-12-16T19-30-01-878Z.png",
                    "Admin Dashboard",
                ),
            },
            Topic {
                heading: "Orders Management".into(),
                body: "View and manage all orders across the platform. Filter by status \
                       and search for specific orders."
                    .into(),
                screenshot: Screenshot::new("admin-02-orders.png", "Admin Orders"),
            },
            Topic {
                heading: "Company Approvals".into(),
                body: "Review and approve company registrations. Companies need admin \
                       approval before they can start listing equipment."
                    .into(),
                screenshot: Screenshot::new("admin-03-companies.png", "Admin Company Approvals"),
            },
            Topic {
                heading: "Listings Management".into(),
                body: "View, approve, and manage all equipment listings. Filter by \
                       company, category, and status."
                    .into(),
                screenshot: Screenshot::new("admin-04-listings.png", "Admin Listings"),
            },
            Topic {
                heading: "PIM - Categories".into(),
                body: "Manage equipment categories. Add, edit, or reorder categories to \
                       organize the equipment catalog."
                    .into(),
                screenshot: Screenshot::new("admin-05-categories.png", "Admin Categories"),
            },
            Topic {
                heading: "PIM - Service Types".into(),
                body: "Manage service types with variants, pricing options, and custom \
                       fields for each equipment type."
                    .into(),
                screenshot: Screenshot::new("admin-06-service-types.png", "Admin Service Types"),
            },
            Topic {
                heading: "Users - Companies".into(),
                body: "Manage registered companies on the platform. View company details, \
                       listings count, and status."
                    .into(),
                screenshot: Screenshot::new(
                    "admin-07-users-companies.png",
                    "Admin Users - Companies",
                ),
            },
            Topic {
                heading: "Users - Customers".into(),
                body: "Manage registered customers. View customer details, order history, \
                       and total spent."
                    .into(),
                screenshot: Screenshot::new(
                    "admin-08-users-customers.png",
                    "Admin Users - Customers",
                ),
            },
        ],
        ..Default::default()
    }
}

fn company() -> SectionContent {
    SectionContent {
        section: Section::Company,
        title: "Company Panel".into(),
        intro: "The Company Panel allows equipment rental companies to manage their \
                listings, orders, operators, and wallet."
            .into(),
        topics: vec![
            Topic {
                heading: "Dashboard".into(),
                body: "The company dashboard shows active listings, broadcasts, orders, \
                       and wallet balance at a glance."
                    .into(),
                screenshot: Screenshot::new("company-01-dashboard.png", "Company Dashboard"),
            },
            Topic {
                heading: "My Listings".into(),
                body: "Manage your equipment listings. Add new listings, update pricing, \
                       and track listing status."
                    .into(),
                screenshot: Screenshot::new("company-02-listings.png", "Company Listings"),
            },
            Topic {
                heading: "Orders".into(),
                body: "Manage rental orders. Accept broadcasts, track deliveries, and \
                       complete orders."
                    .into(),
                screenshot: Screenshot::new("company-03-orders.png", "Company Orders"),
            },
            Topic {
                heading: "Wallet".into(),
                body: "Track your earnings, view transaction history, and request \
                       withdrawals."
                    .into(),
                screenshot: Screenshot::new("company-04-wallet.png", "Company Wallet"),
            },
            Topic {
                heading: "Operators".into(),
                body: "Manage your equipment operators. Add operators and assign them to \
                       orders."
                    .into(),
                screenshot: Screenshot::new("company-05-operators.png", "Company Operators"),
            },
        ],
        ..Default::default()
    }
}

fn customer() -> SectionContent {
    SectionContent {
        section: Section::Customer,
        title: "Customer Panel".into(),
        intro: "The Customer Panel allows users to browse equipment, place orders, and \
                manage their rentals."
            .into(),
        topics: vec![
            Topic {
                heading: "Browse Equipment".into(),
                body: "Browse available equipment by category. Find excavators, cranes, \
                       generators, and more."
                    .into(),
                screenshot: Screenshot::new("customer-01-browse.png", "Customer Browse"),
            },
            Topic {
                heading: "My Orders".into(),
                body: "Track your rental orders. View order status, details, and history."
                    .into(),
                screenshot: Screenshot::new("customer-02-orders.png", "Customer Orders"),
            },
            Topic {
                heading: "Wallet".into(),
                body: "Manage your wallet balance. Top up, view transactions, and track \
                       spending."
                    .into(),
                screenshot: Screenshot::new("customer-03-wallet.png", "Customer Wallet"),
            },
        ],
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_section_has_a_content_block() {
        let blocks = all_content();
        assert_eq!(blocks.len(), Section::ALL.len());
        for (section, block) in Section::ALL.into_iter().zip(&blocks) {
            assert_eq!(block.section, section);
            assert!(!block.title.is_empty());
            assert!(!block.intro.is_empty());
        }
    }

    #[test]
    fn overview_has_cards_and_roles_but_no_topics() {
        let block = section_content(Section::Overview);
        assert_eq!(block.cards.len(), 2);
        assert_eq!(block.roles.len(), 3);
        assert!(block.topics.is_empty());
        assert_eq!(
            block.lead_image,
            Some(Screenshot::new("landing-page.png", "YARDR Landing Page"))
        );
    }

    #[test]
    fn panel_sections_are_topic_lists() {
        for section in [Section::Admin, Section::Company, Section::Customer] {
            let block = section_content(section);
            assert!(!block.topics.is_empty(), "{} has no topics", section.id());
            assert!(block.cards.is_empty());
            assert!(block.roles.is_empty());
        }
        assert_eq!(section_content(Section::Admin).topics.len(), 8);
        assert_eq!(section_content(Section::Company).topics.len(), 5);
        assert_eq!(section_content(Section::Customer).topics.len(), 3);
    }

    #[test]
    fn every_topic_carries_a_labeled_screenshot() {
        for block in all_content() {
            for topic in &block.topics {
                assert!(!topic.heading.is_empty());
                assert!(!topic.body.is_empty());
                assert!(topic.screenshot.asset.ends_with(".png"));
                assert!(!topic.screenshot.alt.is_empty());
            }
        }
    }

    #[test]
    fn content_round_trips_through_json() {
        let block = section_content(Section::Company);
        let json = serde_json::to_string(&block).unwrap();
        let back: SectionContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}
