//! Section panels: overview layout and the topic-list layout

use docs_content::content::{InfoCard, RoleCard, Screenshot, SectionContent, Topic};
use docs_content::SiteConfig;
use leptos::prelude::*;

/// One pre-rendered section, shown or hidden by the nav script
#[component]
pub fn SectionPanel(block: SectionContent, active: bool, config: SiteConfig) -> impl IntoView {
    let class = if active {
        "section-panel active"
    } else {
        "section-panel"
    };
    let is_overview = block.topics.is_empty();
    let panel_id = block.section.id();

    view! {
        <div class=class data-section-panel=panel_id>
            <div class="docs-page">
                <div>
                    <h1>{block.title.clone()}</h1>
                    <p class="docs-intro">{block.intro.clone()}</p>
                </div>
                {if is_overview {
                    view! { <OverviewBody block=block config=config /> }.into_any()
                } else {
                    view! { <PanelBody block=block config=config /> }.into_any()
                }}
            </div>
        </div>
    }
}

/// Overview layout: lead screenshot, info cards, user-role grid
#[component]
pub fn OverviewBody(block: SectionContent, config: SiteConfig) -> impl IntoView {
    view! {
        {block.lead_image.as_ref().map(|shot| {
            view! { <ScreenshotFigure shot=shot.clone() config=config.clone() /> }
        })}

        <div class="card-grid">
            {block.cards.iter().map(|card| {
                view! { <InfoCardView card=card.clone() /> }
            }).collect::<Vec<_>>()}
        </div>

        {(!block.roles.is_empty()).then(|| view! {
            <div class="roles-card">
                <h3>"User Roles"</h3>
                <div class="roles-grid">
                    {block.roles.iter().map(|role| {
                        view! { <RoleTile role=role.clone() /> }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        })}
    }
}

/// Panel layout: list of topics, each with heading, prose and screenshot
#[component]
pub fn PanelBody(block: SectionContent, config: SiteConfig) -> impl IntoView {
    view! {
        {block.topics.iter().map(|topic| {
            view! { <TopicView topic=topic.clone() config=config.clone() /> }
        }).collect::<Vec<_>>()}
    }
}

#[component]
fn TopicView(topic: Topic, config: SiteConfig) -> impl IntoView {
    view! {
        <div class="topic">
            <h2>{topic.heading}</h2>
            <p>{topic.body}</p>
            <ScreenshotFigure shot=topic.screenshot config=config />
        </div>
    }
}

#[component]
fn InfoCardView(card: InfoCard) -> impl IntoView {
    view! {
        <div class="info-card">
            <h3>{card.title}</h3>
            {(!card.body.is_empty()).then(|| view! { <p>{card.body.clone()}</p> })}
            {(!card.bullets.is_empty()).then(|| view! {
                <ul>
                    {card.bullets.iter().map(|item| {
                        view! { <li>{item.clone()}</li> }
                    }).collect::<Vec<_>>()}
                </ul>
            })}
        </div>
    }
}

#[component]
fn RoleTile(role: RoleCard) -> impl IntoView {
    view! {
        <div class="role-tile">
            <h4>{role.role}</h4>
            <p>{role.blurb}</p>
        </div>
    }
}

#[component]
fn ScreenshotFigure(shot: Screenshot, config: SiteConfig) -> impl IntoView {
    view! {
        <figure class="screenshot-frame">
            <img src=config.screenshot_url(&shot.asset) alt=shot.alt.clone() />
        </figure>
    }
}
