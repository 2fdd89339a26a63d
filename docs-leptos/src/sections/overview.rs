//! Overview layout: lead screenshot, feature cards, user-role grid.

use docs_content::content::{InfoCard, RoleCard, SectionContent};
use docs_content::SiteConfig;
use leptos::prelude::*;

use super::ScreenshotFigure;

#[component]
pub fn OverviewSection(block: SectionContent, config: SiteConfig) -> impl IntoView {
    view! {
        {block.lead_image.as_ref().map(|shot| {
            view! { <ScreenshotFigure shot=shot.clone() config=config.clone() /> }
        })}

        <div class="card-grid">
            {block.cards.iter().map(|card| {
                view! { <Card card=card.clone() /> }
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

#[component]
fn Card(card: InfoCard) -> impl IntoView {
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
