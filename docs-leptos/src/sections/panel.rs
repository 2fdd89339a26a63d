//! Panel layout shared by the admin, company and customer sections.

use docs_content::content::{SectionContent, Topic};
use docs_content::SiteConfig;
use leptos::prelude::*;

use super::ScreenshotFigure;

#[component]
pub fn PanelSection(block: SectionContent, config: SiteConfig) -> impl IntoView {
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
