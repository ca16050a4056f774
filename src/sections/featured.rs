//! Featured-work cards.
//!
//! Card images come from external URLs. When one fails to load the card
//! keeps its styled placeholder block; nothing retries, since a failed load
//! has no retry value without a different URL.

use leptos::prelude::*;

use crate::config::{FeaturedItem, SITE};
use crate::motion::{Section, delay_style};

use super::icons::{ICON_ARROW_UP_RIGHT, ICON_LIGHTNING, Icon};

#[component]
pub fn Featured() -> impl IntoView {
    view! {
        <section id="work" class="featured">
            <div class="section-header">
                <span class="section-eyebrow">"Portfolio"</span>
                <h2 class="section-title">
                    "Featured " <span class="accent-amber">"Projects"</span>
                </h2>
                <p class="section-description">
                    "Real-world case studies showcasing measurable business impact"
                </p>
            </div>

            <div class="featured-grid">
                {SITE
                    .featured
                    .iter()
                    .enumerate()
                    .map(|(index, item)| view! { <FeaturedCard item=item index=index /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FeaturedCard(item: &'static FeaturedItem, index: usize) -> impl IntoView {
    let (image_failed, set_image_failed) = signal(false);

    view! {
        <article class="featured-card rise" style=delay_style(Section::Featured, index)>
            <div class="featured-media">
                <Show when=move || !image_failed.get()>
                    <img
                        class="featured-image"
                        src=item.image_url
                        alt=item.title
                        on:error=move |_| set_image_failed.set(true)
                    />
                </Show>
                <span class="featured-badge">{item.badge}</span>
            </div>

            <div class="featured-body">
                <div class="featured-impact">
                    <Icon path=ICON_LIGHTNING size="14" />
                    <span>{item.impact}</span>
                </div>
                <h3 class="card-title">{item.title}</h3>
                <p class="card-text">{item.description}</p>
                <a href=item.href class="featured-link">
                    "View Case Study"
                    <Icon path=ICON_ARROW_UP_RIGHT size="14" />
                </a>
            </div>
        </article>
    }
}
