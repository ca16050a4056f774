//! Competency highlight cards.

use leptos::prelude::*;

use crate::config::SITE;
use crate::motion::{Section, delay_style};

use super::icons::{ICON_TREND_UP, Icon, icon_path};

#[component]
pub fn Highlights() -> impl IntoView {
    view! {
        <section class="highlights">
            <div class="section-header">
                <span class="section-eyebrow">"What I Do Best"</span>
                <h2 class="section-title">
                    "Core " <span class="accent-ink">"Competencies"</span>
                </h2>
            </div>

            <div class="highlights-grid">
                {SITE
                    .highlights
                    .iter()
                    .enumerate()
                    .map(|(index, highlight)| {
                        view! {
                            <article
                                class="highlight-card rise"
                                style=delay_style(Section::Highlights, index)
                            >
                                <div class="card-icon">
                                    <Icon path=icon_path(highlight.icon) size="28" />
                                </div>
                                <h3 class="card-title">{highlight.title}</h3>
                                <span class="metric-pill">
                                    <Icon path=ICON_TREND_UP size="12" />
                                    {highlight.metric}
                                </span>
                                <p class="card-text">{highlight.text}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
