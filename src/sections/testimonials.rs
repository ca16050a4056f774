//! Client testimonial cards.

use leptos::prelude::*;

use crate::config::SITE;
use crate::motion::{Section, delay_style};

use super::avatar::Avatar;
use super::icons::{ICON_STAR, Icon};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <div class="section-header">
                <span class="section-eyebrow">"Client Success Stories"</span>
                <h2 class="section-title">
                    "What Clients " <span class="accent-ink">"Say"</span>
                </h2>
                <p class="section-description">
                    "Don't just take my word for it — hear from the teams I've worked with"
                </p>
            </div>

            <div class="testimonials-grid">
                {SITE
                    .testimonials
                    .iter()
                    .enumerate()
                    .map(|(index, testimonial)| {
                        view! {
                            <article
                                class="testimonial-card rise"
                                style=delay_style(Section::Testimonials, index)
                            >
                                <div class="star-row">
                                    {(0..5)
                                        .map(|_| {
                                            view! { <Icon path=ICON_STAR size="18" class="star" /> }
                                        })
                                        .collect_view()}
                                </div>
                                <p class="testimonial-quote">"\u{201c}" {testimonial.quote} "\u{201d}"</p>
                                <div class="testimonial-author">
                                    <Avatar
                                        name=testimonial.author
                                        src=testimonial.avatar_url
                                        class="avatar testimonial-avatar"
                                    />
                                    <div>
                                        <div class="author-name">{testimonial.author}</div>
                                        <div class="author-role">{testimonial.role}</div>
                                    </div>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
