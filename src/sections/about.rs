//! About section: approach text plus the speaking/writing cards.

use leptos::prelude::*;

use crate::motion::{Section, delay_style};

use super::icons::{ICON_ARROW_UP_RIGHT, ICON_BOOK_OPEN, ICON_MIC, ICON_SPARKLE, ICON_TREND_UP, Icon};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="about-grid">
                <div class="about-intro rise">
                    <span class="section-eyebrow">"My Approach"</span>
                    <h2 class="section-title">
                        "About " <span class="accent-ink">"Me"</span>
                    </h2>
                    <p class="about-text">
                        "I work at the intersection of research, product design, and "
                        "accessibility. Through deep user research with diverse communities, "
                        "I uncover insights that transform how teams build products."
                    </p>
                    <a href="/contact.html" class="btn btn-resume">
                        "Download Resume"
                        <Icon path=ICON_ARROW_UP_RIGHT size="14" />
                    </a>
                </div>

                <div class="about-cards">
                    <article class="about-card indigo rise" style=delay_style(Section::About, 0)>
                        <div class="card-icon glass">
                            <Icon path=ICON_MIC size="28" />
                        </div>
                        <h3 class="card-title">"Speaking"</h3>
                        <p class="card-text">
                            "International keynote speaker sharing insights on inclusive "
                            "design, cognitive load, and product strategy at conferences "
                            "worldwide."
                        </p>
                        <span class="metric-pill glass">
                            <Icon path=ICON_SPARKLE size="12" />
                            "30+ events annually"
                        </span>
                    </article>

                    <article class="about-card amber rise" style=delay_style(Section::About, 1)>
                        <div class="card-icon glass">
                            <Icon path=ICON_BOOK_OPEN size="28" />
                        </div>
                        <h3 class="card-title">"Writing"</h3>
                        <p class="card-text">
                            "Published case studies, UX frameworks, and accessibility guides "
                            "that help product teams build better, more inclusive experiences."
                        </p>
                        <span class="metric-pill glass">
                            <Icon path=ICON_TREND_UP size="12" />
                            "50k+ monthly readers"
                        </span>
                    </article>
                </div>
            </div>
        </section>
    }
}
