//! Services grid on the dark band.

use leptos::prelude::*;

use crate::config::SITE;
use crate::motion::{Section, delay_style};

use super::icons::{Icon, icon_path};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="section-header on-dark">
                <span class="section-eyebrow">"Services"</span>
                <h2 class="section-title">
                    "How I Can " <span class="accent-amber">"Help You"</span>
                </h2>
                <p class="section-description">
                    "Comprehensive design services tailored to your business needs"
                </p>
            </div>

            <div class="services-grid">
                {SITE
                    .services
                    .iter()
                    .enumerate()
                    .map(|(index, service)| {
                        view! {
                            <article
                                class="service-card rise"
                                style=delay_style(Section::Services, index)
                            >
                                <div class="card-icon amber">
                                    <Icon path=icon_path(service.icon) size="28" />
                                </div>
                                <h3 class="card-title">{service.title}</h3>
                                <p class="card-text">{service.description}</p>
                                <ul class="service-features">
                                    {service
                                        .features
                                        .iter()
                                        .map(|feature| {
                                            view! {
                                                <li class="service-feature">
                                                    <span class="feature-dot"></span>
                                                    {*feature}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
