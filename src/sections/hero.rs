//! Hero section: identity, pitch, call-to-action, portrait.

use leptos::prelude::*;

use crate::config::SITE;
use crate::motion::{Section, delay_style};

use super::avatar::Avatar;
use super::icons::{ICON_ARROW_UP_RIGHT, ICON_GLOBE, Icon, icon_path};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-orb hero-orb-left"></div>
            <div class="hero-orb hero-orb-right"></div>

            <div class="hero-grid">
                <div class="hero-content">
                    <div class="hero-availability rise">
                        <span class="hero-dot">
                            <span class="hero-dot-ping"></span>
                        </span>
                        "Available for new projects"
                    </div>

                    <h1 class="hero-name rise">{SITE.name}</h1>
                    <div class="hero-title rise">{SITE.title}</div>
                    <p class="hero-pitch rise">{SITE.role_pitch}</p>
                    <p class="hero-blurb rise">{SITE.blurb}</p>

                    <div class="hero-actions rise">
                        <a href=SITE.cta.href class="btn btn-cta">
                            {SITE.cta.label}
                            <Icon path=ICON_ARROW_UP_RIGHT size="18" />
                        </a>
                        <div class="hero-socials">
                            {SITE
                                .socials
                                .iter()
                                .enumerate()
                                .map(|(index, social)| {
                                    view! {
                                        <a
                                            href=social.href
                                            aria-label=social.label
                                            class="hero-social pop"
                                            style=delay_style(Section::Hero, index)
                                        >
                                            <Icon path=icon_path(social.icon) />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="hero-portrait-wrap rise">
                    <div class="hero-portrait-frame">
                        <Avatar name=SITE.name src=SITE.portrait_url class="hero-portrait" />
                    </div>

                    <div class="hero-float hero-float-top">
                        <span class="hero-float-icon">
                            <Icon path=ICON_GLOBE size="14" />
                        </span>
                        <span class="hero-float-text">"10+ Years"</span>
                    </div>
                    <div class="hero-float hero-float-bottom">
                        <span class="hero-float-icon amber">"50k+"</span>
                        <span class="hero-float-text">"Readers"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
