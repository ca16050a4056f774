//! Page footer: logo, copyright year, social links.

use leptos::prelude::*;

use crate::config::SITE;
use crate::motion::{Section, delay_style};

use super::header::LogoMark;
use super::icons::{Icon, icon_path};

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <LogoMark />
                    <span class="footer-sep">"·"</span>
                    <span class="footer-copyright">"© " {year}</span>
                </div>
                <div class="footer-socials">
                    {SITE
                        .socials
                        .iter()
                        .enumerate()
                        .map(|(index, social)| {
                            view! {
                                <a
                                    href=social.href
                                    aria-label=social.label
                                    class="footer-social pop"
                                    style=delay_style(Section::Footer, index)
                                >
                                    <Icon path=icon_path(social.icon) />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
