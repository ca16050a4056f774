//! Stats band between the hero and the highlights.

use leptos::prelude::*;

use crate::config::SITE;
use crate::motion::{Section, delay_style};

use super::icons::{Icon, icon_path};

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="stats-grid">
                {SITE
                    .stats
                    .iter()
                    .enumerate()
                    .map(|(index, stat)| {
                        view! {
                            <div class="stat pop" style=delay_style(Section::Stats, index)>
                                <div class="stat-icon">
                                    <Icon path=icon_path(stat.icon) size="24" />
                                </div>
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
