//! Fixed header bar and the full-screen navigation overlay.
//!
//! The only stateful part of the page: `scrolled` follows the window scroll
//! offset, `overlay` tracks the navigation panel. Both drive styling only —
//! the header reserves a constant band of space whatever its state.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::config::SITE;
use crate::header_state::{OverlayState, is_scrolled};
use crate::motion::{Section, delay_style};

use super::icons::{ICON_MENU, Icon, icon_path};

/// Site logo, linking back to the top of the page.
#[component]
pub fn LogoMark() -> impl IntoView {
    view! {
        <a href="#top" class="logo-mark">
            <span class="logo-glyph">
                <span class="logo-diamond"></span>
                <span class="logo-bar"></span>
            </span>
            <span class="logo-name">{SITE.name}</span>
        </a>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (overlay, set_overlay) = signal(OverlayState::default());

    // Read the offset once at mount (the page may load already scrolled),
    // then follow every scroll event. The header lives as long as the page,
    // so the listener is leaked rather than stored.
    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let read_offset = move || {
            if let Some(window) = web_sys::window() {
                set_scrolled.set(is_scrolled(window.scroll_y().unwrap_or(0.0)));
            }
        };
        read_offset();
        let listener = Closure::<dyn FnMut()>::new(read_offset);
        let _ = window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        listener.forget();
    });

    view! {
        <header class=move || {
            if scrolled.get() { "site-header scrolled" } else { "site-header" }
        }>
            <div class="header-inner">
                <LogoMark />
                <div class="header-actions">
                    <a href="/contact.html" class="btn btn-contact">
                        "Let's Talk"
                    </a>
                    <button
                        class=move || {
                            if overlay.get().is_open() { "menu-btn active" } else { "menu-btn" }
                        }
                        aria-expanded=move || {
                            if overlay.get().is_open() { "true" } else { "false" }
                        }
                        aria-label=move || {
                            if overlay.get().is_open() { "Close navigation" } else { "Open navigation" }
                        }
                        on:click=move |_| set_overlay.update(|s| *s = s.toggled())
                    >
                        <Icon path=ICON_MENU size="14" />
                        <span>{move || if overlay.get().is_open() { "Close" } else { "Menu" }}</span>
                    </button>
                </div>
            </div>
        </header>
        // The header is fixed; this keeps content below at a constant offset
        // regardless of the scrolled style.
        <div class="header-spacer"></div>
        <NavOverlay overlay=overlay set_overlay=set_overlay />
    }
}

/// Full-screen navigation panel, sliding in from above. While closed it is
/// invisible and must not intercept pointer events (CSS `pointer-events`
/// follows the `open` class).
#[component]
fn NavOverlay(
    overlay: ReadSignal<OverlayState>,
    set_overlay: WriteSignal<OverlayState>,
) -> impl IntoView {
    let close = move |_| set_overlay.update(|s| *s = s.closed());

    view! {
        <div
            class=move || if overlay.get().is_open() { "nav-overlay open" } else { "nav-overlay" }
            aria-hidden=move || if overlay.get().is_open() { "false" } else { "true" }
        >
            <div class="overlay-inner">
                <div class="overlay-top">
                    <LogoMark />
                    <button class="overlay-close" aria-label="Close navigation" on:click=close>
                        "Close"
                    </button>
                </div>

                <div class="overlay-body">
                    <nav class="overlay-links">
                        {SITE
                            .nav
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                view! {
                                    <a
                                        href=entry.href
                                        class="overlay-link"
                                        style=delay_style(Section::Overlay, index)
                                        on:click=close
                                    >
                                        <span class="overlay-link-rule"></span>
                                        {entry.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="overlay-aside">
                        <p class="overlay-blurb">
                            "From performance strategy to polished design systems, I partner "
                            "with ambitious teams to craft experiences that drive measurable growth."
                        </p>
                        <div class="overlay-socials">
                            {SITE
                                .socials
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a href=social.href class="overlay-social">
                                            <Icon path=icon_path(social.icon) size="16" />
                                            {social.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="overlay-footer">
                        <span class="overlay-footnote">"Available Worldwide"</span>
                        <a href="/contact.html" class="btn btn-overlay-contact" on:click=close>
                            "Contact"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
