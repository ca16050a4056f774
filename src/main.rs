//! Single-page portfolio site — Leptos 0.8, client-side rendered.

mod config;
mod header_state;
mod motion;
mod sections;
mod smooth_scroll;

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use config::{NavEntry, SITE};
use sections::*;
use smooth_scroll::SmoothScrollGuard;

/// Every in-page anchor the composed page renders. The section order below
/// is a product decision, but the nav only makes sense if each configured
/// fragment lands on one of these.
const ANCHOR_IDS: &[&str] = &["top", "services", "work", "testimonials", "about"];

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    // Smooth anchor scrolling for the lifetime of this view; the guard puts
    // the previous configuration back when the page unmounts.
    let guard = SmoothScrollGuard::acquire();
    on_cleanup(move || drop(guard));

    Effect::new(move || report_dangling_anchors());

    view! {
        <div id="top" class="page">
            <Header />
            <main>
                <Hero />
                <Stats />
                <Highlights />
                <Services />
                <Featured />
                <Testimonials />
                <About />
            </main>
            <Footer />
        </div>
    }
}

/// Nav entries whose in-page fragment has no matching rendered section.
/// External and `mailto:` targets are not in-page anchors and are skipped.
fn missing_nav_targets(nav: &[NavEntry]) -> Vec<&'static str> {
    nav.iter()
        .filter(|entry| {
            entry
                .href
                .strip_prefix('#')
                .is_some_and(|anchor| !ANCHOR_IDS.contains(&anchor))
        })
        .map(|entry| entry.href)
        .collect()
}

fn report_dangling_anchors() {
    for href in missing_nav_targets(SITE.nav) {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "nav entry points at {href}, but no rendered section carries that id"
        )));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn configured_nav_resolves_in_full() {
        assert_eq!(missing_nav_targets(SITE.nav), Vec::<&str>::new());
    }

    #[test]
    fn every_nav_fragment_matches_exactly_one_anchor() {
        for entry in SITE.nav {
            let anchor = entry
                .href
                .strip_prefix('#')
                .expect("nav entries are in-page fragments");
            let hits = ANCHOR_IDS.iter().filter(|id| **id == anchor).count();
            assert_eq!(hits, 1, "{} should match one section", entry.href);
        }
    }

    #[test]
    fn hero_cta_resolves() {
        let anchor = SITE.cta.href.strip_prefix('#').expect("cta is in-page");
        assert!(ANCHOR_IDS.contains(&anchor));
    }

    #[test]
    fn dangling_fragment_is_reported() {
        let nav = [
            NavEntry {
                label: "Ghost",
                href: "#missing",
            },
            NavEntry {
                label: "Services",
                href: "#services",
            },
        ];
        assert_eq!(missing_nav_targets(&nav), vec!["#missing"]);
    }

    #[test]
    fn external_targets_are_exempt() {
        let nav = [
            NavEntry {
                label: "Email",
                href: "mailto:hello@example.com",
            },
            NavEntry {
                label: "Contact",
                href: "/contact.html",
            },
        ];
        assert_eq!(missing_nav_targets(&nav), Vec::<&str>::new());
    }

    #[test]
    fn empty_nav_is_fine() {
        assert_eq!(missing_nav_targets(&[]), Vec::<&str>::new());
    }
}
