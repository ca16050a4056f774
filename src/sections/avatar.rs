//! Avatar with an initials fallback.
//!
//! All portrait/avatar images load from external URLs the site has no
//! control over. When one fails, the component swaps to an initials badge
//! instead of leaving a broken image.

use leptos::prelude::*;

/// First letter of up to the first two whitespace-separated words,
/// uppercased. "Sarah Chen" becomes "SC", "Prince" becomes "P".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn Avatar(
    /// Display name, used for alt text and the fallback badge.
    name: &'static str,
    /// Image URL; opaque, never validated.
    src: &'static str,
    #[prop(default = "avatar")]
    class: &'static str,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let badge = initials(name);

    view! {
        <span class=class>
            <Show
                when=move || !failed.get()
                fallback=move || view! { <span class="avatar-fallback">{badge.clone()}</span> }
            >
                <img
                    class="avatar-image"
                    src=src
                    alt=name
                    on:error=move |_| set_failed.set(true)
                />
            </Show>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_word_name() {
        assert_eq!(initials("Sarah Chen"), "SC");
    }

    #[test]
    fn single_word_name() {
        assert_eq!(initials("Prince"), "P");
    }

    #[test]
    fn extra_words_are_ignored() {
        assert_eq!(initials("Michael James Roberts"), "MJ");
    }

    #[test]
    fn lowercase_is_raised() {
        assert_eq!(initials("emily taylor"), "ET");
    }

    #[test]
    fn empty_name_gives_empty_badge() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
    }
}
