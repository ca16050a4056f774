//! Smooth-scroll behavior as a scoped resource.
//!
//! Anchor navigation wants `scroll-behavior: smooth` on the document element
//! while the page is mounted, and exactly the previous configuration after
//! teardown. The guard records whatever inline value was there and puts it
//! back on drop, so mount/unmount is a clean acquire/release pair rather
//! than an unscoped global flag.

use wasm_bindgen::JsCast;

const PROPERTY: &str = "scroll-behavior";

/// Interprets the raw inline value read from the style declaration.
/// An empty string means the property was unset.
fn recorded_value(raw: String) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw) }
}

/// RAII handle for the document element's smooth-scroll setting.
pub struct SmoothScrollGuard {
    /// Inline value before acquisition; `None` means the property was unset
    /// and must be removed again on release.
    previous: Option<String>,
}

impl SmoothScrollGuard {
    /// Switches the document element to smooth scrolling. Returns `None`
    /// outside a browser context or when the style is inaccessible.
    pub fn acquire() -> Option<Self> {
        let style = document_style()?;
        let previous = style.get_property_value(PROPERTY).ok().and_then(recorded_value);
        style.set_property(PROPERTY, "smooth").ok()?;
        Some(Self { previous })
    }
}

impl Drop for SmoothScrollGuard {
    fn drop(&mut self) {
        if let Some(style) = document_style() {
            match self.previous.take() {
                Some(value) => {
                    let _ = style.set_property(PROPERTY, &value);
                }
                None => {
                    let _ = style.remove_property(PROPERTY);
                }
            }
        }
    }
}

fn document_style() -> Option<web_sys::CssStyleDeclaration> {
    let root = web_sys::window()?.document()?.document_element()?;
    let root = root.dyn_into::<web_sys::HtmlElement>().ok()?;
    Some(root.style())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_property_reads_as_none() {
        assert_eq!(recorded_value(String::new()), None);
    }

    #[test]
    fn prior_value_is_kept_verbatim() {
        assert_eq!(recorded_value("auto".into()), Some("auto".into()));
        assert_eq!(recorded_value("smooth".into()), Some("smooth".into()));
    }
}
