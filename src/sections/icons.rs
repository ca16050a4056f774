//! SVG icon components using Phosphor Icons.
//!
//! Inline SVG icons for the page, all from the
//! [Phosphor Icons](https://phosphoricons.com/) library (Regular weight).
//! The content configuration names icons by identifier; `icon_path` maps
//! identifiers to path data.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
        >
            <path d=path></path>
        </svg>
    }
}

/// Path data for a config-supplied icon identifier. Unknown identifiers
/// render an empty glyph rather than breaking the card that asked.
pub fn icon_path(id: &str) -> &'static str {
    match id {
        "linkedin" => ICON_LINKEDIN,
        "github" => ICON_GITHUB,
        "mail" => ICON_MAIL,
        "briefcase" => ICON_BRIEFCASE,
        "users" => ICON_USERS,
        "award" => ICON_AWARD,
        "star" => ICON_STAR,
        "target" => ICON_TARGET,
        "sparkles" => ICON_SPARKLE,
        "globe" => ICON_GLOBE,
        "mic" => ICON_MIC,
        "newspaper" => ICON_NEWSPAPER,
        _ => "",
    }
}

// =============================================================================
// Phosphor Icons (Regular weight) - https://phosphoricons.com/
// =============================================================================

/// LinkedIn logo
pub const ICON_LINKEDIN: &str = "M216,24H40A16,16,0,0,0,24,40V216a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V40A16,16,0,0,0,216,24Zm0,192H40V40H216V216ZM96,112v64a8,8,0,0,1-16,0V112a8,8,0,0,1,16,0Zm88,28v36a8,8,0,0,1-16,0V140a20,20,0,0,0-40,0v36a8,8,0,0,1-16,0V112a8,8,0,0,1,15.79-1.78A36,36,0,0,1,184,140ZM100,84A12,12,0,1,1,88,72,12,12,0,0,1,100,84Z";

/// GitHub logo
pub const ICON_GITHUB: &str = "M208.31,75.68A59.78,59.78,0,0,0,202.93,28,8,8,0,0,0,196,24a59.75,59.75,0,0,0-48,24H124A59.75,59.75,0,0,0,76,24a8,8,0,0,0-6.93,4,59.78,59.78,0,0,0-5.38,47.68A58.14,58.14,0,0,0,56,104v8a56.06,56.06,0,0,0,48.44,55.47A39.8,39.8,0,0,0,96,192v8H72a24,24,0,0,1-24-24A40,40,0,0,0,8,136a8,8,0,0,0,0,16,24,24,0,0,1,24,24,40,40,0,0,0,40,40H96v16a8,8,0,0,0,16,0V192a24,24,0,0,1,48,0v40a8,8,0,0,0,16,0V192a39.8,39.8,0,0,0-8.44-24.53A56.06,56.06,0,0,0,216,112v-8A58.14,58.14,0,0,0,208.31,75.68Z";

/// Envelope/mail icon
pub const ICON_MAIL: &str = "M224,48H32a8,8,0,0,0-8,8V192a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V56A8,8,0,0,0,224,48Zm-96,85.15L52.57,64H203.43ZM98.71,128,40,181.81V74.19Zm11.84,10.85,12,11.05a8,8,0,0,0,10.82,0l12-11.05,58,53.15H52.57ZM157.29,128,216,74.18V181.82Z";

/// Briefcase icon (projects)
pub const ICON_BRIEFCASE: &str = "M216,56H176V48a24,24,0,0,0-24-24H104A24,24,0,0,0,80,48v8H40A16,16,0,0,0,24,72V200a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V72A16,16,0,0,0,216,56ZM96,48a8,8,0,0,1,8-8h48a8,8,0,0,1,8,8v8H96ZM216,72v41.61A184,184,0,0,1,128,136a184.07,184.07,0,0,1-88-22.38V72Zm0,128H40V131.64A200.19,200.19,0,0,0,128,152a200.25,200.25,0,0,0,88-20.37V200Z";

/// Two-people icon (clients)
pub const ICON_USERS: &str = "M117.25,157.92a60,60,0,1,0-66.5,0A95.83,95.83,0,0,0,3.53,195.63a8,8,0,1,0,13.4,8.74,80,80,0,0,1,134.14,0,8,8,0,0,0,13.4-8.74A95.83,95.83,0,0,0,117.25,157.92ZM40,108a44,44,0,1,1,44,44A44.05,44.05,0,0,1,40,108Zm210.14,98.7a8,8,0,0,1-11.07-2.33A79.83,79.83,0,0,0,172,168a8,8,0,0,1,0-16,44,44,0,1,0-16.34-84.87,8,8,0,1,1-5.94-14.85,60,60,0,0,1,55.53,105.64,95.83,95.83,0,0,1,47.22,37.71A8,8,0,0,1,250.14,206.7Z";

/// Medal/award icon
pub const ICON_AWARD: &str = "M128,16A80,80,0,0,0,80,160.09V232a8,8,0,0,0,12.19,6.8L128,217l35.81,21.82A8,8,0,0,0,176,232V160.09A80,80,0,0,0,128,16Zm0,16a64,64,0,1,1-64,64A64.07,64.07,0,0,1,128,32Zm32,185.76-27.81-16.94a8,8,0,0,0-8.38,0L96,217.76V172.07a79.72,79.72,0,0,0,64,0Z";

/// Star icon (ratings, satisfaction)
pub const ICON_STAR: &str = "M234.29,98.06a13.89,13.89,0,0,0-12.09-9.57l-58.2-5L141.27,29.69a14,14,0,0,0-26.54,0L92,83.44l-58.2,5a14,14,0,0,0-8.2,24.62l44.13,38.37L56.48,208.7a14,14,0,0,0,21.47,15.6L128,193.77,178.05,224.3a14,14,0,0,0,21.47-15.6l-13.25-57.27,44.13-38.37A13.89,13.89,0,0,0,234.29,98.06Zm-53.61,26.49a14,14,0,0,0-4.59,14.11l11.79,51-44.55-27.18a14,14,0,0,0-14.66,0L84.12,189.63l11.79-51a14,14,0,0,0-4.59-14.11L52.05,90.37l51.84-4.45a14,14,0,0,0,11.86-8.61L128,29.48l20.25,47.83a14,14,0,0,0,11.86,8.61l51.84,4.45Z";

/// Concentric-circles target icon (research/strategy)
pub const ICON_TARGET: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm0,192a88,88,0,1,1,88-88A88.1,88.1,0,0,1,128,216Zm0-152a64,64,0,1,0,64,64A64.07,64.07,0,0,0,128,64Zm0,112a48,48,0,1,1,48-48A48.05,48.05,0,0,1,128,176Zm0-80a32,32,0,1,0,32,32A32,32,0,0,0,128,96Zm0,48a16,16,0,1,1,16-16A16,16,0,0,1,128,144Z";

/// Four-pointed sparkle icon (product design)
pub const ICON_SPARKLE: &str = "M208,144a15.78,15.78,0,0,1-10.42,14.94l-51.65,19-19,51.61a15.92,15.92,0,0,1-29.88,0L78,178l-51.62-19a15.92,15.92,0,0,1,0-29.88l51.65-19,19-51.61a15.92,15.92,0,0,1,29.88,0l19,51.65,51.61,19A15.78,15.78,0,0,1,208,144ZM152,48h16V64a8,8,0,0,0,16,0V48h16a8,8,0,0,0,0-16H184V16a8,8,0,0,0-16,0V32H152a8,8,0,0,0,0,16Zm88,32h-8V72a8,8,0,0,0-16,0v8h-8a8,8,0,0,0,0,16h8v8a8,8,0,0,0,16,0V96h8a8,8,0,0,0,0-16Z";

/// Globe icon (accessibility, worldwide)
pub const ICON_GLOBE: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm87.63,96H175.79c-1.6-29.89-12-57.23-29.49-77.57A88.2,88.2,0,0,1,215.63,120ZM128,215.89c-20.52-18.47-33.55-46.18-35.55-79.89h71.1C161.55,169.71,148.52,197.42,128,215.89ZM92.45,120c2-33.71,15-61.42,35.55-79.89,20.52,18.47,33.55,46.18,35.55,79.89ZM109.7,42.43C92.24,62.77,81.85,90.11,80.25,120H40.37A88.2,88.2,0,0,1,109.7,42.43ZM40.37,136H80.25c1.6,29.89,12,57.23,29.45,77.57A88.2,88.2,0,0,1,40.37,136Zm105.93,77.57c17.46-20.34,27.85-47.68,29.45-77.57h39.88A88.2,88.2,0,0,1,146.3,213.57Z";

/// Microphone icon (talks)
pub const ICON_MIC: &str = "M128,176a48.05,48.05,0,0,0,48-48V64a48,48,0,0,0-96,0v64A48.05,48.05,0,0,0,128,176ZM96,64a32,32,0,0,1,64,0v64a32,32,0,0,1-64,0Zm40,143.6V232a8,8,0,0,1-16,0V207.6A80.11,80.11,0,0,1,48,128a8,8,0,0,1,16,0,64,64,0,0,0,128,0,8,8,0,0,1,16,0A80.11,80.11,0,0,1,136,207.6Z";

/// Newspaper icon (writing)
pub const ICON_NEWSPAPER: &str = "M216,40H72A16,16,0,0,0,56,56V192a8,8,0,0,1-16,0V88a8,8,0,0,0-16,0V192a24,24,0,0,0,24,24H208a24,24,0,0,0,24-24V56A16,16,0,0,0,216,40Zm0,152a8,8,0,0,1-8,8H70.63A23.84,23.84,0,0,0,72,192V56H216ZM96,80a8,8,0,0,1,8-8h80a8,8,0,0,1,0,16H104A8,8,0,0,1,96,80Zm0,32a8,8,0,0,1,8-8h80a8,8,0,0,1,0,16H104A8,8,0,0,1,96,112Zm0,32a8,8,0,0,1,8-8h80a8,8,0,0,1,0,16H104A8,8,0,0,1,96,144Z";

/// Diagonal arrow icon (outbound links, CTAs)
pub const ICON_ARROW_UP_RIGHT: &str = "M200,64V168a8,8,0,0,1-16,0V83.31L69.66,197.66a8,8,0,0,1-11.32-11.32L172.69,72H88a8,8,0,0,1,0-16H192A8,8,0,0,1,200,64Z";

/// Rising-chart icon (metric pills)
pub const ICON_TREND_UP: &str = "M240,56v64a8,8,0,0,1-16,0V75.31l-82.34,82.35a8,8,0,0,1-11.32,0L96,123.31,29.66,189.66a8,8,0,0,1-11.32-11.32l72-72a8,8,0,0,1,11.32,0L136,140.69,212.69,64H168a8,8,0,0,1,0-16h64A8,8,0,0,1,240,56Z";

/// Lightning bolt icon (impact lines)
pub const ICON_LIGHTNING: &str = "M215.79,118.17a8,8,0,0,0-5-5.66L153.18,90.9l14.66-73.33a8,8,0,0,0-13.69-7L37.71,143.17A8,8,0,0,0,44.22,156l57.6,11.52L87.16,240.83A8,8,0,0,0,95,248a7.72,7.72,0,0,0,1.57-.16l116.67-46.67a8,8,0,0,0,2.55-14.5ZM96.82,224,116,128a8,8,0,0,0-6.51-9.54L52.22,107,159.18,32,140,128a8,8,0,0,0,6.51,9.54l57.27,11.45Z";

/// Three-bars menu icon
pub const ICON_MENU: &str = "M224,128a8,8,0,0,1-8,8H40a8,8,0,0,1,0-16H216A8,8,0,0,1,224,128ZM40,72H216a8,8,0,0,0,0-16H40a8,8,0,0,0,0,16ZM216,184H40a8,8,0,0,0,0,16H216a8,8,0,0,0,0-16Z";

/// Open-book icon (writing card in the about section)
pub const ICON_BOOK_OPEN: &str = "M224,48H160a32,32,0,0,0-32,32,32,32,0,0,0-32-32H32A16,16,0,0,0,16,64V192a16,16,0,0,0,16,16H96a16,16,0,0,1,16,16,8,8,0,0,0,16,0,16,16,0,0,1,16-16h64a16,16,0,0,0,16-16V64A16,16,0,0,0,224,48ZM96,192H32V64H96a16,16,0,0,1,16,16V200A31.82,31.82,0,0,0,96,192Zm128,0H160a31.82,31.82,0,0,0-16,8V80a16,16,0,0,1,16-16h64Z";

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::SITE;

    #[test]
    fn every_configured_icon_resolves() {
        let ids = SITE
            .socials
            .iter()
            .map(|s| s.icon)
            .chain(SITE.stats.iter().map(|s| s.icon))
            .chain(SITE.services.iter().map(|s| s.icon))
            .chain(SITE.highlights.iter().map(|h| h.icon));
        for id in ids {
            assert!(!icon_path(id).is_empty(), "no path for icon id {id:?}");
        }
    }

    #[test]
    fn unknown_icon_renders_empty_glyph() {
        assert_eq!(icon_path("kazoo"), "");
    }
}
