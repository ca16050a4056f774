//! Content configuration for the whole page.
//!
//! Everything the sections render — copy, links, list data — lives in one
//! read-only record so the views stay pure mappings over it. The record is
//! fully `const`-constructed: every field is `&'static`, nothing is ever
//! mutated after process start.

/// Call-to-action control: a label and where it sends the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cta {
    pub label: &'static str,
    pub href: &'static str,
}

/// External profile link shown in the hero, overlay, and footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    /// Icon identifier resolved by `sections::icons::icon_path`.
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

/// One entry of the overlay navigation. `href` is an in-page fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
}

/// One cell of the stats band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    /// Display value, kept as text ("120+", "98%").
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// A service offering with its feature bullets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// A client testimonial card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    /// Avatar URL; rendering falls back to initials when it fails to load.
    pub avatar_url: &'static str,
}

/// A competency highlight card with its headline metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub icon: &'static str,
    pub text: &'static str,
    pub metric: &'static str,
}

/// A featured-work card (case study, article, workshop).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeaturedItem {
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub impact: &'static str,
    /// Card image URL. No retry on failure; the card keeps its styled
    /// placeholder block instead.
    pub image_url: &'static str,
}

/// The complete page content. All URLs are opaque strings — never validated
/// or rewritten. Sections must tolerate any of the slices being empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub name: &'static str,
    pub title: &'static str,
    pub role_pitch: &'static str,
    pub blurb: &'static str,
    pub cta: Cta,
    pub portrait_url: &'static str,
    pub socials: &'static [SocialLink],
    pub nav: &'static [NavEntry],
    pub stats: &'static [Stat],
    pub services: &'static [Service],
    pub testimonials: &'static [Testimonial],
    pub highlights: &'static [Highlight],
    pub featured: &'static [FeaturedItem],
}

/// Single source of truth for everything the page shows.
pub static SITE: SiteConfig = SiteConfig {
    name: "Your Name",
    title: "Product Designer & UX Strategist",
    role_pitch: "Crafting digital experiences that drive business growth",
    blurb: "With 10+ years of experience across disciplines, I help teams ship \
            accessible, human-centered products that convert. I research, \
            prototype, and tell compelling product stories that resonate with \
            users and stakeholders.",
    cta: Cta {
        label: "View My Work",
        href: "#work",
    },
    portrait_url: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?q=80&w=1200&auto=format&fit=crop",
    socials: &[
        SocialLink {
            icon: "linkedin",
            label: "LinkedIn",
            href: "https://linkedin.com",
        },
        SocialLink {
            icon: "github",
            label: "GitHub",
            href: "https://github.com",
        },
        SocialLink {
            icon: "mail",
            label: "Email",
            href: "mailto:hello@example.com",
        },
    ],
    nav: &[
        NavEntry {
            label: "Services",
            href: "#services",
        },
        NavEntry {
            label: "Work",
            href: "#work",
        },
        NavEntry {
            label: "Testimonials",
            href: "#testimonials",
        },
        NavEntry {
            label: "About",
            href: "#about",
        },
    ],
    stats: &[
        Stat {
            value: "120+",
            label: "Projects Delivered",
            icon: "briefcase",
        },
        Stat {
            value: "50+",
            label: "Happy Clients",
            icon: "users",
        },
        Stat {
            value: "15+",
            label: "Industry Awards",
            icon: "award",
        },
        Stat {
            value: "98%",
            label: "Client Satisfaction",
            icon: "star",
        },
    ],
    services: &[
        Service {
            title: "UX Research & Strategy",
            icon: "target",
            description: "Deep user insights that inform product decisions and \
                          drive measurable business outcomes.",
            features: &[
                "User interviews",
                "Usability testing",
                "Journey mapping",
                "Competitive analysis",
            ],
        },
        Service {
            title: "Product Design",
            icon: "sparkles",
            description: "Beautiful, intuitive interfaces that users love and \
                          that align with your business goals.",
            features: &[
                "UI/UX design",
                "Design systems",
                "Prototyping",
                "Visual design",
            ],
        },
        Service {
            title: "Accessibility Consulting",
            icon: "globe",
            description: "WCAG-compliant designs that reach wider audiences and \
                          reduce legal risk.",
            features: &[
                "WCAG audits",
                "Inclusive design",
                "Documentation",
                "Team training",
            ],
        },
    ],
    testimonials: &[
        Testimonial {
            quote: "Working with them transformed our product. User engagement \
                    increased by 156% in just 3 months.",
            author: "Sarah Chen",
            role: "CEO, TechStart Inc.",
            avatar_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&h=150&fit=crop",
        },
        Testimonial {
            quote: "The accessibility improvements opened our platform to \
                    thousands of new users. Best investment we made.",
            author: "Michael Roberts",
            role: "Product Lead, FinanceApp",
            avatar_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop",
        },
        Testimonial {
            quote: "Their strategic approach to UX research saved us 6 months of \
                    development time and countless resources.",
            author: "Emily Taylor",
            role: "VP Product, DataCorp",
            avatar_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop",
        },
    ],
    highlights: &[
        Highlight {
            title: "Accessibility @ Scale",
            icon: "globe",
            text: "Led accessibility programs across 20+ products and 6 teams, \
                   ensuring WCAG 2.1 AA compliance.",
            metric: "100% compliance rate",
        },
        Highlight {
            title: "Talks & Workshops",
            icon: "mic",
            text: "International speaker at design conferences, sharing insights \
                   on inclusive UX and product strategy.",
            metric: "30+ events annually",
        },
        Highlight {
            title: "Research & Writing",
            icon: "newspaper",
            text: "Published case studies and UX articles reaching 50k+ \
                   designers and product leaders.",
            metric: "50k+ readers",
        },
    ],
    featured: &[
        FeaturedItem {
            badge: "Case Study",
            title: "Redesigning enterprise SaaS onboarding",
            description: "Reduced user drop-off by 26% through streamlined \
                          identity verification and contextual microcopy.",
            href: "#",
            impact: "26% increase in conversions",
            image_url: "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=800&h=600&fit=crop",
        },
        FeaturedItem {
            badge: "Article",
            title: "Accessible design reviews that actually work",
            description: "A practical framework any team can implement in under \
                          45 minutes to catch accessibility issues early.",
            href: "#",
            impact: "Featured in Design Weekly",
            image_url: "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?w=800&h=600&fit=crop",
        },
        FeaturedItem {
            badge: "Workshop",
            title: "Designing for cognitive load",
            description: "Hands-on activities and frameworks to identify and \
                          eliminate friction in complex user interfaces.",
            href: "#",
            impact: "Taught to 500+ designers",
            image_url: "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?w=800&h=600&fit=crop",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sequence_is_populated() {
        assert!(!SITE.socials.is_empty());
        assert!(!SITE.nav.is_empty());
        assert!(!SITE.stats.is_empty());
        assert!(!SITE.services.is_empty());
        assert!(!SITE.testimonials.is_empty());
        assert!(!SITE.highlights.is_empty());
        assert!(!SITE.featured.is_empty());
    }

    #[test]
    fn lists_keep_authored_order() {
        let stat_labels: Vec<_> = SITE.stats.iter().map(|s| s.label).collect();
        assert_eq!(
            stat_labels,
            vec![
                "Projects Delivered",
                "Happy Clients",
                "Industry Awards",
                "Client Satisfaction"
            ]
        );

        let nav_labels: Vec<_> = SITE.nav.iter().map(|n| n.label).collect();
        assert_eq!(nav_labels, vec!["Services", "Work", "Testimonials", "About"]);
    }

    #[test]
    fn every_service_has_feature_bullets() {
        for service in SITE.services {
            assert!(
                !service.features.is_empty(),
                "{} has no feature bullets",
                service.title
            );
        }
    }

    #[test]
    fn card_keys_are_unique() {
        // Stable keys per rendered unit: titles/labels/authors must not repeat.
        let mut titles: Vec<_> = SITE.featured.iter().map(|f| f.title).collect();
        titles.extend(SITE.services.iter().map(|s| s.title));
        titles.extend(SITE.highlights.iter().map(|h| h.title));
        titles.extend(SITE.testimonials.iter().map(|t| t.author));
        titles.extend(SITE.socials.iter().map(|s| s.label));
        titles.extend(SITE.nav.iter().map(|n| n.label));
        let before = titles.len();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(before, titles.len());
    }
}
