//! Entry-animation timing table.
//!
//! Motion presets are configuration, not logic: each section row says how
//! long after its reveal the first item starts and how far apart siblings
//! stagger. View code never hard-codes timing — it asks the table and writes
//! the result into `animation-delay`.

/// Page sections that stagger their list items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Stats,
    Highlights,
    Services,
    Featured,
    Testimonials,
    About,
    Footer,
    Overlay,
}

/// Timing row for one section's entry animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionMotion {
    /// Delay before the first item, in milliseconds.
    pub base_delay_ms: u32,
    /// Extra delay per list index.
    pub stagger_ms: u32,
    /// Duration of each item's animation.
    pub duration_ms: u32,
}

const fn row(base_delay_ms: u32, stagger_ms: u32, duration_ms: u32) -> SectionMotion {
    SectionMotion {
        base_delay_ms,
        stagger_ms,
        duration_ms,
    }
}

pub const fn motion_for(section: Section) -> SectionMotion {
    match section {
        Section::Hero => row(500, 100, 300),
        Section::Stats => row(0, 100, 500),
        Section::Highlights => row(0, 200, 600),
        Section::Services => row(0, 100, 600),
        Section::Featured => row(0, 150, 600),
        Section::Testimonials => row(0, 100, 600),
        Section::About => row(200, 100, 600),
        Section::Footer => row(0, 100, 300),
        Section::Overlay => row(120, 80, 400),
    }
}

/// Linear stagger: item `i` starts `base + i * stagger` after the section
/// reveals.
pub fn item_delay_ms(section: Section, index: usize) -> u32 {
    let m = motion_for(section);
    m.base_delay_ms + m.stagger_ms * index as u32
}

/// Inline style fragment for a staggered list item.
pub fn delay_style(section: Section, index: usize) -> String {
    let m = motion_for(section);
    format!(
        "animation-delay: {}ms; animation-duration: {}ms",
        item_delay_ms(section, index),
        m.duration_ms
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_linear_and_zero_based() {
        let m = motion_for(Section::Overlay);
        assert_eq!(item_delay_ms(Section::Overlay, 0), m.base_delay_ms);
        for i in 0..8 {
            assert_eq!(
                item_delay_ms(Section::Overlay, i + 1) - item_delay_ms(Section::Overlay, i),
                m.stagger_ms
            );
        }
    }

    #[test]
    fn empty_lists_produce_no_delays() {
        let items: &[&str] = &[];
        let delays: Vec<_> = items
            .iter()
            .enumerate()
            .map(|(i, _)| item_delay_ms(Section::Featured, i))
            .collect();
        assert!(delays.is_empty());
    }

    #[test]
    fn delay_style_carries_both_values() {
        let style = delay_style(Section::Overlay, 1);
        assert_eq!(style, "animation-delay: 200ms; animation-duration: 400ms");
    }
}
