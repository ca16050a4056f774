//! Header interaction state.
//!
//! The header owns exactly two independent pieces of state: whether the page
//! has scrolled past the threshold, and whether the navigation overlay is
//! visible. The transitions live here as plain values so they stay testable
//! off-wasm; `sections::header` holds them in signals and feeds them from
//! DOM events.

/// Vertical offset (CSS pixels) past which the header switches to its
/// "scrolled" treatment. Styling only — the header never changes height.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Strictly greater-than: an offset of exactly 20 keeps the resting style.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Visibility of the full-screen navigation overlay.
///
/// Modeled as a tagged state rather than a raw bool so every transition is
/// an explicit, exhaustive match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

impl OverlayState {
    /// The menu button flips the overlay.
    pub fn toggled(self) -> Self {
        match self {
            OverlayState::Closed => OverlayState::Open,
            OverlayState::Open => OverlayState::Closed,
        }
    }

    /// Forced close, used when a nav link or close control is activated.
    /// Closing an already-closed overlay is a no-op.
    pub fn closed(self) -> Self {
        OverlayState::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, OverlayState::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.000001));
        assert!(is_scrolled(21.0));
    }

    #[test]
    fn overlay_starts_closed() {
        assert_eq!(OverlayState::default(), OverlayState::Closed);
    }

    #[test]
    fn toggle_twice_is_identity() {
        for start in [OverlayState::Closed, OverlayState::Open] {
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn close_is_idempotent() {
        let closed = OverlayState::Open.closed();
        assert_eq!(closed, OverlayState::Closed);
        // No spurious transition when already closed.
        assert_eq!(closed.closed(), closed);
    }
}
