//! Scroll restoration after a completed navigation.

use super::Location;

/// Viewport offset remembered for a history entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SavedPosition {
    /// Horizontal offset in columns.
    pub left: u16,
    /// Vertical offset in lines.
    pub top: usize,
}

impl SavedPosition {
    /// Position at the given line.
    pub fn at_line(top: usize) -> Self {
        Self { left: 0, top }
    }
}

/// How the viewport moves to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animate over several frames.
    Smooth,
}

/// Where the viewport should land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Restore a remembered position.
    Saved(SavedPosition),
    /// Scroll to the element matching `selector` (e.g. `#supply`).
    Anchor {
        /// Anchor selector, including `#`.
        selector: String,
        /// Animation style.
        behavior: ScrollBehavior,
    },
    /// Scroll to (0, 0).
    Top,
}

/// Decide the scroll target for a transition.
///
/// A saved position always wins, then the target's anchor, then the top.
pub fn scroll_behavior(
    to: &Location,
    _from: Option<&Location>,
    saved: Option<SavedPosition>,
) -> ScrollTarget {
    if let Some(position) = saved {
        return ScrollTarget::Saved(position);
    }
    if let Some(hash) = &to.hash {
        return ScrollTarget::Anchor {
            selector: hash.clone(),
            behavior: ScrollBehavior::Smooth,
        };
    }
    ScrollTarget::Top
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_position_wins_over_hash() {
        let to = Location::parse("/natpaper#supply");
        let saved = SavedPosition { left: 3, top: 42 };
        assert_eq!(
            scroll_behavior(&to, None, Some(saved)),
            ScrollTarget::Saved(saved)
        );
    }

    #[test]
    fn hash_scrolls_smoothly_to_anchor() {
        let to = Location::parse("/natpaper#fees");
        let from = Location::parse("/");
        assert_eq!(
            scroll_behavior(&to, Some(&from), None),
            ScrollTarget::Anchor {
                selector: "#fees".to_string(),
                behavior: ScrollBehavior::Smooth,
            }
        );
    }

    #[test]
    fn otherwise_top() {
        let to = Location::parse("/natpaper");
        let from = Location::parse("/#supply");
        assert_eq!(scroll_behavior(&to, Some(&from), None), ScrollTarget::Top);
    }
}
