//! Session navigation history.

use super::{Location, SavedPosition};

#[derive(Debug, Clone)]
struct HistoryEntry {
    location: Location,
    scroll: Option<SavedPosition>,
}

/// Back/forward stack with a remembered scroll position per entry.
#[derive(Debug)]
pub struct History {
    entries: Vec<HistoryEntry>,
    index: usize,
}

/// Result of moving through history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Location now active.
    pub to: Location,
    /// Location that was active.
    pub from: Location,
    /// Scroll position remembered for `to`.
    pub saved: Option<SavedPosition>,
}

impl History {
    /// Start a history at `initial`.
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![HistoryEntry {
                location: initial,
                scroll: None,
            }],
            index: 0,
        }
    }

    /// Active location.
    pub fn current(&self) -> &Location {
        &self.entries[self.index].location
    }

    /// Push a new entry, dropping anything forward of the cursor.
    ///
    /// `current` is remembered for the entry being left.
    pub fn push(&mut self, location: Location, current: SavedPosition) -> Step {
        self.entries[self.index].scroll = Some(current);
        let from = self.current().clone();

        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry {
            location: location.clone(),
            scroll: None,
        });
        self.index += 1;

        Step {
            to: location,
            from,
            saved: None,
        }
    }

    /// Step back one entry.
    pub fn back(&mut self, current: SavedPosition) -> Option<Step> {
        if self.index == 0 {
            return None;
        }
        Some(self.move_to(self.index - 1, current))
    }

    /// Step forward one entry.
    pub fn forward(&mut self, current: SavedPosition) -> Option<Step> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        Some(self.move_to(self.index + 1, current))
    }

    /// Whether `back` would move.
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    /// Whether `forward` would move.
    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least its initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn move_to(&mut self, index: usize, current: SavedPosition) -> Step {
        self.entries[self.index].scroll = Some(current);
        let from = self.current().clone();
        self.index = index;
        let entry = &self.entries[index];
        Step {
            to: entry.location.clone(),
            from,
            saved: entry.scroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_has_no_saved_position() {
        let mut history = History::new(Location::path("/"));
        let step = history.push(Location::path("/natpaper"), SavedPosition::at_line(5));
        assert_eq!(step.from, Location::path("/"));
        assert_eq!(step.to, Location::path("/natpaper"));
        assert_eq!(step.saved, None);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn back_and_forward_restore_positions() {
        let mut history = History::new(Location::path("/"));
        history.push(Location::path("/natpaper"), SavedPosition::at_line(5));

        let back = history.back(SavedPosition::at_line(17)).unwrap();
        assert_eq!(back.to, Location::path("/"));
        assert_eq!(back.saved, Some(SavedPosition::at_line(5)));
        assert!(history.can_go_forward());

        let forward = history.forward(SavedPosition::at_line(6)).unwrap();
        assert_eq!(forward.to, Location::path("/natpaper"));
        assert_eq!(forward.saved, Some(SavedPosition::at_line(17)));
    }

    #[test]
    fn ends_of_history() {
        let mut history = History::new(Location::path("/"));
        assert!(history.back(SavedPosition::default()).is_none());
        assert!(history.forward(SavedPosition::default()).is_none());
        assert!(!history.can_go_back());
    }

    #[test]
    fn push_truncates_forward_entries() {
        let mut history = History::new(Location::path("/"));
        history.push(Location::path("/natpaper"), SavedPosition::default());
        history.back(SavedPosition::default());
        history.push(Location::parse("/#supply"), SavedPosition::default());

        assert_eq!(history.len(), 2);
        assert!(!history.can_go_forward());
        assert_eq!(history.current().to_string(), "/#supply");
    }
}
