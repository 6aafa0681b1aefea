//! Routing: route table, history and scroll restoration.
//!
//! The [`Router`] resolves locations against the [`RouteTable`], records them
//! in [`History`], and reports each completed move as a [`Transition`]. The
//! caller turns a transition into a viewport position with
//! [`scroll_behavior`].

mod history;
pub mod scroll;
mod table;

pub use history::{History, Step};
pub use scroll::{scroll_behavior, SavedPosition, ScrollBehavior, ScrollTarget};
pub use table::{Location, Route, RouteTable};

use crate::error::{NatviewError, Result};

/// A completed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Route now active.
    pub route: Route,
    /// Location navigated to.
    pub to: Location,
    /// Location navigated from, if any.
    pub from: Option<Location>,
    /// Scroll position remembered for `to`, supplied on back/forward.
    pub saved: Option<SavedPosition>,
}

impl Transition {
    /// Where the viewport should land after this transition.
    pub fn scroll_target(&self) -> ScrollTarget {
        scroll_behavior(&self.to, self.from.as_ref(), self.saved)
    }
}

/// Navigation runtime over a fixed route table.
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
    history: History,
    active: Route,
}

impl Router {
    /// Start at `initial`, which must match a route.
    pub fn new(table: RouteTable, initial: &str) -> Result<(Self, Transition)> {
        let location = Location::parse(initial);
        let route = *table
            .resolve(&location.path)
            .ok_or_else(|| NatviewError::unknown_route(&location.path))?;

        tracing::info!("Router starting at {} ({})", location, route.name);

        let transition = Transition {
            route,
            to: location.clone(),
            from: None,
            saved: None,
        };
        let router = Self {
            table,
            history: History::new(location),
            active: route,
        };
        Ok((router, transition))
    }

    /// Navigate to `target`.
    ///
    /// Returns `Ok(None)` when `target` is already the active location.
    /// Unknown paths fail and leave the history untouched.
    pub fn navigate(&mut self, target: &str, current: SavedPosition) -> Result<Option<Transition>> {
        let location = Location::parse(target);
        let route = *self
            .table
            .resolve(&location.path)
            .ok_or_else(|| NatviewError::unknown_route(&location.path))?;

        if &location == self.history.current() {
            tracing::debug!("Already at {}", location);
            return Ok(None);
        }

        let step = self.history.push(location, current);
        Ok(Some(self.complete(route, step)))
    }

    /// Go back one history entry.
    pub fn back(&mut self, current: SavedPosition) -> Option<Transition> {
        let step = self.history.back(current)?;
        self.complete_step(step)
    }

    /// Go forward one history entry.
    pub fn forward(&mut self, current: SavedPosition) -> Option<Transition> {
        let step = self.history.forward(current)?;
        self.complete_step(step)
    }

    /// Active route.
    pub fn current_route(&self) -> &Route {
        &self.active
    }

    /// Active location.
    pub fn current_location(&self) -> &Location {
        self.history.current()
    }

    /// The route table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Navigation history.
    pub fn history(&self) -> &History {
        &self.history
    }

    fn complete_step(&mut self, step: Step) -> Option<Transition> {
        // History only ever holds resolved locations.
        let route = *self.table.resolve(&step.to.path)?;
        Some(self.complete(route, step))
    }

    fn complete(&mut self, route: Route, step: Step) -> Transition {
        tracing::info!("Navigated {} -> {} ({})", step.from, step.to, route.name);
        self.active = route;
        Transition {
            route,
            to: step.to,
            from: Some(step.from),
            saved: step.saved,
        }
    }
}
