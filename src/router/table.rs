//! Route table and locations.

use crate::error::{NatviewError, Result};
use crate::pages::ViewId;
use std::collections::HashSet;
use std::fmt;

/// A path bound to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Exact path matched against locations.
    pub path: &'static str,
    /// Route name.
    pub name: &'static str,
    /// View rendered for this route.
    pub view: ViewId,
}

/// Ordered, immutable set of routes with unique paths.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table, rejecting repeated paths.
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !seen.insert(route.path) {
                return Err(NatviewError::duplicate_route(route.path));
            }
        }
        Ok(Self { routes })
    }

    /// The site routes: home and the NAT paper.
    pub fn site() -> Self {
        Self {
            routes: vec![
                Route {
                    path: "/",
                    name: "home",
                    view: ViewId::Home,
                },
                Route {
                    path: "/natpaper",
                    name: "natpaper",
                    view: ViewId::NatPaper,
                },
            ],
        }
    }

    /// Find the route whose path equals `path`.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// Find a route by name.
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// All routes in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// A navigable location: a path plus an optional `#anchor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path part, always starting with `/`.
    pub path: String,
    /// Hash fragment including the leading `#`.
    pub hash: Option<String>,
}

impl Location {
    /// Parse `path[?query][#hash]`. The query is dropped.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (before_hash, hash) = match input.split_once('#') {
            Some((before, fragment)) if !fragment.is_empty() => {
                (before, Some(format!("#{}", fragment)))
            }
            Some((before, _)) => (before, None),
            None => (input, None),
        };
        let path = before_hash
            .split_once('?')
            .map_or(before_hash, |(path, _)| path);

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self { path, hash }
    }

    /// Location for a path with no anchor.
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            hash: None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.path, self.hash.as_deref().unwrap_or(""))
    }
}
