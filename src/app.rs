//! Application state and logic.

use crate::clipboard;
use crate::config::Config;
use crate::error::Result;
use crate::format::Helpers;
use crate::pages::{self, PageLayout, SupplySnapshot, ViewId};
use crate::router::{
    RouteTable, Router, SavedPosition, ScrollBehavior, ScrollTarget, Transition,
};

/// Fallback page width before the terminal size is known.
const DEFAULT_WIDTH: usize = 80;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Dark background with bitcoin-orange accents.
    Orange,
    /// Dark background with mint-green accents.
    Mint,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::Orange => Theme::Mint,
            Theme::Mint => Theme::Orange,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Orange => "Orange",
            Theme::Mint => "Mint",
        }
    }
}

/// In-progress smooth scroll.
#[derive(Debug, Clone)]
struct SmoothScroll {
    selector: String,
    target: usize,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Startup configuration.
    pub config: Config,
    /// Figures shown on the pages.
    pub supply: SupplySnapshot,
    /// Navigation state.
    pub router: Router,
    /// Current page, wrapped to the viewport.
    pub layout: PageLayout,
    /// First visible line.
    pub scroll: usize,
    /// Visible page lines.
    pub viewport_height: usize,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    view: ViewId,
    smooth: Option<SmoothScroll>,
}

impl App {
    /// Create the application at `location`, sized to the page viewport.
    pub fn new(
        config: Config,
        supply: SupplySnapshot,
        location: &str,
        width: usize,
        height: usize,
    ) -> Result<Self> {
        let (router, transition) = Router::new(RouteTable::site(), location)?;
        let width = if width == 0 { DEFAULT_WIDTH } else { width };
        let layout = build_layout(&config, &supply, transition.route.view, width);

        let mut app = Self {
            config,
            supply,
            router,
            layout,
            scroll: 0,
            viewport_height: height,
            status: "Ready".to_string(),
            theme: Theme::Orange,
            view: transition.route.view,
            smooth: None,
        };
        app.apply_transition(transition);
        Ok(app)
    }

    /// Navigate to a location such as `/natpaper#fees`.
    pub fn go(&mut self, target: &str) {
        match self.router.navigate(target, self.position()) {
            Ok(Some(transition)) => self.apply_transition(transition),
            Ok(None) => {
                // Same location: re-run the anchor scroll, as a link click would.
                let location = self.router.current_location().clone();
                let transition = Transition {
                    route: *self.router.current_route(),
                    to: location.clone(),
                    from: Some(location),
                    saved: None,
                };
                self.apply_scroll(transition.scroll_target());
            }
            Err(e) => {
                tracing::warn!("Navigation to {} failed: {}", target, e);
                self.status = e.to_string();
            }
        }
    }

    /// Navigate to the route serving `view`.
    pub fn go_view(&mut self, view: ViewId) {
        let path = self
            .router
            .table()
            .routes()
            .iter()
            .find(|route| route.view == view)
            .map(|route| route.path);
        if let Some(path) = path {
            self.go(path);
        }
    }

    /// Go back in history.
    pub fn back(&mut self) {
        match self.router.back(self.position()) {
            Some(transition) => self.apply_transition(transition),
            None => self.status = "Already at the oldest page".to_string(),
        }
    }

    /// Go forward in history.
    pub fn forward(&mut self) {
        match self.router.forward(self.position()) {
            Some(transition) => self.apply_transition(transition),
            None => self.status = "Already at the newest page".to_string(),
        }
    }

    /// Jump to the section after the current one.
    ///
    /// The current section is the location's anchor; without one, the
    /// viewport top decides.
    pub fn next_section(&mut self) {
        let anchor = match self.current_anchor_index() {
            Some(index) => self.layout.anchor_ids().get(index + 1).cloned(),
            None => self
                .layout
                .next_anchor_after(self.scroll)
                .and_then(|line| self.layout.anchor_at(line))
                .map(str::to_string),
        };
        self.go_anchor(anchor);
    }

    /// Jump to the section before the current one.
    pub fn prev_section(&mut self) {
        let anchor = match self.current_anchor_index() {
            Some(index) => index
                .checked_sub(1)
                .and_then(|prev| self.layout.anchor_ids().get(prev))
                .cloned(),
            None => self
                .layout
                .prev_anchor_before(self.scroll)
                .and_then(|line| self.layout.anchor_at(line))
                .map(str::to_string),
        };
        self.go_anchor(anchor);
    }

    fn current_anchor_index(&self) -> Option<usize> {
        let hash = self.router.current_location().hash.as_deref()?;
        self.layout.anchor_index(hash)
    }

    fn go_anchor(&mut self, anchor: Option<String>) {
        match anchor {
            Some(id) => {
                let target = format!("{}#{}", self.router.current_location().path, id);
                self.go(&target);
            }
            None => self.status = "No more sections".to_string(),
        }
    }

    fn apply_transition(&mut self, transition: Transition) {
        if transition.route.view != self.view {
            self.view = transition.route.view;
            self.layout = build_layout(&self.config, &self.supply, self.view, self.layout.width());
        }
        self.status = transition.to.to_string();
        self.apply_scroll(transition.scroll_target());
    }

    /// Move the viewport according to a scroll decision.
    pub fn apply_scroll(&mut self, target: ScrollTarget) {
        tracing::debug!("Applying scroll target {:?}", target);
        self.smooth = None;
        match target {
            ScrollTarget::Saved(position) => {
                self.scroll = position.top.min(self.max_scroll());
            }
            ScrollTarget::Top => {
                self.scroll = 0;
            }
            ScrollTarget::Anchor {
                selector,
                behavior: ScrollBehavior::Smooth,
            } => {
                let Some(line) = self.layout.anchor_line(&selector) else {
                    tracing::warn!("Anchor {} not found on {}", selector, self.layout.title);
                    self.scroll = 0;
                    return;
                };
                let target = line.min(self.max_scroll());
                self.smooth = Some(SmoothScroll { selector, target });
            }
        }
    }

    /// Advance a smooth scroll by one frame. Returns whether it is still running.
    pub fn tick(&mut self) -> bool {
        let Some(smooth) = &self.smooth else {
            return false;
        };
        let target = smooth.target;

        if self.scroll < target {
            let step = ((target - self.scroll) / 4).max(1);
            self.scroll += step;
        } else if self.scroll > target {
            let step = ((self.scroll - target) / 4).max(1);
            self.scroll -= step;
        }

        if self.scroll == target {
            self.smooth = None;
        }
        self.smooth.is_some()
    }

    /// Whether a smooth scroll is running.
    pub fn is_animating(&self) -> bool {
        self.smooth.is_some()
    }

    /// Resize the page viewport, re-wrapping when the width changes.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.viewport_height = height;
        if width != 0 && width != self.layout.width() {
            self.layout = build_layout(&self.config, &self.supply, self.view, width);
            if let Some(smooth) = &mut self.smooth {
                if let Some(line) = self.layout.anchor_line(&smooth.selector) {
                    smooth.target = line;
                }
            }
        }
        let max = self.max_scroll();
        if let Some(smooth) = &mut self.smooth {
            smooth.target = smooth.target.min(max);
        }
        self.scroll = self.scroll.min(max);
    }

    /// Scroll down by `lines`.
    pub fn scroll_down(&mut self, lines: usize) {
        self.smooth = None;
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    /// Scroll up by `lines`.
    pub fn scroll_up(&mut self, lines: usize) {
        self.smooth = None;
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Go to the top of the page.
    pub fn goto_top(&mut self) {
        self.smooth = None;
        self.scroll = 0;
    }

    /// Go to the bottom of the page.
    pub fn goto_bottom(&mut self) {
        self.smooth = None;
        self.scroll = self.max_scroll();
    }

    /// Copy the current location to the clipboard.
    pub fn copy_location(&mut self) {
        let location = self.router.current_location().clone();
        match clipboard::copy_location(&location) {
            Ok(()) => self.status = format!("Copied {}", location),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Current viewport offset as a history position.
    pub fn position(&self) -> SavedPosition {
        SavedPosition::at_line(self.scroll)
    }

    /// Half a viewport, at least one line.
    pub fn page_step(&self) -> usize {
        (self.viewport_height / 2).max(1)
    }

    fn max_scroll(&self) -> usize {
        self.layout.max_scroll(self.viewport_height)
    }
}

fn build_layout(config: &Config, supply: &SupplySnapshot, view: ViewId, width: usize) -> PageLayout {
    let helpers = Helpers::new(config);
    let page = pages::build(view, &helpers, supply);
    PageLayout::build(&page, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(location: &str) -> App {
        App::new(Config::default(), SupplySnapshot::default(), location, 60, 10).unwrap()
    }

    fn run_animation(app: &mut App) {
        for _ in 0..1000 {
            if !app.tick() {
                return;
            }
        }
        panic!("smooth scroll did not finish");
    }

    #[test]
    fn starts_at_top() {
        let app = app("/");
        assert_eq!(app.scroll, 0);
        assert!(!app.is_animating());
        assert_eq!(app.status, "/");
    }

    #[test]
    fn unknown_start_location_fails() {
        assert!(App::new(Config::default(), SupplySnapshot::default(), "/x", 60, 10).is_err());
    }

    #[test]
    fn anchor_scroll_is_smooth() {
        let mut app = app("/natpaper#fees");
        let target = app
            .layout
            .anchor_line("#fees")
            .unwrap()
            .min(app.layout.max_scroll(10));
        assert!(target > 0);
        assert!(app.is_animating());
        assert_eq!(app.scroll, 0);

        app.tick();
        assert!(app.scroll > 0);
        run_animation(&mut app);
        assert_eq!(app.scroll, target);
    }

    #[test]
    fn back_restores_scroll() {
        let mut app = app("/natpaper");
        app.scroll_down(7);
        app.go_view(ViewId::Home);
        assert_eq!(app.scroll, 0);
        assert_eq!(app.router.current_route().view, ViewId::Home);

        app.back();
        assert_eq!(app.router.current_route().view, ViewId::NatPaper);
        assert_eq!(app.scroll, 7);
    }

    #[test]
    fn unknown_route_sets_status() {
        let mut app = app("/");
        app.go("/nowhere");
        assert_eq!(app.status, "No route for path: /nowhere");
        assert_eq!(app.router.current_location().path, "/");
    }

    #[test]
    fn sections_walk_anchors() {
        let mut app = app("/natpaper");
        app.next_section();
        assert_eq!(app.router.current_location().to_string(), "/natpaper#mining");
        run_animation(&mut app);

        app.prev_section();
        assert_eq!(
            app.router.current_location().to_string(),
            "/natpaper#abstract"
        );
        run_animation(&mut app);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn tab_reaches_every_section_on_a_terminal_sized_viewport() {
        let mut app =
            App::new(Config::default(), SupplySnapshot::default(), "/natpaper", 78, 20).unwrap();
        let mut visited = Vec::new();
        for _ in 0..6 {
            app.next_section();
            run_animation(&mut app);
            visited.push(app.router.current_location().to_string());
        }
        assert_eq!(
            visited,
            vec![
                "/natpaper#mining",
                "/natpaper#supply",
                "/natpaper#fees",
                "/natpaper#references",
                "/natpaper#references",
                "/natpaper#references",
            ]
        );
        assert_eq!(app.status, "No more sections");

        for _ in 0..4 {
            app.prev_section();
            run_animation(&mut app);
        }
        assert_eq!(
            app.router.current_location().to_string(),
            "/natpaper#abstract"
        );
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn manual_scroll_cancels_animation() {
        let mut app = app("/natpaper#references");
        assert!(app.is_animating());
        app.scroll_up(1);
        assert!(!app.is_animating());
    }

    #[test]
    fn resize_clamps_scroll() {
        let mut app = app("/natpaper");
        app.goto_bottom();
        let bottom = app.scroll;
        app.resize(60, 1000);
        assert_eq!(app.scroll, 0);
        assert!(bottom > 0);
    }

    #[test]
    fn missing_anchor_goes_to_top() {
        let mut app = app("/natpaper");
        app.scroll_down(3);
        app.apply_scroll(ScrollTarget::Anchor {
            selector: "#nope".to_string(),
            behavior: ScrollBehavior::Smooth,
        });
        assert_eq!(app.scroll, 0);
        assert!(!app.is_animating());
    }

    #[test]
    fn theme_cycles() {
        let mut app = app("/");
        app.cycle_theme();
        assert_eq!(app.theme, Theme::Mint);
        app.cycle_theme();
        assert_eq!(app.theme, Theme::Orange);
    }
}
