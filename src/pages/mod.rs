//! Site pages.
//!
//! Each view builds a [`Page`] from the shared [`Helpers`] and a
//! [`SupplySnapshot`]. [`PageLayout`] then wraps it for a given width.

mod home;
mod layout;
mod natpaper;

pub use layout::{LineKind, PageLayout, PageLine};

use crate::format::Helpers;
use num_bigint::BigInt;

/// Views reachable through the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    /// Landing page.
    Home,
    /// The NAT paper.
    NatPaper,
}

impl ViewId {
    /// Display title.
    pub fn title(self) -> &'static str {
        match self {
            ViewId::Home => "NAT",
            ViewId::NatPaper => "The NAT Paper",
        }
    }
}

/// A unit of page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Section heading, optionally reachable as `#anchor`.
    Heading {
        /// Heading text.
        text: String,
        /// Anchor id without `#`.
        anchor: Option<String>,
    },
    /// Body text.
    Paragraph(String),
    /// Label and value on one line.
    Stat {
        /// Label.
        label: String,
        /// Formatted value.
        value: String,
    },
    /// Notice shown only in local mode.
    Notice(String),
    /// Horizontal separator.
    Rule,
}

impl Block {
    fn heading(text: &str, anchor: Option<&str>) -> Self {
        Self::Heading {
            text: text.to_string(),
            anchor: anchor.map(str::to_string),
        }
    }

    fn paragraph(text: &str) -> Self {
        Self::Paragraph(text.to_string())
    }

    fn stat(label: &str, value: String) -> Self {
        Self::Stat {
            label: label.to_string(),
            value,
        }
    }
}

/// Built page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Page title.
    pub title: String,
    /// Content in display order.
    pub blocks: Vec<Block>,
}

impl Page {
    /// Anchor ids declared by this page, in order.
    pub fn anchors(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading {
                    anchor: Some(anchor),
                    ..
                } => Some(anchor.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Supply figures shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplySnapshot {
    /// Maximum supply.
    pub max_supply: BigInt,
    /// Supply not yet issued.
    pub remaining: BigInt,
    /// Reference fee in satoshis.
    pub fee_sats: u64,
}

impl Default for SupplySnapshot {
    fn default() -> Self {
        Self {
            max_supply: BigInt::from(21_000_000_000_000_000_u64),
            remaining: BigInt::from(5_250_000_000_000_000_u64),
            fee_sats: 546,
        }
    }
}

/// Build the page for `view`.
pub fn build(view: ViewId, helpers: &Helpers<'_>, supply: &SupplySnapshot) -> Page {
    match view {
        ViewId::Home => home::build(helpers, supply),
        ViewId::NatPaper => natpaper::build(helpers, supply),
    }
}
