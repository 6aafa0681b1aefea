//! Width-aware page layout.
//!
//! Wraps page blocks into terminal lines and records which line each anchor
//! starts on, so scroll targets can be resolved to offsets.

use super::{Block, Page};
use std::collections::HashMap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Narrowest width a page is laid out at.
const MIN_WIDTH: usize = 10;

/// Visual role of a laid-out line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Section heading.
    Heading,
    /// Body text.
    Body,
    /// Label/value pair.
    Stat,
    /// Local-mode notice.
    Notice,
    /// Separator.
    Rule,
    /// Spacer.
    Blank,
}

/// One terminal line of page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLine {
    /// Visual role.
    pub kind: LineKind,
    /// Text (the label for stat lines).
    pub text: String,
    /// Value for stat lines.
    pub value: Option<String>,
}

impl PageLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            value: None,
        }
    }

    fn blank() -> Self {
        Self::new(LineKind::Blank, "")
    }
}

/// A page wrapped to a fixed width.
#[derive(Debug, Clone)]
pub struct PageLayout {
    /// Page title.
    pub title: String,
    lines: Vec<PageLine>,
    anchors: HashMap<String, usize>,
    anchor_order: Vec<usize>,
    anchor_ids: Vec<String>,
    width: usize,
}

impl PageLayout {
    /// Lay out `page` at `width` columns.
    pub fn build(page: &Page, width: usize) -> Self {
        let width = width.max(MIN_WIDTH);
        let mut lines = Vec::new();
        let mut anchors = HashMap::new();
        let mut anchor_order = Vec::new();
        let mut anchor_ids = Vec::new();

        for block in &page.blocks {
            match block {
                Block::Heading { text, anchor } => {
                    if !lines.is_empty() && lines.last() != Some(&PageLine::blank()) {
                        lines.push(PageLine::blank());
                    }
                    if let Some(anchor) = anchor {
                        anchors.insert(anchor.clone(), lines.len());
                        anchor_order.push(lines.len());
                        anchor_ids.push(anchor.clone());
                    }
                    for row in wrap(text, width) {
                        lines.push(PageLine::new(LineKind::Heading, row));
                    }
                }
                Block::Paragraph(text) => {
                    for row in wrap(text, width) {
                        lines.push(PageLine::new(LineKind::Body, row));
                    }
                    lines.push(PageLine::blank());
                }
                Block::Stat { label, value } => {
                    lines.push(PageLine {
                        kind: LineKind::Stat,
                        text: label.clone(),
                        value: Some(value.clone()),
                    });
                }
                Block::Notice(text) => {
                    for row in wrap(text, width) {
                        lines.push(PageLine::new(LineKind::Notice, row));
                    }
                    lines.push(PageLine::blank());
                }
                Block::Rule => {
                    lines.push(PageLine::new(LineKind::Rule, "─".repeat(width)));
                }
            }
        }

        while lines.last() == Some(&PageLine::blank()) {
            lines.pop();
        }

        Self {
            title: page.title.clone(),
            lines,
            anchors,
            anchor_order,
            anchor_ids,
            width,
        }
    }

    /// All lines.
    pub fn lines(&self) -> &[PageLine] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the layout has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Width the page was wrapped at.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Line offset of an anchor selector such as `#supply`.
    pub fn anchor_line(&self, selector: &str) -> Option<usize> {
        let id = selector.strip_prefix('#').unwrap_or(selector);
        self.anchors.get(id).copied()
    }

    /// Anchor ids in page order.
    pub fn anchor_ids(&self) -> &[String] {
        &self.anchor_ids
    }

    /// Position of an anchor selector in page order.
    pub fn anchor_index(&self, selector: &str) -> Option<usize> {
        let id = selector.strip_prefix('#').unwrap_or(selector);
        self.anchor_ids.iter().position(|a| a == id)
    }

    /// Anchor id starting at `line`, if any.
    pub fn anchor_at(&self, line: usize) -> Option<&str> {
        self.anchors
            .iter()
            .find(|(_, start)| **start == line)
            .map(|(id, _)| id.as_str())
    }

    /// First anchor line strictly below `line`.
    pub fn next_anchor_after(&self, line: usize) -> Option<usize> {
        self.anchor_order.iter().copied().find(|&start| start > line)
    }

    /// Last anchor line strictly above `line`.
    pub fn prev_anchor_before(&self, line: usize) -> Option<usize> {
        self.anchor_order
            .iter()
            .rev()
            .copied()
            .find(|&start| start < line)
    }

    /// Largest useful scroll offset for a viewport of `height` lines.
    pub fn max_scroll(&self, height: usize) -> usize {
        self.lines.len().saturating_sub(height)
    }

    /// Render as plain text.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match &line.value {
                Some(value) => out.push_str(&format!("{}: {}", line.text, value)),
                None => out.push_str(&line.text),
            }
            out.push('\n');
        }
        out
    }
}

/// Word-wrap `text` to `width` display columns.
///
/// Words wider than the line are split at character boundaries.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > width {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
