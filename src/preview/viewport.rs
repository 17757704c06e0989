//! Scrollable preview region with a pinned bottom navigation bar.
//!
//! The navigation bar is laid out outside the scrolling content: its position
//! depends only on the viewport and nav heights, never on the scroll offset.

// Offsets are clamped into u32 range before narrowing
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::ops::Range;

/// Scroll state of the preview content region. All lengths are pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollViewport {
    viewport_height: u32,
    nav_height: u32,
    content_height: u32,
    scroll_offset: u32,
}

impl ScrollViewport {
    /// Creates a viewport scrolled to the top.
    ///
    /// `nav_height` is clamped to `viewport_height`.
    #[must_use]
    pub fn new(viewport_height: u32, nav_height: u32, content_height: u32) -> Self {
        Self {
            viewport_height,
            nav_height: nav_height.min(viewport_height),
            content_height,
            scroll_offset: 0,
        }
    }

    /// Viewport holding `count` items of `item_height` each.
    #[must_use]
    pub fn for_items(viewport_height: u32, nav_height: u32, count: usize, item_height: u32) -> Self {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        Self::new(
            viewport_height,
            nav_height,
            count.saturating_mul(item_height),
        )
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Total viewport height, nav included.
    #[must_use]
    pub const fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// Height of the pinned navigation bar.
    #[must_use]
    pub const fn nav_height(&self) -> u32 {
        self.nav_height
    }

    /// Total height of the scrollable content.
    #[must_use]
    pub const fn content_height(&self) -> u32 {
        self.content_height
    }

    /// Height of the visible content area (viewport minus nav).
    #[must_use]
    pub const fn content_area_height(&self) -> u32 {
        self.viewport_height - self.nav_height
    }

    /// Screen position of the navigation bar's top edge.
    #[must_use]
    pub const fn nav_position(&self) -> u32 {
        self.viewport_height - self.nav_height
    }

    /// Largest reachable offset.
    #[must_use]
    pub const fn max_offset(&self) -> u32 {
        self.content_height.saturating_sub(self.content_area_height())
    }

    /// Scrolls to `offset`, clamped to `0..=max_offset`. Returns the new offset.
    pub fn scroll_to(&mut self, offset: i64) -> u32 {
        let previous = self.scroll_offset;
        self.scroll_offset = offset.clamp(0, i64::from(self.max_offset())) as u32;
        if previous != self.scroll_offset {
            tracing::trace!(
                from = previous,
                to = self.scroll_offset,
                requested = offset,
                "preview scrolled"
            );
        }
        self.scroll_offset
    }

    /// Scrolls by a signed delta. Returns the new offset.
    pub fn scroll_by(&mut self, delta: i64) -> u32 {
        self.scroll_to(i64::from(self.scroll_offset).saturating_add(delta))
    }

    /// Scrolls to the end of the content.
    pub fn scroll_to_end(&mut self) -> u32 {
        self.scroll_to(i64::from(self.max_offset()))
    }

    /// Scrolls the minimum amount needed to show the span fully.
    ///
    /// Spans taller than the content area are aligned to their top.
    pub fn scroll_into_view(&mut self, top: u32, height: u32) -> u32 {
        let area = self.content_area_height();
        let bottom = top.saturating_add(height);
        if top < self.scroll_offset || height > area {
            self.scroll_to(i64::from(top))
        } else if bottom > self.scroll_offset.saturating_add(area) {
            self.scroll_to(i64::from(bottom - area))
        } else {
            self.scroll_offset
        }
    }

    /// Changes the content height and re-clamps the offset.
    pub fn set_content_height(&mut self, content_height: u32) {
        self.content_height = content_height;
        self.scroll_to(i64::from(self.scroll_offset));
    }

    /// Changes the viewport height and re-clamps the nav height and offset.
    pub fn resize(&mut self, viewport_height: u32) {
        self.viewport_height = viewport_height;
        self.nav_height = self.nav_height.min(viewport_height);
        self.scroll_to(i64::from(self.scroll_offset));
    }

    /// Visible content window, in content coordinates.
    #[must_use]
    pub const fn visible_window(&self) -> Range<u32> {
        self.scroll_offset..self.scroll_offset + self.content_area_height()
    }

    /// Whether any part of the span is inside the visible window.
    #[must_use]
    pub const fn is_span_visible(&self, top: u32, height: u32) -> bool {
        let window = self.visible_window();
        height > 0 && top < window.end && top.saturating_add(height) > window.start
    }

    /// Whether the whole span is inside the visible window.
    #[must_use]
    pub const fn is_span_fully_visible(&self, top: u32, height: u32) -> bool {
        let window = self.visible_window();
        top >= window.start && top.saturating_add(height) <= window.end
    }

    /// Whether item `index` of a fixed-height list is at least partly visible.
    #[must_use]
    pub fn is_item_visible(&self, index: usize, item_height: u32) -> bool {
        item_top(index, item_height).is_some_and(|top| self.is_span_visible(top, item_height))
    }

    /// Whether item `index` of a fixed-height list is fully visible.
    #[must_use]
    pub fn is_item_fully_visible(&self, index: usize, item_height: u32) -> bool {
        item_top(index, item_height).is_some_and(|top| self.is_span_fully_visible(top, item_height))
    }

    /// Indices of the items at least partly visible in a list of `count`
    /// fixed-height items.
    #[must_use]
    pub fn visible_items(&self, item_height: u32, count: usize) -> Range<usize> {
        if item_height == 0 || count == 0 {
            return 0..0;
        }
        let window = self.visible_window();
        let first = (window.start / item_height) as usize;
        let last = window.end.div_ceil(item_height) as usize;
        first.min(count)..last.min(count)
    }
}

fn item_top(index: usize, item_height: u32) -> Option<u32> {
    u32::try_from(index).ok()?.checked_mul(item_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_clamped() {
        let mut vp = ScrollViewport::new(800, 80, 2000);
        assert_eq!(vp.max_offset(), 2000 - 720);
        assert_eq!(vp.scroll_to(-50), 0);
        assert_eq!(vp.scroll_to(100_000), 1280);
        assert_eq!(vp.scroll_by(-280), 1000);
    }

    #[test]
    fn test_short_content_cannot_scroll() {
        let mut vp = ScrollViewport::new(800, 80, 300);
        assert_eq!(vp.max_offset(), 0);
        assert_eq!(vp.scroll_to(500), 0);
    }

    #[test]
    fn test_nav_pinned() {
        let mut vp = ScrollViewport::new(844, 72, 1920);
        let pinned = vp.nav_position();
        assert_eq!(pinned, 772);
        for offset in [0, 1, 500, 1000, 1148, 9999] {
            vp.scroll_to(offset);
            assert_eq!(vp.nav_position(), pinned);
            assert_eq!(vp.content_area_height(), 772);
        }
    }

    #[test]
    fn test_nav_clamped_to_viewport() {
        let vp = ScrollViewport::new(50, 80, 100);
        assert_eq!(vp.nav_height(), 50);
        assert_eq!(vp.content_area_height(), 0);
    }

    #[test]
    fn test_visible_items() {
        let mut vp = ScrollViewport::for_items(700, 100, 8, 200);
        assert_eq!(vp.visible_items(200, 8), 0..3);
        vp.scroll_to_end();
        assert_eq!(vp.scroll_offset(), 1000);
        assert_eq!(vp.visible_items(200, 8), 5..8);
        assert!(vp.is_item_fully_visible(7, 200));
        assert!(!vp.is_item_visible(0, 200));
    }

    #[test]
    fn test_scroll_into_view() {
        let mut vp = ScrollViewport::for_items(500, 100, 10, 100);
        assert_eq!(vp.scroll_into_view(600, 100), 300);
        assert!(vp.is_span_fully_visible(600, 100));
        assert_eq!(vp.scroll_into_view(100, 100), 100);
        // Already visible: no movement
        assert_eq!(vp.scroll_into_view(200, 100), 100);
    }

    #[test]
    fn test_resize_reclamps() {
        let mut vp = ScrollViewport::new(400, 50, 1000);
        vp.scroll_to_end();
        assert_eq!(vp.scroll_offset(), 650);
        vp.resize(900);
        assert_eq!(vp.scroll_offset(), 150);
        vp.set_content_height(200);
        assert_eq!(vp.scroll_offset(), 0);
    }
}
