//! Transcript scroll state.

/// Scroll mode for the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Auto-scroll to show latest content (bottom of transcript).
    FollowLatest,
    /// User scrolled manually; offset is row index from top.
    Anchored { offset: usize },
}

/// Scroll state for the transcript pane.
///
/// Keeps scroll math in one place; the reducer updates the cached row count
/// and viewport height every frame.
#[derive(Debug, Clone)]
pub struct ScrollState {
    pub mode: ScrollMode,
    /// Total row count from the last frame.
    pub cached_line_count: usize,
    /// Transcript viewport height from the last frame.
    pub viewport_height: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            mode: ScrollMode::FollowLatest,
            cached_line_count: 0,
            viewport_height: 0,
        }
    }
}

impl ScrollState {
    pub fn is_following(&self) -> bool {
        matches!(self.mode, ScrollMode::FollowLatest)
    }

    fn max_offset(&self) -> usize {
        self.cached_line_count.saturating_sub(self.viewport_height)
    }

    /// Returns the first visible row.
    ///
    /// In FollowLatest mode, shows the bottom of the content.
    /// In Anchored mode, returns the stored offset clamped to the content.
    pub fn offset(&self) -> usize {
        self.offset_in(self.cached_line_count, self.viewport_height)
    }

    /// Same as [`Self::offset`] for a row count computed after the last frame.
    pub fn offset_in(&self, line_count: usize, viewport_height: usize) -> usize {
        let max_offset = line_count.saturating_sub(viewport_height);
        match self.mode {
            ScrollMode::FollowLatest => max_offset,
            ScrollMode::Anchored { offset } => offset.min(max_offset),
        }
    }

    pub fn update_layout(&mut self, line_count: usize, viewport_height: usize) {
        self.cached_line_count = line_count;
        self.viewport_height = viewport_height;
        if let ScrollMode::Anchored { offset } = self.mode
            && offset >= self.max_offset()
        {
            self.mode = ScrollMode::FollowLatest;
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        let new_offset = self.offset().saturating_sub(lines);
        self.mode = ScrollMode::Anchored { offset: new_offset };
    }

    /// Scrolls down, returning to FollowLatest at the bottom.
    pub fn scroll_down(&mut self, lines: usize) {
        if self.is_following() {
            return;
        }
        let new_offset = (self.offset() + lines).min(self.max_offset());
        if new_offset >= self.max_offset() {
            self.mode = ScrollMode::FollowLatest;
        } else {
            self.mode = ScrollMode::Anchored { offset: new_offset };
        }
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.max(1));
    }

    pub fn scroll_to_bottom(&mut self) {
        self.mode = ScrollMode::FollowLatest;
    }

    pub fn reset(&mut self) {
        self.mode = ScrollMode::FollowLatest;
        self.cached_line_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled(line_count: usize, viewport: usize) -> ScrollState {
        let mut scroll = ScrollState::default();
        scroll.update_layout(line_count, viewport);
        scroll
    }

    #[test]
    fn test_follow_latest_shows_bottom() {
        let scroll = scrolled(100, 20);
        assert_eq!(scroll.offset(), 80);
    }

    #[test]
    fn test_scroll_up_then_down_returns_to_follow() {
        let mut scroll = scrolled(100, 20);
        scroll.scroll_up(5);
        assert_eq!(scroll.mode, ScrollMode::Anchored { offset: 75 });
        scroll.scroll_down(100);
        assert!(scroll.is_following());
    }

    #[test]
    fn test_page_up_moves_one_viewport() {
        let mut scroll = scrolled(100, 20);
        scroll.page_up();
        assert_eq!(scroll.offset(), 60);
        scroll.page_down();
        assert!(scroll.is_following());
    }

    #[test]
    fn test_anchored_offset_is_clamped_when_content_shrinks() {
        let mut scroll = scrolled(100, 20);
        scroll.scroll_up(10);
        scroll.update_layout(10, 20);
        assert_eq!(scroll.offset(), 0);
        assert!(scroll.is_following());
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut scroll = scrolled(5, 20);
        scroll.scroll_up(3);
        assert_eq!(scroll.offset(), 0);
    }
}
