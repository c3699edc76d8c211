//! Scrollback state for the command log panel.

use std::collections::VecDeque;

/// Lines shown in the log panel plus how far the user scrolled back.
#[derive(Debug)]
pub struct LogPanel {
    lines: VecDeque<String>,
    max_lines: usize,
    /// Lines scrolled up from the bottom (0 = newest line visible).
    pub scroll_back: u16,
    /// Inner height of the panel at the last draw.
    pub viewport_height: u16,
}

impl LogPanel {
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            max_lines: max_lines.max(1),
            scroll_back: 0,
            viewport_height: 0,
        }
    }

    /// Append lines, drop the oldest beyond capacity, and jump to the bottom
    /// if anything was added.
    pub fn push_lines(&mut self, new_lines: impl IntoIterator<Item = String>) {
        let before = self.lines.len();
        self.lines.extend(new_lines);
        let added = self.lines.len() != before;

        while self.lines.len() > self.max_lines {
            self.lines.pop_front();
        }

        if added {
            self.scroll_to_end();
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &String> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn max_scroll_back(&self) -> u16 {
        let total = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        total.saturating_sub(self.viewport_height)
    }

    /// Scroll by a delta; negative moves towards older lines.
    pub fn scroll_by(&mut self, delta: i16) {
        if delta < 0 {
            let up = delta.unsigned_abs();
            self.scroll_back = self.scroll_back.saturating_add(up).min(self.max_scroll_back());
        } else {
            self.scroll_back = self.scroll_back.saturating_sub(delta as u16);
        }
    }

    /// Jump to the oldest line.
    pub fn scroll_to_start(&mut self) {
        self.scroll_back = self.max_scroll_back();
    }

    /// Jump to the newest line.
    pub fn scroll_to_end(&mut self) {
        self.scroll_back = 0;
    }

    /// Paragraph scroll offset (from the top) for a panel of `height` rows.
    pub fn top_offset(&self, height: u16) -> u16 {
        let total = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        total
            .saturating_sub(height)
            .saturating_sub(self.scroll_back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_with(n: usize, viewport: u16) -> LogPanel {
        let mut panel = LogPanel::new(100);
        panel.push_lines((0..n).map(|i| format!("line {i}")));
        panel.viewport_height = viewport;
        panel
    }

    #[test]
    fn test_push_caps_lines() {
        let mut panel = LogPanel::new(3);
        panel.push_lines((0..5).map(|i| i.to_string()));
        let kept: Vec<_> = panel.lines().cloned().collect();
        assert_eq!(kept, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_scroll_bounds() {
        let mut panel = panel_with(20, 10);

        panel.scroll_by(-4);
        assert_eq!(panel.scroll_back, 4);

        panel.scroll_by(-100);
        assert_eq!(panel.scroll_back, 10);

        panel.scroll_by(3);
        assert_eq!(panel.scroll_back, 7);

        panel.scroll_by(100);
        assert_eq!(panel.scroll_back, 0);
    }

    #[test]
    fn test_scroll_to_start_end() {
        let mut panel = panel_with(20, 10);
        panel.scroll_to_start();
        assert_eq!(panel.top_offset(10), 0);

        panel.scroll_to_end();
        assert_eq!(panel.top_offset(10), 10);
    }

    #[test]
    fn test_new_lines_return_to_bottom() {
        let mut panel = panel_with(20, 10);
        panel.scroll_by(-5);

        panel.push_lines(Vec::new());
        assert_eq!(panel.scroll_back, 5);

        panel.push_lines(vec!["fresh".to_string()]);
        assert_eq!(panel.scroll_back, 0);
        assert_eq!(panel.top_offset(10), 11);
    }
}
