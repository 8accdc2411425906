//! Navigation and selection logic for the link table

use super::state::App;
use crate::client::UrlRecord;
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;

impl App {
    pub fn record_count(&self) -> usize {
        self.listing.records().len()
    }

    pub fn selected_record(&self) -> Option<&UrlRecord> {
        self.listing.records().get(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
        self.adjust_scroll_offset();
    }

    pub fn move_selection_down(&mut self) {
        let max_index = self.record_count().saturating_sub(1);
        if self.selected_index < max_index {
            self.selected_index += 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.selected_index = self.record_count().saturating_sub(1);
        self.adjust_scroll_offset();
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(PAGE_SCROLL_STEP);
        self.adjust_scroll_offset();
    }

    pub fn page_down(&mut self) {
        let max_index = self.record_count().saturating_sub(1);
        self.selected_index = (self.selected_index + PAGE_SCROLL_STEP).min(max_index);
        self.adjust_scroll_offset();
    }

    /// 调整 scroll_offset 确保 selected_index 在可见窗口内
    pub fn adjust_scroll_offset(&mut self) {
        let vh = self.last_visible_height.max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
        if self.selected_index >= self.scroll_offset + vh {
            self.scroll_offset = self.selected_index + 1 - vh;
        }
    }
}
