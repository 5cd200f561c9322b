use crate::address::MemoryAddress;
use crate::controller::ViewController;

use super::theme::Theme;

pub(super) struct App {
    pub(super) view: ViewController<MemoryAddress>,
    pub(super) theme: Theme,
    pub(super) selected_row: usize,
    pub(super) modal_scroll: usize,
    pub(super) quit: bool,
}

impl App {
    pub(super) fn new(view: ViewController<MemoryAddress>) -> Self {
        let theme = Theme::from_chrome(view.chrome());
        Self {
            view,
            theme,
            selected_row: 0,
            modal_scroll: 0,
            quit: false,
        }
    }

    pub(super) fn row_count(&self) -> usize {
        self.view.table().rows().len()
    }

    pub(super) fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub(super) fn move_down(&mut self) {
        let max = self.row_count().saturating_sub(1);
        self.selected_row = (self.selected_row + 1).min(max);
    }

    pub(super) fn next_repo(&mut self) {
        self.view.select_next();
        self.selected_row = 0;
    }

    pub(super) fn prev_repo(&mut self) {
        self.view.select_prev();
        self.selected_row = 0;
    }

    pub(super) fn open_detail(&mut self) {
        if self.view.open_detail(self.selected_row) {
            self.modal_scroll = 0;
        }
    }

    pub(super) fn close_detail(&mut self) {
        self.view.close_detail();
        self.modal_scroll = 0;
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
