// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Saved list view and cursor management.
//!
//! This module holds the table cursor for the saved item list. The item data
//! itself lives in [`crate::model::saved::SavedList`]; the cursor here only
//! decides which row the removal key acts on, and its moves clamp at the
//! list bounds.

mod render;

use ratatui::widgets::TableState;

pub(crate) struct SavedView {
    pub(crate) table_state: TableState,
}

impl SavedView {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    pub(crate) fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        let next = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };

        self.table_state.select(Some(next));
    }

    pub(crate) fn select_previous(&mut self) {
        let previous = match self.table_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => 0,
        };

        self.table_state.select(Some(previous));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_clamps_at_the_last_row() {
        let mut view = SavedView::new();

        view.select_next(2);
        assert_eq!(view.table_state.selected(), Some(0));

        view.select_next(2);
        view.select_next(2);
        assert_eq!(view.table_state.selected(), Some(1));
    }

    #[test]
    fn cursor_clamps_at_the_first_row() {
        let mut view = SavedView::new();
        view.table_state.select(Some(1));

        view.select_previous();
        view.select_previous();
        assert_eq!(view.table_state.selected(), Some(0));
    }

    #[test]
    fn cursor_does_not_move_on_an_empty_list() {
        let mut view = SavedView::new();

        view.select_next(0);
        assert_eq!(view.table_state.selected(), None);
    }
}
