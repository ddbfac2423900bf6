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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management and terminal frame composition; the individual panes are drawn
//! by their components.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, events::Focus};

const SEARCH_HINTS: &str = "Tab saved list | Up/Down select | Enter save | Esc clear | C-c quit";
const SAVED_HINTS: &str = "Tab search | j/k move | d remove | q quit";

/// Renders the user interface to the terminal frame.
///
/// Partitions the screen into the search input, the search results, the
/// saved list and a one-line key hint footer, then delegates each pane to
/// its component.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Percentage(40),
            Constraint::Length(1),
        ])
        .split(area);

    let input_focused = app.focus == Focus::SearchInput;
    let saved_focused = app.focus == Focus::SavedList;

    app.search_view
        .draw_input(f, outer[0], input_focused, &app.theme);
    app.search_view
        .draw_results(f, outer[1], &app.results, &app.theme);
    app.saved_view
        .draw(f, outer[2], &app.saved, saved_focused, &app.theme);

    draw_footer(f, outer[3], app);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.focus {
        Focus::SearchInput => SEARCH_HINTS,
        Focus::SavedList => SAVED_HINTS,
    };

    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(app.theme.hint_colour)),
        area,
    );
}
