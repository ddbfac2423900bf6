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

//! UI rendering logic for the search view.
//!
//! Renders the bordered search input (with the terminal cursor placed at the
//! input's cursor position while it has focus) and the table of search
//! results. The highlighted row is derived from the result list's selection
//! cursor on each draw.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::SearchView, model::results::ResultList, theme::Theme, util::format::format_time,
};

impl SearchView {
    pub(crate) fn draw_input(&self, f: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused {
                theme.accent_colour
            } else {
                theme.border_colour
            }))
            .title(" Search ");

        let inner = block.inner(area);
        f.render_widget(Paragraph::new(self.input.value()).block(block), area);

        if focused {
            let cursor_x = inner.x + self.input.cursor() as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }

    pub(crate) fn draw_results(
        &self,
        f: &mut Frame,
        area: Rect,
        results: &ResultList,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .padding(Padding::horizontal(1));

        let header_text = format!("Search results | {} matches", results.len());
        f.render_widget(Paragraph::new(header_text).block(header_block), chunks[0]);

        let selected_index = results.selected_index();
        let rows = results.results().iter().enumerate().map(|(i, result)| {
            let time = result
                .track_time_millis
                .map(|millis| format_time(millis / 1000))
                .unwrap_or_default();

            let album = result.collection_name.as_deref().unwrap_or("");

            let row = Row::new(vec![
                Cell::from(
                    Line::from(time)
                        .style(Style::default().fg(theme.table_time_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(result.artist_name.as_str())
                        .style(Style::default().fg(theme.table_artist_fg)),
                ),
                Cell::from(Line::from(album).style(Style::default().fg(theme.table_album_fg))),
                Cell::from(
                    Line::from(result.track_name.as_str())
                        .style(Style::default().fg(theme.table_track_fg)),
                ),
            ]);

            if i == selected_index {
                row.style(Style::default().bg(Color::Blue).fg(Color::White))
            } else {
                row
            }
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Percentage(25),
                Constraint::Percentage(30),
                Constraint::Percentage(45),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(Line::from("Time").alignment(Alignment::Right)),
                Cell::from("Artist"),
                Cell::from("Album"),
                Cell::from("Track"),
            ])
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(theme.accent_colour),
            )
            .bottom_margin(1),
        )
        .block(Block::default());

        f.render_widget(table, chunks[1]);
    }
}
