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

//! UI rendering logic for the saved list view.
//!
//! Renders the committed items as a table of artist, track and the timestamp
//! at which each was saved. The row cursor is only highlighted while the
//! list has focus.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::SavedView, model::saved::SavedList, theme::Theme,
    util::format::format_added_time,
};

impl SavedView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        saved: &SavedList,
        focused: bool,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .padding(Padding::horizontal(1));

        let header_text = format!("Saved tracks | {} items", saved.len());
        f.render_widget(Paragraph::new(header_text).block(header_block), chunks[0]);

        let rows = saved.items().iter().map(|item| {
            Row::new(vec![
                Cell::from(
                    Line::from(item.artist.as_str())
                        .style(Style::default().fg(theme.table_artist_fg)),
                ),
                Cell::from(
                    Line::from(item.track.as_str()).style(Style::default().fg(theme.table_track_fg)),
                ),
                Cell::from(
                    Line::from(format_added_time(&item.added_time))
                        .style(Style::default().fg(theme.table_date_fg)),
                ),
            ])
        });

        let highlight_style = if focused {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(30),
                Constraint::Percentage(50),
                Constraint::Length(16),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Artist"),
                Cell::from("Track"),
                Cell::from("Added"),
            ])
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(theme.accent_colour),
            )
            .bottom_margin(1),
        )
        .row_highlight_style(highlight_style)
        .block(Block::default());

        f.render_stateful_widget(table, chunks[1], &mut self.table_state);
    }
}
