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

//! Keyboard input routing.
//!
//! Translates low-level key events into application actions depending on the
//! current focus. While the search input is focused every printable key goes
//! to the input component; the saved list has its own small set of
//! navigation and removal bindings.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    App,
    events::{AppEvent, Focus, handlers::*},
};

/// Maps keyboard input to application actions.
///
/// # Bindings
///
/// * **Search input**: any edit restarts the debounce timer; Up/Down move
///   the result cursor; Enter commits the selection; Esc clears; Tab jumps
///   to the saved list.
/// * **Saved list**: j/k/Up/Down move; d/Delete removes; Tab/Esc return to
///   the search input; q quits.
/// * **Global**: Ctrl-C quits from anywhere.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    match app.focus {
        Focus::SearchInput => process_search_key_event(app, key),
        Focus::SavedList => process_saved_key_event(app, key),
    }
}

fn process_search_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Tab => focus_saved_list(app),

        KeyCode::Down => app.results.select_next(),
        KeyCode::Up => app.results.select_previous(),

        KeyCode::Enter => commit_selection(app),
        KeyCode::Esc => cancel_search(app),

        _ => {
            // Delegate all other key events to the managed input component;
            // a change to the text value restarts the debounce timer.
            let changed = app
                .search_view
                .input
                .handle_event(&Event::Key(key))
                .is_some_and(|state| state.value);

            if changed {
                schedule_search(app);
            }
        }
    }

    Ok(())
}

fn process_saved_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('j') | KeyCode::Down => app.saved_view.select_next(app.saved.len()),
        KeyCode::Char('k') | KeyCode::Up => app.saved_view.select_previous(),

        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => remove_saved_selection(app),

        KeyCode::Tab | KeyCode::Esc => focus_search_input(app),

        _ => {}
    }

    Ok(())
}
