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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (catalog query results), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and dispatches queries to the background task worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::SearchResult, render::draw};

/// Which part of the UI currently receives keyboard input.
#[derive(Debug, PartialEq)]
pub(crate) enum Focus {
    SearchInput,
    SavedList,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// A catalog query completed. The generation identifies which scheduled
    /// query produced these results.
    SearchResultsReady {
        generation: u64,
        results: Vec<SearchResult>,
    },

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::SearchResultsReady {
                generation,
                results,
            } => handle_search_results_ready(app, generation, results),
            AppEvent::Tick => handle_tick(app)?,

            // Catalog query failures are deliberately silent, there is no
            // error surface in the UI.
            AppEvent::Error(_) => {}

            AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
