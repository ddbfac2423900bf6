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

//! Application event handlers.
//!
//! These functions carry the state transitions behind the event loop: the
//! debounced search lifecycle (schedule, fire, accept or discard results)
//! and the saved list operations (commit, remove).

use std::time::Instant;

use anyhow::Result;

use crate::{App, events::Focus, model::SearchResult, tasks::AppTask};

/// Dispatches the pending query to the task worker once its quiet period has
/// elapsed. Driven by the periodic tick event.
pub(super) fn handle_tick(app: &mut App) -> Result<()> {
    if let Some(query) = app.debounce.poll(Instant::now()) {
        app.task_tx.send(AppTask::Search {
            generation: query.generation,
            term: query.term,
        })?;
    }

    Ok(())
}

/// Accepts the results of a completed catalog query, unless a newer query
/// has been scheduled or the search was cancelled in the meantime.
pub(super) fn handle_search_results_ready(
    app: &mut App,
    generation: u64,
    results: Vec<SearchResult>,
) {
    if !app.debounce.is_current(generation) {
        return;
    }

    app.results.set_results(results);
}

/// Restarts the debounce timer with the current input text. An empty input
/// cancels the pending query and clears the results instead.
pub(super) fn schedule_search(app: &mut App) {
    let term = app.search_view.input.value().trim().to_string();

    if term.is_empty() {
        app.debounce.cancel();
        app.results.clear();
    } else {
        app.debounce.schedule(term, Instant::now());
    }
}

/// Commits the result under the cursor to the saved list, then clears the
/// search state. A no-op when there are no results.
pub(super) fn commit_selection(app: &mut App) {
    let Some(result) = app.results.selected() else {
        return;
    };

    app.saved.add(result);

    app.results.clear();
    app.search_view.input.reset();
    app.debounce.cancel();
}

/// Clears the search state without committing anything.
pub(super) fn cancel_search(app: &mut App) {
    app.results.clear();
    app.search_view.input.reset();
    app.debounce.cancel();
}

/// Removes the saved item under the saved-list cursor, keeping the cursor on
/// a valid row afterwards.
pub(super) fn remove_saved_selection(app: &mut App) {
    let Some(index) = app.saved_view.table_state.selected() else {
        return;
    };

    app.saved.remove(index);

    if app.saved.is_empty() {
        app.saved_view.table_state.select(None);
        app.focus = Focus::SearchInput;
    } else if index >= app.saved.len() {
        app.saved_view.table_state.select(Some(app.saved.len() - 1));
    }
}

pub(super) fn focus_saved_list(app: &mut App) {
    if app.saved.is_empty() {
        return;
    }

    app.focus = Focus::SavedList;
    if app.saved_view.table_state.selected().is_none() {
        app.saved_view.table_state.select(Some(0));
    }
}

pub(super) fn focus_search_input(app: &mut App) {
    app.focus = Focus::SearchInput;
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use tui_input::Input;

    use super::*;
    use crate::config::AppConfig;

    /// An app wired to a capturable task channel, with a zero quiet period
    /// so scheduled queries fire on the next tick.
    fn test_app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        let config = AppConfig {
            debounce_ms: 0,
            ..AppConfig::default()
        };

        (App::new(config, task_tx), task_rx)
    }

    fn results(tracks: &[&str]) -> Vec<SearchResult> {
        tracks
            .iter()
            .map(|track| SearchResult {
                artist_name: "Queen".to_string(),
                track_name: track.to_string(),
                collection_name: None,
                track_time_millis: None,
            })
            .collect()
    }

    #[test]
    fn a_scheduled_search_fires_exactly_once() {
        let (mut app, task_rx) = test_app();
        app.search_view.input = Input::new("Queen".to_string());

        schedule_search(&mut app);
        handle_tick(&mut app).unwrap();

        match task_rx.try_recv().unwrap() {
            AppTask::Search { term, .. } => assert_eq!(term, "Queen"),
        }

        handle_tick(&mut app).unwrap();
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn an_empty_input_clears_results_instead_of_searching() {
        let (mut app, task_rx) = test_app();
        app.results.set_results(results(&["one", "two"]));

        schedule_search(&mut app);
        handle_tick(&mut app).unwrap();

        assert!(task_rx.try_recv().is_err());
        assert!(app.results.is_empty());
    }

    #[test]
    fn current_results_are_accepted() {
        let (mut app, task_rx) = test_app();
        app.search_view.input = Input::new("Queen".to_string());

        schedule_search(&mut app);
        handle_tick(&mut app).unwrap();

        let AppTask::Search { generation, .. } = task_rx.try_recv().unwrap();
        handle_search_results_ready(&mut app, generation, results(&["one", "two"]));

        assert_eq!(app.results.len(), 2);
    }

    #[test]
    fn results_from_a_superseded_query_are_discarded() {
        let (mut app, task_rx) = test_app();
        app.search_view.input = Input::new("Queen".to_string());

        schedule_search(&mut app);
        handle_tick(&mut app).unwrap();
        let AppTask::Search { generation: stale, .. } = task_rx.try_recv().unwrap();

        // The user keeps typing before the first response arrives
        app.search_view.input = Input::new("Queens of the Stone Age".to_string());
        schedule_search(&mut app);

        handle_search_results_ready(&mut app, stale, results(&["late", "response"]));
        assert!(app.results.is_empty());
    }

    #[test]
    fn results_after_a_cancel_are_discarded() {
        let (mut app, task_rx) = test_app();
        app.search_view.input = Input::new("Queen".to_string());

        schedule_search(&mut app);
        handle_tick(&mut app).unwrap();
        let AppTask::Search { generation, .. } = task_rx.try_recv().unwrap();

        cancel_search(&mut app);

        handle_search_results_ready(&mut app, generation, results(&["late"]));
        assert!(app.results.is_empty());
    }

    #[test]
    fn commit_appends_the_selected_result_and_clears_the_search() {
        let (mut app, _task_rx) = test_app();
        app.search_view.input = Input::new("Queen".to_string());
        app.results.set_results(results(&["one", "two", "three"]));
        app.results.select_next();

        commit_selection(&mut app);

        assert_eq!(app.saved.len(), 1);
        assert_eq!(app.saved.items()[0].track, "two");
        assert!(app.results.is_empty());
        assert_eq!(app.search_view.input.value(), "");
    }

    #[test]
    fn commit_with_no_results_leaves_the_saved_list_unchanged() {
        let (mut app, _task_rx) = test_app();
        app.saved.add(&results(&["kept"])[0]);

        commit_selection(&mut app);

        assert_eq!(app.saved.len(), 1);
        assert_eq!(app.saved.items()[0].track, "kept");
    }

    #[test]
    fn cancel_commits_nothing() {
        let (mut app, _task_rx) = test_app();
        app.search_view.input = Input::new("Queen".to_string());
        app.results.set_results(results(&["one"]));

        cancel_search(&mut app);

        assert!(app.saved.is_empty());
        assert!(app.results.is_empty());
        assert_eq!(app.search_view.input.value(), "");
    }

    #[test]
    fn removing_a_saved_item_keeps_the_cursor_on_a_valid_row() {
        let (mut app, _task_rx) = test_app();
        for track in ["one", "two"] {
            app.saved.add(&results(&[track])[0]);
        }
        app.focus = Focus::SavedList;
        app.saved_view.table_state.select(Some(1));

        remove_saved_selection(&mut app);
        assert_eq!(app.saved.len(), 1);
        assert_eq!(app.saved_view.table_state.selected(), Some(0));

        remove_saved_selection(&mut app);
        assert!(app.saved.is_empty());
        assert_eq!(app.saved_view.table_state.selected(), None);
        assert_eq!(app.focus, Focus::SearchInput);
    }

    #[test]
    fn clearing_results_never_affects_saved_items() {
        let (mut app, _task_rx) = test_app();
        app.saved.add(&results(&["kept"])[0]);
        app.results.set_results(results(&["one", "two"]));

        cancel_search(&mut app);

        assert_eq!(app.saved.len(), 1);
    }
}
