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

//! Search result state management.
//!
//! This module provides state for the current search results, holding the
//! tracks matching the latest query together with the selection cursor used
//! for keyboard navigation.
//!
//! The cursor invariant is `0 <= selected < len` whenever the results are
//! non-empty. Replacing or clearing the results resets the cursor to the
//! first entry, and cursor moves clamp at both ends rather than wrapping.

use crate::model::SearchResult;

pub(crate) struct ResultList {
    results: Vec<SearchResult>,
    selected: usize,
}

impl ResultList {
    pub(crate) fn new() -> Self {
        Self {
            results: vec![],
            selected: 0,
        }
    }

    /// Replaces the result set with the response of a new query, resetting
    /// the selection cursor.
    pub(crate) fn set_results(&mut self, results: Vec<SearchResult>) {
        self.results = results;
        self.selected = 0;
    }

    pub(crate) fn clear(&mut self) {
        self.results.clear();
        self.selected = 0;
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.results.len()
    }

    pub(crate) fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub(crate) fn selected_index(&self) -> usize {
        self.selected
    }

    /// The result under the cursor, if any results are present.
    pub(crate) fn selected(&self) -> Option<&SearchResult> {
        self.results.get(self.selected)
    }

    pub(crate) fn select_next(&mut self) {
        if self.selected + 1 < self.results.len() {
            self.selected += 1;
        }
    }

    pub(crate) fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(track: &str) -> SearchResult {
        SearchResult {
            artist_name: "Queen".to_string(),
            track_name: track.to_string(),
            collection_name: None,
            track_time_millis: None,
        }
    }

    fn three_results() -> Vec<SearchResult> {
        vec![result("one"), result("two"), result("three")]
    }

    #[test]
    fn selection_starts_at_the_first_result() {
        let mut list = ResultList::new();
        list.set_results(three_results());

        assert_eq!(list.selected_index(), 0);
        assert_eq!(list.selected().unwrap().track_name, "one");
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let mut list = ResultList::new();
        list.set_results(three_results());

        list.select_previous();
        assert_eq!(list.selected_index(), 0);

        for _ in 0..10 {
            list.select_next();
        }
        assert_eq!(list.selected_index(), 2);

        list.select_previous();
        assert_eq!(list.selected_index(), 1);
    }

    #[test]
    fn selection_stays_in_bounds_under_arbitrary_moves() {
        let mut list = ResultList::new();
        list.set_results(three_results());

        let moves = [1, 1, -1, 1, 1, 1, -1, -1, -1, -1, 1];
        for delta in moves {
            if delta > 0 {
                list.select_next();
            } else {
                list.select_previous();
            }
            assert!(list.selected_index() < list.len());
        }
    }

    #[test]
    fn new_results_reset_the_cursor() {
        let mut list = ResultList::new();
        list.set_results(three_results());
        list.select_next();
        list.select_next();

        list.set_results(vec![result("only")]);
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn empty_results_have_no_selection() {
        let mut list = ResultList::new();
        assert!(list.selected().is_none());

        list.set_results(three_results());
        list.clear();
        assert!(list.selected().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn moves_on_an_empty_list_are_no_ops() {
        let mut list = ResultList::new();
        list.select_next();
        list.select_previous();
        assert_eq!(list.selected_index(), 0);
        assert!(list.selected().is_none());
    }
}
