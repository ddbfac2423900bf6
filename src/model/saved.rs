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

//! Saved item list management.
//!
//! This module provides state for the session-local list of committed search
//! results. Items keep their insertion order, which is also their display
//! order, and are removed by position. The list is not persisted; it is lost
//! when the application exits.

use crate::model::{SavedItem, SearchResult};

pub(crate) struct SavedList {
    items: Vec<SavedItem>,
}

impl SavedList {
    pub(crate) fn new() -> Self {
        Self { items: vec![] }
    }

    /// Appends a committed search result, stamped with the current local
    /// time.
    pub(crate) fn add(&mut self, result: &SearchResult) {
        self.items.push(SavedItem::from_result(result));
    }

    /// Removes the item at `index`. Out-of-range indices are ignored.
    pub(crate) fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub(crate) fn items(&self) -> &[SavedItem] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(artist: &str, track: &str) -> SearchResult {
        SearchResult {
            artist_name: artist.to_string(),
            track_name: track.to_string(),
            collection_name: None,
            track_time_millis: None,
        }
    }

    fn tracks(list: &SavedList) -> Vec<&str> {
        list.items().iter().map(|i| i.track.as_str()).collect()
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut list = SavedList::new();
        list.add(&result("Queen", "one"));
        list.add(&result("Queen", "two"));
        list.add(&result("Queen", "three"));

        assert_eq!(tracks(&list), ["one", "two", "three"]);
    }

    #[test]
    fn add_then_remove_last_restores_the_prior_sequence() {
        let mut list = SavedList::new();
        list.add(&result("Queen", "one"));
        list.add(&result("Queen", "two"));

        list.add(&result("Queen", "three"));
        list.remove(list.len() - 1);

        assert_eq!(tracks(&list), ["one", "two"]);
    }

    #[test]
    fn remove_deletes_by_position() {
        let mut list = SavedList::new();
        list.add(&result("Queen", "one"));
        list.add(&result("Queen", "two"));
        list.add(&result("Queen", "three"));

        list.remove(1);
        assert_eq!(tracks(&list), ["one", "three"]);
    }

    #[test]
    fn out_of_range_remove_is_a_no_op() {
        let mut list = SavedList::new();
        list.add(&result("Queen", "one"));

        list.remove(5);
        assert_eq!(list.len(), 1);

        let mut empty = SavedList::new();
        empty.remove(0);
        assert!(empty.is_empty());
    }
}
