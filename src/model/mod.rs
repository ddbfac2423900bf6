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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application: the transient
//! search results returned by the remote catalog, and the session-local saved
//! items committed by the user. The two sequences are independent; clearing
//! one never affects the other.

pub(crate) mod results;
pub(crate) mod saved;

use chrono::{DateTime, Local};
use serde::Deserialize;

/// A single track record returned by the catalog search API.
///
/// Owned by the remote service; an instance only lives for the lifetime of
/// one query response. Fields beyond artist and track are optional because
/// the API omits them for some record kinds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchResult {
    pub artist_name: String,
    pub track_name: String,

    #[serde(default)]
    pub collection_name: Option<String>,

    #[serde(default)]
    pub track_time_millis: Option<u64>,
}

/// The wire envelope of a catalog search response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// A user-committed search result.
#[derive(Debug, Clone)]
pub(crate) struct SavedItem {
    pub artist: String,
    pub track: String,
    pub added_time: DateTime<Local>,
}

impl SavedItem {
    pub(crate) fn from_result(result: &SearchResult) -> Self {
        Self {
            artist: result.artist_name.clone(),
            track: result.track_name.clone(),
            added_time: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_catalog_response_envelope() {
        let json = r#"{
            "resultCount": 2,
            "results": [
                {
                    "wrapperType": "track",
                    "artistName": "Queen",
                    "trackName": "Bohemian Rhapsody",
                    "collectionName": "A Night at the Opera",
                    "trackTimeMillis": 354320,
                    "trackPrice": 1.29
                },
                {
                    "artistName": "Queen",
                    "trackName": "Don't Stop Me Now"
                }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 2);

        let first = &response.results[0];
        assert_eq!(first.artist_name, "Queen");
        assert_eq!(first.track_name, "Bohemian Rhapsody");
        assert_eq!(first.collection_name.as_deref(), Some("A Night at the Opera"));
        assert_eq!(first.track_time_millis, Some(354_320));

        // Optional fields missing from the record are tolerated
        let second = &response.results[1];
        assert_eq!(second.collection_name, None);
        assert_eq!(second.track_time_millis, None);
    }

    #[test]
    fn saved_item_copies_artist_and_track() {
        let result = SearchResult {
            artist_name: "Queen".to_string(),
            track_name: "Innuendo".to_string(),
            collection_name: None,
            track_time_millis: None,
        };

        let item = SavedItem::from_result(&result);
        assert_eq!(item.artist, "Queen");
        assert_eq!(item.track, "Innuendo");
    }
}
