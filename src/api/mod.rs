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

//! Remote music catalog client.
//!
//! A thin blocking HTTP client for the configured catalog search endpoint
//! (the iTunes Search API by default). The client is created once by the
//! task worker and reused for every query; queries are plain GETs with
//! URL-encoded parameters, and responses are JSON envelopes of track
//! records.
//!
//! There is no retry or backoff. A failed query surfaces as an [`ApiError`]
//! and the application treats it as if the search returned nothing.

use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use crate::{
    config::AppConfig,
    model::{SearchResponse, SearchResult},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
}

pub(crate) struct CatalogClient {
    client: Client,
    search_url: String,
    country: String,
    result_limit: String,
}

impl CatalogClient {
    pub(crate) fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            search_url: config.search_url.clone(),
            country: config.country.clone(),
            result_limit: config.result_limit.to_string(),
        })
    }

    /// Performs a single catalog search for `term`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with a
    /// non-success status, or the response body is not a valid search
    /// envelope.
    pub(crate) fn search(&self, term: &str) -> Result<Vec<SearchResult>, ApiError> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&[
                ("term", term),
                ("country", &self.country),
                ("media", "music"),
                ("limit", &self.result_limit),
            ])
            .send()?
            .error_for_status()?;

        let envelope: SearchResponse = response.json()?;

        Ok(envelope.results)
    }
}
